//! # secnum-core
//!
//! Hierarchical section numbering for markdown documents.
//!
//! The heart of the crate is [`SectionCounter`], a two-level counter that turns
//! a stream of heading levels into numbers like `"1"`, `"1.1"` and `"2"`.
//! Around it sit a tree-sitter based heading extractor and an outline builder
//! that feeds each heading through the counter.
//!
//! ## Architecture
//!
//! - **Counter**: two-level section/subsection state with `reset` and
//!   `increment_and_get`
//! - **Parsing**: tree-sitter markdown parsing into an ordered heading list
//! - **Outline**: maps heading depths to counter levels and annotates sources
//! - **Configuration**: TOML settings for which depths are numbered
//! - **Error Handling**: categorized error type for the I/O-bearing layers
//!
//! ## Quick Start
//!
//! ```rust
//! use secnum_core::{HeadingParser, OutlineBuilder, OutlineConfig};
//!
//! let mut parser = HeadingParser::new()?;
//! let doc = parser.parse("# Hello\n\n## World\n")?;
//!
//! let outline = OutlineBuilder::new(OutlineConfig::default()).build(&doc);
//! for entry in outline.numbered() {
//!     println!("{} {}", entry.number.as_deref().unwrap_or_default(), entry.text);
//! }
//! # Ok::<(), secnum_core::Error>(())
//! ```

/// Configuration loading and validation
pub mod config;
/// Two-level section counter
pub mod counter;
/// Error types and result aliases
pub mod error;
pub mod heading;
/// Numbered outlines and source annotation
pub mod outline;
/// Tree-sitter based heading extraction
pub mod parser;
/// Core data types
pub mod types;

pub use config::{Config, OutlineConfig};
pub use counter::SectionCounter;
pub use error::{Error, Result};
pub use outline::{Outline, OutlineBuilder, OutlineEntry};
pub use parser::HeadingParser;
pub use types::*;
