//! Error types for secnum-core operations.
//!
//! Section numbering itself never fails. Errors come from the layers around
//! it: reading documents, parsing markdown, and loading configuration.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading documents and config files
//! - **Parse Errors**: tree-sitter setup or parse failures
//! - **Configuration Errors**: invalid settings or config files
//! - **Serialization Errors**: writing config as TOML
//!
//! ```rust
//! use secnum_core::{Error, Result};
//!
//! fn handle(result: Result<()>) {
//!     match result {
//!         Err(e) if e.is_recoverable() => println!("Temporary failure: {e}"),
//!         Err(e) => println!("{} error: {e}", e.category()),
//!         Ok(()) => println!("Success"),
//!     }
//! }
//! # handle(Ok(()));
//! ```

use thiserror::Error;

/// The main error type for secnum-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// The underlying `std::io::Error` is preserved. Timed-out and interrupted
    /// operations are considered recoverable.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Markdown could not be parsed, or the parser could not be initialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - `top_level` greater than `max_depth`
    /// - Depths outside the markdown range of 1-6
    /// - Config directory could not be determined
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested file or resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Config could not be written as TOML.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might go away on retry.
    ///
    /// Only timed-out or interrupted I/O qualifies.
    ///
    /// ```rust
    /// use secnum_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "eintr")).is_recoverable());
    /// assert!(!Error::Config("bad depth".into()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Short category tag for logging.
    ///
    /// One of `"io"`, `"parse"`, `"config"`, `"not_found"`, or
    /// `"serialization"`.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
