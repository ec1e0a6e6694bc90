//! Two-level section counter.
//!
//! [`SectionCounter`] produces hierarchical section numbers such as `"1"`,
//! `"1.1"` and `"2"` as headings are encountered. Only level `1` is treated as a
//! top-level section; every other level value increments the subsection count.
//!
//! The subsection count is **not** restarted when a new top-level section
//! begins, so the sequence of levels `1, 2, 2, 1, 2` yields
//! `"1", "1.1", "1.2", "2", "2.3"`.
//!
//! ```rust
//! use secnum_core::SectionCounter;
//!
//! let mut counter = SectionCounter::new();
//! assert_eq!(counter.increment_and_get(1), "1");
//! assert_eq!(counter.increment_and_get(2), "1.1");
//! assert_eq!(counter.increment_and_get(1), "2");
//! assert_eq!(counter.increment_and_get(2), "2.2");
//!
//! counter.reset();
//! assert_eq!(counter.increment_and_get(1), "1");
//! ```

/// The level value that marks a top-level section.
pub const TOP_LEVEL: i64 = 1;

/// Tracks the section and subsection counts for one document.
///
/// Callers own the counter and pass it by `&mut` to whatever walks the
/// document. Call [`reset`](Self::reset) before numbering a new document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounter {
    section: u64,
    subsection: u64,
}

impl SectionCounter {
    /// Create a counter with both counts at zero.
    pub const fn new() -> Self {
        Self {
            section: 0,
            subsection: 0,
        }
    }

    /// Set both counts back to zero.
    pub const fn reset(&mut self) {
        self.section = 0;
        self.subsection = 0;
    }

    /// Advance the counter for a heading at `level` and return its number.
    ///
    /// - `level == 1` increments the section count and returns it alone (`"3"`).
    /// - Any other value, including zero and negatives, increments the
    ///   subsection count and returns `"{section}.{subsection}"` (`"3.7"`).
    ///
    /// Exactly one of the two counts changes per call. The section count never
    /// touches the subsection count.
    pub fn increment_and_get(&mut self, level: i64) -> String {
        if level == TOP_LEVEL {
            self.section = self.section.saturating_add(1);
            self.section.to_string()
        } else {
            self.subsection = self.subsection.saturating_add(1);
            format!("{}.{}", self.section, self.subsection)
        }
    }

    /// Current section count.
    pub const fn section(&self) -> u64 {
        self.section
    }

    /// Current subsection count.
    pub const fn subsection(&self) -> u64 {
        self.subsection
    }
}
