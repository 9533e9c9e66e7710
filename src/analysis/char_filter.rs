//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the whole message string before it is tokenized.
//! The detector's normalizer is a fixed chain of them.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`punctuation::AsciiPunctuationCharFilter`] - ASCII punctuation removal
//! - [`whitespace::WhitespaceCollapseCharFilter`] - Whitespace collapsing and trimming
//!
//! # Examples
//!
//! ```
//! use tameng::analysis::char_filter::CharFilter;
//! use tameng::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "").unwrap();
//! assert_eq!(filter.filter("denda 50000 rupiah"), "denda  rupiah");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// Implementations must be total: every input string produces an output
/// string, and the same input always produces the same output.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod punctuation;
pub mod whitespace;
