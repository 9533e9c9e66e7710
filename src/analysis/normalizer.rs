//! Message normalization.
//!
//! The standard normalizer applies, in order:
//!
//! 1. Unicode lowercasing
//! 2. digit removal (`\d+` replaced with nothing)
//! 3. ASCII punctuation removal
//! 4. whitespace collapsing with trimming
//!
//! Each step is total, so every string (including the empty string)
//! normalizes to a valid, possibly empty, string. Normalizing an already
//! normalized string returns it unchanged.
//!
//! ```
//! use tameng::analysis::normalizer::normalize;
//!
//! assert_eq!(
//!     normalize("Tagihan PayLater Anda belum dibayar. Denda akan dikenakan hari ini."),
//!     "tagihan paylater anda belum dibayar denda akan dikenakan hari ini"
//! );
//! assert_eq!(normalize("12345!!!"), "");
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::punctuation::AsciiPunctuationCharFilter;
use crate::analysis::char_filter::whitespace::WhitespaceCollapseCharFilter;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"\d+").expect("digit pattern is valid");
    static ref STANDARD: TextNormalizer = TextNormalizer::standard();
}

/// Normalize a message with the standard normalizer.
pub fn normalize(text: &str) -> String {
    STANDARD.normalize(text)
}

/// An ordered chain of char filters.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create a normalizer with no filters; it returns its input unchanged.
    pub fn new() -> Self {
        TextNormalizer {
            char_filters: Vec::new(),
        }
    }

    /// The normalizer the detector uses by default.
    pub fn standard() -> Self {
        TextNormalizer::new()
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::from_regex(
                (*DIGITS).clone(),
                "",
            )))
            .add_char_filter(Arc::new(AsciiPunctuationCharFilter::new()))
            .add_char_filter(Arc::new(WhitespaceCollapseCharFilter::new()))
    }

    /// Append a char filter to the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run the text through every filter in order.
    pub fn normalize(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc))
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
