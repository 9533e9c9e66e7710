//! Whitespace collapsing.

use super::CharFilter;

/// Whether `c` separates words.
///
/// Unicode whitespace plus the information separators U+001C..=U+001F,
/// which Python's `str.isspace` also counts as whitespace.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapses runs of separators into one ASCII space and trims both ends.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceCollapseCharFilter;

impl WhitespaceCollapseCharFilter {
    pub fn new() -> Self {
        WhitespaceCollapseCharFilter
    }
}

impl CharFilter for WhitespaceCollapseCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for word in input.split(is_separator).filter(|word| !word.is_empty()) {
            if !output.is_empty() {
                output.push(' ');
            }
            output.push_str(word);
        }
        output
    }

    fn name(&self) -> &'static str {
        "whitespace_collapse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_and_trim() {
        let filter = WhitespaceCollapseCharFilter::new();
        assert_eq!(
            filter.filter("  tagihan \t\n paylater   anda "),
            "tagihan paylater anda"
        );
    }

    #[test]
    fn test_unicode_whitespace() {
        let filter = WhitespaceCollapseCharFilter::new();
        assert_eq!(filter.filter("bayar\u{00a0}\u{3000}sekarang"), "bayar sekarang");
    }

    #[test]
    fn test_information_separators() {
        let filter = WhitespaceCollapseCharFilter::new();
        assert_eq!(filter.filter("a\u{1c}b"), "a b");
        assert_eq!(filter.filter("\u{1f} tagihan \u{1d}\u{1e}denda\u{1c}"), "tagihan denda");
        assert!(!is_separator('\u{1b}'));
        assert!(is_separator(' '));
    }

    #[test]
    fn test_blank_input() {
        let filter = WhitespaceCollapseCharFilter::new();
        assert_eq!(filter.filter(""), "");
        assert_eq!(filter.filter(" \r\n\t "), "");
    }
}
