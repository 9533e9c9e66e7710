//! ASCII punctuation removal.

use super::CharFilter;

/// Removes the 32 printable ASCII punctuation characters.
///
/// Non-ASCII punctuation such as `“` or `—` is left in place.
#[derive(Clone, Debug, Default)]
pub struct AsciiPunctuationCharFilter;

impl AsciiPunctuationCharFilter {
    pub fn new() -> Self {
        AsciiPunctuationCharFilter
    }
}

impl CharFilter for AsciiPunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }

    fn name(&self) -> &'static str {
        "ascii_punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_every_ascii_punctuation_char() {
        let filter = AsciiPunctuationCharFilter::new();
        let all = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        assert_eq!(all.len(), 32);
        assert_eq!(filter.filter(all), "");
    }

    #[test]
    fn test_keeps_words_and_spaces() {
        let filter = AsciiPunctuationCharFilter::new();
        assert_eq!(
            filter.filter("Segera lakukan verifikasi: klik https://bit.ly/x!"),
            "Segera lakukan verifikasi klik httpsbitlyx"
        );
    }

    #[test]
    fn test_keeps_non_ascii_punctuation() {
        let filter = AsciiPunctuationCharFilter::new();
        assert_eq!(filter.filter("“promo”"), "“promo”");
    }
}
