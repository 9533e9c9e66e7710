//! Tokenizers that split normalized text into terms.
//!
//! The tokenizer used at inference must match the one used when the
//! vocabulary was built, so the choice is recorded in the vectorizer
//! artifact as a [`TokenizerKind`] and rebuilt with [`TokenizerKind::build`].
//!
//! - [`whitespace::WhitespaceTokenizer`] splits on whitespace runs.
//! - [`unicode_word::UnicodeWordTokenizer`] splits on UAX #29 word boundaries.
//! - [`regex::RegexTokenizer`] extracts regex matches.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a loaded vectorizer can be shared
/// across threads.
///
/// # Examples
///
/// ```
/// use tameng::analysis::token::{Token, TokenStream};
/// use tameng::analysis::tokenizer::Tokenizer;
/// use tameng::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Serializable description of a tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Split on whitespace.
    #[default]
    Whitespace,
    /// Split on Unicode word boundaries.
    UnicodeWord,
    /// Extract every match of `pattern`.
    Regex { pattern: String },
}

impl TokenizerKind {
    /// Instantiate the tokenizer this kind describes.
    pub fn build(&self) -> Result<Arc<dyn Tokenizer>> {
        Ok(match self {
            TokenizerKind::Whitespace => Arc::new(whitespace::WhitespaceTokenizer::new()),
            TokenizerKind::UnicodeWord => Arc::new(unicode_word::UnicodeWordTokenizer::new()),
            TokenizerKind::Regex { pattern } => {
                Arc::new(regex::RegexTokenizer::with_pattern(pattern)?)
            }
        })
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerKind::Whitespace => write!(f, "whitespace"),
            TokenizerKind::UnicodeWord => write!(f, "unicode_word"),
            TokenizerKind::Regex { pattern } => write!(f, "regex({pattern})"),
        }
    }
}

pub mod regex;
pub mod unicode_word;
pub mod whitespace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tokenizers() {
        assert_eq!(TokenizerKind::Whitespace.build().unwrap().name(), "whitespace");
        assert_eq!(
            TokenizerKind::UnicodeWord.build().unwrap().name(),
            "unicode_word"
        );
        let kind = TokenizerKind::Regex {
            pattern: r"(?u)\b\w\w+\b".to_string(),
        };
        assert_eq!(kind.build().unwrap().name(), "regex");
    }

    #[test]
    fn test_invalid_regex_kind() {
        let kind = TokenizerKind::Regex {
            pattern: "(".to_string(),
        };
        assert!(kind.build().is_err());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&TokenizerKind::Whitespace).unwrap();
        assert_eq!(json, "\"whitespace\"");

        let kind: TokenizerKind =
            serde_json::from_str(r#"{"regex":{"pattern":"\\w+"}}"#).unwrap();
        assert_eq!(
            kind,
            TokenizerKind::Regex {
                pattern: r"\w+".to_string()
            }
        );
    }
}
