//! Token types for text analysis.
//!
//! A [`Token`] is the unit produced by a tokenizer and consumed by the
//! feature vectorizer. Offsets are byte offsets into the text that was
//! tokenized, which for the detector is always the normalized message.
//!
//! # Examples
//!
//! ```
//! use tameng::analysis::token::Token;
//!
//! let token = Token::with_offsets("tagihan", 0, 0, 7);
//! assert_eq!(token.text, "tagihan");
//! assert_eq!(token.end_offset, 7);
//! ```

use serde::{Deserialize, Serialize};

/// A single token with its position and byte offsets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text.
    pub text: String,

    /// Zero-based position of the token in the stream.
    pub position: usize,

    /// Byte offset of the first character.
    pub start_offset: usize,

    /// Byte offset one past the last character.
    pub end_offset: usize,
}

/// A stream of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

impl Token {
    /// Create a token without offset information.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("denda", 3);
        assert_eq!(token.text, "denda");
        assert_eq!(token.position, 3);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }
}
