//! Text analysis module for Tameng.
//!
//! Raw messages are cleaned by a [`normalizer::TextNormalizer`] (a chain of
//! [`char_filter::CharFilter`]s) and split into terms by a
//! [`tokenizer::Tokenizer`] before term weighting.

pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod tokenizer;
