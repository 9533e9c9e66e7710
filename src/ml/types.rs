//! Common types for spam classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TamengError;

/// Signed margin of the linear decision function. Positive is the spam side.
pub type DecisionScore = f64;

/// Message label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Fraudulent or unwanted message.
    Spam,
    /// Legitimate message.
    Ham,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = TamengError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spam" => Ok(Label::Spam),
            "ham" => Ok(Label::Ham),
            other => Err(TamengError::invalid_argument(format!(
                "unknown label '{other}', expected 'spam' or 'ham'"
            ))),
        }
    }
}

/// Label and margin produced together by one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub label: Label,
    pub score: DecisionScore,
}

/// Result of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label.
    pub label: Label,
    /// Confidence in the predicted label, in (0, 1).
    pub confidence: f64,
    /// Raw margin the confidence was derived from.
    pub decision_score: DecisionScore,
}

impl Prediction {
    pub fn is_spam(&self) -> bool {
        self.label.is_spam()
    }

    /// Confidence as a percentage, e.g. `97.5`.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}
