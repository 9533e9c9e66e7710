//! Confidence estimation from decision margins.
//!
//! Margins have no probabilistic meaning on their own. The logistic
//! function maps them monotonically into (0, 1), anchored to the spam side:
//! `sigmoid(score)` is the spam confidence and `1 - sigmoid(score)` the ham
//! confidence.

use crate::ml::types::{Decision, DecisionScore, Label};

/// The logistic function `1 / (1 + exp(-score))`.
pub fn sigmoid(score: DecisionScore) -> f64 {
    1.0 / (1.0 + (-score).exp())
}

/// Confidence in the label of `decision`.
pub fn confidence(decision: &Decision) -> f64 {
    let spam_confidence = sigmoid(decision.score);
    match decision.label {
        Label::Spam => spam_confidence,
        Label::Ham => 1.0 - spam_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) - 0.880_797_077_977_882_3).abs() < 1e-12);
        assert!((sigmoid(-2.0) - 0.119_202_922_022_117_7).abs() < 1e-12);
    }

    #[test]
    fn test_sigmoid_is_monotonic_and_bounded() {
        let scores = [-8.0, -3.5, -1.0, -0.1, 0.0, 0.1, 1.0, 3.5, 8.0];
        for pair in scores.windows(2) {
            assert!(sigmoid(pair[0]) < sigmoid(pair[1]));
        }
        for score in scores {
            let p = sigmoid(score);
            assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn test_spam_confidence() {
        let decision = Decision {
            label: Label::Spam,
            score: 1.25,
        };
        assert_eq!(confidence(&decision), sigmoid(1.25));
    }

    #[test]
    fn test_ham_confidence_is_complement() {
        let decision = Decision {
            label: Label::Ham,
            score: -0.75,
        };
        assert_eq!(confidence(&decision), 1.0 - sigmoid(-0.75));
        assert!(confidence(&decision) > 0.5);
    }
}
