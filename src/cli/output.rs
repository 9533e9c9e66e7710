//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ArtifactKind, OutputFormat, TamengArgs};
use crate::error::Result;
use crate::ml::types::{Label, Prediction};

/// Human-readable rendering of a command result.
pub trait RenderHuman {
    fn render_human(&self, verbosity: u8) -> String;
}

/// Result structure for one classified message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    pub normalized: String,
    pub label: Label,
    pub confidence: f64,
    pub decision_score: f64,
}

impl ClassificationResult {
    pub fn new(text: &str, normalized: String, prediction: &Prediction) -> Self {
        Self {
            text: text.to_string(),
            normalized,
            label: prediction.label,
            confidence: prediction.confidence,
            decision_score: prediction.decision_score,
        }
    }

    fn headline(&self) -> &'static str {
        match self.label {
            Label::Spam => "SPAM",
            Label::Ham => "HAM (not spam)",
        }
    }

    fn advice(&self) -> &'static str {
        match self.label {
            Label::Spam => {
                "This message looks like a fake PayLater billing threat. \
                 Do not click its links or reply to it."
            }
            Label::Ham => {
                "No sign of PayLater billing spam. \
                 Still make sure the message comes from an official sender."
            }
        }
    }
}

impl RenderHuman for ClassificationResult {
    fn render_human(&self, verbosity: u8) -> String {
        let mut out = format!(
            "{}\nConfidence Score: {:.2}%\n{}",
            self.headline(),
            self.confidence * 100.0,
            self.advice()
        );
        if verbosity > 1 {
            out.push_str(&format!(
                "\nNormalized: {}\nDecision score: {:.6}",
                self.normalized, self.decision_score
            ));
        }
        out
    }
}

/// Result structure for normalization.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub text: String,
    pub normalized: String,
}

impl RenderHuman for NormalizationResult {
    fn render_human(&self, _verbosity: u8) -> String {
        self.normalized.clone()
    }
}

/// One classified example message.
#[derive(Debug, Serialize, Deserialize)]
pub struct SampleResult {
    pub number: usize,
    pub result: ClassificationResult,
}

/// Results for the example messages.
#[derive(Debug, Serialize, Deserialize)]
pub struct SampleResults {
    pub samples: Vec<SampleResult>,
}

impl RenderHuman for SampleResults {
    fn render_human(&self, verbosity: u8) -> String {
        self.samples
            .iter()
            .map(|sample| {
                let mut line = format!(
                    "[{}] {}\n    {} {:.2}%",
                    sample.number,
                    sample.result.text,
                    sample.result.label.as_str().to_uppercase(),
                    sample.result.confidence * 100.0
                );
                if verbosity > 1 {
                    line.push_str(&format!(" (score {:.6})", sample.result.decision_score));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Summary of the loaded artifacts.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSummary {
    pub vectorizer_path: String,
    pub classifier_path: String,
    pub vocabulary_size: usize,
    pub n_features: usize,
    pub tokenizer: String,
    pub norm: Option<String>,
    pub sublinear_tf: bool,
    pub ngram_range: (usize, usize),
    pub intercept: f64,
}

impl RenderHuman for ModelSummary {
    fn render_human(&self, _verbosity: u8) -> String {
        [
            "Model Artifacts:".to_string(),
            "════════════════".to_string(),
            format!("Vectorizer: {}", self.vectorizer_path),
            format!("Classifier: {}", self.classifier_path),
            format!("Vocabulary size: {}", self.vocabulary_size),
            format!("Classifier features: {}", self.n_features),
            format!("Tokenizer: {}", self.tokenizer),
            format!("Norm: {}", self.norm.as_deref().unwrap_or("none")),
            format!("Sublinear TF: {}", self.sublinear_tf),
            format!("N-gram range: {}..={}", self.ngram_range.0, self.ngram_range.1),
            format!("Intercept: {:.6}", self.intercept),
        ]
        .join("\n")
    }
}

/// Result structure for artifact conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResult {
    pub kind: ArtifactKind,
    pub input: String,
    pub output: String,
    pub format: String,
}

impl RenderHuman for ConversionResult {
    fn render_human(&self, _verbosity: u8) -> String {
        format!(
            "Converted {:?} artifact {} -> {} ({})",
            self.kind, self.input, self.output, self.format
        )
        .to_lowercase()
    }
}

/// Render a result in the requested format.
pub fn format_result<T: Serialize + RenderHuman>(result: &T, args: &TamengArgs) -> Result<String> {
    Ok(match args.output_format {
        OutputFormat::Human => result.render_human(args.verbosity()),
        OutputFormat::Json if args.pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
    })
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + RenderHuman>(
    message: &str,
    result: &T,
    args: &TamengArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", format_result(result, args)?);
    Ok(())
}
