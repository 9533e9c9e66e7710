//! Command implementations for the Tameng CLI.

use std::io::{self, Read};
use std::sync::Arc;

use tracing::debug;

use crate::analysis::normalizer::TextNormalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::cli::samples::{SAMPLE_MESSAGES, sample};
use crate::detector::SpamDetector;
use crate::error::{Result, TamengError};
use crate::ml::artifact::{Artifact, ArtifactFormat};
use crate::ml::classifier::Classifier;
use crate::ml::linear::LinearClassifier;
use crate::ml::tfidf::{Norm, TfIdfVectorizer};

/// Execute a CLI command.
pub fn execute_command(args: TamengArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_message(classify_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize_message(normalize_args.clone(), &args),
        Command::Samples(samples_args) => classify_samples(samples_args.clone(), &args),
        Command::Inspect => inspect_artifacts(&args),
        Command::Convert(convert_args) => convert_artifact(convert_args.clone(), &args),
    }
}

/// Classify one message given on the command line or on stdin.
fn classify_message(args: ClassifyArgs, cli_args: &TamengArgs) -> Result<()> {
    let text = text_or_stdin(args.text)?;
    let detector = load_detector(cli_args)?;
    let result = classify_one(&detector, &text)?;

    output_result("Classification result", &result, cli_args)
}

/// Print the normalized form of a message.
fn normalize_message(args: NormalizeArgs, cli_args: &TamengArgs) -> Result<()> {
    let text = text_or_stdin(args.text)?;
    let normalized = TextNormalizer::standard().normalize(&text);

    output_result(
        "Normalized text",
        &NormalizationResult { text, normalized },
        cli_args,
    )
}

/// Classify the built-in example messages.
fn classify_samples(args: SamplesArgs, cli_args: &TamengArgs) -> Result<()> {
    let numbered: Vec<(usize, &str)> = match args.index {
        Some(number) => {
            let text = sample(number).ok_or_else(|| {
                TamengError::invalid_argument(format!(
                    "example number must be between 1 and {}, got {number}",
                    SAMPLE_MESSAGES.len()
                ))
            })?;
            vec![(number, text)]
        }
        None => SAMPLE_MESSAGES
            .iter()
            .enumerate()
            .map(|(index, text)| (index + 1, *text))
            .collect(),
    };

    let detector = load_detector(cli_args)?;
    let samples = numbered
        .into_iter()
        .map(|(number, text)| {
            Ok(SampleResult {
                number,
                result: classify_one(&detector, text)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result("Example messages", &SampleResults { samples }, cli_args)
}

/// Summarize the configured artifacts.
fn inspect_artifacts(cli_args: &TamengArgs) -> Result<()> {
    let config = cli_args.detector_config()?;
    let vectorizer = Arc::new(TfIdfVectorizer::load_with_format(
        &config.vectorizer_path,
        config.format,
    )?);
    let classifier = Arc::new(LinearClassifier::load_with_format(
        &config.classifier_path,
        config.format,
    )?);

    // A mismatched pair is reported here too.
    SpamDetector::new(vectorizer.clone(), classifier.clone())?;

    let summary = ModelSummary {
        vectorizer_path: config.vectorizer_path.display().to_string(),
        classifier_path: config.classifier_path.display().to_string(),
        vocabulary_size: vectorizer.vocabulary_size(),
        n_features: classifier.n_features(),
        tokenizer: vectorizer.tokenizer_kind().to_string(),
        norm: vectorizer.norm().map(|norm| match norm {
            Norm::L1 => "l1".to_string(),
            Norm::L2 => "l2".to_string(),
        }),
        sublinear_tf: vectorizer.sublinear_tf(),
        ngram_range: vectorizer.ngram_range(),
        intercept: classifier.intercept(),
    };

    output_result("Artifact summary", &summary, cli_args)
}

/// Re-encode an artifact, validating it on the way through.
fn convert_artifact(args: ConvertArgs, cli_args: &TamengArgs) -> Result<()> {
    let input_format = match args.input_format {
        Some(format) => Some(format),
        None => cli_args.detector_config()?.format,
    };
    let format = ArtifactFormat::from_path(&args.output);
    if cli_args.verbosity() > 1 {
        println!(
            "Converting {} -> {}",
            args.input.display(),
            args.output.display()
        );
    }

    match args.kind {
        ArtifactKind::Vectorizer => {
            let vectorizer = TfIdfVectorizer::load_with_format(&args.input, input_format)?;
            vectorizer.to_artifact().save(&args.output, Some(format))?;
        }
        ArtifactKind::Classifier => {
            let classifier = LinearClassifier::load_with_format(&args.input, input_format)?;
            classifier.to_artifact().save(&args.output, Some(format))?;
        }
    }
    debug!(output = %args.output.display(), ?format, "artifact written");

    output_result(
        "Artifact converted",
        &ConversionResult {
            kind: args.kind,
            input: args.input.display().to_string(),
            output: args.output.display().to_string(),
            format: format.extension().to_string(),
        },
        cli_args,
    )
}

fn load_detector(cli_args: &TamengArgs) -> Result<SpamDetector> {
    let config = cli_args.detector_config()?;
    SpamDetector::from_config(&config)
}

fn classify_one(detector: &SpamDetector, text: &str) -> Result<ClassificationResult> {
    let (normalized, prediction) = detector.classify_normalized(text)?;
    Ok(ClassificationResult::new(text, normalized, &prediction))
}

/// Use the argument when present, otherwise read all of stdin.
fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}
