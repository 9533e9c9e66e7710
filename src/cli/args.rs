//! Command line argument parsing for the Tameng CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;
use crate::error::Result;
use crate::ml::artifact::ArtifactFormat;

/// Tameng - PayLater spam SMS detector
#[derive(Parser, Debug, Clone)]
#[command(name = "tameng")]
#[command(about = "Detect PayLater billing-scam SMS with TF-IDF and a linear classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TamengArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Detector configuration file (JSON)
    #[arg(long, env = "TAMENG_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Vectorizer artifact, overrides the configuration file
    #[arg(long, env = "TAMENG_VECTORIZER", value_name = "FILE")]
    pub vectorizer: Option<PathBuf>,

    /// Classifier artifact, overrides the configuration file
    #[arg(long, env = "TAMENG_CLASSIFIER", value_name = "FILE")]
    pub classifier: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TamengArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the detector configuration from the file and the overrides.
    pub fn detector_config(&self) -> Result<DetectorConfig> {
        let mut config = match &self.config {
            Some(path) => DetectorConfig::from_file(path)?,
            None => DetectorConfig::default(),
        };
        if let Some(path) = &self.vectorizer {
            config.vectorizer_path = path.clone();
        }
        if let Some(path) = &self.classifier {
            config.classifier_path = path.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify one message
    Classify(ClassifyArgs),

    /// Print the normalized form of a message
    Normalize(NormalizeArgs),

    /// Classify the built-in example messages
    Samples(SamplesArgs),

    /// Summarize the loaded artifacts
    Inspect,

    /// Re-encode an artifact between JSON and bincode
    Convert(ConvertArgs),
}

/// Arguments for classifying a message
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Message text; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for normalizing a message
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Message text; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for the example messages
#[derive(Parser, Debug, Clone)]
pub struct SamplesArgs {
    /// Classify only the example with this number (1-based)
    #[arg(short, long)]
    pub index: Option<usize>,
}

/// Arguments for artifact conversion
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Source artifact
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination artifact; format follows its extension
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Which artifact the files hold
    #[arg(short, long)]
    pub kind: ArtifactKind,

    /// Encoding of the source artifact; defaults to the configured format,
    /// then to the input extension
    #[arg(long, value_name = "FORMAT")]
    pub input_format: Option<ArtifactFormat>,
}

/// Artifact kinds
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// TF-IDF vocabulary and weights
    Vectorizer,
    /// Linear model parameters
    Classifier,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
