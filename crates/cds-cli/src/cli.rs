//! CLI argument definitions for the clinical decision engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cds_model::TriageLevel;

#[derive(Parser)]
#[command(
    name = "cds",
    version,
    about = "Clinical decision & resource allocation engine",
    long_about = "Deterministic clinical decision support: symptom triage, \
                  image-based condition detection, treatment protocol \
                  generation with allergy-aware substitution, and ward bed \
                  allocation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient-identifying values (symptom text, ids) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the condition catalog.
    Conditions,

    /// Evaluate a free-text symptom report.
    Symptoms(SymptomArgs),

    /// Classify an image into a catalog condition.
    Classify(ClassifyArgs),

    /// Generate a treatment protocol for a known condition.
    Protocol(ProtocolArgs),

    /// Run a full image consultation (classification + treatment plan).
    Consult(ConsultArgs),

    /// Replay admissions against the standard bed layout.
    Admit(AdmitArgs),
}

#[derive(Parser)]
pub struct SymptomArgs {
    /// Symptom description, e.g. "bad headache and fever".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Emit the structured assessment as JSON instead of the advisory.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Path to the image file.
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Top class index from the external classifier. Omit to simulate an
    /// unavailable model.
    #[arg(long = "top-class", value_name = "N")]
    pub top_class: Option<u32>,
}

#[derive(Parser)]
pub struct ProtocolArgs {
    /// Condition name, e.g. "Bacterial Pneumonia".
    #[arg(long = "condition", value_name = "NAME")]
    pub condition: String,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

#[derive(Parser)]
pub struct ConsultArgs {
    /// Path to the image file.
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Top class index from the external classifier. Omit to simulate an
    /// unavailable model.
    #[arg(long = "top-class", value_name = "N")]
    pub top_class: Option<u32>,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Patient attributes shared by protocol and consult.
#[derive(Parser)]
pub struct ProfileArgs {
    /// Patient age in years.
    #[arg(long = "age", default_value_t = 30)]
    pub age: u32,

    /// Patient weight in kilograms.
    #[arg(long = "weight", default_value_t = 70.0)]
    pub weight: f64,

    /// Comma-separated allergy list, e.g. "penicillin, nsaid".
    #[arg(long = "allergies", default_value = "")]
    pub allergies: String,
}

#[derive(Parser)]
pub struct AdmitArgs {
    /// Admissions to replay, in order.
    #[arg(value_name = "SEVERITY", required = true, num_args = 1..)]
    pub severities: Vec<SeverityArg>,
}

/// CLI triage tier choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SeverityArg {
    Normal,
    Serious,
    Critical,
}

impl From<SeverityArg> for TriageLevel {
    fn from(value: SeverityArg) -> Self {
        match value {
            SeverityArg::Normal => TriageLevel::Normal,
            SeverityArg::Serious => TriageLevel::Serious,
            SeverityArg::Critical => TriageLevel::Critical,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
