use crate::types::rating::{RatingGrade, SourceCategory, VerificationCategory};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fidelity",
    version,
    about = "Carbon credit data fidelity pre-rating CLI (AAA-D and indicative price)"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding fidelity.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rate manually selected data fidelity inputs
    Rate(RateCommand),
    /// Rate a plain-text document (file or directory of page files)
    Scan(ScanCommand),
    /// Print the scoring and rating tables for every mode
    Policies(PoliciesCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Source {
    DirectSensor,
    Metered,
    EngineeringEstimate,
}

impl From<Source> for SourceCategory {
    fn from(source: Source) -> Self {
        match source {
            Source::DirectSensor => SourceCategory::DirectSensor,
            Source::Metered => SourceCategory::Metered,
            Source::EngineeringEstimate => SourceCategory::EngineeringEstimate,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Verification {
    ReasonableAssurance,
    LimitedAssurance,
    Unverified,
}

impl From<Verification> for VerificationCategory {
    fn from(verification: Verification) -> Self {
        match verification {
            Verification::ReasonableAssurance => VerificationCategory::ReasonableAssurance,
            Verification::LimitedAssurance => VerificationCategory::LimitedAssurance,
            Verification::Unverified => VerificationCategory::Unverified,
        }
    }
}

#[derive(Args)]
pub struct RateCommand {
    #[arg(long, value_enum)]
    pub source: Source,
    #[arg(long, value_enum)]
    pub verification: Verification,
    /// Update frequency, 0 = annual through 100 = real-time
    #[arg(long, default_value_t = 20)]
    pub frequency: u32,
    #[arg(long)]
    pub project_type: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 2 when the grade is below this one
    #[arg(long)]
    pub min_grade: Option<RatingGrade>,
}

#[derive(Args)]
pub struct ScanCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 2 when the grade is below this one
    #[arg(long)]
    pub min_grade: Option<RatingGrade>,
}

#[derive(Args)]
pub struct PoliciesCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
