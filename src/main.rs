mod cli;
mod config;
mod engine;
mod error;
mod report;
mod scan;
mod types;

use crate::error::FidelityError;
use crate::types::config::FidelityConfig;
use crate::types::rating::{Frequency, Mode, RatingGrade, ScoringInput};
use crate::types::report::Assessment;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BELOW_MINIMUM: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: &FidelityConfig,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => config
            .report_format()
            .and_then(report::OutputFormat::from_config)
            .unwrap_or(report::OutputFormat::Md),
    }
}

fn grade_exit_code(assessment: &Assessment, min_grade: Option<RatingGrade>) -> Option<i32> {
    let minimum = min_grade?;
    if assessment.meets(minimum) {
        return None;
    }
    eprintln!(
        "rating {} is below required minimum {}",
        assessment.grade, minimum
    );
    Some(exit_code::BELOW_MINIMUM)
}

fn run() -> Result<i32, FidelityError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if !cli.config_dir.exists() {
        return Err(FidelityError::PathNotFound(
            cli.config_dir.display().to_string(),
        ));
    }
    let loaded = config::load_config(&cli.config_dir)?.unwrap_or_default();
    let threshold = loaded.high_fidelity_threshold();

    match cli.command {
        cli::Commands::Rate(cmd) => {
            let input = ScoringInput::new(
                cmd.source.into(),
                cmd.verification.into(),
                Some(Frequency::new(cmd.frequency)?),
            );
            let project_type = cmd
                .project_type
                .as_deref()
                .unwrap_or_else(|| loaded.project_type());

            let assessment = engine::assess_simulation(input, project_type, threshold);
            let rendered = report::render(&assessment, output_format(cmd.format, &loaded))?;
            println!("{rendered}");

            Ok(grade_exit_code(&assessment, cmd.min_grade).unwrap_or(exit_code::SUCCESS))
        }
        cli::Commands::Scan(cmd) => {
            let document = scan::document::load_document(&cmd.path)?;

            let mut assessment = engine::assess_text(&document.text, threshold);
            assessment.document = Some(document.summary());
            let rendered = report::render(&assessment, output_format(cmd.format, &loaded))?;
            println!("{rendered}");

            if let Some(code) = grade_exit_code(&assessment, cmd.min_grade) {
                return Ok(code);
            }
            if document.is_empty() {
                eprintln!(
                    "warning: no text found in {}; every attribute used its fallback",
                    cmd.path.display()
                );
                return Ok(exit_code::WARNINGS);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Policies(cmd) => {
            let policies: Vec<_> = Mode::ALL
                .iter()
                .map(|mode| (mode.scoring_policy(), mode.rating_policy()))
                .collect();
            let rendered = report::render_policies(&policies, output_format(cmd.format, &loaded))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
