pub mod json;
pub mod md;

use crate::engine::policy::{RatingPolicy, ScoringPolicy};
use crate::error::FidelityError;
use crate::types::report::Assessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "md" => Some(Self::Md),
            _ => None,
        }
    }
}

pub fn render(assessment: &Assessment, format: OutputFormat) -> Result<String, FidelityError> {
    match format {
        OutputFormat::Json => json::to_json(assessment).map_err(FidelityError::Json),
        OutputFormat::Md => Ok(md::to_markdown(assessment)),
    }
}

pub fn render_policies(
    policies: &[(&ScoringPolicy, &RatingPolicy)],
    format: OutputFormat,
) -> Result<String, FidelityError> {
    match format {
        OutputFormat::Json => json::policies_to_json(policies).map_err(FidelityError::Json),
        OutputFormat::Md => Ok(md::policies_to_markdown(policies)),
    }
}
