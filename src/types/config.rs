use crate::engine::advisory::DEFAULT_HIGH_FIDELITY_THRESHOLD;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PROJECT_TYPE: &str = "Biochar";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FidelityConfig {
    pub project: Option<ProjectConfig>,
    pub report: Option<ReportConfig>,
    pub advisory: Option<AdvisoryConfig>,
}

/// A rejected value, keyed by its dotted path in the TOML document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConfigIssue {
    pub key: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn new(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default = "default_project_type")]
    pub project_type: String,
}

fn default_project_type() -> String {
    DEFAULT_PROJECT_TYPE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryConfig {
    pub high_fidelity_threshold: Option<f64>,
}

impl FidelityConfig {
    pub fn project_type(&self) -> &str {
        self.project
            .as_ref()
            .map(|project| project.project_type.as_str())
            .unwrap_or(DEFAULT_PROJECT_TYPE)
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn high_fidelity_threshold(&self) -> f64 {
        self.advisory
            .as_ref()
            .and_then(|advisory| advisory.high_fidelity_threshold)
            .unwrap_or(DEFAULT_HIGH_FIDELITY_THRESHOLD)
    }

    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if let Some(project) = &self.project {
            if project.name.trim().is_empty() {
                return Err(ConfigIssue::new(
                    "project.name",
                    "project.name must not be empty",
                ));
            }
            if project.project_type.trim().is_empty() {
                return Err(ConfigIssue::new(
                    "project.project_type",
                    "project.project_type must not be empty",
                ));
            }
        }

        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(ConfigIssue::new(
                    "report.format",
                    format!("unsupported report.format: {format}"),
                ));
            }
        }

        let threshold = self.high_fidelity_threshold();
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigIssue::new(
                "advisory.high_fidelity_threshold",
                "advisory.high_fidelity_threshold must be between 0 and 100",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[project]
name = "kiln-retrofit"
project_type = "Renewable Energy"

[report]
format = "json"

[advisory]
high_fidelity_threshold = 75.0
"#;
        let cfg: FidelityConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.project_type(), "Renewable Energy");
        assert_eq!(cfg.report_format(), Some("json"));
        assert_eq!(cfg.high_fidelity_threshold(), 75.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn defaults_apply_when_sections_missing() {
        let cfg: FidelityConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.project_type(), DEFAULT_PROJECT_TYPE);
        assert_eq!(cfg.report_format(), None);
        assert_eq!(cfg.high_fidelity_threshold(), DEFAULT_HIGH_FIDELITY_THRESHOLD);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn project_type_defaults_when_only_name_given() {
        let toml_str = r#"
[project]
name = "cookstove-program"
"#;
        let cfg: FidelityConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.project_type(), DEFAULT_PROJECT_TYPE);
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let toml_str = r#"
[report]
format = "sarif"
"#;
        let cfg: FidelityConfig = toml::from_str(toml_str).expect("config should parse");
        let issue = cfg.validate().expect_err("validation should fail");
        assert_eq!(issue.key, "report.format");
        assert!(issue.to_string().contains("unsupported report.format"));
    }

    #[test]
    fn validate_rejects_threshold_out_of_range() {
        let toml_str = r#"
[advisory]
high_fidelity_threshold = 120.0
"#;
        let cfg: FidelityConfig = toml::from_str(toml_str).expect("config should parse");
        let issue = cfg.validate().expect_err("validation should fail");
        assert_eq!(issue.key, "advisory.high_fidelity_threshold");
        assert!(issue.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn validate_rejects_blank_project_name() {
        let toml_str = r#"
[project]
name = "  "
"#;
        let cfg: FidelityConfig = toml::from_str(toml_str).expect("config should parse");
        let issue = cfg.validate().expect_err("validation should fail");
        assert_eq!(issue.key, "project.name");
    }

    #[test]
    fn validate_accepts_threshold_boundaries() {
        for threshold in ["0.0", "100.0"] {
            let toml_str = format!("[advisory]\nhigh_fidelity_threshold = {threshold}\n");
            let cfg: FidelityConfig = toml::from_str(&toml_str).expect("config should parse");
            assert!(cfg.validate().is_ok());
        }
    }
}
