use crate::types::rating::{SourceCategory, VerificationCategory};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    pub patterns: &'static [&'static str],
    pub category: T,
}

#[derive(Debug, Clone, Copy)]
pub struct RuleSet<T: 'static> {
    pub rules: &'static [KeywordRule<T>],
    pub fallback: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classified<T> {
    pub category: T,
    pub keyword: Option<&'static str>,
}

impl<T: Copy + 'static> RuleSet<T> {
    pub fn classify(&self, text: &str) -> Classified<T> {
        for rule in self.rules {
            if let Some(pattern) = rule.patterns.iter().find(|pattern| text.contains(**pattern)) {
                return Classified {
                    category: rule.category,
                    keyword: Some(*pattern),
                };
            }
        }
        Classified {
            category: self.fallback,
            keyword: None,
        }
    }
}

pub static VERIFICATION_RULES: RuleSet<VerificationCategory> = RuleSet {
    rules: &[
        KeywordRule {
            patterns: &["third party verified", "external verification"],
            category: VerificationCategory::ReasonableAssurance,
        },
        KeywordRule {
            patterns: &["iso 14040", "iso 14044"],
            category: VerificationCategory::LimitedAssurance,
        },
    ],
    fallback: VerificationCategory::Unverified,
};

pub static SOURCE_RULES: RuleSet<SourceCategory> = RuleSet {
    rules: &[
        KeywordRule {
            patterns: &["primary data", "site-specific", "facility specific"],
            category: SourceCategory::DirectSensor,
        },
        KeywordRule {
            patterns: &["secondary data", "database", "generic"],
            category: SourceCategory::EngineeringEstimate,
        },
    ],
    // middle tier, unlike verification
    fallback: SourceCategory::Metered,
};

pub const FALLBACK_PROJECT_TYPE: &str = "General Construction Material";

pub static PROJECT_TYPE_RULES: RuleSet<&'static str> = RuleSet {
    rules: &[
        KeywordRule {
            patterns: &["concrete", "cement"],
            category: "Concrete & Cement",
        },
        KeywordRule {
            patterns: &["glass", "glazing"],
            category: "Glass & Glazing",
        },
        KeywordRule {
            patterns: &["steel", "aluminum"],
            category: "Steel & Aluminum",
        },
        KeywordRule {
            patterns: &["wood", "timber"],
            category: "Wood & Timber",
        },
    ],
    fallback: FALLBACK_PROJECT_TYPE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentProfile {
    pub source: Classified<SourceCategory>,
    pub verification: Classified<VerificationCategory>,
    pub project_type: Classified<&'static str>,
}

pub fn extract(text: &str) -> DocumentProfile {
    let normalized = text.to_lowercase();
    let profile = DocumentProfile {
        source: SOURCE_RULES.classify(&normalized),
        verification: VERIFICATION_RULES.classify(&normalized),
        project_type: PROJECT_TYPE_RULES.classify(&normalized),
    };
    tracing::debug!(
        source = ?profile.source.category,
        source_keyword = profile.source.keyword.unwrap_or("-"),
        verification = ?profile.verification.category,
        verification_keyword = profile.verification.keyword.unwrap_or("-"),
        project_type = profile.project_type.category,
        "document attributes extracted"
    );
    profile
}
