use crate::types::rating::{
    FidelityScore, Mode, RatingGrade, SourceCategory, VerificationCategory,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Factor<T> {
    pub category: T,
    pub label: &'static str,
    pub points: f64,
    pub keyword: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyFactor {
    pub value: Option<u8>,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub headline: &'static str,
    pub high_fidelity: bool,
    pub message: String,
    pub fix: Option<String>,
    pub delta_vs_floor: f64,
    pub premium_to_top_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LadderRung {
    pub grade: RatingGrade,
    pub floor: f64,
    pub color: &'static str,
    pub price: f64,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub path: String,
    pub pages: usize,
    pub characters: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub mode: Mode,
    pub policy: &'static str,
    pub project_type: String,
    pub base: f64,
    pub source: Factor<SourceCategory>,
    pub verification: Factor<VerificationCategory>,
    pub frequency: FrequencyFactor,
    pub raw_score: f64,
    pub score: FidelityScore,
    pub grade: RatingGrade,
    pub color: &'static str,
    pub price_per_tonne: f64,
    pub advisory: Advisory,
    pub price_ladder: Vec<LadderRung>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSummary>,
    pub generated_at: String,
}

impl Assessment {
    pub fn meets(&self, minimum: RatingGrade) -> bool {
        self.grade >= minimum
    }
}
