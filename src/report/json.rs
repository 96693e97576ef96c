use crate::engine::policy::{RatingPolicy, ScoringPolicy};
use crate::types::report::Assessment;
use serde_json::json;

pub fn to_json(assessment: &Assessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}

pub fn policies_to_json(
    policies: &[(&ScoringPolicy, &RatingPolicy)],
) -> Result<String, serde_json::Error> {
    let entries: Vec<_> = policies
        .iter()
        .map(|(scoring, rating)| {
            json!({
                "name": scoring.name,
                "scoring": scoring,
                "rating": rating,
            })
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
