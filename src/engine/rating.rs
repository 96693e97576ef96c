use super::policy::{RatingBand, RatingPolicy};
use crate::types::rating::FidelityScore;

pub fn rate(score: FidelityScore, policy: &RatingPolicy) -> RatingBand {
    let band = policy
        .bands
        .iter()
        .find(|band| score.value() >= band.floor)
        .unwrap_or_else(|| policy.floor_band());
    tracing::debug!(
        policy = policy.name,
        score = score.value(),
        grade = %band.grade,
        "rating band selected"
    );
    *band
}
