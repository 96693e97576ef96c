use super::policy::ScoringPolicy;
use crate::types::rating::{FidelityScore, Frequency, ScoringInput};

pub fn frequency_points(frequency: Option<Frequency>, policy: &ScoringPolicy) -> f64 {
    match frequency {
        Some(frequency) => f64::from(frequency.value()) / policy.frequency_divisor,
        None => policy.static_frequency_bonus,
    }
}

pub fn raw_score(input: ScoringInput, policy: &ScoringPolicy) -> f64 {
    let source = policy.source(input.source).points;
    let verification = policy.verification(input.verification).points;
    let frequency = frequency_points(input.frequency, policy);
    policy.base + source + verification + frequency
}

pub fn score(input: ScoringInput, policy: &ScoringPolicy) -> FidelityScore {
    let raw = raw_score(input, policy);
    let score = FidelityScore::clamped(raw);
    tracing::debug!(
        policy = policy.name,
        source = ?input.source,
        verification = ?input.verification,
        raw,
        score = score.value(),
        "fidelity score computed"
    );
    score
}
