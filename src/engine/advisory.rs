use super::policy::{RatingBand, RatingPolicy};
use crate::types::rating::FidelityScore;
use crate::types::report::{Advisory, LadderRung};

pub const DEFAULT_HIGH_FIDELITY_THRESHOLD: f64 = 80.0;

pub fn advise(
    score: FidelityScore,
    band: &RatingBand,
    policy: &RatingPolicy,
    source_label: &str,
    threshold: f64,
) -> Advisory {
    let value = score.value();
    let high_fidelity = value > threshold;
    let top = policy.top();
    let premium_to_top_pct = (top.price / band.price - 1.0) * 100.0;

    // strict on both sides: a score on the threshold gets neither
    let (message, fix) = if value < threshold {
        let reliance = source_label.split_whitespace().next().unwrap_or(source_label);
        (
            format!(
                "Your reliance on {reliance} data is capping your rating at {}.",
                band.grade
            ),
            Some(format!(
                "Integrate real-time dMRV sensors to unlock {} status and a potential +{:.0}% price premium.",
                top.grade, premium_to_top_pct
            )),
        )
    } else {
        (
            "Your data structure aligns with top-tier rating methodologies.".to_string(),
            None,
        )
    };

    Advisory {
        headline: if high_fidelity {
            "High Fidelity"
        } else {
            "Info Risk Detected"
        },
        high_fidelity,
        message,
        fix,
        delta_vs_floor: band.price - policy.floor_band().price,
        premium_to_top_pct,
    }
}

pub fn price_ladder(band: &RatingBand, policy: &RatingPolicy) -> Vec<LadderRung> {
    policy
        .bands
        .iter()
        .map(|rung| LadderRung {
            grade: rung.grade,
            floor: rung.floor,
            color: rung.color,
            price: rung.price,
            current: rung.grade == band.grade,
        })
        .collect()
}
