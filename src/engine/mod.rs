pub mod advisory;
pub mod extract;
pub mod policy;
pub mod rating;
pub mod score;

use crate::types::rating::{Mode, ScoringInput};
use crate::types::report::{Assessment, Factor, FrequencyFactor};
use chrono::Utc;

pub fn assess_simulation(input: ScoringInput, project_type: &str, threshold: f64) -> Assessment {
    assess(Mode::Simulation, input, project_type, threshold)
}

pub fn assess_text(text: &str, threshold: f64) -> Assessment {
    let profile = extract::extract(text);
    let input = ScoringInput::new(
        profile.source.category,
        profile.verification.category,
        None,
    );
    let mut assessment = assess(
        Mode::Document,
        input,
        profile.project_type.category,
        threshold,
    );
    assessment.source.keyword = profile.source.keyword;
    assessment.verification.keyword = profile.verification.keyword;
    assessment
}

fn assess(mode: Mode, input: ScoringInput, project_type: &str, threshold: f64) -> Assessment {
    let scoring = mode.scoring_policy();
    let rating = mode.rating_policy();

    let source = scoring.source(input.source);
    let verification = scoring.verification(input.verification);
    let raw_score = score::raw_score(input, scoring);
    let fidelity = score::score(input, scoring);
    let band = rating::rate(fidelity, rating);

    tracing::info!(
        mode = ?mode,
        score = fidelity.value(),
        grade = %band.grade,
        price = band.price,
        "assessment complete"
    );

    Assessment {
        mode,
        policy: scoring.name,
        project_type: project_type.to_string(),
        base: scoring.base,
        source: Factor {
            category: input.source,
            label: source.label,
            points: source.points,
            keyword: None,
        },
        verification: Factor {
            category: input.verification,
            label: verification.label,
            points: verification.points,
            keyword: None,
        },
        frequency: FrequencyFactor {
            value: input.frequency.map(|frequency| frequency.value()),
            points: score::frequency_points(input.frequency, scoring),
        },
        raw_score,
        score: fidelity,
        grade: band.grade,
        color: band.color,
        price_per_tonne: band.price,
        advisory: advisory::advise(fidelity, &band, rating, source.label, threshold),
        price_ladder: advisory::price_ladder(&band, rating),
        document: None,
        generated_at: Utc::now().to_rfc3339(),
    }
}
