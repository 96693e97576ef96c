use crate::engine::policy::{Contribution, RatingPolicy, ScoringPolicy};
use crate::types::report::Assessment;

pub fn to_markdown(assessment: &Assessment) -> String {
    let mut output = String::new();
    output.push_str("# Fidelity Pre-Rating\n\n");
    output.push_str(&format!(
        "Predicted rating: {} {} ({})\n",
        assessment.grade, assessment.color, assessment.advisory.headline
    ));
    output.push_str(&format!(
        "Est. market price: ${:.2}/tonne (vs ${:.2} floor, {:+.2})\n",
        assessment.price_per_tonne,
        assessment.price_per_tonne - assessment.advisory.delta_vs_floor,
        assessment.advisory.delta_vs_floor
    ));
    output.push_str(&format!("Fidelity score: {}\n", assessment.score));
    output.push_str(&format!(
        "Mode: {} policy, project type: {}\n\n",
        assessment.policy, assessment.project_type
    ));

    output.push_str("## Score Breakdown\n\n");
    output.push_str(&format!("- base: {:+.1}\n", assessment.base));
    output.push_str(&format!(
        "- source: {} {:+.1}{}\n",
        assessment.source.label,
        assessment.source.points,
        keyword_note(assessment.source.keyword)
    ));
    output.push_str(&format!(
        "- verification: {} {:+.1}{}\n",
        assessment.verification.label,
        assessment.verification.points,
        keyword_note(assessment.verification.keyword)
    ));
    match assessment.frequency.value {
        Some(value) => output.push_str(&format!(
            "- frequency: {value}/100 {:+.1}\n",
            assessment.frequency.points
        )),
        None => output.push_str(&format!(
            "- frequency: static document {:+.1}\n",
            assessment.frequency.points
        )),
    }
    output.push_str(&format!(
        "- raw total: {:.1} (clamped to {:.1})\n\n",
        assessment.raw_score,
        assessment.score.value()
    ));

    output.push_str("## Rating Advisory\n\n");
    output.push_str(&format!("- {}\n", assessment.advisory.message));
    if let Some(fix) = &assessment.advisory.fix {
        output.push_str(&format!("- Fix: {fix}\n"));
    }
    output.push('\n');

    output.push_str("## Price Potential by Rating Notch\n\n");
    for rung in &assessment.price_ladder {
        output.push_str(&format!(
            "- {} {} (score >= {:.0}): ${:.2}{}\n",
            rung.grade,
            rung.color,
            rung.floor,
            rung.price,
            if rung.current { " <- current" } else { "" }
        ));
    }

    if let Some(document) = &assessment.document {
        output.push_str("\n## Document\n\n");
        output.push_str(&format!(
            "- {} ({} pages, {} chars)\n- sha256: {}\n",
            document.path, document.pages, document.characters, document.sha256
        ));
    }

    output
}

fn keyword_note(keyword: Option<&str>) -> String {
    match keyword {
        Some(keyword) => format!(" (matched \"{keyword}\")"),
        None => String::new(),
    }
}

pub fn policies_to_markdown(policies: &[(&ScoringPolicy, &RatingPolicy)]) -> String {
    let mut output = String::new();
    output.push_str("# Rating Policies\n");
    for (scoring, rating) in policies {
        output.push_str(&format!("\n## {}\n\n", scoring.name));
        output.push_str(&format!("Base score: {:.0}\n\n", scoring.base));
        output.push_str("Source:\n");
        push_contributions(&mut output, &scoring.source);
        output.push_str("\nVerification:\n");
        push_contributions(&mut output, &scoring.verification);
        output.push_str(&format!(
            "\nFrequency: value / {:.0}, static documents {:+.0}\n\nBands:\n",
            scoring.frequency_divisor, scoring.static_frequency_bonus
        ));
        for band in rating.bands {
            output.push_str(&format!(
                "- >= {:.0}: {} {} ${:.2}\n",
                band.floor, band.grade, band.color, band.price
            ));
        }
    }
    output
}

fn push_contributions(output: &mut String, contributions: &[Contribution]) {
    for contribution in contributions {
        output.push_str(&format!(
            "- {}: {:+.0}\n",
            contribution.label, contribution.points
        ));
    }
}
