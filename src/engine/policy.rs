use crate::types::rating::{Mode, RatingGrade, SourceCategory, VerificationCategory};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub label: &'static str,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringPolicy {
    pub name: &'static str,
    pub base: f64,
    // highest fidelity first, see SourceCategory::index
    pub source: [Contribution; 3],
    pub verification: [Contribution; 3],
    pub frequency_divisor: f64,
    pub static_frequency_bonus: f64,
}

impl ScoringPolicy {
    pub fn source(&self, category: SourceCategory) -> Contribution {
        self.source[category.index()]
    }

    pub fn verification(&self, category: VerificationCategory) -> Contribution {
        self.verification[category.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBand {
    pub floor: f64,
    pub grade: RatingGrade,
    pub color: &'static str,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingPolicy {
    pub name: &'static str,
    // descending by floor
    pub bands: &'static [RatingBand],
}

impl RatingPolicy {
    pub fn top(&self) -> &RatingBand {
        &self.bands[0]
    }

    pub fn floor_band(&self) -> &RatingBand {
        &self.bands[self.bands.len() - 1]
    }
}

pub static SIMULATION_SCORING: ScoringPolicy = ScoringPolicy {
    name: "simulation",
    base: 50.0,
    source: [
        Contribution {
            label: "Direct Sensor (IoT) / Remote Sensing",
            points: 30.0,
        },
        Contribution {
            label: "Metered / Monthly Invoices",
            points: 10.0,
        },
        Contribution {
            label: "Engineering Estimates / Manual Logs",
            points: -15.0,
        },
    ],
    verification: [
        Contribution {
            label: "Reasonable Assurance (ISO 14064-3)",
            points: 15.0,
        },
        Contribution {
            label: "Limited Assurance",
            points: 5.0,
        },
        Contribution {
            label: "Self-Reported / Unverified",
            points: -20.0,
        },
    ],
    frequency_divisor: 5.0,
    static_frequency_bonus: 5.0,
};

pub static DOCUMENT_SCORING: ScoringPolicy = ScoringPolicy {
    name: "document",
    base: 40.0,
    source: [
        Contribution {
            label: "Direct Facility Data (Primary)",
            points: 40.0,
        },
        Contribution {
            label: "Hybrid / Mixed",
            points: 10.0,
        },
        Contribution {
            label: "Industry Average (Secondary)",
            points: -10.0,
        },
    ],
    verification: [
        Contribution {
            label: "Third Party Verified",
            points: 30.0,
        },
        Contribution {
            label: "Self-Declared (ISO 14040/44)",
            points: 15.0,
        },
        Contribution {
            label: "Unverified",
            points: -20.0,
        },
    ],
    frequency_divisor: 5.0,
    static_frequency_bonus: 5.0,
};

static SIMULATION_BANDS: [RatingBand; 6] = [
    RatingBand {
        floor: 90.0,
        grade: RatingGrade::AAA,
        color: "#00d4ff",
        price: 18.50,
    },
    RatingBand {
        floor: 80.0,
        grade: RatingGrade::AA,
        color: "#2ecc71",
        price: 14.20,
    },
    RatingBand {
        floor: 70.0,
        grade: RatingGrade::A,
        color: "#f1c40f",
        price: 11.00,
    },
    RatingBand {
        floor: 50.0,
        grade: RatingGrade::BBB,
        color: "#e67e22",
        price: 7.50,
    },
    RatingBand {
        floor: 30.0,
        grade: RatingGrade::BB,
        color: "#e74c3c",
        price: 4.00,
    },
    RatingBand {
        floor: 0.0,
        grade: RatingGrade::D,
        color: "#c0392b",
        price: 1.50,
    },
];

static DOCUMENT_BANDS: [RatingBand; 4] = [
    RatingBand {
        floor: 80.0,
        grade: RatingGrade::AAA,
        color: "#00d4ff",
        price: 18.50,
    },
    RatingBand {
        floor: 60.0,
        grade: RatingGrade::A,
        color: "#2ecc71",
        price: 14.20,
    },
    RatingBand {
        floor: 40.0,
        grade: RatingGrade::BBB,
        color: "#e67e22",
        price: 9.00,
    },
    RatingBand {
        floor: 0.0,
        grade: RatingGrade::D,
        color: "#c0392b",
        price: 2.50,
    },
];

pub static SIMULATION_RATING: RatingPolicy = RatingPolicy {
    name: "simulation",
    bands: &SIMULATION_BANDS,
};

pub static DOCUMENT_RATING: RatingPolicy = RatingPolicy {
    name: "document",
    bands: &DOCUMENT_BANDS,
};

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Simulation, Mode::Document];

    pub fn scoring_policy(self) -> &'static ScoringPolicy {
        match self {
            Self::Simulation => &SIMULATION_SCORING,
            Self::Document => &DOCUMENT_SCORING,
        }
    }

    pub fn rating_policy(self) -> &'static RatingPolicy {
        match self {
            Self::Simulation => &SIMULATION_RATING,
            Self::Document => &DOCUMENT_RATING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_strictly_descending_with_zero_catch_all() {
        for mode in Mode::ALL {
            let bands = mode.rating_policy().bands;
            assert!(bands.windows(2).all(|pair| pair[0].floor > pair[1].floor));
            assert!(bands.windows(2).all(|pair| pair[0].grade > pair[1].grade));
            assert!(bands.windows(2).all(|pair| pair[0].price > pair[1].price));
            assert_eq!(mode.rating_policy().floor_band().floor, 0.0);
        }
    }

    #[test]
    fn contributions_are_ordered_by_fidelity() {
        for mode in Mode::ALL {
            let policy = mode.scoring_policy();
            assert!(policy.source.windows(2).all(|pair| pair[0].points > pair[1].points));
            assert!(policy
                .verification
                .windows(2)
                .all(|pair| pair[0].points > pair[1].points));
        }
    }

    #[test]
    fn policies_keep_their_distinct_tables() {
        assert_eq!(Mode::Simulation.rating_policy().bands.len(), 6);
        assert_eq!(Mode::Document.rating_policy().bands.len(), 4);
        assert_eq!(Mode::Simulation.scoring_policy().base, 50.0);
        assert_eq!(Mode::Document.scoring_policy().base, 40.0);
    }

    #[test]
    fn lookup_by_category_uses_fidelity_order() {
        let policy = Mode::Document.scoring_policy();
        assert_eq!(policy.source(SourceCategory::DirectSensor).points, 40.0);
        assert_eq!(policy.source(SourceCategory::Metered).points, 10.0);
        assert_eq!(
            policy
                .verification(VerificationCategory::LimitedAssurance)
                .points,
            15.0
        );
    }
}
