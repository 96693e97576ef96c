use crate::error::{FidelityError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// Document mode calls these IndustryAverage, HybridMixed and DirectFacility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    EngineeringEstimate,
    Metered,
    DirectSensor,
}

impl SourceCategory {
    #[cfg(test)]
    pub const ALL: [SourceCategory; 3] = [
        SourceCategory::EngineeringEstimate,
        SourceCategory::Metered,
        SourceCategory::DirectSensor,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::DirectSensor => 0,
            Self::Metered => 1,
            Self::EngineeringEstimate => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationCategory {
    Unverified,
    LimitedAssurance,
    ReasonableAssurance,
}

impl VerificationCategory {
    #[cfg(test)]
    pub const ALL: [VerificationCategory; 3] = [
        VerificationCategory::Unverified,
        VerificationCategory::LimitedAssurance,
        VerificationCategory::ReasonableAssurance,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::ReasonableAssurance => 0,
            Self::LimitedAssurance => 1,
            Self::Unverified => 2,
        }
    }
}

/// 0 = annual, 100 = real-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Frequency(u8);

impl Frequency {
    pub const MAX: u8 = 100;

    pub fn new(value: u32) -> Result<Self> {
        if value > u32::from(Self::MAX) {
            return Err(FidelityError::FrequencyOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FidelityScore(f64);

impl FidelityScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn clamped(raw: f64) -> Self {
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for FidelityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}/100", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RatingGrade {
    D,
    BB,
    BBB,
    A,
    AA,
    AAA,
}

impl RatingGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::BB => "BB",
            Self::BBB => "BBB",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl fmt::Display for RatingGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingGrade {
    type Err = FidelityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "D" => Ok(Self::D),
            "BB" => Ok(Self::BB),
            "BBB" => Ok(Self::BBB),
            "A" => Ok(Self::A),
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            _ => Err(FidelityError::UnknownGrade(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Simulation,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringInput {
    pub source: SourceCategory,
    pub verification: VerificationCategory,
    pub frequency: Option<Frequency>,
}

impl ScoringInput {
    pub fn new(
        source: SourceCategory,
        verification: VerificationCategory,
        frequency: Option<Frequency>,
    ) -> Self {
        Self {
            source,
            verification,
            frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_rejects_values_above_real_time() {
        assert!(Frequency::new(100).is_ok());
        let err = Frequency::new(101).expect_err("101 should be rejected");
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn score_clamps_both_ends() {
        assert_eq!(FidelityScore::clamped(115.0).value(), 100.0);
        assert_eq!(FidelityScore::clamped(-12.5).value(), 0.0);
        assert_eq!(FidelityScore::clamped(42.4).value(), 42.4);
    }

    #[test]
    fn grades_order_from_default_to_top() {
        assert!(RatingGrade::D < RatingGrade::BB);
        assert!(RatingGrade::BBB < RatingGrade::A);
        assert!(RatingGrade::AA < RatingGrade::AAA);
    }

    #[test]
    fn grade_parses_case_insensitively() {
        assert_eq!("bbb".parse::<RatingGrade>().ok(), Some(RatingGrade::BBB));
        assert!(" AaA ".parse::<RatingGrade>().is_ok());
        assert!("CCC".parse::<RatingGrade>().is_err());
    }

    #[test]
    fn categories_order_by_fidelity() {
        assert!(SourceCategory::EngineeringEstimate < SourceCategory::Metered);
        assert!(SourceCategory::Metered < SourceCategory::DirectSensor);
        assert!(VerificationCategory::Unverified < VerificationCategory::LimitedAssurance);
    }
}
