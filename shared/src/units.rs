//! Unit handling for calculator inputs and results
//!
//! Form inputs are SI (kg, m) unless a formula states otherwise. Some of the
//! published regressions were fitted in imperial units and convert on entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds per kilogram, as used by the published field-test regressions
pub const LBS_PER_KG: f64 = 2.20462;

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Body mass index from weight (kg) and height (m)
///
/// Formula: BMI = weight / height²
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

// ============================================================================
// VO₂ Units
// ============================================================================

/// Unit of a VO₂ estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Vo2Unit {
    /// Relative uptake, ml/kg/min
    #[default]
    MlPerKgPerMin,
    /// Absolute uptake, L/min
    LitersPerMin,
}

impl Vo2Unit {
    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Vo2Unit::MlPerKgPerMin => "ml/kg/min",
            Vo2Unit::LitersPerMin => "L/min",
        }
    }

    /// Rating tables are published for relative uptake only
    ///
    /// Absolute L/min estimates are deliberately left unrated, even though
    /// a table lookup on the raw number would return some band.
    pub fn is_ratable(&self) -> bool {
        matches!(self, Vo2Unit::MlPerKgPerMin)
    }
}

impl fmt::Display for Vo2Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for Vo2Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ml/kg/min" | "ml_per_kg_per_min" => Ok(Vo2Unit::MlPerKgPerMin),
            "l/min" | "liters_per_min" => Ok(Vo2Unit::LitersPerMin),
            _ => Err(format!("Unknown VO2 unit: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_kg_to_lbs() {
        assert!((kg_to_lbs(70.0) - 154.3234).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_meters() {
        // 70kg, 1.75m -> BMI ~22.86
        assert!((bmi(70.0, 1.75) - 22.857).abs() < 0.01);
    }

    #[test]
    fn test_vo2_unit_round_trip_str() {
        for unit in [Vo2Unit::MlPerKgPerMin, Vo2Unit::LitersPerMin] {
            assert_eq!(unit.abbreviation().parse::<Vo2Unit>().unwrap(), unit);
        }
        assert!("mph".parse::<Vo2Unit>().is_err());
    }

    #[test]
    fn test_only_relative_unit_is_ratable() {
        assert!(Vo2Unit::MlPerKgPerMin.is_ratable());
        assert!(!Vo2Unit::LitersPerMin.is_ratable());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: taller height = lower BMI (same weight)
        #[test]
        fn prop_bmi_decreases_with_height(
            weight in 40.0f64..150.0,
            h1 in 1.40f64..1.70,
            h2 in 1.75f64..2.10
        ) {
            prop_assert!(bmi(weight, h1) > bmi(weight, h2));
        }
    }
}
