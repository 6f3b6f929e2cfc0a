//! VO₂max performance ratings
//!
//! Age-banded norms for relative VO₂max (ml/kg/min). A lookup first picks
//! the row whose inclusive age range contains the age, then tests the value
//! against the bands from Excellent down to Very poor. Excellent and Very
//! poor are open-ended thresholds; the bands between them are inclusive
//! ranges. Values that fall between two bands are unclassified.

use crate::inputs::Gender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance band for a VO₂max value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    AboveAverage,
    Average,
    BelowAverage,
    Poor,
    VeryPoor,
    /// The value lies in a gap between two bands
    Unclassified,
    /// No age row matches
    NoRatingAvailable,
}

impl Rating {
    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::AboveAverage => "Above average",
            Rating::Average => "Average",
            Rating::BelowAverage => "Below average",
            Rating::Poor => "Poor",
            Rating::VeryPoor => "Very poor",
            Rating::Unclassified => "Unclassified",
            Rating::NoRatingAvailable => "No rating available",
        }
    }

    /// Position on the performance scale, 6 = Excellent .. 0 = Very poor
    ///
    /// `None` for outcomes that are not a band.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Rating::Excellent => Some(6),
            Rating::Good => Some(5),
            Rating::AboveAverage => Some(4),
            Rating::Average => Some(3),
            Rating::BelowAverage => Some(2),
            Rating::Poor => Some(1),
            Rating::VeryPoor => Some(0),
            Rating::Unclassified | Rating::NoRatingAvailable => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Norms for one age bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingGroup {
    /// Inclusive age range; the last row is open-ended
    pub age_range: (f64, f64),
    /// Values strictly above this are Excellent
    pub excellent: f64,
    pub good: (f64, f64),
    pub above_average: (f64, f64),
    pub average: (f64, f64),
    pub below_average: (f64, f64),
    pub poor: (f64, f64),
    /// Values strictly below this are Very poor
    pub very_poor: f64,
}

impl RatingGroup {
    pub fn contains_age(&self, age: f64) -> bool {
        age >= self.age_range.0 && age <= self.age_range.1
    }

    /// Classify a value against this row's bands
    pub fn classify(&self, vo2: f64) -> Rating {
        let within = |(lo, hi): (f64, f64)| vo2 >= lo && vo2 <= hi;

        if vo2 > self.excellent {
            Rating::Excellent
        } else if within(self.good) {
            Rating::Good
        } else if within(self.above_average) {
            Rating::AboveAverage
        } else if within(self.average) {
            Rating::Average
        } else if within(self.below_average) {
            Rating::BelowAverage
        } else if within(self.poor) {
            Rating::Poor
        } else if vo2 < self.very_poor {
            Rating::VeryPoor
        } else {
            Rating::Unclassified
        }
    }
}

const fn row(
    age_range: (f64, f64),
    excellent: f64,
    good: (f64, f64),
    above_average: (f64, f64),
    average: (f64, f64),
    below_average: (f64, f64),
    poor: (f64, f64),
    very_poor: f64,
) -> RatingGroup {
    RatingGroup {
        age_range,
        excellent,
        good,
        above_average,
        average,
        below_average,
        poor,
        very_poor,
    }
}

const OPEN: f64 = f64::INFINITY;

static MEN: [RatingGroup; 6] = [
    row((18.0, 25.0), 60.0, (52.0, 60.0), (47.0, 51.0), (42.0, 46.0), (37.0, 41.0), (30.0, 36.0), 30.0),
    row((26.0, 35.0), 56.0, (49.0, 56.0), (43.0, 48.0), (40.0, 42.0), (35.0, 39.0), (30.0, 34.0), 30.0),
    row((36.0, 45.0), 51.0, (43.0, 51.0), (39.0, 42.0), (35.0, 38.0), (31.0, 34.0), (26.0, 30.0), 26.0),
    row((46.0, 55.0), 45.0, (39.0, 45.0), (36.0, 38.0), (32.0, 35.0), (29.0, 31.0), (25.0, 28.0), 25.0),
    row((56.0, 65.0), 41.0, (36.0, 41.0), (32.0, 35.0), (30.0, 31.0), (26.0, 29.0), (22.0, 25.0), 22.0),
    row((66.0, OPEN), 37.0, (33.0, 37.0), (29.0, 32.0), (26.0, 28.0), (22.0, 25.0), (20.0, 21.0), 20.0),
];

static WOMEN: [RatingGroup; 6] = [
    row((18.0, 25.0), 56.0, (47.0, 56.0), (42.0, 46.0), (38.0, 41.0), (33.0, 37.0), (28.0, 32.0), 28.0),
    row((26.0, 35.0), 52.0, (45.0, 52.0), (39.0, 44.0), (35.0, 38.0), (31.0, 34.0), (26.0, 30.0), 26.0),
    row((36.0, 45.0), 45.0, (38.0, 45.0), (34.0, 37.0), (31.0, 33.0), (27.0, 30.0), (22.0, 26.0), 22.0),
    row((46.0, 55.0), 40.0, (34.0, 40.0), (31.0, 33.0), (28.0, 30.0), (25.0, 27.0), (20.0, 24.0), 20.0),
    row((56.0, 65.0), 37.0, (32.0, 37.0), (28.0, 31.0), (25.0, 27.0), (22.0, 24.0), (18.0, 21.0), 18.0),
    row((66.0, OPEN), 32.0, (28.0, 32.0), (25.0, 27.0), (22.0, 24.0), (19.0, 21.0), (17.0, 18.0), 17.0),
];

/// Rating table for a gender
pub fn rating_groups(gender: Gender) -> &'static [RatingGroup] {
    match gender {
        Gender::Male => &MEN,
        Gender::Female => &WOMEN,
    }
}

/// Age row for a gender, if the age is covered
pub fn find_group(gender: Gender, age: f64) -> Option<&'static RatingGroup> {
    rating_groups(gender).iter().find(|group| group.contains_age(age))
}

/// Rate a relative VO₂max value (ml/kg/min)
pub fn get_rating(gender: Gender, age: f64, vo2: f64) -> Rating {
    match find_group(gender, age) {
        Some(group) => group.classify(vo2),
        None => Rating::NoRatingAvailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Gender::Male, 22.0, 61.0, Rating::Excellent)]
    #[case(Gender::Male, 22.0, 60.0, Rating::Good)]
    #[case(Gender::Male, 22.0, 52.0, Rating::Good)]
    #[case(Gender::Male, 22.0, 51.0, Rating::AboveAverage)]
    #[case(Gender::Male, 30.0, 41.0, Rating::Average)]
    #[case(Gender::Male, 40.0, 33.0, Rating::BelowAverage)]
    #[case(Gender::Male, 50.0, 25.0, Rating::Poor)]
    #[case(Gender::Male, 60.0, 21.9, Rating::VeryPoor)]
    #[case(Gender::Male, 80.0, 38.0, Rating::Excellent)]
    #[case(Gender::Female, 18.0, 56.5, Rating::Excellent)]
    #[case(Gender::Female, 25.0, 28.0, Rating::Poor)]
    #[case(Gender::Female, 35.0, 25.0, Rating::VeryPoor)]
    #[case(Gender::Female, 45.0, 31.0, Rating::Average)]
    #[case(Gender::Female, 70.0, 17.0, Rating::Poor)]
    #[case(Gender::Female, 70.0, 16.9, Rating::VeryPoor)]
    fn test_get_rating(
        #[case] gender: Gender,
        #[case] age: f64,
        #[case] vo2: f64,
        #[case] expected: Rating,
    ) {
        assert_eq!(get_rating(gender, age, vo2), expected);
    }

    #[test]
    fn test_gap_between_bands_is_unclassified() {
        // Men 18-25: Good starts at 52, Above average ends at 51
        assert_eq!(get_rating(Gender::Male, 20.0, 51.5), Rating::Unclassified);
        // Women 56-65: Poor ends at 21, Below average starts at 22
        assert_eq!(get_rating(Gender::Female, 60.0, 21.5), Rating::Unclassified);
    }

    #[test]
    fn test_age_outside_table() {
        assert_eq!(get_rating(Gender::Male, 17.0, 45.0), Rating::NoRatingAvailable);
        // Brackets are inclusive integer ranges, so fractional ages between
        // rows match nothing
        assert_eq!(get_rating(Gender::Female, 25.5, 45.0), Rating::NoRatingAvailable);
        assert_eq!(get_rating(Gender::Male, f64::NAN, 45.0), Rating::NoRatingAvailable);
    }

    #[test]
    fn test_nan_value_is_unclassified() {
        assert_eq!(get_rating(Gender::Male, 30.0, f64::NAN), Rating::Unclassified);
    }

    #[test]
    fn test_open_ended_last_bracket() {
        assert!(find_group(Gender::Male, 120.0).is_some());
        assert!(find_group(Gender::Female, 66.0).is_some());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Rating::AboveAverage.to_string(), "Above average");
        assert_eq!(Rating::NoRatingAvailable.to_string(), "No rating available");
        assert_eq!(serde_json::to_string(&Rating::VeryPoor).unwrap(), "\"very_poor\"");
    }

    #[test]
    fn test_tables_are_ordered() {
        for gender in [Gender::Male, Gender::Female] {
            let groups = rating_groups(gender);
            assert_eq!(groups.len(), 6);
            for pair in groups.windows(2) {
                assert!(pair[0].age_range.1 < pair[1].age_range.0);
            }
            for g in groups {
                assert!(g.good.1 <= g.excellent);
                assert!(g.above_average.1 < g.good.0);
                assert!(g.average.1 < g.above_average.0);
                assert!(g.below_average.1 < g.average.0);
                assert!(g.poor.1 < g.below_average.0);
                assert!(g.very_poor <= g.poor.0);
            }
        }
    }

    fn any_gender() -> impl Strategy<Value = Gender> {
        prop_oneof![Just(Gender::Male), Just(Gender::Female)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: every whole age from 18 and whole VO₂max gets a band
        #[test]
        fn prop_rating_total_over_whole_values(
            gender in any_gender(),
            age in 18u32..110,
            vo2 in 0u32..100
        ) {
            let rating = get_rating(gender, age as f64, vo2 as f64);
            prop_assert!(rating.rank().is_some(), "{:?} at age {} vo2 {}", rating, age, vo2);
        }

        /// Property: a higher value never gets a lower band
        #[test]
        fn prop_rating_monotonic(
            gender in any_gender(),
            age in 18u32..110,
            lo in 0.0f64..90.0,
            delta in 0.0f64..30.0
        ) {
            let low = get_rating(gender, age as f64, lo).rank();
            let high = get_rating(gender, age as f64, lo + delta).rank();
            if let (Some(low), Some(high)) = (low, high) {
                prop_assert!(high >= low, "rank {} at {} above rank {} at {}", low, lo, high, lo + delta);
            }
        }

        /// Property: ages below the table never rate
        #[test]
        fn prop_minors_unrated(gender in any_gender(), age in 0.0f64..17.99, vo2 in 0.0f64..90.0) {
            prop_assert_eq!(get_rating(gender, age, vo2), Rating::NoRatingAvailable);
        }
    }
}
