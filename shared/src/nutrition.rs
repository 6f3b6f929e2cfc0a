//! Food tracker arithmetic
//!
//! Nutrient amounts on a tracked food are per portion unit and scale with
//! the portion count. A portion of zero (or one that is not a number) counts
//! as a single portion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const ENERGY_KCAL: &str = "energy_kcal";
pub const PROTEIN_G: &str = "protein_g";
pub const CARBOHYDRATE_G: &str = "carbohydrate_g";
pub const TOTAL_FAT_G: &str = "total_fat_g";

/// Nutrients selected when a tracker opens
pub const DEFAULT_NUTRIENTS: [&str; 4] = [PROTEIN_G, CARBOHYDRATE_G, TOTAL_FAT_G, "vit_c_mg"];

/// Recommended daily allowances, keyed like the food database columns
pub const RDA_VALUES: &[(&str, f64)] = &[
    (PROTEIN_G, 50.0),
    (CARBOHYDRATE_G, 130.0),
    (TOTAL_FAT_G, 70.0),
    ("vit_c_mg", 90.0),
    ("calcium_mg", 1000.0),
    ("iron_mg", 18.0),
    ("vit_a_mcug_ug", 900.0),
    ("vit_d_mcug", 20.0),
    ("vit_e_mg", 15.0),
    ("vit_k_mcug", 120.0),
    ("thiamin_mg", 1.2),
    ("riboflavin_mg", 1.3),
    ("niacin_mg", 16.0),
    ("vit_b6_mg", 1.3),
    ("vit_b5_mg", 5.0),
    ("vit_b12_mcug", 2.4),
    ("folate_total_mcug", 400.0),
    ("choline_mg", 550.0),
    ("magnesium_mg", 420.0),
    ("potassium_mg", 4700.0),
];

/// RDA for a nutrient key
pub fn rda(key: &str) -> Option<f64> {
    RDA_VALUES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
}

// ============================================================================
// Tracked Foods
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food added to the day's log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedFood {
    pub id: i64,
    pub name: String,
    #[serde(default = "one")]
    pub portion: f64,
    #[serde(default)]
    pub meal_type: MealType,
    /// Nutrient amounts for one portion
    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
}

fn one() -> f64 {
    1.0
}

impl TrackedFood {
    /// Multiplier applied to per-portion amounts
    pub fn portion_factor(&self) -> f64 {
        if self.portion == 0.0 || self.portion.is_nan() {
            1.0
        } else {
            self.portion
        }
    }

    /// Per-portion amount of a nutrient, 0 when unknown
    pub fn amount(&self, key: &str) -> f64 {
        self.nutrients.get(key).copied().unwrap_or(0.0)
    }

    /// Portion-scaled amount of a nutrient
    pub fn scaled(&self, key: &str) -> f64 {
        self.amount(key) * self.portion_factor()
    }

    /// Energy in kcal
    ///
    /// Uses the recorded energy when present and non-zero, otherwise
    /// estimates it from macronutrients at 4/4/9 kcal per gram.
    pub fn calories(&self) -> f64 {
        let energy = self.amount(ENERGY_KCAL);
        if energy != 0.0 && !energy.is_nan() {
            return energy * self.portion_factor();
        }
        (self.amount(PROTEIN_G) * 4.0 + self.amount(CARBOHYDRATE_G) * 4.0 + self.amount(TOTAL_FAT_G) * 9.0)
            * self.portion_factor()
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Grams of each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Progress towards a nutrient's RDA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RdaProgress {
    pub nutrient: String,
    pub consumed: f64,
    pub rda: f64,
    /// Percent of RDA, capped at 100
    pub percent: f64,
}

pub fn total_calories(items: &[TrackedFood]) -> f64 {
    items.iter().map(TrackedFood::calories).sum()
}

/// Portion-scaled totals for the requested nutrient keys
pub fn nutrient_totals<S: AsRef<str>>(items: &[TrackedFood], keys: &[S]) -> BTreeMap<String, f64> {
    keys.iter()
        .map(|key| {
            let key: &str = key.as_ref();
            let total: f64 = items.iter().map(|item| item.scaled(key)).sum();
            (key.to_string(), total)
        })
        .collect()
}

/// RDA progress for each requested key that has an RDA
///
/// Energy is never reported against an RDA.
pub fn rda_progress<S: AsRef<str>>(totals: &BTreeMap<String, f64>, keys: &[S]) -> Vec<RdaProgress> {
    let mut progress = Vec::new();
    for key in keys {
        let key: &str = key.as_ref();
        if key == ENERGY_KCAL {
            continue;
        }
        let Some(rda) = rda(key) else {
            continue;
        };
        let consumed = totals.get(key).copied().unwrap_or(0.0);
        progress.push(RdaProgress {
            nutrient: key.to_string(),
            consumed,
            rda,
            percent: (consumed / rda * 100.0).min(100.0),
        });
    }
    progress
}

pub fn macro_totals(items: &[TrackedFood]) -> MacroTotals {
    items.iter().fold(MacroTotals::default(), |acc, item| MacroTotals {
        protein: acc.protein + item.scaled(PROTEIN_G),
        carbs: acc.carbs + item.scaled(CARBOHYDRATE_G),
        fat: acc.fat + item.scaled(TOTAL_FAT_G),
    })
}

/// Macro totals for every meal, including meals with nothing logged
pub fn macro_totals_by_meal(items: &[TrackedFood]) -> BTreeMap<MealType, MacroTotals> {
    MealType::ALL
        .iter()
        .map(|meal| {
            let meal_items: Vec<TrackedFood> = items
                .iter()
                .filter(|item| item.meal_type == *meal)
                .cloned()
                .collect();
            (*meal, macro_totals(&meal_items))
        })
        .collect()
}
