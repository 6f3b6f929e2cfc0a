//! VO₂max test registry
//!
//! A static, ordered list of every supported test. Each definition declares
//! the form fields it reads and a compute adapter that parses those fields
//! and calls the matching equation in [`super::formulas`]. An adapter returns
//! `None` as soon as a required numeric field is missing or unparseable.

use super::formulas;
use super::rating::{get_rating, Rating};
use crate::errors::CalcError;
use crate::inputs::InputValues;
use crate::units::Vo2Unit;
use crate::validation::invalid_fields;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Registry Types
// ============================================================================

/// Test category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Field,
    Cycle,
    Treadmill,
    #[serde(rename = "nonexercise")]
    NonExercise,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Field,
        Category::Cycle,
        Category::Treadmill,
        Category::NonExercise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Field => "field",
            Category::Cycle => "cycle",
            Category::Treadmill => "treadmill",
            Category::NonExercise => "nonexercise",
        }
    }

    /// Get a human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Field => "Field Tests",
            Category::Cycle => "Cycle Tests",
            Category::Treadmill => "Treadmill Tests",
            Category::NonExercise => "Non-Exercise Tests",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "field" => Ok(Category::Field),
            "cycle" => Ok(Category::Cycle),
            "treadmill" => Ok(Category::Treadmill),
            "nonexercise" | "non-exercise" | "non_exercise" => Ok(Category::NonExercise),
            _ => Err(format!("Unknown test category: {}", s)),
        }
    }
}

/// Profile fields shared between tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommonField {
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "weight")]
    Weight,
    #[serde(rename = "gender")]
    Gender,
    #[serde(rename = "height")]
    Height,
    #[serde(rename = "paRating")]
    PaRating,
}

impl CommonField {
    /// Input key
    pub fn key(&self) -> &'static str {
        match self {
            CommonField::Age => "age",
            CommonField::Weight => "weight",
            CommonField::Gender => "gender",
            CommonField::Height => "height",
            CommonField::PaRating => "paRating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommonField::Age => "Age (years)",
            CommonField::Weight => "Weight (kg)",
            CommonField::Gender => "Gender",
            CommonField::Height => "Height (m)",
            CommonField::PaRating => "Physical Activity Rating (0-7)",
        }
    }

    /// Gender is a selection; everything else is a number
    pub fn is_numeric(&self) -> bool {
        !matches!(self, CommonField::Gender)
    }
}

/// Test-specific numeric input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdditionalField {
    pub key: &'static str,
    pub label: &'static str,
}

/// Kind of form control a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Select,
}

/// A field as presented on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Compute adapter: raw inputs to a VO₂ estimate
pub type ComputeFn = fn(&InputValues) -> Option<f64>;

/// A VO₂max test and how to compute it
#[derive(Clone, Copy, Serialize)]
pub struct TestDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub formula_text: &'static str,
    pub required_common: &'static [CommonField],
    pub additional_fields: &'static [AdditionalField],
    pub unit: Vo2Unit,
    #[serde(skip)]
    pub compute: ComputeFn,
}

/// A computed estimate with its rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub test_id: String,
    pub value: f64,
    pub unit: Vo2Unit,
    /// Present when an age was supplied and the unit has published norms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Evaluation {
    /// Value rounded for display
    ///
    /// Ties round away from zero on the exact binary value, so `10.625`
    /// shows as `10.63` at two places.
    pub fn formatted(&self, decimals: usize) -> String {
        match (Decimal::from_f64_retain(self.value), u32::try_from(decimals)) {
            (Some(exact), Ok(dp)) => {
                let rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
                format!("{:.*}", decimals, rounded)
            }
            _ => format!("{:.*}", decimals, self.value),
        }
    }
}

impl fmt::Debug for TestDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDefinition")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}

impl TestDefinition {
    /// Compute the estimate, `None` if a required input is missing or invalid
    pub fn compute(&self, inputs: &InputValues) -> Option<f64> {
        (self.compute)(inputs)
    }

    /// Compute and, when an age is given, rate the estimate
    pub fn evaluate(&self, inputs: &InputValues) -> Option<Evaluation> {
        let value = self.compute(inputs)?;
        let rating = match inputs.number("age") {
            Some(age) if self.unit.is_ratable() => Some(get_rating(inputs.gender(), age, value)),
            _ => None,
        };

        Some(Evaluation {
            test_id: self.id.to_string(),
            value,
            unit: self.unit,
            rating,
        })
    }

    /// Evaluate, reporting why no usable estimate came out
    ///
    /// Fails with the offending fields when a required input does not parse,
    /// and with [`CalcError::NonFiniteResult`] when the inputs drive the
    /// formula to an infinite or NaN value (a zero weight, for example).
    pub fn evaluate_checked(&self, inputs: &InputValues) -> Result<Evaluation, CalcError> {
        let evaluation = self.evaluate(inputs).ok_or_else(|| CalcError::InvalidInputs {
            test_id: self.id.to_string(),
            fields: invalid_fields(self, inputs),
        })?;

        if !evaluation.value.is_finite() {
            return Err(CalcError::NonFiniteResult(self.id.to_string()));
        }

        Ok(evaluation)
    }

    /// Form fields in display order: common fields, then test-specific ones
    pub fn input_fields(&self) -> Vec<InputField> {
        let common = self.required_common.iter().map(|field| InputField {
            key: field.key(),
            label: field.label(),
            kind: if field.is_numeric() {
                FieldKind::Number
            } else {
                FieldKind::Select
            },
        });
        let additional = self.additional_fields.iter().map(|field| InputField {
            key: field.key,
            label: field.label,
            kind: FieldKind::Number,
        });
        common.chain(additional).collect()
    }

    /// Keys of every numeric field the test reads
    pub fn numeric_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required_common
            .iter()
            .filter(|field| field.is_numeric())
            .map(|field| field.key())
            .chain(self.additional_fields.iter().map(|field| field.key))
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// All tests in registry order
pub fn test_definitions() -> &'static [TestDefinition] {
    TEST_DEFINITIONS
}

pub fn find_test(id: &str) -> Option<&'static TestDefinition> {
    TEST_DEFINITIONS.iter().find(|test| test.id == id)
}

/// Tests of one category, in registry order
///
/// The first entry is the default selection for the category.
pub fn tests_in_category(category: Category) -> impl Iterator<Item = &'static TestDefinition> {
    TEST_DEFINITIONS
        .iter()
        .filter(move |test| test.category == category)
}

pub fn default_test(category: Category) -> Option<&'static TestDefinition> {
    tests_in_category(category).next()
}

// ============================================================================
// Compute Adapters
// ============================================================================

fn compute_run_1_5(inputs: &InputValues) -> Option<f64> {
    let weight = inputs.number("weight")?;
    let run_time = inputs.number("runTime")?;
    Some(formulas::run_1_5_mile(inputs.gender(), weight, run_time))
}

fn compute_rockport(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let weight = inputs.number("weight")?;
    let walk_time = inputs.number("walkTime")?;
    let ending_hr = inputs.number("endingHR")?;
    Some(formulas::rockport_walk(age, weight, inputs.gender(), walk_time, ending_hr))
}

fn compute_queens_step(inputs: &InputValues) -> Option<f64> {
    let recovery_hr = inputs.number("recoveryHR")?;
    Some(formulas::queens_college_step(inputs.gender(), recovery_hr))
}

fn compute_12min_run(inputs: &InputValues) -> Option<f64> {
    inputs.number("distance").map(formulas::twelve_minute_run)
}

fn compute_20m_shuttle(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let speed = inputs.number("shuttleSpeed")?;
    Some(formulas::shuttle_20m(age, speed))
}

fn compute_selfpaced_walk(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let speed = inputs.number("speed")?;
    let hr = inputs.number("HR")?;
    Some(formulas::self_paced_walk(age, inputs.gender(), speed, hr))
}

fn compute_modified_shuttle(inputs: &InputValues) -> Option<f64> {
    let weight = inputs.number("weight")?;
    let distance = inputs.number("DW")?;
    Some(formulas::modified_shuttle_walk(weight, inputs.gender(), distance))
}

fn compute_6min_walk(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    Some(formulas::six_minute_walk(age, inputs.gender()))
}

fn compute_yo_yo(inputs: &InputValues) -> Option<f64> {
    inputs.number("yoYoMileage").map(formulas::intermittent_mileage)
}

fn compute_hoff(inputs: &InputValues) -> Option<f64> {
    inputs.number("hoffMileage").map(formulas::intermittent_mileage)
}

fn compute_foote_val(inputs: &InputValues) -> Option<f64> {
    inputs.number("footeScore").map(formulas::foote_val)
}

fn compute_storer_cycle(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let weight = inputs.number("weight")?;
    let watts = inputs.number("watts")?;
    Some(formulas::storer_cycle(age, weight, inputs.gender(), watts))
}

fn compute_ymca_cycle(inputs: &InputValues) -> Option<f64> {
    let weight = inputs.number("weight")?;
    let peak_watts = inputs.number("W_peak")?;
    Some(formulas::ymca_cycle(weight, peak_watts))
}

fn compute_milfit(inputs: &InputValues) -> Option<f64> {
    let weight = inputs.number("weight")?;
    let watts = inputs.number("watts")?;
    Some(formulas::milfit_cycle(weight, watts))
}

fn compute_acsm_running(inputs: &InputValues) -> Option<f64> {
    let speed = inputs.number("speed")?;
    let grade = inputs.number("grade")?;
    Some(formulas::acsm_running(speed, grade))
}

fn compute_acsm_walking(inputs: &InputValues) -> Option<f64> {
    let speed = inputs.number("speed")?;
    let grade = inputs.number("grade")?;
    Some(formulas::acsm_walking(speed, grade))
}

fn compute_ebbeling(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let speed = inputs.number("speed")?;
    let hr = inputs.number("HR")?;
    Some(formulas::ebbeling_walk(age, inputs.gender(), speed, hr))
}

fn compute_friend(inputs: &InputValues) -> Option<f64> {
    let speed = inputs.number("speed")?;
    let grade = inputs.number("grade")?;
    Some(formulas::friend_treadmill(speed, grade))
}

fn compute_wasserman(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let weight = inputs.number("weight")?;
    Some(formulas::wasserman(age, weight, inputs.gender()))
}

fn compute_nasa(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let weight = inputs.number("weight")?;
    let height = inputs.number("height")?;
    let pa_rating = inputs.number("paRating")?;
    Some(formulas::nasa_par(age, weight, height, inputs.gender(), pa_rating))
}

fn compute_jackson_nonex(inputs: &InputValues) -> Option<f64> {
    let age = inputs.number("age")?;
    let weight = inputs.number("weight")?;
    let height = inputs.number("height")?;
    let pa_rating = inputs.number("paRating")?;
    Some(formulas::jackson_non_exercise(age, weight, height, inputs.gender(), pa_rating))
}

fn compute_george_nonex(inputs: &InputValues) -> Option<f64> {
    let weight = inputs.number("weight")?;
    let height = inputs.number("height")?;
    let pa_rating = inputs.number("paRating")?;
    let pfa = inputs.number("pfa")?;
    Some(formulas::george_non_exercise(weight, height, inputs.gender(), pfa, pa_rating))
}

// ============================================================================
// Definitions
// ============================================================================

use self::CommonField::{Age, Gender as Sex, Height, PaRating, Weight};

const SPEED_MPH: AdditionalField = AdditionalField { key: "speed", label: "Speed (mph)" };
const SPEED_M_MIN: AdditionalField = AdditionalField { key: "speed", label: "Speed (m/min)" };
const HEART_RATE: AdditionalField = AdditionalField { key: "HR", label: "Heart Rate (bpm)" };
const GRADE: AdditionalField = AdditionalField { key: "grade", label: "Grade (decimal)" };
const MAX_WATTS: AdditionalField = AdditionalField { key: "watts", label: "Max Workload (watts)" };

static TEST_DEFINITIONS: &[TestDefinition] = &[
    // ─── Field ───────────────────────────────────────────────
    TestDefinition {
        id: "run1_5",
        label: "1.5 Mile Run Test",
        category: Category::Field,
        description: "Run 1.5 miles as fast as possible.",
        formula_text: "VO₂max = 88.02 + (3.716 × gender) – (0.0753 × weight in lbs) – (2.767 × run time [min])",
        required_common: &[Weight, Sex],
        additional_fields: &[AdditionalField { key: "runTime", label: "Run Time (minutes)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_run_1_5,
    },
    TestDefinition {
        id: "rockport",
        label: "1-Mile Walk Test (Rockport)",
        category: Category::Field,
        description: "Walk 1 mile as fast as possible and record your time and ending heart rate.",
        formula_text: "VO₂max = 132.853 – (0.0769 × weight in lbs) – (0.3877 × age) + (6.315 × gender) – (3.2649 × walk time [min]) – (0.1565 × ending HR)",
        required_common: &[Age, Weight, Sex],
        additional_fields: &[
            AdditionalField { key: "walkTime", label: "Walk Time (minutes)" },
            AdditionalField { key: "endingHR", label: "Ending HR (bpm)" },
        ],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_rockport,
    },
    TestDefinition {
        id: "queens_step",
        label: "Queen's College Step Test",
        category: Category::Field,
        description: "Step on a bench for 3 minutes. The recovery heart rate (measured after exercise) is used to estimate VO₂max.",
        formula_text: "For males: VO₂max = 111.33 – (0.42 × recovery HR); For females: VO₂max = 65.81 – (0.1847 × recovery HR)",
        required_common: &[Sex],
        additional_fields: &[AdditionalField { key: "recoveryHR", label: "Recovery HR (bpm)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_queens_step,
    },
    TestDefinition {
        id: "12min_run",
        label: "12-Minute Run Test",
        category: Category::Field,
        description: "Run as far as possible in 12 minutes; record the distance in miles.",
        formula_text: "VO₂max = 35.97 × distance (miles) – 11.29",
        required_common: &[],
        additional_fields: &[AdditionalField { key: "distance", label: "Distance (miles)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_12min_run,
    },
    TestDefinition {
        id: "20m_shuttle",
        label: "20-Meter Shuttle Test",
        category: Category::Field,
        description: "Perform shuttle runs between two lines 20 m apart; record the maximal speed (km/h).",
        formula_text: "VO₂max = 31.025 + (3.248 × speed) – (3.248 × age) + (0.1536 × age × speed)",
        required_common: &[Age],
        additional_fields: &[AdditionalField { key: "shuttleSpeed", label: "Max Speed (km/h)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_20m_shuttle,
    },
    TestDefinition {
        id: "selfpaced_walk",
        label: "Self-Paced Walking Test",
        category: Category::Field,
        description: "Walk at your own pace; record the speed (mph) and heart rate after the test.",
        formula_text: "VO₂max = 15.1 + 21.8 × speed – 0.327 × HR – 0.263 × speed × age + 5.98 × gender + 0.005 × HR × age",
        required_common: &[Age, Sex],
        additional_fields: &[SPEED_MPH, HEART_RATE],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_selfpaced_walk,
    },
    TestDefinition {
        id: "modified_shuttle",
        label: "Modified Shuttle Walking Test",
        category: Category::Field,
        description: "Walk a set distance with increasing pace; record the total distance walked (meters).",
        formula_text: "VO₂max = -0.457 + (0.139 × gender) + (0.025 × weight) + (0.002 × distance walked)",
        required_common: &[Weight, Sex],
        additional_fields: &[AdditionalField { key: "DW", label: "Distance Walked (meters)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_modified_shuttle,
    },
    TestDefinition {
        id: "6min_walk",
        label: "6-Minute Walk Test",
        category: Category::Field,
        description: "Walk as far as possible in 6 minutes.",
        formula_text: "VO₂max = 553.289 – (2.11 × age) + (45.323 × gender)",
        required_common: &[Age, Sex],
        additional_fields: &[],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_6min_walk,
    },
    TestDefinition {
        id: "yo_yo",
        label: "Yo-Yo Intermittent Recovery Test",
        category: Category::Field,
        description: "Perform repeated shuttle runs; record the total mileage (miles).",
        formula_text: "VO₂max = (mileage × 0.0136) + 45.3",
        required_common: &[],
        additional_fields: &[AdditionalField { key: "yoYoMileage", label: "Mileage (miles)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_yo_yo,
    },
    TestDefinition {
        id: "hoff",
        label: "Hoff Test",
        category: Category::Field,
        description: "Run an 8-minute shuttle with obstacles; record the total mileage (miles).",
        formula_text: "VO₂max = (mileage × 0.0136) + 45.3",
        required_common: &[],
        additional_fields: &[AdditionalField { key: "hoffMileage", label: "Mileage (miles)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_hoff,
    },
    TestDefinition {
        id: "foote_val",
        label: "Foote-Val Test",
        category: Category::Field,
        description: "An intermittent incremental test with recovery periods. (Formula not clearly provided; placeholder used.)",
        formula_text: "VO₂max = [Placeholder Formula]",
        required_common: &[],
        additional_fields: &[AdditionalField { key: "footeScore", label: "Test Score" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_foote_val,
    },
    // ─── Cycle ───────────────────────────────────────────────
    TestDefinition {
        id: "storer_cycle",
        label: "Storer Maximal Bicycle Test",
        category: Category::Cycle,
        description: "Cycle with increasing workload. VO₂max is first computed in ml/min and then divided by weight.",
        formula_text: "For males: VO₂max (ml/min) = (10.51 × watts) + (6.35 × weight) – (10.49 × age) + 519.3; For females: (9.39 × watts) + (7.7 × weight) – (5.88 × age) + 136.0; then divide by weight",
        required_common: &[Age, Weight, Sex],
        additional_fields: &[MAX_WATTS],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_storer_cycle,
    },
    TestDefinition {
        id: "ymca_cycle",
        label: "YMCA Sub-maximal Bicycle Test",
        category: Category::Cycle,
        description: "Cycle with sub-maximal workload. Use peak workload (W_peak) to estimate VO₂max.",
        formula_text: "VO₂max = 7 + [1.8 × (6.12 × W_peak) / weight]",
        required_common: &[Weight],
        additional_fields: &[AdditionalField { key: "W_peak", label: "Peak Workload (watts)" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_ymca_cycle,
    },
    TestDefinition {
        id: "milfit",
        label: "Milfit Test",
        category: Category::Cycle,
        description: "Cycle test with increasing workload. VO₂max is estimated from the highest work rate achieved.",
        formula_text: "VO₂max = 12.35 × (watts / weight) + 3.5",
        required_common: &[Weight],
        additional_fields: &[MAX_WATTS],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_milfit,
    },
    // ─── Treadmill ───────────────────────────────────────────
    TestDefinition {
        id: "acsm_running",
        label: "ACSM Running Equation",
        category: Category::Treadmill,
        description: "Estimates oxygen consumption during running based on treadmill speed and grade.",
        formula_text: "VO₂ = 0.2 × speed + 0.9 × speed × grade + 3.5",
        required_common: &[],
        additional_fields: &[SPEED_M_MIN, GRADE],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_acsm_running,
    },
    TestDefinition {
        id: "acsm_walking",
        label: "ACSM Walking Equation",
        category: Category::Treadmill,
        description: "Estimates oxygen consumption during walking on a treadmill.",
        formula_text: "VO₂ = 0.1 × speed + 1.8 × speed × grade + 3.5",
        required_common: &[],
        additional_fields: &[SPEED_M_MIN, GRADE],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_acsm_walking,
    },
    TestDefinition {
        id: "ebbeling",
        label: "Ebbeling Treadmill Walking Test",
        category: Category::Treadmill,
        description: "Estimates VO₂max from treadmill walking parameters along with age and gender.",
        formula_text: "VO₂max = 15.1 + 21.8 × speed – 0.327 × HR – 0.263 × speed × age + 0.005 × HR × age + 5.981 × gender",
        required_common: &[Age, Sex],
        additional_fields: &[SPEED_MPH, HEART_RATE],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_ebbeling,
    },
    TestDefinition {
        id: "friend",
        label: "FRIEND Equation",
        category: Category::Treadmill,
        description: "Estimates VO₂max based on treadmill speed and grade.",
        formula_text: "VO₂max = speed × (0.17 + grade × 0.79) + 3.5",
        required_common: &[],
        additional_fields: &[SPEED_M_MIN, GRADE],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_friend,
    },
    // ─── Non-exercise ────────────────────────────────────────
    TestDefinition {
        id: "wasserman",
        label: "Wasserman's Equation",
        category: Category::NonExercise,
        description: "Estimates VO₂max (in L/min) from age and weight.",
        formula_text: "For males: VO₂max = [weight × (50.72 - 0.372 × age)]/1000; For females: VO₂max = [(weight + 42.8) × (22.78 - 0.17 × age)]/1000",
        required_common: &[Age, Weight],
        additional_fields: &[],
        unit: Vo2Unit::LitersPerMin,
        compute: compute_wasserman,
    },
    TestDefinition {
        id: "nasa",
        label: "NASA/Johnson PA-R Test",
        category: Category::NonExercise,
        description: "Estimates VO₂max based on age, weight, height, and physical activity rating (PAR).",
        formula_text: "For males: VO₂max = 67.350 - 0.381×age - 0.754×BMI + 1.951×PAR; For females: VO₂max = 56.363 - 0.381×age - 0.754×BMI + 1.951×PAR, where BMI = weight/(height²)",
        required_common: &[Age, Weight, Sex, Height, PaRating],
        additional_fields: &[],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_nasa,
    },
    TestDefinition {
        id: "jackson_nonex",
        label: "Jackson Non-Exercise Test",
        category: Category::NonExercise,
        description: "Estimates VO₂max based on demographics and a physical activity rating.",
        formula_text: "VO₂max = 56.363 + 1.921×PAR - 0.381×age - 0.754×BMI + 10.987×gender, where BMI = weight/(height²)",
        required_common: &[Age, Weight, Sex, Height, PaRating],
        additional_fields: &[],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_jackson_nonex,
    },
    TestDefinition {
        id: "george_nonex",
        label: "George Non-Exercise Test",
        category: Category::NonExercise,
        description: "Estimates VO₂max based on demographics, perceived functional ability (PFA), and physical activity rating.",
        formula_text: "VO₂max = 45.513 + 6.564×gender - 0.749×BMI + 0.724×PFA + 0.788×PAR, where BMI = weight/(height²)",
        required_common: &[Weight, Sex, Height, PaRating],
        additional_fields: &[AdditionalField { key: "pfa", label: "Perceived Functional Ability" }],
        unit: Vo2Unit::MlPerKgPerMin,
        compute: compute_george_nonex,
    },
];
