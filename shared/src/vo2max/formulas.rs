//! VO₂max regression equations
//!
//! Typed, closed-form versions of the published field, cycle, treadmill and
//! non-exercise equations. Operands are evaluated in the published order so
//! results are bit-for-bit reproducible.
//!
//! Unless stated otherwise, weight is kg, height is m, age is years and the
//! result is ml/kg/min.

use crate::inputs::Gender;
use crate::units::{bmi, kg_to_lbs};

// ============================================================================
// Field Tests
// ============================================================================

/// 1.5 mile run
///
/// Formula: VO₂max = 88.02 + 3.716 × gender − 0.0753 × weight(lbs) − 2.767 × time(min)
pub fn run_1_5_mile(gender: Gender, weight_kg: f64, run_time_min: f64) -> f64 {
    let weight_lbs = kg_to_lbs(weight_kg);
    88.02 + 3.716 * gender.indicator() - 0.0753 * weight_lbs - 2.767 * run_time_min
}

/// Rockport one-mile walk
///
/// Formula: VO₂max = 132.853 − 0.0769 × weight(lbs) − 0.3877 × age + 6.315 × gender
///          − 3.2649 × time(min) − 0.1565 × HR
pub fn rockport_walk(
    age: f64,
    weight_kg: f64,
    gender: Gender,
    walk_time_min: f64,
    ending_hr: f64,
) -> f64 {
    let weight_lbs = kg_to_lbs(weight_kg);
    132.853 - 0.0769 * weight_lbs - 0.3877 * age + 6.315 * gender.indicator()
        - 3.2649 * walk_time_min
        - 0.1565 * ending_hr
}

/// Queen's College step test, from recovery heart rate
pub fn queens_college_step(gender: Gender, recovery_hr: f64) -> f64 {
    match gender {
        Gender::Male => 111.33 - 0.42 * recovery_hr,
        Gender::Female => 65.81 - 0.1847 * recovery_hr,
    }
}

/// 12-minute run, distance in miles
pub fn twelve_minute_run(distance_miles: f64) -> f64 {
    35.97 * distance_miles - 11.29
}

/// 20 m shuttle, maximal speed in km/h
pub fn shuttle_20m(age: f64, speed_kmh: f64) -> f64 {
    31.025 + 3.248 * speed_kmh - 3.248 * age + 0.1536 * age * speed_kmh
}

/// Self-paced walking test, speed in mph
pub fn self_paced_walk(age: f64, gender: Gender, speed_mph: f64, hr: f64) -> f64 {
    15.1 + 21.8 * speed_mph - 0.327 * hr - 0.263 * speed_mph * age
        + 5.98 * gender.indicator()
        + 0.005 * hr * age
}

/// Modified shuttle walking test, distance walked in meters
pub fn modified_shuttle_walk(weight_kg: f64, gender: Gender, distance_m: f64) -> f64 {
    -0.457 + 0.139 * gender.indicator() + 0.025 * weight_kg + 0.002 * distance_m
}

pub fn six_minute_walk(age: f64, gender: Gender) -> f64 {
    553.289 - 2.11 * age + 45.323 * gender.indicator()
}

/// Intermittent shuttle protocols scored by total mileage (Yo-Yo, Hoff)
///
/// Formula: VO₂max = mileage × 0.0136 + 45.3
pub fn intermittent_mileage(mileage: f64) -> f64 {
    mileage * 0.0136 + 45.3
}

/// Foote-Val test. No published regression; the score is reported as is.
pub fn foote_val(score: f64) -> f64 {
    score
}

// ============================================================================
// Cycle Tests
// ============================================================================

/// Storer maximal bicycle test
///
/// The regression yields ml/min and is divided by body weight.
/// Men:   VO₂ = 10.51 × W + 6.35 × weight − 10.49 × age + 519.3
/// Women: VO₂ = 9.39 × W + 7.7 × weight − 5.88 × age + 136.0
pub fn storer_cycle(age: f64, weight_kg: f64, gender: Gender, watts: f64) -> f64 {
    let vo2_ml_min = match gender {
        Gender::Male => 10.51 * watts + 6.35 * weight_kg - 10.49 * age + 519.3,
        Gender::Female => 9.39 * watts + 7.7 * weight_kg - 5.88 * age + 136.0,
    };
    vo2_ml_min / weight_kg
}

/// YMCA sub-maximal cycle test
///
/// Formula: VO₂max = 7 + 1.8 × 6.12 × W_peak / weight
pub fn ymca_cycle(weight_kg: f64, peak_watts: f64) -> f64 {
    7.0 + (1.8 * 6.12 * peak_watts) / weight_kg
}

pub fn milfit_cycle(weight_kg: f64, watts: f64) -> f64 {
    12.35 * (watts / weight_kg) + 3.5
}

// ============================================================================
// Treadmill Tests
// ============================================================================

/// ACSM running equation, speed in m/min and grade as a decimal
pub fn acsm_running(speed_m_min: f64, grade: f64) -> f64 {
    0.2 * speed_m_min + 0.9 * speed_m_min * grade + 3.5
}

/// ACSM walking equation, speed in m/min and grade as a decimal
pub fn acsm_walking(speed_m_min: f64, grade: f64) -> f64 {
    0.1 * speed_m_min + 1.8 * speed_m_min * grade + 3.5
}

/// Ebbeling treadmill walking test, speed in mph
pub fn ebbeling_walk(age: f64, gender: Gender, speed_mph: f64, hr: f64) -> f64 {
    15.1 + 21.8 * speed_mph - 0.327 * hr - 0.263 * speed_mph * age + 0.005 * hr * age
        + 5.981 * gender.indicator()
}

/// FRIEND registry treadmill equation, speed in m/min and grade as a decimal
pub fn friend_treadmill(speed_m_min: f64, grade: f64) -> f64 {
    speed_m_min * (0.17 + grade * 0.79) + 3.5
}

// ============================================================================
// Non-Exercise Estimates
// ============================================================================

/// Wasserman's equation. Result is absolute uptake in L/min.
pub fn wasserman(age: f64, weight_kg: f64, gender: Gender) -> f64 {
    match gender {
        Gender::Male => (weight_kg * (50.72 - 0.372 * age)) / 1000.0,
        Gender::Female => ((weight_kg + 42.8) * (22.78 - 0.17 * age)) / 1000.0,
    }
}

/// NASA/Johnson physical activity rating model
///
/// Formula: VO₂max = C − 0.381 × age − 0.754 × BMI + 1.951 × PAR
/// where C = 67.350 for men and 56.363 for women
pub fn nasa_par(age: f64, weight_kg: f64, height_m: f64, gender: Gender, pa_rating: f64) -> f64 {
    let bmi = bmi(weight_kg, height_m);
    match gender {
        Gender::Male => 67.350 - 0.381 * age - 0.754 * bmi + 1.951 * pa_rating,
        Gender::Female => 56.363 - 0.381 * age - 0.754 * bmi + 1.951 * pa_rating,
    }
}

pub fn jackson_non_exercise(
    age: f64,
    weight_kg: f64,
    height_m: f64,
    gender: Gender,
    pa_rating: f64,
) -> f64 {
    let bmi = bmi(weight_kg, height_m);
    56.363 + 1.921 * pa_rating - 0.381 * age - 0.754 * bmi + 10.987 * gender.indicator()
}

/// George non-exercise model with perceived functional ability (PFA)
pub fn george_non_exercise(
    weight_kg: f64,
    height_m: f64,
    gender: Gender,
    pfa: f64,
    pa_rating: f64,
) -> f64 {
    let bmi = bmi(weight_kg, height_m);
    45.513 + 6.564 * gender.indicator() - 0.749 * bmi + 0.724 * pfa + 0.788 * pa_rating
}
