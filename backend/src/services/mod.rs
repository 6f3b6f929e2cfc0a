//! Business logic services
//!
//! Services wrap the calculator library for the HTTP layer: registry
//! lookup, result formatting and request validation.

pub mod nutrition;
pub mod vo2max;

pub use nutrition::NutritionService;
pub use vo2max::Vo2MaxService;
