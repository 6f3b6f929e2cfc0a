//! PhysioLab Shared Library
//!
//! Domain logic for the PhysioLab calculators: input parsing, the VO₂max
//! test registry and rating norms, food tracker arithmetic and the API
//! types shared by the backend and WASM modules. No I/O happens here.

pub mod errors;
pub mod inputs;
pub mod nutrition;
pub mod types;
pub mod units;
pub mod validation;
pub mod vo2max;

// Re-export commonly used items
pub use errors::*;
pub use inputs::{parse_float, Gender, InputValues};
pub use types::*;
pub use units::*;
pub use vo2max::{
    find_test, get_rating, test_definitions, Category, Evaluation, Rating, TestDefinition,
};
