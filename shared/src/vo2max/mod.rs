//! VO₂max calculator suite
//!
//! - [`formulas`]: typed regression equations
//! - [`registry`]: the test catalogue and its string-input adapters
//! - [`rating`]: age and gender banded norms

pub mod formulas;
pub mod rating;
pub mod registry;

pub use rating::{find_group, get_rating, rating_groups, Rating, RatingGroup};
pub use registry::{
    default_test, find_test, test_definitions, tests_in_category, AdditionalField, Category,
    CommonField, Evaluation, FieldKind, InputField, TestDefinition,
};
