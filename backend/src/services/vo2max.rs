//! VO₂max service - test registry lookup, computation and rating

use physiolab_shared::errors::CalcError;
use physiolab_shared::inputs::{Gender, InputValues};
use physiolab_shared::types::{
    CategoryResponse, ComputeResponse, RatingQuery, RatingResponse, TestSummary,
};
use physiolab_shared::vo2max::{get_rating, Category, TestDefinition};
use tracing::{debug, info};

/// VO₂max service
pub struct Vo2MaxService;

impl Vo2MaxService {
    /// Categories in display order with their test counts
    pub fn categories(tests: &[TestDefinition]) -> Vec<CategoryResponse> {
        Category::ALL
            .iter()
            .map(|&category| {
                let in_category = || tests.iter().filter(move |t| t.category == category);
                let default_test = in_category().next().map(|t| t.id.to_string());
                let test_count = in_category().count();

                CategoryResponse {
                    id: category,
                    name: category.display_name().to_string(),
                    test_count,
                    default_test,
                }
            })
            .collect()
    }

    /// Test summaries in registry order, optionally for one category
    pub fn list_tests(tests: &[TestDefinition], category: Option<Category>) -> Vec<TestSummary> {
        tests
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .map(TestSummary::from)
            .collect()
    }

    /// Look up a test by id
    pub fn find_test<'a>(tests: &'a [TestDefinition], id: &str) -> Result<&'a TestDefinition, CalcError> {
        tests
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CalcError::UnknownTest(id.to_string()))
    }

    /// Compute a test from raw form inputs
    ///
    /// Fails with the offending fields when a required input does not parse,
    /// and when the inputs drive the formula to a non-finite value.
    pub fn compute(
        tests: &[TestDefinition],
        id: &str,
        inputs: &InputValues,
        decimal_places: usize,
    ) -> Result<ComputeResponse, CalcError> {
        let test = Self::find_test(tests, id)?;

        let evaluation = test.evaluate_checked(inputs).map_err(|err| {
            debug!(test_id = %test.id, fields = ?err.fields(), error = %err, "Inputs rejected");
            err
        })?;

        info!(
            test_id = %test.id,
            value = evaluation.value,
            rating = ?evaluation.rating,
            "VO2max computed"
        );

        Ok(ComputeResponse::from_evaluation(evaluation, decimal_places))
    }

    /// Rate a VO₂max value against the age and gender norms
    pub fn rate(query: &RatingQuery) -> RatingResponse {
        let gender = Gender::from_input(query.gender.as_deref());
        let rating = get_rating(gender, query.age, query.vo2max);

        debug!(%gender, age = query.age, vo2max = query.vo2max, ?rating, "Rating looked up");

        RatingResponse {
            gender: gender.as_str().to_string(),
            age: query.age,
            vo2max: query.vo2max,
            rating,
            label: rating.label().to_string(),
        }
    }
}
