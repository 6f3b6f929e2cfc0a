//! Nutrition service - food tracker summaries

use physiolab_shared::errors::CalcError;
use physiolab_shared::nutrition::RDA_VALUES;
use physiolab_shared::types::{NutritionSummaryRequest, NutritionSummaryResponse, RdaEntry};
use tracing::debug;

/// Nutrition service
pub struct NutritionService;

impl NutritionService {
    /// The RDA table in display order
    pub fn rda_table() -> Vec<RdaEntry> {
        RDA_VALUES
            .iter()
            .map(|(nutrient, rda)| RdaEntry {
                nutrient: nutrient.to_string(),
                rda: *rda,
            })
            .collect()
    }

    /// Summarize a day's tracked foods
    pub fn summarize(req: &NutritionSummaryRequest) -> Result<NutritionSummaryResponse, CalcError> {
        let summary = req.summarize()?;

        debug!(
            items = summary.item_count,
            nutrients = summary.totals.len(),
            calories = summary.total_calories,
            "Nutrition summary computed"
        );

        Ok(summary)
    }
}
