use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AnalysisOutcome, InputType};

/// Successful analysis as exposed by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionReport {
    pub input_type: InputType,
    pub markdown: String,
    pub analyzed_at: DateTime<Utc>,
}

impl NutritionReport {
    pub fn new(input_type: InputType, markdown: String) -> Self {
        Self {
            input_type,
            markdown,
            analyzed_at: Utc::now(),
        }
    }
}

impl TryFrom<AnalysisOutcome> for NutritionReport {
    type Error = AnalysisOutcome;

    fn try_from(outcome: AnalysisOutcome) -> Result<Self, Self::Error> {
        match outcome {
            AnalysisOutcome::Success {
                input_type,
                markdown,
            } => Ok(NutritionReport::new(input_type, markdown)),
            failure => Err(failure),
        }
    }
}
