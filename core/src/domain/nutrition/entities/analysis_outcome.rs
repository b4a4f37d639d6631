use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::InputType;

/// Result of a single inference call.
///
/// Failures keep the raw message; the user-facing sentence is only built when
/// the outcome is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Success {
        input_type: InputType,
        markdown: String,
    },
    Failure {
        input_type: InputType,
        message: String,
    },
}

impl AnalysisOutcome {
    pub fn input_type(&self) -> InputType {
        match self {
            AnalysisOutcome::Success { input_type, .. } => *input_type,
            AnalysisOutcome::Failure { input_type, .. } => *input_type,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success { .. })
    }

    /// Text shown in the output region: the model's markdown, or the error sentence.
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalysisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisOutcome::Success { markdown, .. } => f.write_str(markdown),
            AnalysisOutcome::Failure {
                input_type,
                message,
            } => write!(
                f,
                "Error analyzing {}: {}. Please try again later or check your API quota.",
                input_type, message
            ),
        }
    }
}
