use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{AnalysisOutcome, AnalysisRequest, ImageRequest, TextRequest},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `[prompt, image]` to the vision model and returns its text.
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Sends a single prompt to the text model and returns its text.
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for nutrition lookups
pub trait NutritionService: Send + Sync {
    fn describe_from_image(
        &self,
        image: ImageRequest,
        prompt: String,
    ) -> impl Future<Output = AnalysisOutcome> + Send;

    fn describe_from_text(
        &self,
        text: TextRequest,
        prompt_template: String,
    ) -> impl Future<Output = AnalysisOutcome> + Send;

    /// Routes a request to exactly one of the two operations above, using the
    /// configured instruction template.
    fn analyze(&self, request: AnalysisRequest) -> impl Future<Output = AnalysisOutcome> + Send;
}
