use crate::domain::{
    common::services::Service,
    nutrition::{
        entities::{AnalysisOutcome, AnalysisRequest, ImageRequest, InputType, TextRequest},
        ports::{LLMClient, NutritionService},
        prompt::build_text_prompt,
    },
};

impl<LLM> NutritionService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn describe_from_image(&self, image: ImageRequest, prompt: String) -> AnalysisOutcome {
        tracing::debug!(
            mime_type = %image.mime_type,
            size_bytes = image.data.len(),
            "Requesting nutritional info from image"
        );

        match self.llm_client.generate_with_image(prompt, image).await {
            Ok(markdown) => AnalysisOutcome::Success {
                input_type: InputType::Image,
                markdown,
            },
            Err(e) => {
                tracing::warn!("Image analysis failed: {}", e);
                AnalysisOutcome::Failure {
                    input_type: InputType::Image,
                    message: e.to_string(),
                }
            }
        }
    }

    async fn describe_from_text(&self, text: TextRequest, prompt_template: String) -> AnalysisOutcome {
        let full_prompt = build_text_prompt(&prompt_template, text.description());

        tracing::debug!(
            description_len = text.description().len(),
            "Requesting nutritional info from text"
        );

        match self.llm_client.generate_with_text(full_prompt).await {
            Ok(markdown) => AnalysisOutcome::Success {
                input_type: InputType::Text,
                markdown,
            },
            Err(e) => {
                tracing::warn!("Text analysis failed: {}", e);
                AnalysisOutcome::Failure {
                    input_type: InputType::Text,
                    message: e.to_string(),
                }
            }
        }
    }

    async fn analyze(&self, request: AnalysisRequest) -> AnalysisOutcome {
        tracing::info!(input_type = %request.input_type(), "Running nutrition analysis");
        let prompt = self.instruction_template.clone();

        match request {
            AnalysisRequest::Image(image) => self.describe_from_image(image, prompt).await,
            AnalysisRequest::Text(text) => self.describe_from_text(text, prompt).await,
        }
    }
}
