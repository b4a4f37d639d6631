use crate::{
    domain::common::{NutriAiConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type NutriAiService = Service<GeminiLLMClient>;

pub fn create_service(config: NutriAiConfig) -> Result<NutriAiService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::MissingCredential);
    }

    tracing::info!(
        vision_model = %config.llm.vision_model,
        text_model = %config.llm.text_model,
        "Initializing Gemini client"
    );

    let llm_client = GeminiLLMClient::new(config.llm);

    Ok(Service::new(llm_client))
}
