use std::sync::Arc;

use crate::domain::nutrition::{ports::LLMClient, prompt::INSTRUCTION_TEMPLATE};

/// Holds the adapters the domain services run against.
///
/// Service traits (see [`crate::domain::nutrition::ports::NutritionService`]) are
/// implemented on this struct so the api crate only ever handles one value.
#[derive(Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) instruction_template: String,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self::with_template(llm_client, INSTRUCTION_TEMPLATE)
    }

    pub fn with_template(llm_client: LLM, instruction_template: impl Into<String>) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            instruction_template: instruction_template.into(),
        }
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            instruction_template: self.instruction_template.clone(),
        }
    }
}
