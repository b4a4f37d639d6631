use clap::Parser;
use nutriai_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, NutriAiConfig,
    entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriai", version, about = "Instant nutritional information from a food photo or description")]
pub struct Args {
    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "google-api-key", env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    #[arg(long = "vision-model", env = "GEMINI_VISION_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub vision_model: String,

    #[arg(long = "text-model", env = "GEMINI_TEXT_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub text_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8501)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8501"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl TryFrom<&Args> for NutriAiConfig {
    type Error = CoreError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let api_key = args
            .llm
            .google_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(CoreError::MissingCredential)?;

        Ok(NutriAiConfig {
            llm: LLMConfig {
                gemini_api_key: api_key.to_string(),
                gemini_base_url: args.llm.gemini_base_url.clone(),
                vision_model: args.llm.vision_model.clone(),
                text_model: args.llm.text_model.clone(),
            },
        })
    }
}
