use minijinja::Environment;
use nutriai_core::domain::nutrition::entities::{AnalysisOutcome, InputType};
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};
use serde::Serialize;

use crate::application::http::server::api_entities::api_error::ApiError;

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");

pub const EMPTY_DESCRIPTION_WARNING: &str = "Please enter a food description.";

/// Which set of controls the form page shows. Only one is live at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Image,
    Text,
}

impl InputMode {
    /// Unknown or missing values fall back to image mode.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(mode) if mode.eq_ignore_ascii_case("text") => InputMode::Text,
            _ => InputMode::Image,
        }
    }
}

impl From<InputType> for InputMode {
    fn from(input_type: InputType) -> Self {
        match input_type {
            InputType::Image => InputMode::Image,
            InputType::Text => InputMode::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Warning(String),
    Error(String),
}

/// Everything the form template needs for one render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageView {
    pub root_path: String,
    pub mode: InputMode,
    pub description: String,
    pub preview_data_uri: Option<String>,
    pub notice: Option<Notice>,
    pub output_html: Option<String>,
}

impl PageView {
    pub fn new(root_path: &str, mode: InputMode) -> Self {
        Self {
            root_path: root_path.to_string(),
            mode,
            ..Default::default()
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn with_preview(mut self, data_uri: String) -> Self {
        self.preview_data_uri = Some(data_uri);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_outcome(mut self, outcome: &AnalysisOutcome) -> Self {
        let markdown = format!("**Nutritional Information:**\n{}", outcome.display_text());
        self.mode = outcome.input_type().into();
        self.output_html = Some(render_markdown(&markdown));
        self
    }
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;

        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> Result<String, ApiError> {
        self.env
            .get_template("index.html")
            .and_then(|template| template.render(view))
            .map_err(|e| {
                tracing::error!("Failed to render page: {}", e);
                ApiError::InternalServerError("Failed to render page".to_string())
            })
    }
}

/// Relative targets and http(s)/data URLs. Browsers drop whitespace and
/// control characters inside a scheme, so they are dropped before comparing.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    match cleaned.split_once(':') {
        Some((scheme, _)) if !scheme.contains(['/', '?', '#']) => matches!(
            scheme.to_ascii_lowercase().as_str(),
            "http" | "https" | "data"
        ),
        _ => true,
    }
}

/// Markdown to HTML. Raw HTML coming from the model is rendered as text and
/// link or image targets with any other scheme are replaced by `#`.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
