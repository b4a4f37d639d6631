use axum::{Form, extract::State, response::Html};
use nutriai_core::domain::nutrition::{
    entities::{AnalysisRequest, TextRequest},
    ports::NutritionService,
};
use tracing::{debug, info};

use crate::application::http::{
    nutrition::{
        page::{EMPTY_DESCRIPTION_WARNING, InputMode, Notice, PageView},
        validators::TextForm,
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

pub async fn submit_text(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> Result<Html<String>, ApiError> {
    let view = PageView::new(&state.args.server.root_path, InputMode::Text)
        .with_description(form.description.clone());

    let Ok(request) = TextRequest::new(form.description) else {
        debug!("Blank food description submitted");
        let page = state
            .pages
            .render(&view.with_notice(Notice::Warning(EMPTY_DESCRIPTION_WARNING.to_string())))?;
        return Ok(Html(page));
    };

    info!("Analyzing text description");

    let outcome = state.service.analyze(AnalysisRequest::Text(request)).await;

    state.pages.render(&view.with_outcome(&outcome)).map(Html)
}
