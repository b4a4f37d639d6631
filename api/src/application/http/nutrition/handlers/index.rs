use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::application::http::{
    nutrition::{
        page::{InputMode, PageView},
        validators::IndexParams,
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>, ApiError> {
    let mode = InputMode::from_query(params.mode.as_deref());
    let view = PageView::new(&state.args.server.root_path, mode);

    state.pages.render(&view).map(Html)
}
