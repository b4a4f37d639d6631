use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use base64::{Engine as _, engine::general_purpose};
use nutriai_core::domain::nutrition::{entities::AnalysisRequest, ports::NutritionService};
use tracing::info;

use crate::application::http::{
    nutrition::{
        page::{InputMode, Notice, PageView},
        upload::read_image_upload,
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Form target of the upload picker. The page submits it as soon as a file is
/// chosen, so this always answers with the full page.
pub async fn submit_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let view = PageView::new(&state.args.server.root_path, InputMode::Image);

    let image = match read_image_upload(&mut multipart).await {
        Ok(upload) => upload.normalize().await,
        Err(e) => Err(e),
    };

    let image = match image {
        Ok(image) => image,
        Err(e) => {
            let status = e.status_code();
            let page = state.pages.render(&view.with_notice(Notice::Error(e.to_string())))?;
            return Ok((status, Html(page)));
        }
    };

    info!(size_bytes = image.data.len(), "Analyzing image upload");

    let preview = format!(
        "data:{};base64,{}",
        image.mime_type,
        general_purpose::STANDARD.encode(&image.data)
    );

    let outcome = state.service.analyze(AnalysisRequest::Image(image)).await;

    let page = state
        .pages
        .render(&view.with_preview(preview).with_outcome(&outcome))?;

    Ok((StatusCode::OK, Html(page)))
}
