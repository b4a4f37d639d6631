use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    analyze_text::{__path_analyze_text, analyze_text},
    index::index,
    submit_image::submit_image,
    submit_text::submit_text,
};
use super::upload::MAX_IMAGE_SIZE;
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_text, analyze_image))]
pub struct NutritionApiDoc;

// Multipart framing adds a little on top of the raw file.
const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE + 64 * 1024;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/", root_path), get(index))
        .route(&format!("{}/analyze/image", root_path), post(submit_image))
        .route(&format!("{}/analyze/text", root_path), post(submit_text))
        .route(
            &format!("{}/api/nutrition/image", root_path),
            post(analyze_image),
        )
        .route(
            &format!("{}/api/nutrition/text", root_path),
            post(analyze_text),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY))
}
