use axum::extract::{Multipart, State};
use nutriai_core::domain::nutrition::{
    entities::{AnalysisRequest, NutritionReport},
    ports::NutritionService,
};

use crate::application::http::{
    nutrition::{handlers::analyze_text::NutritionResponse, upload::read_image_upload},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/image",
    tag = "nutrition",
    summary = "Nutritional information from a food photo",
    description = "Accepts a jpg/jpeg/png upload in the `image` multipart field, re-encodes it as JPEG and sends it to the vision model.",
    responses(
        (status = 200, body = NutritionResponse),
        (status = 400, description = "Missing or unreadable image"),
        (status = 413, description = "Upload larger than 10MB"),
        (status = 415, description = "Unsupported image format"),
        (status = 502, description = "The LLM call failed")
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<NutritionResponse>, ApiError> {
    let image = read_image_upload(&mut multipart).await?.normalize().await?;

    let outcome = state.service.analyze(AnalysisRequest::Image(image)).await;

    let report = NutritionReport::try_from(outcome)
        .map_err(|failure| ApiError::BadGateway(failure.display_text()))?;

    Ok(Response::OK(NutritionResponse { data: report }))
}
