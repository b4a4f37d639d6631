use axum::extract::State;
use nutriai_core::domain::nutrition::{
    entities::{AnalysisRequest, NutritionReport, TextRequest},
    ports::NutritionService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionResponse {
    pub data: NutritionReport,
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "nutrition",
    summary = "Nutritional information from a text description",
    description = "Sends the description and the instruction template to the text model and returns its markdown answer.",
    responses(
        (status = 200, body = NutritionResponse),
        (status = 400, description = "Blank description"),
        (status = 502, description = "The LLM call failed")
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<NutritionResponse>, ApiError> {
    let request = TextRequest::new(payload.description)?;

    let outcome = state.service.analyze(AnalysisRequest::Text(request)).await;

    let report = NutritionReport::try_from(outcome)
        .map_err(|failure| ApiError::BadGateway(failure.display_text()))?;

    Ok(Response::OK(NutritionResponse { data: report }))
}
