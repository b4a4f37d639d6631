use crate::application::http::nutrition::router::NutritionApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriAI API"
    ),
    nest(
        (path = "/api/nutrition", api = NutritionApiDoc),
    )
)]
pub struct ApiDoc;
