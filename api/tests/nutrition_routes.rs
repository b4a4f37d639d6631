use std::io::Cursor;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba};
use mockito::{Matcher, Mock, ServerGuard};
use nutriai_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use nutriai_core::domain::nutrition::prompt::{INSTRUCTION_TEMPLATE, build_text_prompt};
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};

const VISION_PATH: &str = "/v1beta/models/vision-test:generateContent";
const TEXT_PATH: &str = "/v1beta/models/text-test:generateContent";

struct NutriAiContext {
    gemini: ServerGuard,
    server: TestServer,
}

impl AsyncTestContext for NutriAiContext {
    async fn setup() -> Self {
        let gemini = mockito::Server::new_async().await;
        let gemini_url = gemini.url();

        let args = Args::parse_from([
            "nutriai",
            "--google-api-key",
            "test-key",
            "--gemini-base-url",
            gemini_url.as_str(),
            "--vision-model",
            "vision-test",
            "--text-model",
            "text-test",
            "--server-root-path",
            "",
        ]);

        let app_state = state(Arc::new(args)).await.expect("app state");
        let server = TestServer::new(router(app_state).expect("router")).expect("test server");

        Self { gemini, server }
    }
}

impl NutriAiContext {
    async fn mock_model(&mut self, path: &str, hits: usize, status: usize, body: String) -> Mock {
        self.gemini
            .mock("POST", path)
            .match_header("x-goog-api-key", "test-key")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    async fn unused_model(&mut self, path: &str) -> Mock {
        self.mock_model(path, 0, 200, candidate("unused")).await
    }
}

fn candidate(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn png_upload() -> Part {
    let buffer = ImageBuffer::from_pixel(16, 16, Rgba([90u8, 160, 60, 255]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();

    Part::bytes(bytes.into_inner())
        .file_name("plate.png")
        .mime_type("image/png")
}

fn jpeg_bytes() -> Vec<u8> {
    let buffer = ImageBuffer::from_pixel(16, 16, Rgb([210u8, 180, 90]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut bytes, ImageFormat::Jpeg)
        .unwrap();
    bytes.into_inner()
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_index_defaults_to_image_mode(ctx: &mut NutriAiContext) {
    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains(r#"id="image-upload""#));
    assert!(page.contains("this.form.submit()"));
    assert!(!page.contains(r#"id="text-form""#));
    assert!(page.contains("Powered by Google Gemini Generative AI"));
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_text_mode_has_no_upload_auto_trigger(ctx: &mut NutriAiContext) {
    let response = ctx.server.get("/").add_query_param("mode", "text").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains(r#"id="text-form""#));
    assert!(!page.contains(r#"id="image-upload""#));
    assert!(!page.contains("this.form.submit()"));
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_text_api_returns_template_and_input_verbatim(ctx: &mut NutriAiContext) {
    let prompt = build_text_prompt(INSTRUCTION_TEMPLATE, "1 medium apple");

    // The fake model echoes its prompt back.
    let text_model = ctx
        .gemini
        .mock("POST", TEXT_PATH)
        .match_body(Matcher::Json(json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate(&prompt))
        .expect(1)
        .create_async()
        .await;
    let vision_model = ctx.unused_model(VISION_PATH).await;

    let response = ctx
        .server
        .post("/api/nutrition/text")
        .json(&json!({ "description": "1 medium apple" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["input_type"], "text");
    assert_eq!(
        body["data"]["markdown"],
        format!("{}\n\nFood Item: 1 medium apple", INSTRUCTION_TEMPLATE)
    );

    text_model.assert_async().await;
    vision_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_text_form_renders_model_answer(ctx: &mut NutriAiContext) {
    let text_model = ctx
        .mock_model(TEXT_PATH, 1, 200, candidate("- **Estimated Calories:** 95"))
        .await;

    let response = ctx
        .server
        .post("/analyze/text")
        .form(&[("description", "1 medium apple")])
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("<strong>Nutritional Information:</strong>"));
    assert!(page.contains("<strong>Estimated Calories:</strong> 95"));
    assert!(page.contains("1 medium apple</textarea>"));

    text_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_blank_text_never_calls_the_model(ctx: &mut NutriAiContext) {
    let text_model = ctx.unused_model(TEXT_PATH).await;
    let vision_model = ctx.unused_model(VISION_PATH).await;

    let response = ctx
        .server
        .post("/analyze/text")
        .form(&[("description", "   \n\t")])
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Please enter a food description."));
    assert!(!page.contains("Nutritional Information:"));

    let response = ctx
        .server
        .post("/api/nutrition/text")
        .json(&json!({ "description": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Please enter a food description.");

    text_model.assert_async().await;
    vision_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_image_upload_calls_vision_model_once(ctx: &mut NutriAiContext) {
    let vision_model = ctx
        .gemini
        .mock("POST", VISION_PATH)
        .match_body(Matcher::Regex(r#""mime_type":"image/jpeg""#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate("**Food Item Identified:** green salad"))
        .expect(1)
        .create_async()
        .await;
    let text_model = ctx.unused_model(TEXT_PATH).await;

    let response = ctx
        .server
        .post("/analyze/image")
        .multipart(MultipartForm::new().add_part("image", png_upload()))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("<strong>Food Item Identified:</strong> green salad"));
    assert!(page.contains("data:image/jpeg;base64,"));
    assert!(page.contains("<figcaption>Uploaded Image</figcaption>"));

    vision_model.assert_async().await;
    text_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_jpeg_upload_is_analyzed(ctx: &mut NutriAiContext) {
    let vision_model = ctx
        .gemini
        .mock("POST", VISION_PATH)
        .match_body(Matcher::Regex(r#""mime_type":"image/jpeg""#.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate("**Food Item Identified:** pancakes"))
        .expect(2)
        .create_async()
        .await;

    let jpeg = Part::bytes(jpeg_bytes())
        .file_name("plate.jpg")
        .mime_type("image/jpeg");

    let response = ctx
        .server
        .post("/api/nutrition/image")
        .multipart(MultipartForm::new().add_part("image", jpeg))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["input_type"], "image");
    assert_eq!(body["data"]["markdown"], "**Food Item Identified:** pancakes");

    // A phone export with the wrong extension is still a JPEG.
    let mislabelled = Part::bytes(jpeg_bytes())
        .file_name("IMG_0001.png")
        .mime_type("image/png");

    let response = ctx
        .server
        .post("/analyze/image")
        .multipart(MultipartForm::new().add_part("image", mislabelled))
        .await;

    response.assert_status_ok();
    assert!(
        response
            .text()
            .contains("<strong>Food Item Identified:</strong> pancakes")
    );

    vision_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_oversized_upload_is_rejected_without_call(ctx: &mut NutriAiContext) {
    let vision_model = ctx.unused_model(VISION_PATH).await;

    let huge = Part::bytes(vec![0u8; 11 * 1024 * 1024])
        .file_name("huge.jpg")
        .mime_type("image/jpeg");

    let response = ctx
        .server
        .post("/api/nutrition/image")
        .multipart(MultipartForm::new().add_part("image", huge))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_PAYLOAD_TOO_LARGE");

    vision_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_image_failure_renders_error_template(ctx: &mut NutriAiContext) {
    let vision_model = ctx
        .mock_model(VISION_PATH, 2, 429, "quota exceeded".to_string())
        .await;

    let response = ctx
        .server
        .post("/analyze/image")
        .multipart(MultipartForm::new().add_part("image", png_upload()))
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Error analyzing image: LLM API returned error: 429"));
    assert!(page.contains("quota exceeded. Please try again later or check your API quota."));

    let response = ctx
        .server
        .post("/api/nutrition/image")
        .multipart(MultipartForm::new().add_part("image", png_upload()))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error analyzing image: "));
    assert!(message.ends_with("Please try again later or check your API quota."));

    vision_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_unsupported_upload_is_rejected_without_call(ctx: &mut NutriAiContext) {
    let vision_model = ctx.unused_model(VISION_PATH).await;

    let gif = Part::bytes(b"GIF89a".to_vec())
        .file_name("dessert.gif")
        .mime_type("image/gif");

    let response = ctx
        .server
        .post("/api/nutrition/image")
        .multipart(MultipartForm::new().add_part("image", gif))
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert_eq!(body["message"], "Unsupported image format: gif");

    vision_model.assert_async().await;
}

#[test_context(NutriAiContext)]
#[tokio::test]
async fn test_health_reports_ok(ctx: &mut NutriAiContext) {
    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_missing_api_key_refuses_to_start() {
    let args = Args::parse_from(["nutriai", "--google-api-key", ""]);

    let error = match state(Arc::new(args)).await {
        Ok(_) => panic!("state must not build without an API key"),
        Err(e) => e,
    };

    assert_eq!(
        error.to_string(),
        "Google API key not found. Please set the GOOGLE_API_KEY environment variable."
    );
}
