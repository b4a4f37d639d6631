use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Image,
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Image => "image",
            InputType::Text => "text",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoded image ready to be sent inline to the vision model.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImageRequest {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}

// Image bytes are noisy in logs, only their size is printed.
impl fmt::Debug for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRequest")
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.data.len())
            .finish()
    }
}

/// Free-text food description. Always non-blank, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
    description: String,
}

impl TextRequest {
    pub fn new(description: impl Into<String>) -> Result<Self, CoreError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CoreError::EmptyInput);
        }

        Ok(Self { description })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    Image(ImageRequest),
    Text(TextRequest),
}

impl AnalysisRequest {
    pub fn input_type(&self) -> InputType {
        match self {
            AnalysisRequest::Image(_) => InputType::Image,
            AnalysisRequest::Text(_) => InputType::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_request_rejects_blank_input() {
        assert_eq!(TextRequest::new(""), Err(CoreError::EmptyInput));
        assert_eq!(TextRequest::new("  \n\t "), Err(CoreError::EmptyInput));
    }

    #[test]
    fn test_text_request_keeps_raw_description() {
        let request = TextRequest::new("  1 medium apple\n").unwrap();
        assert_eq!(request.description(), "  1 medium apple\n");
    }

    #[test]
    fn test_image_request_debug_hides_bytes() {
        let request = ImageRequest::new(vec![1, 2, 3], "image/jpeg");
        let printed = format!("{:?}", request);
        assert!(printed.contains("size_bytes: 3"));
        assert!(!printed.contains("[1, 2, 3]"));
    }
}
