use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    #[schema(example = "a bowl of oatmeal with blueberries")]
    #[validate(custom(function = "validate_not_blank", message = "Please enter a food description."))]
    pub description: String,
}

/// Body of the HTML text form.
#[derive(Debug, Default, Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub mode: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_description_fails_validation() {
        let request = AnalyzeTextRequest {
            description: " \n ".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_description_passes_validation() {
        let request = AnalyzeTextRequest {
            description: "1 medium apple".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
