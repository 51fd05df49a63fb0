use serde::{Deserialize, Serialize};

use crate::domain::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The body could not be read as a contact submission at all.
    MalformedBody,
    Validation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            fields: None,
        }
    }

    pub fn invalid_form(fields: ValidationErrors) -> Self {
        Self {
            code: ErrorCode::Validation,
            message: format!("{} field(s) failed validation", fields.len()),
            fields: Some(fields),
        }
    }
}
