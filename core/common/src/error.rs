// core/common/src/error.rs
// Standardized error responses and handling

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String, message: String) -> Self {
        Self {
            error,
            error_code,
            message,
            details: None,
            request_id: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_request_id(mut self, request_id: String) -> Self {
        self.request_id = Some(request_id);
        self
    }
}

#[derive(Debug)]
pub enum ServiceError {
    // Client errors (4xx)
    ValidationError(String),
    NotFound(String),
    BadRequest(String),

    // Server errors (5xx)
    InternalError(String),

    Custom {
        status_code: StatusCode,
        error_code: String,
        message: String,
    },
}

impl ServiceError {
    pub fn error_code(&self) -> String {
        match self {
            ServiceError::ValidationError(_) => "validation_error".to_string(),
            ServiceError::NotFound(_) => "not_found".to_string(),
            ServiceError::BadRequest(_) => "bad_request".to_string(),
            ServiceError::InternalError(_) => "internal_error".to_string(),
            ServiceError::Custom { error_code, .. } => error_code.clone(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ServiceError::ValidationError(msg) => msg.clone(),
            ServiceError::NotFound(msg) => msg.clone(),
            ServiceError::BadRequest(msg) => msg.clone(),
            ServiceError::InternalError(msg) => format!("Internal error: {}", msg),
            ServiceError::Custom { message, .. } => message.clone(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Custom { status_code, .. } => *status_code,
        }
    }

    pub fn to_error_response(&self, request_id: Option<String>) -> ErrorResponse {
        let mut response = ErrorResponse::new(self.to_string(), self.error_code(), self.message());

        if let Some(id) = request_id {
            response = response.with_request_id(id);
        }

        response
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ServiceError {}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        let error_response = self.to_error_response(None);
        HttpResponse::build(self.status_code()).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        self.status_code()
    }
}

impl From<crate::validation::ValidationError> for ServiceError {
    fn from(err: crate::validation::ValidationError) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}
