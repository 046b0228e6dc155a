use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

/// Erros da aplicação. `Display` carrega o detalhe interno (vai para o log);
/// o cliente só recebe a mensagem estática de `public_message`.
#[derive(Debug)]
pub enum AppError {
    MissingAttachment,
    MissingParameter(&'static str),
    NotFound(&'static str),
    SubmissionFailed(String),
    LookupFailed(String),
    DatabaseError(String),
    StartupFailure(String),
}

impl AppError {
    pub fn public_message(&self) -> String {
        match self {
            AppError::MissingAttachment => "SSC certificate upload is required.".to_string(),
            AppError::MissingParameter(name) => format!("{} is required", name),
            AppError::NotFound(entity) => format!("{} not found", entity),
            AppError::SubmissionFailed(_) => "Failed to submit the form.".to_string(),
            AppError::LookupFailed(_) => "Failed to fetch user.".to_string(),
            AppError::DatabaseError(_) | AppError::StartupFailure(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingAttachment => write!(f, "Missing attachment: sscCertificate"),
            AppError::MissingParameter(name) => write!(f, "Missing parameter: {}", name),
            AppError::NotFound(entity) => write!(f, "Not found: {}", entity),
            AppError::SubmissionFailed(msg) => write!(f, "Submission failed: {}", msg),
            AppError::LookupFailed(msg) => write!(f, "Lookup failed: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::StartupFailure(msg) => write!(f, "Startup failure: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingAttachment | AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.public_message()
        }))
    }
}
