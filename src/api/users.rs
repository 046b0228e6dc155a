use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::{
    api::multipart,
    models::SubmissionForm,
    services::{lookup_service, submission_service},
    state::AppState,
    utils::AppError,
};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// POST /user - Recebe o formulário multipart com o certificado SSC
pub async fn create_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Payload,
) -> HttpResponse {
    log::info!("📝 POST /user - New form submission");

    let (form, attachment) = if multipart::is_multipart(req.headers()) {
        match multipart::read_submission(Multipart::new(req.headers(), body)).await {
            Ok(parsed) => parsed,
            Err(e) => {
                let err = AppError::SubmissionFailed(format!("invalid multipart body: {}", e));
                log::error!("❌ {}", err);
                return err.error_response();
            }
        }
    } else {
        (SubmissionForm::default(), None)
    };

    let email = form.email.clone().unwrap_or_default();

    match submission_service::create_user(&state, form, attachment).await {
        Ok(response) => {
            log::info!("✅ Submission saved: {} ({})", response.inserted_id, email);
            HttpResponse::Ok().json(response)
        }
        Err(e @ AppError::MissingAttachment) => {
            log::warn!("⚠️ Submission rejected for {}: {}", email, e);
            e.error_response()
        }
        Err(e) => {
            log::error!("❌ Error saving submission for {}: {}", email, e);
            e.error_response()
        }
    }
}

/// GET /user?email= - Busca inscrição pelo email
pub async fn get_user(
    state: web::Data<AppState>,
    query: web::Query<EmailQuery>,
) -> HttpResponse {
    log::info!("🔍 GET /user - email: {}", query.email.as_deref().unwrap_or("N/A"));

    match lookup_service::find_user_by_email(&state, query.email.as_deref()).await {
        Ok(user) => {
            log::info!("✅ User found: {}", user.id);
            HttpResponse::Ok().json(user)
        }
        Err(e @ (AppError::MissingParameter(_) | AppError::NotFound(_))) => {
            log::warn!("⚠️ Lookup failed: {}", e);
            e.error_response()
        }
        Err(e) => {
            log::error!("❌ Error fetching user: {}", e);
            e.error_response()
        }
    }
}
