// ==================== FORM SUBMISSION ====================
// Grava o anexo, monta o registro e insere no MongoDB.
// Sem rollback por padrão: se o insert falhar o arquivo fica no disco.

use crate::{
    models::{Attachment, InsertUserResponse, SubmissionForm},
    state::AppState,
    utils::AppError,
};

pub async fn create_user(
    state: &AppState,
    form: SubmissionForm,
    attachment: Option<Attachment>,
) -> Result<InsertUserResponse, AppError> {
    let attachment = attachment.ok_or(AppError::MissingAttachment)?;

    let stored = state
        .uploads
        .save(&attachment.original_name, &attachment.bytes)
        .await
        .map_err(|e| AppError::SubmissionFailed(format!("failed to write upload: {}", e)))?;

    log::info!("📎 Certificate stored as {}", stored.file_name);

    let record = form.into_record(stored.relative_path.clone());

    match state.store.insert_user(&record).await {
        Ok(inserted_id) => Ok(InsertUserResponse {
            acknowledged: true,
            inserted_id,
        }),
        Err(e) => {
            if state.cleanup_orphaned_uploads {
                match state.uploads.remove(&stored).await {
                    Ok(()) => log::info!("🧹 Removed orphaned upload {}", stored.relative_path),
                    Err(rm) => log::warn!("⚠️ Could not remove orphaned upload {}: {}", stored.relative_path, rm),
                }
            }
            Err(AppError::SubmissionFailed(e.to_string()))
        }
    }
}
