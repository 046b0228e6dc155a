// Leitura do corpo multipart do formulário de inscrição

use crate::models::{Attachment, SubmissionForm};
use actix_multipart::{Multipart, MultipartError};
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use futures::TryStreamExt;

pub const ATTACHMENT_FIELD: &str = "sscCertificate";

/// Corpo que não é multipart/form-data é tratado como formulário vazio
pub fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Último segmento do filename enviado pelo cliente (`/` ou `\`).
/// Vazio significa que nenhum arquivo foi escolhido.
pub fn client_file_name(raw: &str) -> Option<String> {
    raw.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

/// Campos de texto desconhecidos e outros arquivos são descartados.
/// Só o primeiro `sscCertificate` com filename vira anexo.
pub async fn read_submission(
    mut payload: Multipart,
) -> Result<(SubmissionForm, Option<Attachment>), MultipartError> {
    let mut form = SubmissionForm::default();
    let mut attachment: Option<Attachment> = None;

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        match file_name {
            Some(raw) => match client_file_name(&raw) {
                Some(original_name) if name == ATTACHMENT_FIELD && attachment.is_none() => {
                    log::debug!("📎 Received {} ({} bytes)", original_name, data.len());
                    attachment = Some(Attachment {
                        original_name,
                        bytes: data,
                    });
                }
                Some(original_name) => {
                    log::warn!("⚠️ Ignoring unexpected file field '{}' ({})", name, original_name);
                }
                // input de arquivo sem seleção no navegador
                None => log::debug!("Skipping file field '{}' without a filename", name),
            },
            None => {
                let value = String::from_utf8_lossy(&data).into_owned();
                if !form.set_field(&name, value) {
                    log::debug!("Ignoring unknown form field '{}'", name);
                }
            }
        }
    }

    Ok((form, attachment))
}
