// ==================== FILE INTAKE ====================
// Grava anexos enviados no diretório local de uploads.
// Nome no disco: <epoch-ms>-<nome original>, sem sanitização.

use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};

/// Prefixo público: é tanto o começo do caminho salvo no registro
/// quanto a rota estática que serve os arquivos.
pub const UPLOADS_PREFIX: &str = "uploads";

#[derive(Debug, Clone)]
pub struct UploadDir {
    dir: PathBuf,
}

/// Arquivo já gravado no disco
#[derive(Debug, Clone, PartialEq)]
pub struct StoredUpload {
    pub file_name: String,
    /// `uploads/<epoch-ms>-<nome original>`
    pub relative_path: String,
    pub disk_path: PathBuf,
}

pub fn upload_file_name(timestamp_ms: i64, original_name: &str) -> String {
    format!("{}-{}", timestamp_ms, original_name)
}

impl UploadDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Cria o diretório se ainda não existir. Retorna `true` quando criou.
    pub fn ensure_exists(&self) -> io::Result<bool> {
        if self.dir.is_dir() {
            return Ok(false);
        }
        std::fs::create_dir_all(&self.dir)?;
        Ok(true)
    }

    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<StoredUpload> {
        self.save_at(Utc::now().timestamp_millis(), original_name, bytes)
            .await
    }

    /// Same timestamp + same original name overwrites the previous file.
    pub async fn save_at(
        &self,
        timestamp_ms: i64,
        original_name: &str,
        bytes: &[u8],
    ) -> io::Result<StoredUpload> {
        let file_name = upload_file_name(timestamp_ms, original_name);
        let disk_path = self.dir.join(&file_name);

        tokio::fs::write(&disk_path, bytes).await?;
        log::debug!("💾 Stored upload {} ({} bytes)", disk_path.display(), bytes.len());

        Ok(StoredUpload {
            relative_path: format!("{}/{}", UPLOADS_PREFIX, file_name),
            file_name,
            disk_path,
        })
    }

    pub async fn remove(&self, stored: &StoredUpload) -> io::Result<()> {
        tokio::fs::remove_file(&stored.disk_path).await
    }
}
