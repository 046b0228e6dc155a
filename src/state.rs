use crate::{database::UserStore, utils::UploadDir};
use std::sync::Arc;

/// Contexto criado uma vez no startup e compartilhado via `web::Data`
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub uploads: UploadDir,
    /// Remove o arquivo gravado quando o insert falha
    pub cleanup_orphaned_uploads: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, uploads: UploadDir, cleanup_orphaned_uploads: bool) -> Self {
        Self {
            store,
            uploads,
            cleanup_orphaned_uploads,
        }
    }
}
