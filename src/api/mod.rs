pub mod health;
pub mod multipart;
pub mod users;

use crate::utils::{AppError, UPLOADS_PREFIX};
use actix_web::web;
use std::path::Path;

/// Registra todas as rotas. Só é chamado depois que o banco conectou.
pub fn routes(cfg: &mut web::ServiceConfig, upload_dir: &Path) {
    cfg.route("/", web::get().to(health::root))
        .service(
            web::resource("/user")
                // `?email=a&email=b` e afins: mesmo corpo JSON dos outros erros
                .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                    log::warn!("⚠️ Invalid query string: {}", err);
                    AppError::MissingParameter("Email").into()
                }))
                .route(web::post().to(users::create_user))
                .route(web::get().to(users::get_user)),
        )
        // Arquivos enviados, sem controle de acesso
        .service(actix_files::Files::new(&format!("/{}", UPLOADS_PREFIX), upload_dir));
}
