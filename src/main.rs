mod api;
mod config;
mod database;
mod models;
mod services;
mod state;
mod utils;

#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use crate::{config::AppConfig, database::MongoDB, state::AppState, utils::UploadDir};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting Admission Form Service...");

    // ==================== FASE 1: dependências ====================
    // Qualquer falha aqui encerra o processo antes de aceitar conexões

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let uploads = UploadDir::new(&config.upload_dir);
    match uploads.ensure_exists() {
        Ok(true) => log::info!("📁 Created \"{}\" directory", uploads.path().display()),
        Ok(false) => log::info!("📁 Using upload directory \"{}\"", uploads.path().display()),
        Err(e) => {
            log::error!("❌ Cannot create upload directory {}: {}", uploads.path().display(), e);
            std::process::exit(1);
        }
    }

    log::info!("📊 Database: {}", config.redacted_mongodb_uri());

    let db = match MongoDB::connect(&config.mongodb_uri, &config.database_name).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("✅ Connected to MongoDB successfully! (database: {})", db.database().name());

    let state = web::Data::new(AppState::new(
        Arc::new(db),
        uploads,
        config.cleanup_orphaned_uploads,
    ));

    if config.cleanup_orphaned_uploads {
        log::info!("🧹 Orphaned upload cleanup enabled");
    }

    // ==================== FASE 2: rotas + listener ====================

    let upload_dir = config.upload_dir.clone();

    log::info!("🌐 Server is running on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let upload_dir = upload_dir.clone();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(move |cfg| api::routes(cfg, &upload_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
