use crate::utils::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE: &str = "userDB";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub upload_dir: PathBuf,
    pub cleanup_orphaned_uploads: bool,
}

/// URI do cluster Atlas a partir das credenciais
pub fn atlas_uri(user: &str, pass: &str) -> String {
    format!(
        "mongodb+srv://{}:{}@cluster0.yzf7x.mongodb.net/?retryWrites=true&w=majority&appName=Cluster0",
        user, pass
    )
}

/// Esconde `user:pass@` para poder logar a URI
pub fn redact_uri(uri: &str) -> String {
    match (uri.find("://"), uri.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***@{}", &uri[..scheme_end], &uri[at + 1..])
        }
        _ => uri.to_string(),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::StartupFailure(format!("PORT must be a number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let mongodb_uri = match var("MONGODB_URI") {
            Some(uri) => uri,
            None => match (var("DB_USER"), var("DB_PASS")) {
                (Some(user), Some(pass)) => atlas_uri(&user, &pass),
                _ => {
                    return Err(AppError::StartupFailure(
                        "DB_USER and DB_PASS (or MONGODB_URI) must be set".to_string(),
                    ))
                }
            },
        };

        let cleanup_orphaned_uploads = var("CLEANUP_ORPHANED_UPLOADS")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mongodb_uri,
            database_name: var("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            upload_dir: PathBuf::from(var("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())),
            cleanup_orphaned_uploads,
        })
    }

    pub fn redacted_mongodb_uri(&self) -> String {
        redact_uri(&self.mongodb_uri)
    }
}
