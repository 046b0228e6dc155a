pub mod user_store;

#[cfg(test)]
pub mod memory;

pub use user_store::UserStore;

use crate::{models::UserRecord, utils::AppError};
use mongodb::{bson::doc, Client, Collection, Database};

pub const USER_COLLECTION: &str = "user";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Conecta e valida com `ping` no banco `admin`. Falha aqui é fatal para o startup.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::StartupFailure(format!("invalid MongoDB URI: {}", e)))?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::StartupFailure(e.to_string()))?;

        let db = client.database(database_name);
        let mongodb = Self { client, db };

        mongodb
            .ping()
            .await
            .map_err(|e| AppError::StartupFailure(e.to_string()))?;

        Ok(mongodb)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("ping failed: {}", e)))?;
        Ok(())
    }

    pub fn users(&self) -> Collection<UserRecord> {
        self.db.collection(USER_COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
