use crate::{database::MongoDB, models::UserRecord, utils::AppError};
use async_trait::async_trait;
use mongodb::bson::doc;

/// Operações de persistência usadas pelos handlers
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insere o registro e devolve o `_id` gerado (hex)
    async fn insert_user(&self, user: &UserRecord) -> Result<String, AppError>;

    /// Primeiro documento com `email` exatamente igual
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;
}

#[async_trait]
impl UserStore for MongoDB {
    async fn insert_user(&self, user: &UserRecord) -> Result<String, AppError> {
        let result = self
            .users()
            .insert_one(user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match result.inserted_id.as_object_id() {
            Some(oid) => Ok(oid.to_hex()),
            None => Ok(result.inserted_id.to_string()),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        self.users()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
