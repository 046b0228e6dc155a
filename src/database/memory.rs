// Stores de teste: memória e um store sempre indisponível

use crate::{database::UserStore, models::UserRecord, utils::AppError};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_user(&self, user: &UserRecord) -> Result<String, AppError> {
        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        self.records.lock().unwrap().push(stored);
        Ok(id.to_hex())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|r| r.email.as_deref() == Some(email))
            .cloned())
    }
}

pub struct UnreachableUserStore;

#[async_trait]
impl UserStore for UnreachableUserStore {
    async fn insert_user(&self, _user: &UserRecord) -> Result<String, AppError> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }

    async fn find_user_by_email(&self, _email: &str) -> Result<Option<UserRecord>, AppError> {
        Err(AppError::DatabaseError("server selection timeout".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_returns_first_match_for_duplicate_emails() {
        let store = InMemoryUserStore::default();
        let first = UserRecord {
            email: Some("dup@example.com".to_string()),
            full_name: Some("First".to_string()),
            ssc_certificate: "uploads/1-a.pdf".to_string(),
            ..Default::default()
        };
        let second = UserRecord {
            full_name: Some("Second".to_string()),
            ..first.clone()
        };

        store.insert_user(&first).await.unwrap();
        store.insert_user(&second).await.unwrap();

        let found = store.find_user_by_email("dup@example.com").await.unwrap().unwrap();
        assert_eq!(found.full_name.as_deref(), Some("First"));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let store = InMemoryUserStore::default();
        let record = UserRecord {
            email: Some("Case@Example.com".to_string()),
            ssc_certificate: "uploads/1-a.pdf".to_string(),
            ..Default::default()
        };
        store.insert_user(&record).await.unwrap();

        assert!(store.find_user_by_email("case@example.com").await.unwrap().is_none());
        assert!(store.find_user_by_email("Case@Example.com").await.unwrap().is_some());
    }
}
