use crate::{models::UserResponse, state::AppState, utils::AppError};

/// Busca por email (match exato). Email vazio conta como ausente.
pub async fn find_user_by_email(
    state: &AppState,
    email: Option<&str>,
) -> Result<UserResponse, AppError> {
    let email = email
        .filter(|e| !e.is_empty())
        .ok_or(AppError::MissingParameter("Email"))?;

    let user = state
        .store
        .find_user_by_email(email)
        .await
        .map_err(|e| AppError::LookupFailed(e.to_string()))?
        .ok_or(AppError::NotFound("User"))?;

    Ok(UserResponse::from(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::{InMemoryUserStore, UnreachableUserStore};
    use crate::database::UserStore;
    use crate::models::UserRecord;
    use crate::utils::UploadDir;
    use std::sync::Arc;

    fn state_with(store: Arc<dyn UserStore>) -> AppState {
        AppState::new(store, UploadDir::new("uploads"), false)
    }

    #[tokio::test]
    async fn missing_or_empty_email_is_rejected() {
        let state = state_with(Arc::new(InMemoryUserStore::default()));

        assert!(matches!(
            find_user_by_email(&state, None).await,
            Err(AppError::MissingParameter("Email"))
        ));
        assert!(matches!(
            find_user_by_email(&state, Some("")).await,
            Err(AppError::MissingParameter("Email"))
        ));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let state = state_with(Arc::new(InMemoryUserStore::default()));

        let result = find_user_by_email(&state, Some("nobody@example.com")).await;

        assert!(matches!(result, Err(AppError::NotFound("User"))));
    }

    #[tokio::test]
    async fn found_record_keeps_certificate_path() {
        let store = Arc::new(InMemoryUserStore::default());
        let id = store
            .insert_user(&UserRecord {
                email: Some("mina@example.com".to_string()),
                course: Some("Data Science".to_string()),
                ssc_certificate: "uploads/1700000000000-ssc.jpg".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let state = state_with(store);

        let user = find_user_by_email(&state, Some("mina@example.com")).await.unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.course.as_deref(), Some("Data Science"));
        assert_eq!(user.ssc_certificate, "uploads/1700000000000-ssc.jpg");
    }

    #[tokio::test]
    async fn store_failure_is_lookup_failed() {
        let state = state_with(Arc::new(UnreachableUserStore));

        let result = find_user_by_email(&state, Some("mina@example.com")).await;

        assert!(matches!(result, Err(AppError::LookupFailed(_))));
    }
}
