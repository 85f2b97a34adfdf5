//! User management service layer
//!
//! Every operation here sits behind the unconditional admin predicate at the
//! route layer; the service itself is role-agnostic.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::User;
use crate::store::AggregateStore;
use crate::users::UpdateUserRequest;

/// Service managing user records
pub struct UserService {
    store: Arc<dyn AggregateStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn AggregateStore>) -> Self {
        Self { store }
    }

    /// All users, newest first.
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let mut users = self.store.list_users().await?;
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    /// Partial update of profile fields, role or status.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> ApiResult<User> {
        if request.is_empty() {
            return Err(ApiError::Validation(
                "No fields provided for update".to_string(),
            ));
        }

        let updated = self
            .store
            .update_user(
                user_id,
                Box::new(move |user| {
                    if let Some(name) = request.name {
                        user.name = name;
                    }
                    if let Some(course) = request.course {
                        user.course = course;
                    }
                    if let Some(contact) = request.contact {
                        user.contact = contact;
                    }
                    if let Some(role) = request.role {
                        user.role = role;
                    }
                    if let Some(status) = request.status {
                        user.status = status;
                    }
                }),
            )
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(updated)
    }

    pub async fn delete_user(&self, user_id: Uuid) -> ApiResult<()> {
        let deleted = self.store.delete_user(user_id).await?;
        if !deleted {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UserRole, UserStatus};
    use crate::store::MemoryStore;
    use chrono::Utc;
    use std::collections::HashSet;

    async fn seed_user(store: &MemoryStore) -> Uuid {
        let user = User {
            id: Uuid::new_v4(),
            name: "Student".to_string(),
            email: "student@campus.edu".to_string(),
            course: "History".to_string(),
            contact: "555-0004".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
            favorites: HashSet::new(),
            created_at: Utc::now(),
        };
        let id = user.id;
        store.insert_user(user).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_update_role_and_status() {
        let store = Arc::new(MemoryStore::new());
        let service = UserService::new(store.clone());
        let user_id = seed_user(&store).await;

        let user = service
            .update_user(
                user_id,
                UpdateUserRequest {
                    role: Some(UserRole::Admin),
                    status: Some(UserStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.name, "Student");
    }

    #[tokio::test]
    async fn test_empty_update_rejected() {
        let store = Arc::new(MemoryStore::new());
        let service = UserService::new(store.clone());
        let user_id = seed_user(&store).await;

        let err = service
            .update_user(user_id, UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let service = UserService::new(Arc::new(MemoryStore::new()));
        let err = service.delete_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
