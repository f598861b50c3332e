//! User repository over the in-memory user store
//!
//! The repository exclusively owns all user records; the auth service is
//! its only writer and callers only ever receive clones. Email lookup is
//! an exact, case-sensitive match. Records are never deleted.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::models::User;

/// In-memory user repository
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl UserRepository {
    /// Create a new, empty user repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new user record
    pub async fn insert(&self, user: User) {
        info!("Creating new user: {}", user.email);
        let mut users = self.users.lock().await;
        users.insert(user.id, user);
    }

    /// Find a user by email (exact, case-sensitive match)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.lock().await;
        users.values().find(|user| user.email == email).cloned()
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.users.lock().await;
        users.get(&id).cloned()
    }

    /// Record a successful login for a user
    pub async fn record_login(&self, id: Uuid, at: DateTime<Utc>) {
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(&id) {
            user.last_login = at;
        }
    }

    /// Overwrite the stored password digest for a user
    pub async fn set_password_digest(&self, id: Uuid, digest: String) {
        info!("Updating password digest for user: {}", id);
        let mut users = self.users.lock().await;
        if let Some(user) = users.get_mut(&id) {
            user.password_digest = digest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Test User".to_string(),
            role: Role::Admin,
            hospital_ids: vec![],
            password_digest: "digest".to_string(),
            created_at: Utc::now(),
            last_login: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_email_and_id() {
        let repo = UserRepository::new();
        let stored = user("admin@example.com");
        let id = stored.id;
        repo.insert(stored).await;

        assert!(repo.find_by_email("admin@example.com").await.is_some());
        assert!(repo.find_by_id(id).await.is_some());
        assert!(repo.find_by_email("nobody@example.com").await.is_none());
    }

    #[tokio::test]
    async fn email_lookup_is_case_sensitive() {
        let repo = UserRepository::new();
        repo.insert(user("Admin@Example.com")).await;
        assert!(repo.find_by_email("Admin@Example.com").await.is_some());
        assert!(repo.find_by_email("admin@example.com").await.is_none());
    }

    #[tokio::test]
    async fn record_login_updates_last_login() {
        let repo = UserRepository::new();
        let stored = user("admin@example.com");
        let id = stored.id;
        let before = stored.last_login;
        repo.insert(stored).await;

        let later = before + chrono::Duration::minutes(5);
        repo.record_login(id, later).await;
        assert_eq!(repo.find_by_id(id).await.unwrap().last_login, later);
    }

    #[tokio::test]
    async fn set_password_digest_overwrites_in_place() {
        let repo = UserRepository::new();
        let stored = user("admin@example.com");
        let id = stored.id;
        repo.insert(stored).await;

        repo.set_password_digest(id, "new-digest".to_string()).await;
        assert_eq!(
            repo.find_by_id(id).await.unwrap().password_digest,
            "new-digest"
        );
    }
}
