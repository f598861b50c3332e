//! Session persistence across page reloads
//!
//! Local-storage stand-in: the authenticated user is serialized to JSON
//! under a fixed key in an in-memory key-value map. The session blob is
//! treated as opaque — any deserialization failure is "no session", never
//! a crash.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::models::AuthenticatedUser;

/// Fixed storage key for the persisted session
const SESSION_STORAGE_KEY: &str = "caremetrics.session";

/// Key-value session store
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStore {
    /// Create a new, empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist the authenticated user as the current session
    pub async fn save_session(&self, user: &AuthenticatedUser) -> Result<()> {
        info!("Saving session for user: {}", user.id);
        let blob = serde_json::to_string(user)?;
        let mut entries = self.entries.lock().await;
        entries.insert(SESSION_STORAGE_KEY.to_string(), blob);
        Ok(())
    }

    /// Retrieve the current session, if any
    ///
    /// A corrupted blob is discarded and reported as no session.
    pub async fn load_session(&self) -> Option<AuthenticatedUser> {
        let entries = self.entries.lock().await;
        let blob = entries.get(SESSION_STORAGE_KEY)?;
        match serde_json::from_str(blob) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding corrupted session blob: {}", e);
                None
            }
        }
    }

    /// Delete the current session
    pub async fn clear_session(&self) {
        let mut entries = self.entries.lock().await;
        entries.remove(SESSION_STORAGE_KEY);
    }

    #[cfg(test)]
    async fn store_raw(&self, blob: &str) {
        let mut entries = self.entries.lock().await;
        entries.insert(SESSION_STORAGE_KEY.to_string(), blob.to_string());
    }
}
