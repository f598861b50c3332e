//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// User entity as stored in the repository
///
/// `hospital_ids` is the canonical access list: the legacy single
/// `hospitalId` field and the `hospitalIds` array from older payloads are
/// collapsed into it at sign-up time (see [`SignUpRequest::hospital_access`]).
/// The digest never leaves the repository/service boundary; callers only
/// ever see an [`AuthenticatedUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub hospital_ids: Vec<String>,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl User {
    /// Strip the password digest before handing the record to a caller
    pub fn redacted(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            hospital_ids: self.hospital_ids.clone(),
            created_at: self.created_at,
            last_login: self.last_login,
        }
    }
}

/// Digest-stripped user handed to the UI and persisted by the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub hospital_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// Sign-up payload as received from the registration form
///
/// Keeps the legacy external shape: `hospitalId` (single value) and
/// `hospitalIds` (array) both remain accepted on the wire, and are merged
/// into one canonical list before the user record is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, alias = "hospitalId")]
    pub hospital_id: Option<String>,
    #[serde(default, alias = "hospitalIds")]
    pub hospital_ids: Option<Vec<String>>,
}

impl SignUpRequest {
    /// Collapse the legacy single field and the array field into one
    /// deduplicated list, dropping empty entries, preserving order
    pub fn hospital_access(&self) -> Vec<String> {
        let mut access: Vec<String> = Vec::new();
        if let Some(id) = &self.hospital_id {
            if !id.is_empty() {
                access.push(id.clone());
            }
        }
        if let Some(ids) = &self.hospital_ids {
            for id in ids {
                if !id.is_empty() && !access.contains(id) {
                    access.push(id.clone());
                }
            }
        }
        access
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hospital_id: Option<&str>, hospital_ids: Option<Vec<&str>>) -> SignUpRequest {
        SignUpRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "Str0ng!Pass".to_string(),
            role: Role::BranchOwner,
            hospital_id: hospital_id.map(String::from),
            hospital_ids: hospital_ids.map(|ids| ids.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn hospital_access_unions_legacy_and_array_fields() {
        let req = request(Some("hosp-001"), Some(vec!["hosp-002", "hosp-001"]));
        assert_eq!(req.hospital_access(), vec!["hosp-001", "hosp-002"]);
    }

    #[test]
    fn hospital_access_skips_empty_entries() {
        let req = request(Some(""), Some(vec!["", "hosp-003"]));
        assert_eq!(req.hospital_access(), vec!["hosp-003"]);
    }

    #[test]
    fn sign_up_request_accepts_legacy_field_names() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{
                "name": "Branch Owner",
                "email": "owner@example.com",
                "password": "Str0ng!Pass",
                "role": "branch_owner",
                "hospitalId": "hosp-004"
            }"#,
        )
        .unwrap();
        assert_eq!(req.hospital_access(), vec!["hosp-004"]);
    }

    #[test]
    fn redacted_user_has_no_digest_field() {
        let user = User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            role: Role::Admin,
            hospital_ids: vec![],
            password_digest: "$argon2id$...".to_string(),
            created_at: Utc::now(),
            last_login: Utc::now(),
        };
        let json = serde_json::to_value(user.redacted()).unwrap();
        assert!(json.get("password_digest").is_none());
        assert_eq!(json["email"], "test@example.com");
    }
}
