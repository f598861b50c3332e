//! Demo account seeding
//!
//! The dashboard ships with mock data only; these accounts are the entry
//! points for trying out each role.

use common::error::AuthResult;

use crate::models::{Role, SignUpRequest};
use crate::service::AuthService;

/// Demo admin credentials
pub const DEMO_ADMIN_EMAIL: &str = "admin@caremetrics.example";
/// Demo admin password
pub const DEMO_ADMIN_PASSWORD: &str = "Adm1n!Caremetrics";

/// Seed the demo accounts, one per role
///
/// Routed through `sign_up` so the seeds obey the same validation as any
/// registration.
pub async fn seed_demo_users(service: &AuthService) -> AuthResult<()> {
    let accounts = [
        SignUpRequest {
            name: "Dashboard Admin".to_string(),
            email: DEMO_ADMIN_EMAIL.to_string(),
            password: DEMO_ADMIN_PASSWORD.to_string(),
            role: Role::Admin,
            hospital_id: None,
            hospital_ids: None,
        },
        SignUpRequest {
            name: "Hospital Owner".to_string(),
            email: "owner@caremetrics.example".to_string(),
            password: "0wner!Caremetrics".to_string(),
            role: Role::HospitalOwner,
            hospital_id: None,
            hospital_ids: Some(vec!["hosp-001".to_string(), "hosp-002".to_string()]),
        },
        SignUpRequest {
            name: "Branch Owner".to_string(),
            email: "branch@caremetrics.example".to_string(),
            password: "Br4nch!Caremetrics".to_string(),
            role: Role::BranchOwner,
            hospital_id: Some("hosp-004".to_string()),
            hospital_ids: None,
        },
    ];

    for account in accounts {
        service.sign_up(account).await?;
    }

    Ok(())
}
