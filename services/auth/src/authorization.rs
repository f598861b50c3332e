//! Role-based hospital access resolution
//!
//! Pure functions over the authenticated user record; nothing here is
//! cached, so a role or assignment change on the record is reflected on the
//! next call. These checks are advisory and client-side only — there is no
//! server enforcing them (documented limitation of the whole system).

use common::catalog::Hospital;

use crate::models::{AuthenticatedUser, Role};

/// Whether a user may view data for the given hospital
///
/// Admins pass for any ID string, known to the catalog or not; everyone
/// else needs the ID in their own assignment list.
pub fn can_access_hospital(user: &AuthenticatedUser, hospital_id: &str) -> bool {
    match user.role {
        Role::Admin => true,
        Role::HospitalOwner | Role::BranchOwner => {
            user.hospital_ids.iter().any(|id| id == hospital_id)
        }
    }
}

/// Enumerate the hospitals a user may view
///
/// Admins see the full injected catalog; scoped roles see their own
/// deduplicated assignment list.
pub fn accessible_hospitals(user: &AuthenticatedUser, catalog: &[Hospital]) -> Vec<String> {
    match user.role {
        Role::Admin => catalog.iter().map(|hospital| hospital.id.clone()).collect(),
        Role::HospitalOwner | Role::BranchOwner => user.hospital_ids.clone(),
    }
}
