//! Role model and related functionality

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed role enumeration for dashboard users
///
/// Serde is the boundary shim here: payloads carry the snake_case wire
/// names (`admin`, `hospital_owner`, `branch_owner`) and any unknown role
/// string is rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every hospital in the catalog
    Admin,
    /// Access scoped to an explicit list of owned hospitals
    HospitalOwner,
    /// Access scoped to the branches assigned to the user
    BranchOwner,
}

impl Role {
    /// Whether this role requires an explicit hospital assignment
    pub fn requires_hospital_access(&self) -> bool {
        !matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::HospitalOwner => "hospital_owner",
            Role::BranchOwner => "branch_owner",
        };
        f.write_str(name)
    }
}
