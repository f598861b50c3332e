//! Hospital catalog shared across services
//!
//! The catalog is an injected, read-only collaborator: the auth core
//! consumes it to enumerate hospitals for admin users but never owns or
//! mutates it. In this mock-data deployment the list is generated in
//! process.

use serde::{Deserialize, Serialize};

/// Hospital type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HospitalKind {
    General,
    Specialty,
    Branch,
}

/// Hospital catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub kind: HospitalKind,
}

impl Hospital {
    /// Create a new catalog entry
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: HospitalKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// Build the mock hospital catalog used by the dashboard
pub fn demo_catalog() -> Vec<Hospital> {
    vec![
        Hospital::new("hosp-001", "St. Mary General Hospital", HospitalKind::General),
        Hospital::new("hosp-002", "Riverside Medical Center", HospitalKind::General),
        Hospital::new("hosp-003", "Lakeview Cardiology Institute", HospitalKind::Specialty),
        Hospital::new("hosp-004", "Northgate Community Clinic", HospitalKind::Branch),
    ]
}
