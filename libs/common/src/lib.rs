//! Common library for the Caremetrics application
//!
//! This crate provides shared functionality used across the Caremetrics
//! services: the authentication error taxonomy and the hospital catalog
//! consumed by the authorization resolver.

pub mod catalog;
pub mod error;

pub use catalog::{Hospital, HospitalKind, demo_catalog};
pub use error::{AuthError, AuthResult};
