//! Authentication core for the Caremetrics dashboard
//!
//! Local credential verification over mock data: password hashing,
//! brute-force rate limiting, input validation, and role-based hospital
//! access resolution. All checks are client-side and advisory — there is
//! no backing server enforcing any of this.

pub mod authorization;
pub mod config;
pub mod demo;
pub mod hasher;
pub mod models;
pub mod rate_limiter;
pub mod repositories;
pub mod service;
pub mod session;
pub mod validation;

pub use config::AuthConfig;
pub use hasher::CredentialHasher;
pub use models::{AuthenticatedUser, Role, SignUpRequest, User};
pub use rate_limiter::{RateLimiter, RateLimiterConfig};
pub use repositories::UserRepository;
pub use service::AuthService;
pub use session::SessionStore;
