//! Authentication service
//!
//! Orchestrates sign-in, sign-up, and password changes over the injected
//! user repository, rate limiter, and credential hasher. Every operation
//! awaits a configurable simulated latency standing in for a backend
//! round-trip. Expected failures come back as typed [`AuthError`] values
//! whose messages are shown to the user verbatim.

use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use common::error::{AuthError, AuthResult};

use crate::config::AuthConfig;
use crate::hasher::CredentialHasher;
use crate::models::{AuthenticatedUser, SignUpRequest, User};
use crate::rate_limiter::RateLimiter;
use crate::repositories::UserRepository;
use crate::validation;

/// Authentication service over injected collaborators
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserRepository,
    rate_limiter: RateLimiter,
    hasher: CredentialHasher,
    config: AuthConfig,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        users: UserRepository,
        rate_limiter: RateLimiter,
        hasher: CredentialHasher,
        config: AuthConfig,
    ) -> Self {
        Self {
            users,
            rate_limiter,
            hasher,
            config,
        }
    }

    /// Access the underlying user repository
    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Access the underlying rate limiter
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    async fn simulate_backend_latency(&self) {
        if self.config.simulated_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.simulated_latency_ms)).await;
        }
    }

    async fn rate_limited_error(&self, email: &str) -> AuthError {
        let wait = self.rate_limiter.time_until_reset(email).await;
        // Rounded up to whole minutes for the user-facing message
        let minutes = wait.as_secs().div_ceil(60).max(1);
        AuthError::RateLimited(minutes)
    }

    /// Authenticate a user by email and password
    ///
    /// A failed lookup or failed verification registers a second rate-limit
    /// attempt on top of the gate check, so every failed sign-in costs two
    /// slots. Long-standing behavior the UI and tests depend on; see
    /// DESIGN.md before changing it.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthenticatedUser> {
        info!("Sign-in attempt for: {}", email);
        self.simulate_backend_latency().await;

        if let Err(errors) = validation::validate_sign_in(email, password) {
            // Sign-in surfaces only the first violation
            return Err(AuthError::validation(errors[0].clone()));
        }

        if !self.rate_limiter.is_allowed(email).await {
            warn!("Rate limited sign-in for: {}", email);
            return Err(self.rate_limited_error(email).await);
        }

        let Some(user) = self.users.find_by_email(email).await else {
            // Count the failure itself, on top of the gate check above
            self.rate_limiter.is_allowed(email).await;
            return Err(AuthError::NotFound);
        };

        if !self.hasher.verify(password, &user.password_digest) {
            self.rate_limiter.is_allowed(email).await;
            return Err(AuthError::InvalidCredentials);
        }

        self.rate_limiter.reset(email).await;
        let now = Utc::now();
        self.users.record_login(user.id, now).await;
        info!("Successful sign-in for: {}", email);

        let mut authenticated = user.redacted();
        authenticated.last_login = now;
        Ok(authenticated)
    }

    /// Register a new user
    pub async fn sign_up(&self, request: SignUpRequest) -> AuthResult<AuthenticatedUser> {
        info!("Sign-up attempt for: {}", request.email);
        self.simulate_backend_latency().await;

        validation::validate_sign_up(&request).map_err(AuthError::Validation)?;

        if self.users.find_by_email(&request.email).await.is_some() {
            return Err(AuthError::DuplicateUser);
        }

        let digest = self
            .hasher
            .hash(&request.password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: request.email.clone(),
            name: request.name.clone(),
            role: request.role,
            hospital_ids: request.hospital_access(),
            password_digest: digest,
            created_at: now,
            last_login: now,
        };
        let authenticated = user.redacted();
        self.users.insert(user).await;

        Ok(authenticated)
    }

    /// Change a user's password after verifying the current one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<()> {
        info!("Password change requested for user: {}", user_id);
        self.simulate_backend_latency().await;

        let user = self.users.find_by_id(user_id).await.ok_or(AuthError::NotFound)?;

        if !self.hasher.verify(current_password, &user.password_digest) {
            return Err(AuthError::InvalidCredentials);
        }

        self.overwrite_digest(user_id, new_password).await
    }

    /// Administrative password reset: skips current-password verification
    /// but still enforces the password policy
    pub async fn reset_password(&self, user_id: Uuid, new_password: &str) -> AuthResult<()> {
        info!("Password reset requested for user: {}", user_id);
        self.simulate_backend_latency().await;

        if self.users.find_by_id(user_id).await.is_none() {
            return Err(AuthError::NotFound);
        }

        self.overwrite_digest(user_id, new_password).await
    }

    async fn overwrite_digest(&self, user_id: Uuid, new_password: &str) -> AuthResult<()> {
        validation::validate_password(new_password).map_err(|messages| {
            AuthError::Validation(
                messages
                    .into_iter()
                    .map(|message| format!("password: {message}"))
                    .collect(),
            )
        })?;

        let digest = self
            .hasher
            .hash(new_password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        self.users.set_password_digest(user_id, digest).await;

        Ok(())
    }
}
