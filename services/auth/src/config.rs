//! Auth service configuration

use crate::rate_limiter::RateLimiterConfig;

/// Auth service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Artificial latency added to every operation, in milliseconds
    ///
    /// Stand-in for a real backend round-trip; set to 0 in tests.
    pub simulated_latency_ms: u64,
    /// Rate limiter settings applied to sign-in attempts
    pub rate_limiter: RateLimiterConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 400,
            rate_limiter: RateLimiterConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Create a new AuthConfig from environment variables
    ///
    /// # Environment Variables
    /// - `AUTH_SIMULATED_LATENCY_MS`: Artificial operation latency (default: 400)
    /// - `AUTH_MAX_ATTEMPTS`: Sign-in attempts per window (default: 5)
    /// - `AUTH_WINDOW_SECONDS`: Attempt counting window (default: 900)
    /// - `AUTH_LOCKOUT_SECONDS`: Lockout after exhausting the window (default: 1800)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let simulated_latency_ms = env_parse(
            "AUTH_SIMULATED_LATENCY_MS",
            defaults.simulated_latency_ms,
        );
        let max_attempts = env_parse("AUTH_MAX_ATTEMPTS", defaults.rate_limiter.max_attempts);
        let window_seconds = env_parse("AUTH_WINDOW_SECONDS", defaults.rate_limiter.window_seconds);
        let lockout_seconds =
            env_parse("AUTH_LOCKOUT_SECONDS", defaults.rate_limiter.lockout_seconds);

        Self {
            simulated_latency_ms,
            rate_limiter: RateLimiterConfig {
                max_attempts,
                window_seconds,
                lockout_seconds,
            },
        }
    }

    /// Configuration suitable for tests: no artificial latency
    pub fn for_tests() -> Self {
        Self {
            simulated_latency_ms: 0,
            rate_limiter: RateLimiterConfig::default(),
        }
    }
}

/// Parse an override into its target type; anything unparseable (including
/// out-of-range values) falls back to the default
fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
