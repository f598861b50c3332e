//! Rate limiter for preventing brute force attacks
//!
//! Per-key sliding-window attempt tracking with a lockout once the window
//! is exhausted. Calling [`RateLimiter::is_allowed`] IS the act of
//! registering an attempt; the read accessors never mutate. Keys are only
//! removed by an explicit [`RateLimiter::reset`], so the map grows with
//! distinct keys over the process lifetime (known limitation). Entries use
//! interior mutability behind a mutex, but the execution model is a single
//! logical thread; the lock is not a cross-task coordination protocol.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::info;

/// Rate limiter configuration
#[derive(Debug, Clone)]
pub struct RateLimiterConfig {
    /// Maximum number of attempts allowed per window
    pub max_attempts: u32,
    /// Counting window in seconds
    pub window_seconds: u64,
    /// Lockout duration in seconds once the window is exhausted
    pub lockout_seconds: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window_seconds: 900,   // 15 minutes
            lockout_seconds: 1800, // 30 minutes
        }
    }
}

/// Rate limiter entry
#[derive(Debug)]
struct RateLimiterEntry {
    /// Attempts counted in the current window
    count: u32,
    /// Instant at which the window expires and the count resets
    window_resets_at: Instant,
    /// Lockout expiration, set once the window is exhausted
    locked_until: Option<Instant>,
}

impl RateLimiterEntry {
    fn empty(now: Instant, window: Duration) -> Self {
        Self {
            count: 0,
            window_resets_at: now + window,
            locked_until: None,
        }
    }
}

/// Per-key attempt rate limiter
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Rate limiter configuration
    config: RateLimiterConfig,
    /// Rate limiter entries keyed by the sign-in email
    entries: Arc<Mutex<HashMap<String, RateLimiterEntry>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimiterConfig) -> Self {
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_seconds)
    }

    /// Register an attempt for a key and report whether it is allowed
    ///
    /// Absence of a key is a fully defined state (fresh); this never fails.
    pub async fn is_allowed(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        let window = self.window();

        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| RateLimiterEntry::empty(now, window));

        if let Some(locked_until) = entry.locked_until {
            if now < locked_until {
                // Still locked out, attempt rejected without counting
                return false;
            }
            // Lockout expired, start a fresh window
            *entry = RateLimiterEntry::empty(now, window);
        }

        if now >= entry.window_resets_at {
            // Window elapsed without reaching the limit
            *entry = RateLimiterEntry::empty(now, window);
        }

        if entry.count >= self.config.max_attempts {
            entry.locked_until = Some(now + Duration::from_secs(self.config.lockout_seconds));
            info!(
                "Locked out key {} for {} seconds",
                key, self.config.lockout_seconds
            );
            return false;
        }

        entry.count += 1;
        true
    }

    /// Unconditionally clear the record for a key
    ///
    /// Called after successful authentication.
    pub async fn reset(&self, key: &str) {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
    }

    /// Attempts left in the current window, without registering one
    ///
    /// Returns the configured maximum for unknown keys and for windows that
    /// have silently elapsed; 0 while locked out.
    pub async fn remaining_attempts(&self, key: &str) -> u32 {
        let entries = self.entries.lock().await;
        let now = Instant::now();

        let Some(entry) = entries.get(key) else {
            return self.config.max_attempts;
        };

        if let Some(locked_until) = entry.locked_until {
            if now < locked_until {
                return 0;
            }
            return self.config.max_attempts;
        }

        if now >= entry.window_resets_at {
            return self.config.max_attempts;
        }

        self.config.max_attempts.saturating_sub(entry.count)
    }

    /// Time until the key's state resets, without registering an attempt
    ///
    /// Remaining lockout if locked, remaining window otherwise, zero if
    /// neither applies.
    pub async fn time_until_reset(&self, key: &str) -> Duration {
        let entries = self.entries.lock().await;
        let now = Instant::now();

        let Some(entry) = entries.get(key) else {
            return Duration::ZERO;
        };

        if let Some(locked_until) = entry.locked_until {
            return locked_until.saturating_duration_since(now);
        }

        entry.window_resets_at.saturating_duration_since(now)
    }

    /// Get the rate limiter configuration
    pub fn config(&self) -> &RateLimiterConfig {
        &self.config
    }
}
