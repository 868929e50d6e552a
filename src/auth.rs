//! Admin credential validation.
//!
//! The operator surface is gated by a single shared secret. The guard keeps
//! a SHA-256 digest of the configured key and compares digests rather than
//! plaintext, so the comparison cost does not depend on where the inputs
//! diverge. A fixed-window failure counter caps how fast the key can be
//! guessed.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::sync::Mutex;

/// Failed attempts tolerated within one window before requests are refused.
pub const MAX_FAILURES_PER_WINDOW: usize = 10;

/// Length of the failure-counting window in seconds.
pub const FAILURE_WINDOW_SECS: i64 = 60;

/// Errors returned when validating the admin key.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// The provided key does not match the configured key
    #[error("Invalid admin key")]
    InvalidKey,

    /// Too many failed attempts within the current window
    #[error("Too many failed attempts, try again later")]
    RateLimited,
}

/// Validates admin keys against the configured shared secret.
///
/// The guard is constructed once at startup and shared across handlers. It
/// never stores the key itself, only its digest.
#[derive(Debug)]
pub struct AdminGuard {
    key_digest: [u8; 32],
    failures: Mutex<Vec<DateTime<Utc>>>,
}

impl AdminGuard {
    /// Creates a guard for the given admin key.
    pub fn new(key: &str) -> Self {
        Self {
            key_digest: Sha256::digest(key.as_bytes()).into(),
            failures: Mutex::new(Vec::new()),
        }
    }

    /// Validates a provided key at the given instant.
    ///
    /// Returns `AuthError::RateLimited` without examining the key when the
    /// failure budget for the current window is spent. A mismatch counts
    /// against the budget; a match never does.
    pub fn check(&self, provided: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
        let window = Duration::seconds(FAILURE_WINDOW_SECS);
        let mut failures = self.failures.lock().unwrap_or_else(|e| e.into_inner());
        failures.retain(|t| now.signed_duration_since(*t) < window);

        if failures.len() >= MAX_FAILURES_PER_WINDOW {
            return Err(AuthError::RateLimited);
        }

        let provided_digest: [u8; 32] = Sha256::digest(provided.as_bytes()).into();

        // Compare full digests so the work done is independent of where the
        // inputs first differ.
        let mut diff = 0u8;
        for (a, b) in provided_digest.iter().zip(self.key_digest.iter()) {
            diff |= a ^ b;
        }

        if diff == 0 {
            Ok(())
        } else {
            failures.push(now);
            Err(AuthError::InvalidKey)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_key_passes() {
        let guard = AdminGuard::new("s3cret");
        assert_eq!(guard.check("s3cret", Utc::now()), Ok(()));
    }

    #[test]
    fn wrong_key_fails() {
        let guard = AdminGuard::new("s3cret");
        assert_eq!(guard.check("guess", Utc::now()), Err(AuthError::InvalidKey));
    }

    #[test]
    fn budget_exhaustion_rate_limits() {
        let guard = AdminGuard::new("s3cret");
        let now = Utc::now();

        for _ in 0..MAX_FAILURES_PER_WINDOW {
            assert_eq!(guard.check("guess", now), Err(AuthError::InvalidKey));
        }

        // Even the correct key is refused once the budget is spent.
        assert_eq!(guard.check("guess", now), Err(AuthError::RateLimited));
        assert_eq!(guard.check("s3cret", now), Err(AuthError::RateLimited));
    }

    #[test]
    fn window_expiry_restores_the_budget() {
        let guard = AdminGuard::new("s3cret");
        let start = Utc::now();

        for _ in 0..MAX_FAILURES_PER_WINDOW {
            let _ = guard.check("guess", start);
        }
        assert_eq!(guard.check("s3cret", start), Err(AuthError::RateLimited));

        let later = start + Duration::seconds(FAILURE_WINDOW_SECS + 1);
        assert_eq!(guard.check("s3cret", later), Ok(()));
    }

    #[test]
    fn successful_check_does_not_consume_budget() {
        let guard = AdminGuard::new("s3cret");
        let now = Utc::now();

        for _ in 0..(MAX_FAILURES_PER_WINDOW * 2) {
            assert_eq!(guard.check("s3cret", now), Ok(()));
        }
    }
}
