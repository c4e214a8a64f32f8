//! Setup code service for bootstrapping the first admin.
//!
//! This module provides the `SetupCodeService` for generating and validating one-time-use
//! setup codes. When the server starts without any approved admin, a code is generated and
//! written to the log; registering with it creates the account as an approved admin. Codes
//! are stored in-memory with a 10-minute TTL and are invalidated after successful use or
//! expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const SETUP_CODE_TTL_SECONDS: u64 = 600;

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    /// The verification code string.
    code: String,
    /// Timestamp when this code expires.
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the temporary code used for initial admin setup.
///
/// Provides methods for generating a one-time-use code that lets the first user
/// register directly as an approved admin. The code is generated once on server
/// startup if no admin exists, stored in memory, and invalidated after successful
/// use or expiration.
#[derive(Clone)]
pub struct SetupCodeService {
    /// The currently active setup code, if any.
    code: Arc<RwLock<Option<SetupCode>>>,
    ttl: Duration,
}

impl SetupCodeService {
    /// Creates a new SetupCodeService with the default 10-minute TTL and no active code.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(SETUP_CODE_TTL_SECONDS))
    }

    /// Creates a service whose codes live for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random setup code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character setup code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let setup_code = SetupCode::new(code_string.clone(), self.ttl);
        *self.code.write().await = Some(setup_code);
        code_string
    }

    /// Validates the provided code against the stored setup code.
    ///
    /// If validation is successful, the code is invalidated to prevent reuse.
    /// Expired codes are also invalidated and fail validation.
    ///
    /// # Returns
    /// - `true` - Code matches and was valid (not expired), code has been consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a random 32-character alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if a setup code currently exists and is valid (not expired).
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Tests generating a new setup code.
    ///
    /// Expected: 32-character code and valid code state
    #[tokio::test]
    async fn test_generate_code() {
        let service = SetupCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Tests validating a correct setup code.
    ///
    /// Expected: successful validation and consumed code
    #[tokio::test]
    async fn test_validate_correct_code() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Tests validating an incorrect setup code.
    ///
    /// Expected: failed validation and code still valid
    #[tokio::test]
    async fn test_validate_incorrect_code() {
        let service = SetupCodeService::new();
        service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.has_valid_code().await);
    }

    /// Tests validating when no code exists.
    ///
    /// Expected: failed validation
    #[tokio::test]
    async fn test_validate_without_code() {
        let service = SetupCodeService::new();
        assert!(!service.validate_and_consume("any_code").await);
    }

    /// Tests that setup codes cannot be reused.
    ///
    /// Expected: first validation succeeds and second fails
    #[tokio::test]
    async fn test_code_cannot_be_reused() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
    }

    /// Tests that setup codes expire after their TTL.
    ///
    /// Expected: code valid initially, rejected after the TTL
    #[tokio::test]
    async fn test_code_expires_after_ttl() {
        let service = SetupCodeService::with_ttl(Duration::from_millis(50));
        let code = service.generate().await;
        assert!(service.has_valid_code().await);

        sleep(Duration::from_millis(80)).await;

        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }
}
