//! # Credential Verification
//!
//! Pluggable credential checking for the login endpoint. The API core only
//! depends on the [`CredentialVerifier`] trait; deployments choose the
//! implementation.

use async_trait::async_trait;
use subtle::ConstantTimeEq;

use error::Result;

/// Default login mobile when `KEYSTONE_LOGIN_MOBILE` is unset.
pub const DEFAULT_LOGIN_MOBILE: &str = "565225438";

/// Default login password when `KEYSTONE_LOGIN_PASSWORD` is unset.
pub const DEFAULT_LOGIN_PASSWORD: &str = "beats@123";

/// Decides whether a (mobile, password) pair may log in.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns `Ok(true)` for valid credentials, `Ok(false)` otherwise.
    ///
    /// Errors are reserved for verifier-side faults (an unreachable
    /// directory service, for example), never for bad credentials.
    async fn verify(&self, mobile: &str, password: &str) -> Result<bool>;
}

/// Single-tenant verifier holding one fixed credential pair.
#[derive(Debug, Clone)]
pub struct StaticVerifier {
    mobile:   String,
    password: String,
}

impl StaticVerifier {
    /// Create a verifier for an explicit credential pair.
    pub fn new(mobile: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mobile: mobile.into(),
            password: password.into(),
        }
    }

    /// Create a verifier from `KEYSTONE_LOGIN_MOBILE` and
    /// `KEYSTONE_LOGIN_PASSWORD`, falling back to the built-in defaults.
    pub fn from_env() -> Self {
        Self {
            mobile: std::env::var("KEYSTONE_LOGIN_MOBILE")
                .unwrap_or_else(|_| DEFAULT_LOGIN_MOBILE.to_string()),
            password: std::env::var("KEYSTONE_LOGIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_LOGIN_PASSWORD.to_string()),
        }
    }
}

impl Default for StaticVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_MOBILE, DEFAULT_LOGIN_PASSWORD)
    }
}

#[async_trait]
impl CredentialVerifier for StaticVerifier {
    async fn verify(&self, mobile: &str, password: &str) -> Result<bool> {
        // Constant-time comparison to avoid leaking prefix length
        let mobile_ok = self.mobile.as_bytes().ct_eq(mobile.as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        Ok(bool::from(mobile_ok & password_ok))
    }
}
