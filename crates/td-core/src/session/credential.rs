use std::fmt;
use std::ops::Deref;

use zeroize::Zeroize;

/// A sensitive string that must never be logged, cloned, or serialized.
///
/// - no Clone
/// - no Serialize / Deserialize
/// - Debug / Display print a redaction marker
/// - memory is zeroed on Drop
pub struct SecretString {
    inner: String,
}

impl SecretString {
    pub fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Borrow the inner secret as &str.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Consume and return the inner String.
    ///
    /// Transfers ownership of the secret; the caller becomes responsible
    /// for its lifetime.
    pub fn into_inner(mut self) -> String {
        let mut tmp = String::new();
        std::mem::swap(&mut self.inner, &mut tmp);
        tmp
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

/// Login credential consumed by the session source.
///
/// The navigation controller never reads this; it only observes the session
/// snapshots that result from a login.
pub struct Credential {
    pub username: String,
    pub secret: SecretString,
}

impl Credential {
    pub fn new(username: impl Into<String>, secret: String) -> Self {
        Self {
            username: username.into(),
            secret: SecretString::new(secret),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &self.secret)
            .finish()
    }
}
