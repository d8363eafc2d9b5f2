//! The admin gate: a single SHA-256 password comparison with a 24-hour
//! session. Deliberately minimal, no salting or rate limiting; the catalog it
//! protects is a personal site.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

/// Hex SHA-256 of the default admin password.
pub const DEFAULT_PASSWORD_HASH: &str =
    "adf3862f5831cccd16da7b4b9a5ac73365270622e97e30782bf24db0161e7f68";

const SESSION_HOURS: i64 = 24;

pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(64);
    for byte in digest {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

pub struct AdminGate {
    password_hash: String,
    session_expires: Option<DateTime<Utc>>,
}

impl AdminGate {
    pub fn new(password_hash: impl Into<String>) -> Self {
        Self {
            password_hash: password_hash.into(),
            session_expires: None,
        }
    }

    /// Compares the hash of the supplied password and, on success, opens a
    /// session valid for 24 hours.
    pub fn authenticate(&mut self, password: &str) -> bool {
        if sha256_hex(password) == self.password_hash {
            self.session_expires = Some(Utc::now() + Duration::hours(SESSION_HOURS));
            true
        } else {
            false
        }
    }

    pub fn is_authenticated(&self) -> bool {
        match self.session_expires {
            Some(expires) => Utc::now() < expires,
            None => false,
        }
    }

    pub fn logout(&mut self) {
        self.session_expires = None;
    }
}
