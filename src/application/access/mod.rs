//! Access gate for password-protected areas of the site.
//!
//! With no password configured the site is open and every submission
//! passes. Otherwise a submission passes only on exact equality with the
//! configured value.

pub struct PasswordGate {
    expected: Option<String>,
}

impl PasswordGate {
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected: expected.filter(|s| !s.is_empty()),
        }
    }

    /// Whether clients must present a password at all.
    pub fn required(&self) -> bool {
        self.expected.is_some()
    }

    pub fn verify(&self, submitted: &str) -> bool {
        match &self.expected {
            None => true,
            Some(expected) => expected == submitted,
        }
    }
}
