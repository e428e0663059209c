//! Shared-secret authorization for destructive operations.

use std::fmt;

/// The process-wide secret required to delete records.
///
/// Built once from configuration. An empty secret authorizes nothing.
#[derive(Clone, Default)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Whether a secret was configured at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    /// Check a caller-supplied key. Absent or empty candidates never match.
    #[must_use]
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match candidate {
            Some(candidate) if !candidate.is_empty() => {
                self.is_configured() && candidate == self.0
            }
            _ => false,
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(**redacted**)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_exact_secret() {
        let key = ApiKey::new("TopSecretAPIKey");
        assert!(key.matches(Some("TopSecretAPIKey")));
    }

    #[test]
    fn should_reject_wrong_or_missing_candidate() {
        let key = ApiKey::new("TopSecretAPIKey");
        assert!(!key.matches(Some("topsecretapikey")));
        assert!(!key.matches(Some("")));
        assert!(!key.matches(None));
    }

    #[test]
    fn should_reject_everything_when_secret_unset() {
        let key = ApiKey::default();
        assert!(!key.is_configured());
        assert!(!key.matches(Some("")));
        assert!(!key.matches(Some("anything")));
    }

    #[test]
    fn should_redact_secret_in_debug_output() {
        let key = ApiKey::new("hunter2");
        assert!(!format!("{key:?}").contains("hunter2"));
    }
}
