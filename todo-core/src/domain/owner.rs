//! Owner identity
//!
//! Owners are authenticated elsewhere; the core only carries their opaque id.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid("owner id must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wrap an id read back from storage, which was validated on the way in
    pub(crate) fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_id_is_trimmed() {
        let owner = OwnerId::new("  alice ").unwrap();
        assert_eq!(owner.as_str(), "alice");
    }

    #[test]
    fn test_blank_owner_id_rejected() {
        assert!(matches!(OwnerId::new("   "), Err(DomainError::InvalidInput(_))));
    }
}
