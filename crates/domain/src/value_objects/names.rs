//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a knight's name
const MAX_KNIGHT_NAME_LENGTH: usize = 64;

/// Maximum length for nicknames and weapon names
const MAX_SHORT_NAME_LENGTH: usize = 32;

// ============================================================================
// KnightName
// ============================================================================

/// A validated knight name (non-empty, <=64 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KnightName(String);

impl KnightName {
    /// Create a new validated knight name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 64 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Knight name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_KNIGHT_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Knight name cannot exceed {} characters",
                MAX_KNIGHT_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KnightName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for KnightName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<KnightName> for String {
    fn from(name: KnightName) -> String {
        name.0
    }
}

// ============================================================================
// Nickname
// ============================================================================

/// A validated knight nickname (non-empty, <=32 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// Create a new validated nickname.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The nickname is empty after trimming
    /// - The nickname exceeds 32 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Nickname cannot be empty"));
        }
        if trimmed.chars().count() > MAX_SHORT_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Nickname cannot exceed {} characters",
                MAX_SHORT_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the nickname as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Nickname {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Nickname> for String {
    fn from(name: Nickname) -> String {
        name.0
    }
}

// ============================================================================
// WeaponName
// ============================================================================

/// A validated weapon name (non-empty, <=32 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeaponName(String);

impl WeaponName {
    /// Create a new validated weapon name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 32 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Weapon name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_SHORT_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Weapon name cannot exceed {} characters",
                MAX_SHORT_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeaponName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WeaponName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<WeaponName> for String {
    fn from(name: WeaponName) -> String {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod knight_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = KnightName::new("Arthur Pendragon").unwrap();
            assert_eq!(name.as_str(), "Arthur Pendragon");
            assert_eq!(name.to_string(), "Arthur Pendragon");
        }

        #[test]
        fn empty_name_rejected() {
            let result = KnightName::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn whitespace_only_rejected() {
            assert!(KnightName::new("   ").is_err());
        }

        #[test]
        fn name_is_trimmed() {
            let name = KnightName::new("  Lancelot  ").unwrap();
            assert_eq!(name.as_str(), "Lancelot");
        }

        #[test]
        fn too_long_rejected() {
            let result = KnightName::new("a".repeat(65));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("64"));
        }

        #[test]
        fn max_length_accepted() {
            let name = KnightName::new("a".repeat(64)).unwrap();
            assert_eq!(name.as_str().len(), 64);
        }

        #[test]
        fn try_from_string() {
            let name: KnightName = "Percival".to_string().try_into().unwrap();
            assert_eq!(name.as_str(), "Percival");
        }
    }

    mod nickname {
        use super::*;

        #[test]
        fn valid_nickname() {
            let nick = Nickname::new("Art").unwrap();
            assert_eq!(nick.as_str(), "Art");
        }

        #[test]
        fn empty_rejected() {
            let result = Nickname::new("");
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("cannot be empty"));
        }

        #[test]
        fn is_trimmed() {
            let nick = Nickname::new("  Lance  ").unwrap();
            assert_eq!(nick.as_str(), "Lance");
        }

        #[test]
        fn too_long_rejected() {
            let result = Nickname::new("a".repeat(33));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("32"));
        }

        #[test]
        fn max_length_accepted() {
            let nick = Nickname::new("a".repeat(32)).unwrap();
            assert_eq!(nick.as_str().len(), 32);
        }

        #[test]
        fn into_string() {
            let nick = Nickname::new("Percy").unwrap();
            let s: String = nick.into();
            assert_eq!(s, "Percy");
        }
    }

    mod weapon_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = WeaponName::new("Excalibur").unwrap();
            assert_eq!(name.as_str(), "Excalibur");
        }

        #[test]
        fn empty_rejected() {
            assert!(WeaponName::new("").is_err());
            assert!(WeaponName::new("  ").is_err());
        }

        #[test]
        fn too_long_rejected() {
            assert!(WeaponName::new("a".repeat(33)).is_err());
        }

        #[test]
        fn max_length_accepted() {
            let name = WeaponName::new("a".repeat(32)).unwrap();
            assert_eq!(name.as_str().len(), 32);
        }
    }
}
