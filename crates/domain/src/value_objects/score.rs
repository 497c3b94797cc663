//! Bounded numeric value objects: attribute scores and weapon modifiers.
//!
//! Both are valid by construction; the bounds live here, not in the
//! callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A base attribute score, bounded 0-10 inclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Score(u8);

impl Score {
    /// Minimum allowed score.
    pub const MIN: i64 = 0;
    /// Maximum allowed score.
    pub const MAX: i64 = 10;

    /// Create a new validated score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is outside 0-10.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "score must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value as u8))
    }

    /// Returns the raw score value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Score {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> i64 {
        i64::from(score.0)
    }
}

/// A weapon's numeric modifier, bounded 0-10 inclusive.
///
/// Zero is a valid modifier on an already-owned weapon; the standalone
/// create-weapon schema tightens the lower bound to
/// [`CREATE_WEAPON_MOD_MIN`] (see `validation::create_weapon`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct WeaponMod(u8);

/// Lower bound enforced only by the standalone create-weapon schema.
pub const CREATE_WEAPON_MOD_MIN: i64 = 1;

impl WeaponMod {
    /// Minimum allowed modifier.
    pub const MIN: i64 = 0;
    /// Maximum allowed modifier.
    pub const MAX: i64 = 10;

    /// Create a new validated weapon modifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is outside 0-10.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "weapon modifier must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value as u8))
    }

    /// Returns the raw modifier value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for WeaponMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for WeaponMod {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeaponMod> for i64 {
    fn from(m: WeaponMod) -> i64 {
        i64::from(m.0)
    }
}
