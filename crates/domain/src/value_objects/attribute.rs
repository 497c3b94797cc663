//! Attribute value object - the stat categories a knight is built from.
//!
//! Provides type safety for attribute references instead of using magic
//! strings like "strength", "dexterity".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The five attribute kinds.
///
/// A closed set: it discriminates which attribute a weapon's modifier
/// scales, and designates a knight's key attribute. Wire form is the
/// lowercase name (`"strength"`, `"dexterity"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Physical power
    Strength,
    /// Agility and reflexes
    Dexterity,
    /// Endurance and health
    Constitution,
    /// Reasoning and memory
    Intelligence,
    /// Perception and insight
    Wisdom,
}

impl Attribute {
    /// All attribute kinds, in declaration order.
    pub const ALL: [Attribute; 5] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
    ];

    /// Returns the lowercase wire representation (e.g., "strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "dexterity" => Ok(Self::Dexterity),
            "constitution" => Ok(Self::Constitution),
            "intelligence" => Ok(Self::Intelligence),
            "wisdom" => Ok(Self::Wisdom),
            _ => Err(DomainError::parse(format!("unknown attribute: {s}"))),
        }
    }
}
