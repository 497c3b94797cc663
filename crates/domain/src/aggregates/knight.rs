//! Knight aggregate - the entity the whole application manages.
//!
//! # Rustic DDD Design
//!
//! This aggregate follows the same principles as the rest of the domain:
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `KnightName`, `Nickname`, and the bounded value objects
//!   carry their own invariants
//! - **Valid by construction**: `new()` takes pre-validated types
//!
//! Identity assignment and the numeric stats (`age`, `attack`, `exp`) are
//! owned by the backend collaborator; `from_storage` rehydrates records
//! exactly as received, and soft deletion only ever sets a flag and a
//! timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::KnightId;
use crate::value_objects::{Attribute, AttributeBlock, KnightName, Nickname, Weapon};

/// A knight: identity, vitals, equipment, and base attributes.
///
/// # Invariants
///
/// - `name` is non-empty and <= 64 characters (enforced by `KnightName`)
/// - `nickname` is non-empty and <= 32 characters (enforced by `Nickname`)
/// - `weapons` is non-empty at creation (insertion order reflects
///   display/equip order)
/// - deletion is soft: the record is flagged, never discarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Knight {
    #[serde(rename = "_id")]
    id: KnightId,
    name: KnightName,
    nickname: Nickname,
    #[serde(default)]
    age: u32,
    #[serde(default)]
    attack: u32,
    #[serde(default)]
    exp: u64,
    birthday: DateTime<Utc>,
    weapons: Vec<Weapon>,
    attributes: AttributeBlock,
    key_attribute: Attribute,
    #[serde(default)]
    is_deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime<Utc>>,
}

impl Knight {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a new knight from pre-validated parts.
    ///
    /// The numeric stats start at zero; the backend assigns them. A fresh
    /// id is generated here so the object is addressable before it is
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if `weapons` is empty.
    pub fn new(
        name: KnightName,
        nickname: Nickname,
        birthday: DateTime<Utc>,
        weapons: Vec<Weapon>,
        attributes: AttributeBlock,
        key_attribute: Attribute,
    ) -> Result<Self, DomainError> {
        if weapons.is_empty() {
            return Err(DomainError::constraint(
                "knight must have at least one weapon",
            ));
        }
        Ok(Self {
            id: KnightId::new(),
            name,
            nickname,
            age: 0,
            attack: 0,
            exp: 0,
            birthday,
            weapons,
            attributes,
            key_attribute,
            is_deleted: false,
            deleted_at: None,
        })
    }

    /// Reconstruct a knight from storage (no re-validation).
    pub fn from_storage(
        id: KnightId,
        name: KnightName,
        nickname: Nickname,
        age: u32,
        attack: u32,
        exp: u64,
        birthday: DateTime<Utc>,
        weapons: Vec<Weapon>,
        attributes: AttributeBlock,
        key_attribute: Attribute,
        is_deleted: bool,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            nickname,
            age,
            attack,
            exp,
            birthday,
            weapons,
            attributes,
            key_attribute,
            is_deleted,
            deleted_at,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the knight's unique identifier.
    #[inline]
    pub fn id(&self) -> KnightId {
        self.id
    }

    /// Returns the knight's name.
    #[inline]
    pub fn name(&self) -> &KnightName {
        &self.name
    }

    /// Returns the knight's nickname.
    #[inline]
    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn attack(&self) -> u32 {
        self.attack
    }

    #[inline]
    pub fn exp(&self) -> u64 {
        self.exp
    }

    /// Returns the knight's birthday.
    #[inline]
    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    /// Returns the knight's weapons in display/equip order.
    #[inline]
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// Returns the knight's base attribute scores.
    #[inline]
    pub fn attributes(&self) -> &AttributeBlock {
        &self.attributes
    }

    /// Returns the attribute designated as this knight's primary one.
    #[inline]
    pub fn key_attribute(&self) -> Attribute {
        self.key_attribute
    }

    /// Returns true if the knight is soft-deleted.
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns the soft-delete timestamp, if deleted.
    #[inline]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns the weapons currently wielded.
    pub fn equipped_weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter().filter(|w| w.is_equipped())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace the knight's nickname (backs the update-nickname flow).
    pub fn set_nickname(&mut self, nickname: Nickname) {
        self.nickname = nickname;
    }

    /// Append a weapon, preserving insertion order.
    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    /// Soft-delete the knight at the given instant.
    ///
    /// Idempotent: a second call keeps the original timestamp.
    pub fn mark_deleted(&mut self, now: DateTime<Utc>) {
        if !self.is_deleted {
            self.is_deleted = true;
            self.deleted_at = Some(now);
        }
    }

    /// Clear the soft-delete marker.
    pub fn restore(&mut self) {
        self.is_deleted = false;
        self.deleted_at = None;
    }
}
