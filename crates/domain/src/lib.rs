//! Knights domain: entity models, value objects, and validation schemas.
//!
//! Everything here is pure and synchronous. The validation schemas gate
//! form input before it is handed to the HTTP client; the aggregates and
//! value objects are valid by construction. Persistence and identity
//! assignment belong to the backend collaborator.

pub mod aggregates;
pub mod common;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use aggregates::Knight;
pub use error::DomainError;
pub use ids::KnightId;
pub use validation::{
    AttributesDraft, CreateKnightDraft, CreateWeaponDraft, FieldViolation, ValidationErrors,
};
pub use value_objects::{
    Attribute, AttributeBlock, KnightName, Nickname, Score, Weapon, WeaponMod, WeaponName,
    CREATE_WEAPON_MOD_MIN,
};
