//! Validation schemas: pure functions from candidate form input to either
//! a normalized domain object or a structured report of every violated
//! constraint.
//!
//! Schemas perform no I/O and have no side effects; a failure is a
//! recoverable result the caller renders back per field.

mod create_knight;
mod create_weapon;
mod report;

pub use create_knight::{AttributesDraft, CreateKnightDraft};
pub use create_weapon::CreateWeaponDraft;
pub use report::{FieldViolation, ValidationErrors};
