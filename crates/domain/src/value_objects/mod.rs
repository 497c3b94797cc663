//! Value objects: small, valid-by-construction domain types.

mod attribute;
mod attribute_block;
mod names;
mod score;
mod weapon;

pub use attribute::Attribute;
pub use attribute_block::AttributeBlock;
pub use names::{KnightName, Nickname, WeaponName};
pub use score::{Score, WeaponMod, CREATE_WEAPON_MOD_MIN};
pub use weapon::Weapon;
