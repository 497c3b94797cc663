//! Weapon value object - a single piece of equipment.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Attribute, WeaponMod, WeaponName};

/// One weapon owned by a knight.
///
/// Valid by construction: the name and modifier bounds are enforced by
/// their newtypes. `attr` names the attribute the modifier scales and is
/// the only optional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    name: WeaponName,
    #[serde(rename = "mod")]
    modifier: WeaponMod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attr: Option<Attribute>,
    equipped: bool,
}

impl Weapon {
    /// Create a new weapon from pre-validated parts.
    pub fn new(
        name: WeaponName,
        modifier: WeaponMod,
        attr: Option<Attribute>,
        equipped: bool,
    ) -> Self {
        Self {
            name,
            modifier,
            attr,
            equipped,
        }
    }

    /// Returns the weapon's name.
    pub fn name(&self) -> &WeaponName {
        &self.name
    }

    /// Returns the numeric modifier.
    pub fn modifier(&self) -> WeaponMod {
        self.modifier
    }

    /// Returns the attribute this weapon's modifier scales, if any.
    pub fn attr(&self) -> Option<Attribute> {
        self.attr
    }

    /// Returns true if the weapon is currently wielded.
    pub fn is_equipped(&self) -> bool {
        self.equipped
    }

    /// Create a copy with the equipped flag changed.
    pub fn with_equipped(self, equipped: bool) -> Self {
        Self { equipped, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    fn excalibur() -> Weapon {
        Weapon::new(
            WeaponName::new("Excalibur").expect("valid name"),
            WeaponMod::new(5).expect("valid modifier"),
            Some(Attribute::Strength),
            true,
        )
    }

    #[test]
    fn accessors() {
        let weapon = excalibur();
        assert_eq!(weapon.name().as_str(), "Excalibur");
        assert_eq!(weapon.modifier().value(), 5);
        assert_eq!(weapon.attr(), Some(Attribute::Strength));
        assert!(weapon.is_equipped());
    }

    #[test]
    fn with_equipped_flips_flag() {
        let weapon = excalibur().with_equipped(false);
        assert!(!weapon.is_equipped());
    }

    #[test]
    fn serde_uses_mod_wire_field() {
        let json = serde_json::to_value(excalibur()).expect("serializes");
        assert_eq!(json["name"], "Excalibur");
        assert_eq!(json["mod"], 5);
        assert_eq!(json["attr"], "strength");
        assert_eq!(json["equipped"], true);
    }

    #[test]
    fn serde_attr_is_optional() {
        let json = r#"{"name":"Dagger","mod":2,"equipped":false}"#;
        let weapon: Weapon = serde_json::from_str(json).expect("deserializes");
        assert_eq!(weapon.attr(), None);
        // and omitted on the way back out
        let out = serde_json::to_value(&weapon).expect("serializes");
        assert!(out.get("attr").is_none());
    }

    #[test]
    fn serde_enforces_mod_bound() {
        let json = r#"{"name":"Dagger","mod":11,"equipped":false}"#;
        let result: Result<Weapon, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn weapon_mod_error_is_validation() {
        assert!(matches!(
            WeaponMod::new(11),
            Err(DomainError::Validation(_))
        ));
    }
}
