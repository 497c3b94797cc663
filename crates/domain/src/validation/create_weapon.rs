//! Create-weapon validation schema.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::validation::ValidationErrors;
use crate::value_objects::{Attribute, Weapon, WeaponMod, WeaponName, CREATE_WEAPON_MOD_MIN};

/// Candidate input for a weapon, as collected from a form.
///
/// All fields are optional so that a missing field surfaces as a reported
/// violation instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeaponDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "mod")]
    pub modifier: Option<i64>,
    #[serde(default)]
    pub attr: Option<String>,
    #[serde(default)]
    pub equipped: Option<bool>,
}

impl CreateWeaponDraft {
    /// Validate as a standalone weapon creation.
    ///
    /// Identical to the knight-embedded rules except the modifier's lower
    /// bound is [`CREATE_WEAPON_MOD_MIN`] instead of 0.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint, keyed by wire field name.
    pub fn validate(&self) -> Result<Weapon, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let weapon = self.check(&mut errors, "", CREATE_WEAPON_MOD_MIN);
        match weapon {
            Some(weapon) => errors.into_result(weapon),
            None => Err(errors),
        }
    }

    /// Validate as an element of a knight's weapon list.
    ///
    /// `prefix` is the field path of this element (e.g. `weapons[0].`);
    /// violations are recorded into the shared report.
    pub(crate) fn validate_embedded(
        &self,
        errors: &mut ValidationErrors,
        prefix: &str,
    ) -> Option<Weapon> {
        self.check(errors, prefix, WeaponMod::MIN)
    }

    fn check(
        &self,
        errors: &mut ValidationErrors,
        prefix: &str,
        min_mod: i64,
    ) -> Option<Weapon> {
        let name = match &self.name {
            Some(raw) => match WeaponName::new(raw.clone()) {
                Ok(name) => Some(name),
                Err(err) => {
                    errors.push_domain(format!("{prefix}name"), &err);
                    None
                }
            },
            None => {
                errors.push(format!("{prefix}name"), "is required");
                None
            }
        };

        let modifier = match self.modifier {
            Some(value) if value < min_mod || value > WeaponMod::MAX => {
                errors.push(
                    format!("{prefix}mod"),
                    format!("must be between {} and {}", min_mod, WeaponMod::MAX),
                );
                None
            }
            Some(value) => match WeaponMod::new(value) {
                Ok(modifier) => Some(modifier),
                Err(err) => {
                    errors.push_domain(format!("{prefix}mod"), &err);
                    None
                }
            },
            None => {
                errors.push(format!("{prefix}mod"), "is required");
                None
            }
        };

        // attr is the only optional weapon field; membership is still
        // checked when present.
        let attr = match &self.attr {
            Some(raw) => match Attribute::from_str(raw) {
                Ok(attr) => Some(attr),
                Err(err) => {
                    errors.push_domain(format!("{prefix}attr"), &err);
                    None
                }
            },
            None => None,
        };
        let attr_invalid = self.attr.is_some() && attr.is_none();

        let equipped = match self.equipped {
            Some(value) => Some(value),
            None => {
                errors.push(format!("{prefix}equipped"), "is required");
                None
            }
        };

        match (name, modifier, equipped) {
            (Some(name), Some(modifier), Some(equipped)) if !attr_invalid => {
                Some(Weapon::new(name, modifier, attr, equipped))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, modifier: i64, attr: Option<&str>, equipped: bool) -> CreateWeaponDraft {
        CreateWeaponDraft {
            name: Some(name.to_string()),
            modifier: Some(modifier),
            attr: attr.map(str::to_string),
            equipped: Some(equipped),
        }
    }

    #[test]
    fn valid_weapon_accepted() {
        let weapon = draft("Excalibur", 5, Some("strength"), true)
            .validate()
            .expect("accepted");
        assert_eq!(weapon.name().as_str(), "Excalibur");
        assert_eq!(weapon.modifier().value(), 5);
        assert_eq!(weapon.attr(), Some(Attribute::Strength));
        assert!(weapon.is_equipped());
    }

    #[test]
    fn attr_is_optional() {
        let weapon = draft("Mace", 3, None, false).validate().expect("accepted");
        assert_eq!(weapon.attr(), None);
    }

    #[test]
    fn mod_zero_divergence() {
        // Standalone creation requires mod >= 1; the knight-embedded
        // schema accepts 0 (see create_knight tests).
        let err = draft("Dagger", 0, Some("dexterity"), false)
            .validate()
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has_field("mod"));
        assert!(err.violations()[0].message.contains("between 1 and 10"));
    }

    #[test]
    fn mod_above_upper_bound_rejected() {
        let err = draft("Hammer", 11, None, true).validate().unwrap_err();
        assert!(err.has_field("mod"));
    }

    #[test]
    fn unknown_attr_rejected() {
        let err = draft("Bow", 4, Some("luck"), true).validate().unwrap_err();
        assert!(err.has_field("attr"));
        assert!(err.violations()[0].message.contains("luck"));
    }

    #[test]
    fn missing_fields_all_reported() {
        let err = CreateWeaponDraft::default().validate().unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("mod"));
        assert!(err.has_field("equipped"));
        // attr is optional, so it must not be reported
        assert!(!err.has_field("attr"));
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn name_too_long_rejected() {
        let err = draft(&"a".repeat(33), 5, None, true).validate().unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.violations()[0].message.contains("32"));
    }

    #[test]
    fn deserializes_from_untyped_form_input() {
        let draft: CreateWeaponDraft =
            serde_json::from_str(r#"{"name":"Excalibur","mod":5,"equipped":true}"#)
                .expect("deserializes");
        assert!(draft.validate().is_ok());
    }
}
