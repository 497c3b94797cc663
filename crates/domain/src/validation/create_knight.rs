//! Create-knight validation schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::aggregates::Knight;
use crate::common::parse_date;
use crate::validation::{CreateWeaponDraft, ValidationErrors};
use crate::value_objects::{Attribute, AttributeBlock, KnightName, Nickname, Score};

/// Candidate input for a knight's attribute block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributesDraft {
    #[serde(default)]
    pub strength: Option<i64>,
    #[serde(default)]
    pub dexterity: Option<i64>,
    #[serde(default)]
    pub constitution: Option<i64>,
    #[serde(default)]
    pub intelligence: Option<i64>,
    #[serde(default)]
    pub wisdom: Option<i64>,
}

impl AttributesDraft {
    fn field(&self, attribute: Attribute) -> Option<i64> {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
        }
    }

    fn validate(&self, errors: &mut ValidationErrors) -> Option<AttributeBlock> {
        let mut scores = [None; 5];
        for (slot, attribute) in scores.iter_mut().zip(Attribute::ALL) {
            let path = || format!("attributes.{}", attribute.as_str());
            match self.field(attribute) {
                Some(value) => match Score::new(value) {
                    Ok(score) => *slot = Some(score),
                    Err(err) => errors.push_domain(path(), &err),
                },
                None => errors.push(path(), "is required"),
            }
        }
        match scores {
            [Some(st), Some(dx), Some(cn), Some(it), Some(ws)] => {
                Some(AttributeBlock::new(st, dx, cn, it, ws))
            }
            _ => None,
        }
    }
}

/// Candidate input for creating a knight, as collected from a form.
///
/// All fields are optional so that a missing field surfaces as a reported
/// violation instead of a deserialization failure. `birthday` is a string
/// in either RFC3339 or `YYYY-MM-DD` form; dates are coerced during
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnightDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub weapons: Option<Vec<CreateWeaponDraft>>,
    #[serde(default)]
    pub attributes: Option<AttributesDraft>,
    #[serde(default)]
    pub key_attribute: Option<String>,
}

impl CreateKnightDraft {
    /// Validate against the current instant.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint, keyed by wire field path
    /// (`nickname`, `weapons[0].mod`, `attributes.wisdom`, ...).
    pub fn validate(&self) -> Result<Knight, ValidationErrors> {
        self.validate_at(Utc::now())
    }

    /// Validate with an explicit "now", so the birthday boundary is
    /// testable without racing the clock.
    ///
    /// A birthday exactly equal to `now` is accepted (not-after is
    /// inclusive).
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<Knight, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match &self.name {
            Some(raw) => match KnightName::new(raw.clone()) {
                Ok(name) => Some(name),
                Err(err) => {
                    errors.push_domain("name", &err);
                    None
                }
            },
            None => {
                errors.push("name", "is required");
                None
            }
        };

        let nickname = match &self.nickname {
            Some(raw) => match Nickname::new(raw.clone()) {
                Ok(nickname) => Some(nickname),
                Err(err) => {
                    errors.push_domain("nickname", &err);
                    None
                }
            },
            None => {
                errors.push("nickname", "is required");
                None
            }
        };

        let birthday = match &self.birthday {
            Some(raw) => match parse_date(raw) {
                Ok(date) if date > now => {
                    errors.push("birthday", "cannot be in the future");
                    None
                }
                Ok(date) => Some(date),
                Err(err) => {
                    errors.push_domain("birthday", &err);
                    None
                }
            },
            None => {
                errors.push("birthday", "is required");
                None
            }
        };

        let weapons = match &self.weapons {
            Some(drafts) if drafts.is_empty() => {
                errors.push("weapons", "at least one weapon is required");
                None
            }
            Some(drafts) => {
                let mut weapons = Vec::with_capacity(drafts.len());
                let mut complete = true;
                for (index, draft) in drafts.iter().enumerate() {
                    let prefix = format!("weapons[{index}].");
                    match draft.validate_embedded(&mut errors, &prefix) {
                        Some(weapon) => weapons.push(weapon),
                        None => complete = false,
                    }
                }
                complete.then_some(weapons)
            }
            None => {
                errors.push("weapons", "at least one weapon is required");
                None
            }
        };

        let attributes = match &self.attributes {
            Some(draft) => draft.validate(&mut errors),
            None => {
                errors.push("attributes", "is required");
                None
            }
        };

        // Optional; defaults to strength when the form leaves it unset.
        let key_attribute = match &self.key_attribute {
            Some(raw) => match Attribute::from_str(raw) {
                Ok(attribute) => Some(attribute),
                Err(err) => {
                    errors.push_domain("keyAttribute", &err);
                    None
                }
            },
            None => Some(Attribute::Strength),
        };

        match (name, nickname, birthday, weapons, attributes, key_attribute) {
            (
                Some(name),
                Some(nickname),
                Some(birthday),
                Some(weapons),
                Some(attributes),
                Some(key_attribute),
            ) => match Knight::new(name, nickname, birthday, weapons, attributes, key_attribute) {
                Ok(knight) => errors.into_result(knight),
                Err(err) => {
                    errors.push_domain("weapons", &err);
                    Err(errors)
                }
            },
            _ => Err(errors),
        }
    }
}
