//! AttributeBlock value object - a knight's five base attribute scores.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Attribute, Score};

/// The five base attribute scores of a knight.
///
/// Every field is required and bounded 0-10 (enforced by [`Score`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeBlock {
    strength: Score,
    dexterity: Score,
    constitution: Score,
    intelligence: Score,
    wisdom: Score,
}

impl AttributeBlock {
    /// Create a block from pre-validated scores, in attribute order.
    pub fn new(
        strength: Score,
        dexterity: Score,
        constitution: Score,
        intelligence: Score,
        wisdom: Score,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
        }
    }

    /// Returns the score for the given attribute kind.
    pub fn get(&self, attribute: Attribute) -> Score {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
        }
    }

    pub fn strength(&self) -> Score {
        self.strength
    }

    pub fn dexterity(&self) -> Score {
        self.dexterity
    }

    pub fn constitution(&self) -> Score {
        self.constitution
    }

    pub fn intelligence(&self) -> Score {
        self.intelligence
    }

    pub fn wisdom(&self) -> Score {
        self.wisdom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> AttributeBlock {
        let score = |v| Score::new(v).expect("valid score");
        AttributeBlock::new(score(8), score(5), score(6), score(4), score(3))
    }

    #[test]
    fn get_matches_fields() {
        let b = block();
        assert_eq!(b.get(Attribute::Strength).value(), 8);
        assert_eq!(b.get(Attribute::Dexterity).value(), 5);
        assert_eq!(b.get(Attribute::Constitution).value(), 6);
        assert_eq!(b.get(Attribute::Intelligence).value(), 4);
        assert_eq!(b.get(Attribute::Wisdom).value(), 3);
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_value(block()).expect("serializes");
        assert_eq!(json["strength"], 8);
        assert_eq!(json["wisdom"], 3);
        let parsed: AttributeBlock = serde_json::from_value(json).expect("deserializes");
        assert_eq!(parsed, block());
    }

    #[test]
    fn serde_rejects_out_of_range_field() {
        let json = r#"{"strength":11,"dexterity":5,"constitution":6,"intelligence":4,"wisdom":3}"#;
        let result: Result<AttributeBlock, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_rejects_missing_field() {
        let json = r#"{"strength":8,"dexterity":5,"constitution":6,"intelligence":4}"#;
        let result: Result<AttributeBlock, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
