//! Unit model and the sparse-update merge applied to it.
//!
//! The server only resends the fields of a unit that changed. Every mutation
//! of a [`Character`] therefore goes through [`Character::merge`], which keeps
//! whatever the patch omits.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::player::Player;
use crate::position::{PositionDto, PositionPatch};

/// Open-ended property bag (hit points, stats, status flags, ...).
pub type Properties = BTreeMap<String, Value>;

/// Server-assigned unit identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Weapon class of a unit. Only used for presentation on the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Axe,
    Sword,
    Lance,
    Bow,
    Support,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Axe => "Axe",
            Classification::Sword => "Sword",
            Classification::Lance => "Lance",
            Classification::Bow => "Bow",
            Classification::Support => "Support",
        }
    }
}

/// Authoritative client-side copy of a unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub player: Player,
    pub position: PositionDto,
    pub classification: Classification,
    #[serde(default)]
    pub properties: Properties,
}

/// Sparse character update. Only `id` is mandatory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPatch {
    pub id: CharacterId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl CharacterPatch {
    /// Patch that names the unit and changes nothing.
    pub fn empty(id: CharacterId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: PositionDto) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value);
        self
    }
}

impl Character {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Applies `patch` in place.
    ///
    /// Scalars are replaced when present, the position merges coordinate by
    /// coordinate and the property bag merges key by key. Returns `false` and
    /// leaves `self` untouched when the patch names another unit.
    pub fn merge(&mut self, patch: &CharacterPatch) -> bool {
        if patch.id != self.id {
            tracing::warn!(
                character = %self.id,
                patch = %patch.id,
                "Ignoring patch addressed to another character"
            );
            return false;
        }

        if let Some(player) = patch.player {
            self.player = player;
        }
        if let Some(position) = &patch.position {
            self.position.merge(position);
        }
        if let Some(classification) = patch.classification {
            self.classification = classification;
        }
        if let Some(properties) = &patch.properties {
            merge_properties(&mut self.properties, properties);
        }

        true
    }

    /// Returns a copy of `self` with `patch` applied.
    pub fn merged(&self, patch: &CharacterPatch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

fn merge_properties(existing: &mut Properties, patch: &Properties) {
    for (key, value) in patch {
        if value.is_null() {
            continue;
        }
        match existing.get_mut(key) {
            Some(current) => merge_value(current, value),
            None => {
                existing.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Property values have no static shape, so objects merge recursively and a
/// `null` in the patch never overwrites.
fn merge_value(existing: &mut Value, patch: &Value) {
    match (existing, patch) {
        (_, Value::Null) => {}
        (Value::Object(current), Value::Object(incoming)) => {
            for (key, value) in incoming {
                if value.is_null() {
                    continue;
                }
                match current.get_mut(key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        current.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn knight() -> Character {
        let mut properties = Properties::new();
        properties.insert("hp".to_string(), json!(10));
        properties.insert("stats".to_string(), json!({ "atk": 4, "def": 2 }));
        Character {
            id: CharacterId::new("c1"),
            player: Player::Player1,
            position: PositionDto::ORIGIN,
            classification: Classification::Sword,
            properties,
        }
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut character = knight();
        let before = character.clone();

        assert!(character.merge(&CharacterPatch::empty(CharacterId::new("c1"))));
        assert_eq!(character, before);
    }

    #[test]
    fn position_update_keeps_unrelated_properties() {
        let mut character = knight();
        let patch = CharacterPatch::empty(CharacterId::new("c1"))
            .with_position(PositionDto::new(1, 0));

        character.merge(&patch);

        assert_eq!(character.position, PositionDto::new(1, 0));
        assert_eq!(character.property("hp"), Some(&json!(10)));
    }

    #[test]
    fn partial_position_merges_per_coordinate() {
        let mut character = knight();
        character.position = PositionDto::new(3, 5);
        let patch = CharacterPatch {
            position: Some(PositionPatch {
                row: None,
                col: Some(2),
            }),
            ..CharacterPatch::empty(CharacterId::new("c1"))
        };

        character.merge(&patch);

        assert_eq!(character.position, PositionDto::new(3, 2));
    }

    #[test]
    fn properties_merge_key_by_key_and_recurse() {
        let mut character = knight();
        let patch = CharacterPatch::empty(CharacterId::new("c1"))
            .with_property("hp", json!(7))
            .with_property("stats", json!({ "def": 5, "atk": null }))
            .with_property("poisoned", json!(true));

        character.merge(&patch);

        assert_eq!(character.property("hp"), Some(&json!(7)));
        assert_eq!(
            character.property("stats"),
            Some(&json!({ "atk": 4, "def": 5 }))
        );
        assert_eq!(character.property("poisoned"), Some(&json!(true)));
    }

    #[test]
    fn null_property_never_overwrites() {
        let mut character = knight();
        let patch = CharacterPatch::empty(CharacterId::new("c1")).with_property("hp", Value::Null);

        character.merge(&patch);

        assert_eq!(character.property("hp"), Some(&json!(10)));
    }

    #[test]
    fn patch_for_other_character_is_rejected() {
        let mut character = knight();
        let patch = CharacterPatch::empty(CharacterId::new("c2"))
            .with_position(PositionDto::new(4, 4));

        assert!(!character.merge(&patch));
        assert_eq!(character.position, PositionDto::ORIGIN);
    }

    #[test]
    fn sparse_json_patch_deserializes_with_omitted_fields() {
        let patch: CharacterPatch =
            serde_json::from_value(json!({ "id": "c1", "position": { "row": 1, "col": 0 } }))
                .unwrap();

        assert_eq!(patch.player, None);
        assert_eq!(patch.properties, None);
        assert_eq!(
            patch.position,
            Some(PositionPatch {
                row: Some(1),
                col: Some(0)
            })
        );
    }

    #[test]
    fn merged_leaves_original_untouched() {
        let character = knight();
        let patch = CharacterPatch::empty(CharacterId::new("c1")).with_property("hp", json!(3));

        let after = character.merged(&patch);

        assert_eq!(character.property("hp"), Some(&json!(10)));
        assert_eq!(after.property("hp"), Some(&json!(3)));
    }
}
