//! Client-side copy of every unit on the board.
use std::collections::HashMap;

use game_protocol::{Character, CharacterId, CharacterPatch, PositionDto};

use crate::board::{BoardGeometry, Placement};

/// A character together with its derived screen placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    pub character: Character,
    pub placement: Placement,
}

/// Units keyed by id.
///
/// Placement is derived state: it is recomputed from `position` on every
/// insert and merge, so readers never see the two disagree.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    units: HashMap<CharacterId, Unit>,
}

impl Roster {
    pub fn new(characters: impl IntoIterator<Item = Character>, geometry: &BoardGeometry) -> Self {
        let mut roster = Self::default();
        for character in characters {
            roster.insert(character, geometry);
        }
        roster
    }

    pub fn insert(&mut self, character: Character, geometry: &BoardGeometry) {
        let placement = geometry.project(character.position);
        if let Some(previous) = self.units.insert(
            character.id.clone(),
            Unit {
                character,
                placement,
            },
        ) {
            tracing::warn!(character = %previous.character.id, "Replaced duplicate character");
        }
    }

    /// Merges a sparse update into the matching unit.
    ///
    /// Returns false when the id is unknown.
    pub fn merge(&mut self, patch: &CharacterPatch, geometry: &BoardGeometry) -> bool {
        let Some(unit) = self.units.get_mut(&patch.id) else {
            return false;
        };
        let merged = unit.character.merge(patch);
        unit.placement = geometry.project(unit.character.position);
        merged
    }

    pub fn remove(&mut self, id: &CharacterId) -> Option<Character> {
        self.units.remove(id).map(|unit| unit.character)
    }

    pub fn get(&self, id: &CharacterId) -> Option<&Character> {
        self.units.get(id).map(|unit| &unit.character)
    }

    pub fn unit(&self, id: &CharacterId) -> Option<&Unit> {
        self.units.get(id)
    }

    /// Unit standing on `position`.
    ///
    /// Two units can share a cell while an update is still in flight; the
    /// lowest id wins so the answer does not depend on map order.
    pub fn character_at(&self, position: PositionDto) -> Option<&Character> {
        self.units
            .values()
            .map(|unit| &unit.character)
            .filter(|character| character.position == position)
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_protocol::{Classification, Player, Properties};
    use serde_json::json;

    fn character(id: &str, row: i32, col: i32) -> Character {
        let mut properties = Properties::new();
        properties.insert("hp".to_string(), json!(10));
        Character {
            id: CharacterId::new(id),
            player: Player::Player1,
            position: PositionDto::new(row, col),
            classification: Classification::Lance,
            properties,
        }
    }

    #[test]
    fn merge_recomputes_placement() {
        let board = BoardGeometry::new(8, 8);
        let mut roster = Roster::new([character("c1", 0, 0)], &board);

        let patch = CharacterPatch::empty("c1".into()).with_position(PositionDto::new(3, 2));
        assert!(roster.merge(&patch, &board));

        let unit = roster.unit(&"c1".into()).unwrap();
        assert_eq!(unit.character.position, PositionDto::new(3, 2));
        assert_eq!(unit.placement, board.project(PositionDto::new(3, 2)));
        assert_eq!(unit.character.property("hp"), Some(&json!(10)));
    }

    #[test]
    fn merge_for_unknown_id_is_a_miss() {
        let board = BoardGeometry::default();
        let mut roster = Roster::new([character("c1", 0, 0)], &board);

        let patch = CharacterPatch::empty("ghost".into()).with_position(PositionDto::new(1, 1));

        assert!(!roster.merge(&patch, &board));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn lookup_by_cell() {
        let board = BoardGeometry::default();
        let roster = Roster::new([character("c1", 0, 0), character("c2", 2, 5)], &board);

        assert_eq!(
            roster.character_at(PositionDto::new(2, 5)).map(|c| c.id.as_str()),
            Some("c2")
        );
        assert!(roster.character_at(PositionDto::new(4, 4)).is_none());
    }

    #[test]
    fn shared_cell_resolves_to_lowest_id() {
        let board = BoardGeometry::default();
        let roster = Roster::new(
            [
                character("k9", 1, 1),
                character("b2", 1, 1),
                character("m4", 1, 1),
            ],
            &board,
        );

        for _ in 0..8 {
            assert_eq!(
                roster.character_at(PositionDto::new(1, 1)).map(|c| c.id.as_str()),
                Some("b2")
            );
        }
    }

    #[test]
    fn remove_unknown_is_none() {
        let board = BoardGeometry::default();
        let mut roster = Roster::new([character("c1", 0, 0)], &board);

        assert!(roster.remove(&"c2".into()).is_none());
        assert!(roster.remove(&"c1".into()).is_some());
        assert!(roster.is_empty());
    }
}
