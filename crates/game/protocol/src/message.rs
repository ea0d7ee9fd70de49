//! Client → server commands.
//!
//! The integer tags are a protocol contract with the existing server and must
//! not be renumbered. On the wire a message is `{"tag": <u8>, "fields": [..]}`
//! where `fields` holds zero or one payload value.
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::character::CharacterId;
use crate::position::PositionDto;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Pick the unit(s) to act with.
    SelectCharacters(Vec<CharacterId>),
    /// Back out of destination selection.
    Cancel,
    MoveTo(PositionDto),
    SelectAction(String),
    /// Back out of target selection for an action.
    CancelAction,
    ConfirmAction(Vec<CharacterId>),
}

impl Message {
    pub const fn tag(&self) -> u8 {
        match self {
            Message::SelectCharacters(_) => 0,
            Message::Cancel => 1,
            Message::MoveTo(_) => 2,
            Message::SelectAction(_) => 3,
            Message::CancelAction => 4,
            Message::ConfirmAction(_) => 5,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Message::SelectCharacters(_) => "SelectCharacters",
            Message::Cancel => "Cancel",
            Message::MoveTo(_) => "MoveTo",
            Message::SelectAction(_) => "SelectAction",
            Message::CancelAction => "CancelAction",
            Message::ConfirmAction(_) => "ConfirmAction",
        }
    }
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Message", 2)?;
        state.serialize_field("tag", &self.tag())?;
        match self {
            Message::SelectCharacters(ids) | Message::ConfirmAction(ids) => {
                state.serialize_field("fields", &[ids])?;
            }
            Message::MoveTo(position) => state.serialize_field("fields", &[position])?,
            Message::SelectAction(name) => state.serialize_field("fields", &[name])?,
            Message::Cancel | Message::CancelAction => {
                let empty: [(); 0] = [];
                state.serialize_field("fields", &empty)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_match_wire_contract() {
        let tags: Vec<u8> = [
            Message::SelectCharacters(vec![]),
            Message::Cancel,
            Message::MoveTo(PositionDto::ORIGIN),
            Message::SelectAction(String::new()),
            Message::CancelAction,
            Message::ConfirmAction(vec![]),
        ]
        .iter()
        .map(Message::tag)
        .collect();

        assert_eq!(tags, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn encodes_payload_messages() {
        let select = serde_json::to_value(Message::SelectCharacters(vec!["c1".into()])).unwrap();
        assert_eq!(select, json!({ "tag": 0, "fields": [["c1"]] }));

        let moved = serde_json::to_value(Message::MoveTo(PositionDto::new(1, 0))).unwrap();
        assert_eq!(moved, json!({ "tag": 2, "fields": [{ "row": 1, "col": 0 }] }));

        let action = serde_json::to_value(Message::SelectAction("Heal".into())).unwrap();
        assert_eq!(action, json!({ "tag": 3, "fields": ["Heal"] }));
    }

    #[test]
    fn encodes_cancels_with_distinct_tags() {
        assert_eq!(
            serde_json::to_value(Message::Cancel).unwrap(),
            json!({ "tag": 1, "fields": [] })
        );
        assert_eq!(
            serde_json::to_value(Message::CancelAction).unwrap(),
            json!({ "tag": 4, "fields": [] })
        );
    }
}
