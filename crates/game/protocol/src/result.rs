//! Server → client results.
//!
//! Frames arrive as `{"type": "<Variant>", "data": {...}}` and are decoded
//! exactly once into the closed [`ServerResult`] enum. Handlers then match on
//! the enum, so adding a variant is a compile error everywhere it matters.
use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::character::{Character, CharacterId, CharacterPatch};
use crate::error::{ProtocolError, Result};
use crate::player::Player;
use crate::position::PositionDto;

/// Undecoded result as returned by the transport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultFrame {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl ResultFrame {
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Decodes an in-game result.
    pub fn decode(self) -> Result<ServerResult> {
        let ResultFrame { kind, data } = self;
        let result = match kind.as_str() {
            PlayerOversee::KIND => ServerResult::PlayerOversee(payload(&kind, data)?),
            PlayerMoveSelection::KIND => ServerResult::PlayerMoveSelection(payload(&kind, data)?),
            PlayerActionSelection::KIND => {
                ServerResult::PlayerActionSelection(payload(&kind, data)?)
            }
            PlayerAction::KIND => ServerResult::PlayerAction(payload(&kind, data)?),
            CharacterUpdate::KIND => ServerResult::CharacterUpdate(payload(&kind, data)?),
            CharacterDefeat::KIND => ServerResult::CharacterDefeat(payload(&kind, data)?),
            PlayerWin::KIND => ServerResult::PlayerWin(payload(&kind, data)?),
            _ => return Err(ProtocolError::UnknownVariant(kind)),
        };
        Ok(result)
    }

    /// Decodes the first frame of a session, which must be a start payload.
    pub fn decode_start(self) -> Result<StartInfo> {
        if self.kind != StartInfo::KIND {
            return Err(ProtocolError::NotAStartPayload(self.kind));
        }
        payload(StartInfo::KIND, self.data)
    }
}

fn payload<T: DeserializeOwned>(kind: &str, data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|source| ProtocolError::Malformed {
        kind: kind.to_string(),
        source,
    })
}

/// Decoded server result.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerResult {
    PlayerOversee(PlayerOversee),
    PlayerMoveSelection(PlayerMoveSelection),
    PlayerActionSelection(PlayerActionSelection),
    PlayerAction(PlayerAction),
    CharacterUpdate(CharacterUpdate),
    CharacterDefeat(CharacterDefeat),
    PlayerWin(PlayerWin),
}

impl ServerResult {
    pub fn kind(&self) -> &'static str {
        match self {
            ServerResult::PlayerOversee(_) => PlayerOversee::KIND,
            ServerResult::PlayerMoveSelection(_) => PlayerMoveSelection::KIND,
            ServerResult::PlayerActionSelection(_) => PlayerActionSelection::KIND,
            ServerResult::PlayerAction(_) => PlayerAction::KIND,
            ServerResult::CharacterUpdate(_) => CharacterUpdate::KIND,
            ServerResult::CharacterDefeat(_) => CharacterDefeat::KIND,
            ServerResult::PlayerWin(_) => PlayerWin::KIND,
        }
    }
}

/// A player may pick one of `selectable_character_ids` to act with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOversee {
    pub player: Player,
    #[serde(default)]
    pub selectable_character_ids: Vec<CharacterId>,
}

impl PlayerOversee {
    pub const KIND: &'static str = "PlayerOversee";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMoveSelection {
    #[serde(default)]
    pub available_moves: Vec<PositionDto>,
}

impl PlayerMoveSelection {
    pub const KIND: &'static str = "PlayerMoveSelection";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerActionSelection {
    #[serde(default)]
    pub available_actions: Vec<String>,
}

impl PlayerActionSelection {
    pub const KIND: &'static str = "PlayerActionSelection";
}

/// Target selection for an already chosen action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAction {
    #[serde(default)]
    pub selectable_character_ids: Vec<CharacterId>,
    #[serde(default)]
    pub preview: Option<ActionPreview>,
}

impl PlayerAction {
    pub const KIND: &'static str = "PlayerAction";
}

/// Speculative outcome of an action, keyed by the affected character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionPreview {
    pub name: String,
    #[serde(default)]
    pub results: BTreeMap<CharacterId, CharacterPatch>,
}

impl ActionPreview {
    pub fn result_for(&self, id: &CharacterId) -> Option<&CharacterPatch> {
        self.results.get(id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterUpdate {
    pub character: CharacterPatch,
}

impl CharacterUpdate {
    pub const KIND: &'static str = "CharacterUpdate";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDefeat {
    pub character_id: CharacterId,
}

impl CharacterDefeat {
    pub const KIND: &'static str = "CharacterDefeat";
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerWin {
    pub player: Player,
}

impl PlayerWin {
    pub const KIND: &'static str = "PlayerWin";
}

/// Initial roster sent once when the session begins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartInfo {
    #[serde(default)]
    pub characters: Vec<CharacterEntry>,
    #[serde(default)]
    pub board: Option<BoardSize>,
}

impl StartInfo {
    pub const KIND: &'static str = "GameStarted";

    pub fn into_characters(self) -> impl Iterator<Item = Character> {
        self.characters.into_iter().map(|entry| entry.character)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub character: Character,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub rows: u32,
    pub cols: u32,
}
