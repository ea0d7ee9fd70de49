//! Wire-level domain model shared between the tactics client and its server.
//!
//! The server is authoritative: everything in this crate describes values the
//! client receives or sends, never game rules. Modules are organized by
//! direction of travel:
//! - [`result`] server → client frames and their decoded variants
//! - [`message`] client → server commands and their integer wire tags
//! - [`character`] the partially-updatable unit model and its merge rules
pub mod character;
pub mod error;
pub mod message;
pub mod player;
pub mod position;
pub mod result;

pub use character::{Character, CharacterId, CharacterPatch, Classification, Properties};
pub use error::ProtocolError;
pub use message::Message;
pub use player::{GameInfo, Player};
pub use position::{PositionDto, PositionPatch};
pub use result::{
    ActionPreview, BoardSize, CharacterDefeat, CharacterUpdate, PlayerAction,
    PlayerActionSelection, PlayerMoveSelection, PlayerOversee, PlayerWin, ResultFrame,
    ServerResult, StartInfo,
};
