//! Routes decoded server results to the interaction machine.
use game_protocol::{ResultFrame, ServerResult};

use crate::machine::InteractionMachine;

/// What happened to a frame handed to [`dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Applied(&'static str),
    Dropped,
}

/// Decodes `frame` and runs exactly one handler.
///
/// Frames that fail to decode are logged and dropped; the caller keeps
/// polling either way.
pub fn dispatch(machine: &mut InteractionMachine, frame: ResultFrame) -> Dispatch {
    let kind = frame.kind.clone();
    let result = match frame.decode() {
        Ok(result) => result,
        Err(error) => {
            tracing::error!(%kind, %error, "Dropping result frame");
            return Dispatch::Dropped;
        }
    };

    let applied = result.kind();
    tracing::debug!(kind = applied, mode = machine.mode().name(), "Applying result");

    match result {
        ServerResult::PlayerOversee(result) => machine.on_player_oversee(result),
        ServerResult::PlayerMoveSelection(result) => machine.on_player_move_selection(result),
        ServerResult::PlayerActionSelection(result) => machine.on_player_action_selection(result),
        ServerResult::PlayerAction(result) => machine.on_player_action(result),
        ServerResult::CharacterUpdate(result) => machine.on_character_update(result),
        ServerResult::CharacterDefeat(result) => machine.on_character_defeat(result),
        ServerResult::PlayerWin(result) => machine.on_player_win(result),
    }

    Dispatch::Applied(applied)
}
