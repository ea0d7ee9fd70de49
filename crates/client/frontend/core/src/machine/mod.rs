//! Client-side interaction state machine.
//!
//! [`InteractionMachine`] owns whose turn it is, the active [`Mode`] and the
//! local UI state the mode drives (cursor, selector, highlighted cells). The
//! server moves it between modes through results; local input is only
//! interpreted while the local player owns the turn.
//!
//! Result handlers live here, input handling lives in [`input`].
mod input;
mod mode;

use std::collections::HashSet;

use game_protocol::{
    CharacterDefeat, CharacterId, CharacterUpdate, Player, PlayerAction, PlayerActionSelection,
    PlayerMoveSelection, PlayerOversee, PlayerWin, PositionDto,
};

pub use mode::Mode;

use crate::board::BoardGeometry;
use crate::cursor::Cursor;
use crate::notification::{Notification, NotificationBus, Outcome};
use crate::poll::PollControl;
use crate::roster::Roster;
use crate::selector::Selector;

pub struct InteractionMachine {
    local: Player,
    turn_of: Player,
    mode: Mode,
    roster: Roster,
    geometry: BoardGeometry,
    cursor: Cursor,
    clamp_cursor: bool,
    selector: Selector,
    highlights: HashSet<PositionDto>,
    notifications: NotificationBus,
    polling: PollControl,
}

impl InteractionMachine {
    /// Creates an idle machine. The turn starts with the opponent so that no
    /// input is accepted before the server hands the local player a turn.
    pub fn new(
        local: Player,
        roster: Roster,
        geometry: BoardGeometry,
        notifications: NotificationBus,
        polling: PollControl,
    ) -> Self {
        Self {
            local,
            turn_of: local.opponent(),
            mode: Mode::Idle,
            roster,
            geometry,
            cursor: Cursor::default(),
            clamp_cursor: true,
            selector: Selector::new(),
            highlights: HashSet::new(),
            notifications,
            polling,
        }
    }

    pub fn with_cursor_clamp(mut self, clamp: bool) -> Self {
        self.clamp_cursor = clamp;
        self
    }

    pub fn my_turn(&self) -> bool {
        self.local == self.turn_of
    }

    pub fn local_player(&self) -> Player {
        self.local
    }

    pub fn turn_of(&self) -> Player {
        self.turn_of
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn highlights(&self) -> &HashSet<PositionDto> {
        &self.highlights
    }

    pub fn is_highlighted(&self, position: PositionDto) -> bool {
        self.highlights.contains(&position)
    }

    pub fn is_polling(&self) -> bool {
        !self.polling.is_stopped()
    }

    pub fn polling(&self) -> &PollControl {
        &self.polling
    }

    // ========================================================================
    // Result handlers
    // ========================================================================

    pub fn on_player_oversee(&mut self, result: PlayerOversee) {
        if self.ignore_after_game_over(PlayerOversee::KIND) {
            return;
        }

        self.turn_of = result.player;
        self.highlights.clear();
        self.selector.clear();

        if !self.my_turn() {
            tracing::debug!(turn_of = %self.turn_of, "Opponent's turn");
            self.cursor.hide();
            self.mode = Mode::Idle;
            return;
        }

        for id in &result.selectable_character_ids {
            match self.roster.get(id) {
                Some(character) => {
                    self.highlights.insert(character.position);
                }
                None => tracing::debug!(character = %id, "Selectable character not on board"),
            }
        }
        self.cursor.show();
        self.mode = Mode::Oversee {
            selectable: result.selectable_character_ids,
        };
        tracing::info!(selectable = self.highlights.len(), "Your turn");
    }

    pub fn on_player_move_selection(&mut self, result: PlayerMoveSelection) {
        if self.ignore_after_game_over(PlayerMoveSelection::KIND) {
            return;
        }

        self.highlights.clear();
        self.highlights
            .extend(result.available_moves.iter().copied());
        self.mode = Mode::MoveSelection {
            moves: result.available_moves,
        };
    }

    pub fn on_player_action_selection(&mut self, result: PlayerActionSelection) {
        if self.ignore_after_game_over(PlayerActionSelection::KIND) {
            return;
        }

        self.highlights.clear();
        self.selector.set_selections(result.available_actions);
        self.mode = Mode::ActionSelection;
    }

    pub fn on_player_action(&mut self, result: PlayerAction) {
        if self.ignore_after_game_over(PlayerAction::KIND) {
            return;
        }

        self.selector.clear();
        self.highlights.clear();
        for id in &result.selectable_character_ids {
            if let Some(character) = self.roster.get(id) {
                self.highlights.insert(character.position);
            }
        }
        self.mode = Mode::ActionPreview {
            selectable: result.selectable_character_ids,
            preview: result.preview,
        };
    }

    pub fn on_character_update(&mut self, result: CharacterUpdate) {
        let patch = result.character;
        if !self.roster.merge(&patch, &self.geometry) {
            tracing::debug!(character = %patch.id, "Update for unknown character dropped");
        }
    }

    pub fn on_character_defeat(&mut self, result: CharacterDefeat) {
        match self.roster.remove(&result.character_id) {
            Some(character) => {
                // Highlights mark unit cells only in these modes
                if matches!(self.mode, Mode::Oversee { .. } | Mode::ActionPreview { .. }) {
                    self.highlights.remove(&character.position);
                }
                tracing::info!(character = %character.id, "Character defeated");
            }
            None => {
                tracing::debug!(character = %result.character_id, "Defeat for unknown character");
            }
        }
    }

    pub fn on_player_win(&mut self, result: PlayerWin) {
        if self.ignore_after_game_over(PlayerWin::KIND) {
            return;
        }

        self.highlights.clear();
        self.selector.clear();
        self.cursor.hide();
        self.polling.stop();
        self.mode = Mode::GameOver {
            winner: result.player,
        };

        let outcome = Outcome::for_local(self.local, result.player);
        tracing::info!(winner = %result.player, ?outcome, "Game over");
        self.notifications.publish(Notification::GameEnded {
            winner: result.player,
            outcome,
        });
    }

    fn ignore_after_game_over(&self, kind: &str) -> bool {
        if self.mode.is_game_over() {
            tracing::debug!(kind, "Result after game over ignored");
            return true;
        }
        false
    }

    // ========================================================================
    // Cursor helpers shared by the input handlers
    // ========================================================================

    fn selectable_at_cursor(&self, selectable: &[CharacterId]) -> Option<CharacterId> {
        let character = self.roster.character_at(self.cursor.position())?;
        selectable
            .iter()
            .find(|id| **id == character.id)
            .cloned()
    }

    fn publish_cell_info(&self) {
        let position = self.cursor.position();
        self.notifications.publish(Notification::CharacterInfo {
            position,
            character: self.roster.character_at(position).cloned().map(Box::new),
        });
    }
}
