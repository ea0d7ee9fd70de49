//! Per-mode interpretation of local input.
use game_protocol::{ActionPreview, Message};

use super::{InteractionMachine, Mode};
use crate::input::Input;
use crate::notification::Notification;

impl InteractionMachine {
    /// Interprets one input symbol in the current mode.
    ///
    /// Returns the message to send to the server, if the input produced one.
    /// Input outside the local player's turn is dropped without touching any
    /// state.
    pub fn handle_input(&mut self, input: Input) -> Option<Message> {
        if !self.my_turn() {
            tracing::trace!(?input, turn_of = %self.turn_of, "Input outside own turn");
            return None;
        }

        match &self.mode {
            Mode::Idle | Mode::GameOver { .. } => None,

            Mode::Oversee { selectable } => match input {
                Input::Enter => self
                    .selectable_at_cursor(selectable)
                    .map(|id| Message::SelectCharacters(vec![id])),
                Input::Escape => None,
                _ => {
                    self.cursor
                        .move_cursor(input, self.clamp_cursor.then_some(&self.geometry));
                    self.publish_cell_info();
                    None
                }
            },

            Mode::MoveSelection { .. } => match input {
                Input::Enter => Some(Message::MoveTo(self.cursor.position())),
                Input::Escape => Some(Message::Cancel),
                _ => {
                    self.cursor
                        .move_cursor(input, self.clamp_cursor.then_some(&self.geometry));
                    self.publish_cell_info();
                    None
                }
            },

            Mode::ActionSelection => match input {
                Input::Enter => self
                    .selector
                    .current_selection()
                    .map(|name| Message::SelectAction(name.to_string())),
                Input::Up | Input::Down => {
                    self.selector.move_cursor(input);
                    None
                }
                Input::Left | Input::Right | Input::Escape => None,
            },

            Mode::ActionPreview {
                selectable,
                preview,
            } => match input {
                Input::Enter => self
                    .selectable_at_cursor(selectable)
                    .map(|id| Message::ConfirmAction(vec![id])),
                Input::Escape => Some(Message::CancelAction),
                _ => {
                    self.cursor
                        .move_cursor(input, self.clamp_cursor.then_some(&self.geometry));
                    if !self.publish_preview(preview.as_ref()) {
                        self.publish_cell_info();
                    }
                    None
                }
            },
        }
    }

    /// Publishes before/after snapshots when the unit under the cursor is
    /// affected by the pending action.
    fn publish_preview(&self, preview: Option<&ActionPreview>) -> bool {
        let Some(preview) = preview else {
            return false;
        };
        let Some(before) = self.roster.character_at(self.cursor.position()) else {
            return false;
        };
        let Some(patch) = preview.result_for(&before.id) else {
            return false;
        };

        self.notifications.publish(Notification::ActionPreview {
            name: preview.name.clone(),
            before: Box::new(before.clone()),
            after: Box::new(before.merged(patch)),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use game_protocol::{
        Character, CharacterDefeat, CharacterId, CharacterPatch, CharacterUpdate, Classification,
        Player, PlayerAction, PlayerActionSelection, PlayerMoveSelection, PlayerOversee, PlayerWin,
        PositionDto, Properties,
    };
    use serde_json::json;
    use tokio::sync::broadcast::Receiver;

    use super::*;
    use crate::board::BoardGeometry;
    use crate::notification::{NotificationBus, Outcome};
    use crate::poll::PollControl;
    use crate::roster::Roster;

    fn unit(id: &str, player: Player, row: i32, col: i32) -> Character {
        let mut properties = Properties::new();
        properties.insert("hp".to_string(), json!(10));
        Character {
            id: CharacterId::new(id),
            player,
            position: PositionDto::new(row, col),
            classification: Classification::Sword,
            properties,
        }
    }

    fn machine() -> (InteractionMachine, Receiver<Notification>) {
        let geometry = BoardGeometry::new(8, 8);
        let roster = Roster::new(
            [
                unit("c1", Player::Player1, 0, 0),
                unit("c2", Player::Player1, 0, 1),
                unit("e1", Player::Player2, 2, 0),
            ],
            &geometry,
        );
        let bus = NotificationBus::new();
        let rx = bus.subscribe();
        let machine =
            InteractionMachine::new(Player::Player1, roster, geometry, bus, PollControl::new());
        (machine, rx)
    }

    fn oversee(player: Player, ids: &[&str]) -> PlayerOversee {
        PlayerOversee {
            player,
            selectable_character_ids: ids.iter().map(|id| CharacterId::new(*id)).collect(),
        }
    }

    fn drain(rx: &mut Receiver<Notification>) -> Vec<Notification> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn fresh_machine_is_idle_and_not_my_turn() {
        let (mut machine, _rx) = machine();

        assert!(!machine.my_turn());
        assert_eq!(machine.mode(), &Mode::Idle);
        for input in Input::ALL {
            assert_eq!(machine.handle_input(input), None);
        }
        assert_eq!(machine.cursor().position(), PositionDto::ORIGIN);
    }

    #[test]
    fn oversee_for_opponent_stays_idle() {
        let (mut machine, _rx) = machine();

        machine.on_player_oversee(oversee(Player::Player2, &["e1"]));

        assert!(!machine.my_turn());
        assert_eq!(machine.mode(), &Mode::Idle);
        assert!(machine.highlights().is_empty());
        assert_eq!(machine.handle_input(Input::Enter), None);
    }

    #[test]
    fn oversee_highlights_selectable_units() {
        let (mut machine, _rx) = machine();

        machine.on_player_oversee(oversee(Player::Player1, &["c1", "c2", "missing"]));

        assert!(machine.my_turn());
        assert!(machine.cursor().is_visible());
        assert_eq!(machine.highlights().len(), 2);
        assert!(machine.is_highlighted(PositionDto::new(0, 1)));
    }

    #[test]
    fn enter_on_non_selectable_cell_sends_nothing() {
        let (mut machine, _rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c2"]));

        // Cursor rests on c1, which is not selectable
        assert_eq!(machine.handle_input(Input::Enter), None);

        machine.handle_input(Input::Right);
        assert_eq!(
            machine.handle_input(Input::Enter),
            Some(Message::SelectCharacters(vec!["c2".into()]))
        );
    }

    #[test]
    fn cursor_moves_publish_cell_info() {
        let (mut machine, mut rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));

        machine.handle_input(Input::Right);
        machine.handle_input(Input::Up);

        let notifications = drain(&mut rx);
        assert_eq!(notifications.len(), 2);
        let Notification::CharacterInfo {
            position,
            character,
        } = &notifications[0]
        else {
            panic!("expected CharacterInfo");
        };
        assert_eq!(*position, PositionDto::new(0, 1));
        assert_eq!(character.as_ref().map(|c| c.id.as_str()), Some("c2"));
        assert!(matches!(
            &notifications[1],
            Notification::CharacterInfo { character: None, .. }
        ));
    }

    #[test]
    fn escape_in_oversee_is_ignored() {
        let (mut machine, mut rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        drain(&mut rx);

        assert_eq!(machine.handle_input(Input::Escape), None);

        assert_eq!(machine.mode().name(), "Oversee");
        assert_eq!(machine.cursor().position(), PositionDto::ORIGIN);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn move_selection_replaces_highlights() {
        let (mut machine, _rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1", "c2"]));

        machine.on_player_move_selection(PlayerMoveSelection {
            available_moves: vec![PositionDto::new(1, 0), PositionDto::new(1, 1)],
        });

        assert_eq!(machine.mode().name(), "MoveSelection");
        assert!(!machine.is_highlighted(PositionDto::new(0, 1)));
        assert!(machine.is_highlighted(PositionDto::new(1, 1)));
        assert_eq!(machine.handle_input(Input::Escape), Some(Message::Cancel));
    }

    #[test]
    fn action_selection_drives_selector_only() {
        let (mut machine, _rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        machine.on_player_action_selection(PlayerActionSelection {
            available_actions: vec!["Attack".into(), "Wait".into()],
        });

        assert!(machine.highlights().is_empty());
        assert_eq!(machine.handle_input(Input::Escape), None);
        assert_eq!(machine.handle_input(Input::Right), None);
        assert_eq!(machine.cursor().position(), PositionDto::ORIGIN);

        machine.handle_input(Input::Down);
        assert_eq!(
            machine.handle_input(Input::Enter),
            Some(Message::SelectAction("Wait".into()))
        );
    }

    #[test]
    fn action_selection_with_no_actions_sends_nothing() {
        let (mut machine, _rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        machine.on_player_action_selection(PlayerActionSelection {
            available_actions: Vec::new(),
        });

        assert_eq!(machine.handle_input(Input::Enter), None);
    }

    #[test]
    fn action_preview_publishes_before_and_after() {
        let (mut machine, mut rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        let mut results = BTreeMap::new();
        results.insert(
            CharacterId::new("e1"),
            CharacterPatch::empty("e1".into()).with_property("hp", json!(4)),
        );
        machine.on_player_action(PlayerAction {
            selectable_character_ids: vec!["e1".into()],
            preview: Some(ActionPreview {
                name: "Slash".into(),
                results,
            }),
        });
        assert!(machine.selector().is_empty());
        drain(&mut rx);

        machine.handle_input(Input::Up);
        machine.handle_input(Input::Up);

        let notifications = drain(&mut rx);
        let Some(Notification::ActionPreview {
            name,
            before,
            after,
        }) = notifications.last()
        else {
            panic!("expected ActionPreview, got {:?}", notifications);
        };
        assert_eq!(name, "Slash");
        assert_eq!(before.property("hp"), Some(&json!(10)));
        assert_eq!(after.property("hp"), Some(&json!(4)));
        // Preview never touches the authoritative copy
        assert_eq!(
            machine.roster().get(&"e1".into()).unwrap().property("hp"),
            Some(&json!(10))
        );

        assert_eq!(
            machine.handle_input(Input::Enter),
            Some(Message::ConfirmAction(vec!["e1".into()]))
        );
        assert_eq!(machine.handle_input(Input::Escape), Some(Message::CancelAction));
    }

    #[test]
    fn preview_falls_back_to_cell_info_outside_results() {
        let (mut machine, mut rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        let mut results = BTreeMap::new();
        results.insert(
            CharacterId::new("e1"),
            CharacterPatch::empty("e1".into()).with_property("hp", json!(4)),
        );
        machine.on_player_action(PlayerAction {
            selectable_character_ids: vec!["e1".into(), "c2".into()],
            preview: Some(ActionPreview {
                name: "Slash".into(),
                results,
            }),
        });
        drain(&mut rx);

        // c2 is selectable but unaffected by the action
        machine.handle_input(Input::Right);

        let notifications = drain(&mut rx);
        let [Notification::CharacterInfo { position, character }] = notifications.as_slice() else {
            panic!("expected a single CharacterInfo, got {:?}", notifications);
        };
        assert_eq!(*position, PositionDto::new(0, 1));
        assert_eq!(character.as_ref().map(|c| c.id.as_str()), Some("c2"));
    }

    #[test]
    fn action_without_preview_reports_cell_info() {
        let (mut machine, mut rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        machine.on_player_action(PlayerAction {
            selectable_character_ids: vec!["c2".into()],
            preview: None,
        });
        drain(&mut rx);

        machine.handle_input(Input::Right);

        assert!(matches!(
            drain(&mut rx).as_slice(),
            [Notification::CharacterInfo { character: Some(character), .. }]
                if character.id.as_str() == "c2"
        ));
        assert_eq!(
            machine.handle_input(Input::Enter),
            Some(Message::ConfirmAction(vec!["c2".into()]))
        );
    }

    #[test]
    fn defeat_during_move_selection_keeps_destination_highlight() {
        let (mut machine, _rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        machine.on_player_move_selection(PlayerMoveSelection {
            available_moves: vec![PositionDto::new(1, 0), PositionDto::new(2, 0)],
        });

        machine.on_character_defeat(CharacterDefeat {
            character_id: "e1".into(),
        });

        assert!(machine.roster().get(&"e1".into()).is_none());
        assert!(machine.is_highlighted(PositionDto::new(2, 0)));
        assert!(machine.is_highlighted(PositionDto::new(1, 0)));
    }

    #[test]
    fn defeat_removes_unit_and_its_highlight() {
        let (mut machine, _rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1", "c2"]));

        machine.on_character_defeat(CharacterDefeat {
            character_id: "c2".into(),
        });

        assert!(machine.roster().get(&"c2".into()).is_none());
        assert!(!machine.is_highlighted(PositionDto::new(0, 1)));
        assert!(machine.is_highlighted(PositionDto::ORIGIN));
    }

    #[test]
    fn update_moves_unit() {
        let (mut machine, _rx) = machine();

        machine.on_character_update(CharacterUpdate {
            character: CharacterPatch::empty("c1".into()).with_position(PositionDto::new(5, 5)),
        });

        let unit = machine.roster().unit(&"c1".into()).unwrap();
        assert_eq!(unit.character.position, PositionDto::new(5, 5));
        assert_eq!(unit.placement, machine.geometry().project(PositionDto::new(5, 5)));
    }

    #[test]
    fn win_stops_polling_and_ignores_later_results() {
        let (mut machine, mut rx) = machine();
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        drain(&mut rx);

        machine.on_player_win(PlayerWin {
            player: Player::Player2,
        });
        machine.on_player_win(PlayerWin {
            player: Player::Player2,
        });
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));

        assert!(!machine.is_polling());
        assert!(!machine.cursor().is_visible());
        assert_eq!(
            machine.mode(),
            &Mode::GameOver {
                winner: Player::Player2
            }
        );
        assert_eq!(
            drain(&mut rx),
            vec![Notification::GameEnded {
                winner: Player::Player2,
                outcome: Outcome::Defeat,
            }]
        );
    }

    #[test]
    fn unclamped_cursor_may_leave_board() {
        let (machine, _rx) = machine();
        let mut machine = machine.with_cursor_clamp(false);
        machine.on_player_oversee(oversee(Player::Player1, &["c1"]));
        machine.on_player_move_selection(PlayerMoveSelection {
            available_moves: Vec::new(),
        });

        machine.handle_input(Input::Down);

        assert_eq!(
            machine.handle_input(Input::Enter),
            Some(Message::MoveTo(PositionDto::new(-1, 0)))
        );
    }
}
