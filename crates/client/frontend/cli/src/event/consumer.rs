//! Maintains the CLI message log and info panel in response to notifications.
use client_frontend_core::{
    EventImpact, MessageEntry, MessageLevel, MessageLog, Notification, NotificationConsumer,
    Outcome,
};
use game_protocol::{Character, PositionDto};

/// What the info panel currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InfoPanel {
    #[default]
    Empty,
    Cell {
        position: PositionDto,
        character: Option<Box<Character>>,
    },
    Preview {
        name: String,
        before: Box<Character>,
        after: Box<Character>,
    },
}

pub struct CliEventConsumer {
    log: MessageLog,
    info: InfoPanel,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self {
            log,
            info: InfoPanel::Empty,
        }
    }

    pub fn info_panel(&self) -> &InfoPanel {
        &self.info
    }
}

impl NotificationConsumer for CliEventConsumer {
    fn on_notification(&mut self, notification: &Notification) -> EventImpact {
        match notification {
            Notification::GameStarted { info, characters } => {
                self.log.push(MessageEntry::new(
                    format!(
                        "Joined game {} as {} ({} units on the board)",
                        info.id, info.player, characters
                    ),
                    MessageLevel::Highlight,
                ));
            }
            Notification::CharacterInfo {
                position,
                character,
            } => {
                self.info = InfoPanel::Cell {
                    position: *position,
                    character: character.clone(),
                };
            }
            Notification::ActionPreview {
                name,
                before,
                after,
            } => {
                self.info = InfoPanel::Preview {
                    name: name.clone(),
                    before: before.clone(),
                    after: after.clone(),
                };
            }
            Notification::GameEnded { winner, outcome } => {
                let (text, level) = match outcome {
                    Outcome::Victory => (format!("Victory! {} wins.", winner), MessageLevel::Highlight),
                    Outcome::Defeat => (format!("Defeat. {} wins.", winner), MessageLevel::Warning),
                };
                self.log.push(MessageEntry::new(text, level).during(*winner));
                self.log.push_text("Press q to quit.");
                self.info = InfoPanel::Empty;
            }
        }

        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_protocol::{CharacterId, Classification, GameInfo, Player, Properties};

    fn archer() -> Character {
        Character {
            id: CharacterId::new("a1"),
            player: Player::Player2,
            position: PositionDto::new(1, 1),
            classification: Classification::Bow,
            properties: Properties::new(),
        }
    }

    #[test]
    fn start_and_end_are_logged() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        consumer.on_notification(&Notification::GameStarted {
            info: GameInfo::new("g-7", Player::Player1),
            characters: 4,
        });
        consumer.on_notification(&Notification::GameEnded {
            winner: Player::Player2,
            outcome: Outcome::Defeat,
        });

        let texts: Vec<_> = consumer
            .message_log()
            .iter()
            .map(|entry| entry.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Joined game g-7 as Player 1 (4 units on the board)",
                "Defeat. Player 2 wins.",
                "Press q to quit.",
            ]
        );
    }

    #[test]
    fn info_notifications_replace_panel_without_logging() {
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        let impact = consumer.on_notification(&Notification::CharacterInfo {
            position: PositionDto::new(1, 1),
            character: Some(Box::new(archer())),
        });
        assert!(impact.requires_redraw);
        assert!(matches!(
            consumer.info_panel(),
            InfoPanel::Cell { character: Some(_), .. }
        ));

        consumer.on_notification(&Notification::ActionPreview {
            name: "Heal".into(),
            before: Box::new(archer()),
            after: Box::new(archer()),
        });
        assert!(matches!(consumer.info_panel(), InfoPanel::Preview { name, .. } if name == "Heal"));
        assert!(consumer.message_log().is_empty());
    }
}
