//! Fire-and-forget notifications for UI layers.
//!
//! The interaction machine publishes on a broadcast channel; frontends
//! subscribe and render whatever they care about. Nobody listening is not an
//! error.
use game_protocol::{Character, GameInfo, Player, PositionDto};
use tokio::sync::broadcast;

/// How the match ended from the local player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub fn for_local(local: Player, winner: Player) -> Self {
        if local == winner {
            Outcome::Victory
        } else {
            Outcome::Defeat
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    GameStarted {
        info: GameInfo,
        characters: usize,
    },
    /// The cell under the cursor changed. `character` is a full snapshot of
    /// the unit standing there, if any.
    CharacterInfo {
        position: PositionDto,
        character: Option<Box<Character>>,
    },
    /// The cursor rests on a unit affected by the pending action.
    ActionPreview {
        name: String,
        before: Box<Character>,
        after: Box<Character>,
    },
    GameEnded {
        winner: Player,
        outcome: Outcome,
    },
}

/// Broadcast sender shared by the session and its consumers.
#[derive(Clone, Debug)]
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn publish(&self, notification: Notification) {
        // No receivers is fine
        let _ = self.sender.send(notification);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
