use game_protocol::{ActionPreview, CharacterId, Player, PositionDto};

/// What local input currently means.
///
/// Exactly one mode is active; installing a new one replaces the previous
/// mode and everything it carried.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Mode {
    /// Waiting for the server, or the opponent is playing.
    #[default]
    Idle,
    /// Picking which unit to act with.
    Oversee { selectable: Vec<CharacterId> },
    /// Picking a destination for the selected unit.
    MoveSelection { moves: Vec<PositionDto> },
    /// Picking an action from the selector.
    ActionSelection,
    /// Picking the target of the chosen action.
    ActionPreview {
        selectable: Vec<CharacterId>,
        preview: Option<ActionPreview>,
    },
    GameOver { winner: Player },
}

impl Mode {
    pub const fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Oversee { .. } => "Oversee",
            Mode::MoveSelection { .. } => "MoveSelection",
            Mode::ActionSelection => "ActionSelection",
            Mode::ActionPreview { .. } => "ActionPreview",
            Mode::GameOver { .. } => "GameOver",
        }
    }

    pub const fn is_game_over(&self) -> bool {
        matches!(self, Mode::GameOver { .. })
    }
}
