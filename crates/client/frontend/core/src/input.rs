//! Abstract input alphabet shared by every frontend.
//!
//! Frontends translate raw device events into [`Input`]; the interaction
//! machine never sees key codes.

/// The complete set of symbols the interaction machine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

impl Input {
    pub const ALL: [Input; 6] = [
        Input::Up,
        Input::Down,
        Input::Left,
        Input::Right,
        Input::Enter,
        Input::Escape,
    ];

    pub const fn is_directional(self) -> bool {
        matches!(self, Input::Up | Input::Down | Input::Left | Input::Right)
    }

    /// Grid step as (row, col). Up raises the row, Right raises the column.
    pub const fn grid_delta(self) -> Option<(i32, i32)> {
        match self {
            Input::Up => Some((1, 0)),
            Input::Down => Some((-1, 0)),
            Input::Left => Some((0, -1)),
            Input::Right => Some((0, 1)),
            Input::Enter | Input::Escape => None,
        }
    }

    pub const fn inverse(self) -> Self {
        match self {
            Input::Up => Input::Down,
            Input::Down => Input::Up,
            Input::Left => Input::Right,
            Input::Right => Input::Left,
            other => other,
        }
    }
}
