//! Grid cursor used while the local player picks cells.
use game_protocol::PositionDto;

use crate::board::BoardGeometry;
use crate::input::Input;

/// Single-cell pointer over the board.
///
/// Movement never wraps. When bounds are supplied the position is clamped to
/// them, otherwise the cursor may leave the board and the server decides what
/// an off-board `MoveTo` means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    position: PositionDto,
    visible: bool,
}

impl Cursor {
    pub const fn new(position: PositionDto) -> Self {
        Self {
            position,
            visible: false,
        }
    }

    pub fn position(&self) -> PositionDto {
        self.position
    }

    /// Raw `(row, col)` pair.
    pub fn coordinates(&self) -> (i32, i32) {
        (self.position.row, self.position.col)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Moves one cell in the direction of `input`.
    ///
    /// Returns true when the position changed. Non-directional input is
    /// ignored.
    pub fn move_cursor(&mut self, input: Input, bounds: Option<&BoardGeometry>) -> bool {
        let Some((d_row, d_col)) = input.grid_delta() else {
            return false;
        };

        let mut next = PositionDto::new(
            self.position.row.saturating_add(d_row),
            self.position.col.saturating_add(d_col),
        );
        if let Some(bounds) = bounds {
            next = bounds.clamp(next);
        }

        let moved = next != self.position;
        self.position = next;
        moved
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(PositionDto::ORIGIN)
    }
}
