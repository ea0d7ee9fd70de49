//! Grid coordinates exchanged with the server.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Board cell expressed as (row, col).
///
/// Two positions are equal iff both fields match; this is also the key used
/// for every "which cell" lookup on the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PositionDto {
    pub row: i32,
    pub col: i32,
}

impl PositionDto {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Applies a sparse position update; omitted coordinates are kept.
    pub fn merge(&mut self, patch: &PositionPatch) {
        if let Some(row) = patch.row {
            self.row = row;
        }
        if let Some(col) = patch.col {
            self.col = col;
        }
    }
}

impl fmt::Display for PositionDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Partial position as it appears inside a character update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<i32>,
}

impl From<PositionDto> for PositionPatch {
    fn from(position: PositionDto) -> Self {
        Self {
            row: Some(position.row),
            col: Some(position.col),
        }
    }
}
