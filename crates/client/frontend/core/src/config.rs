//! Frontend configuration structures and loaders.
//!
//! Settings shared by every frontend: how the client talks to the poll loop,
//! how the board is sized when the server does not say, and how much history
//! the message log keeps.

use std::env;
use std::time::Duration;

use crate::board::BoardGeometry;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub poll: PollConfig,
    pub session: SessionConfig,
    pub board: BoardConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(
        poll: PollConfig,
        session: SessionConfig,
        board: BoardConfig,
        messages: MessageConfig,
    ) -> Self {
        Self {
            poll,
            session,
            board,
            messages,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POLL_INTERVAL_MS` - Delay between result polls (default: 150)
    /// - `POLL_MAX_BACKOFF_MS` - Upper bound for retry delays (default: 5000)
    /// - `START_TIMEOUT_MS` - How long to wait for the start payload (default: 10000)
    /// - `RESULT_BUFFER` - Result channel size (default: 32)
    /// - `MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `BOARD_ROWS` / `BOARD_COLS` - Fallback board size (default: 8 x 8)
    /// - `CLAMP_CURSOR` - Keep the cursor on the board (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("POLL_INTERVAL_MS") {
            config.poll.interval = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read_env::<u64>("POLL_MAX_BACKOFF_MS") {
            config.poll.max_backoff = Duration::from_millis(ms.max(1));
        }

        if let Some(ms) = read_env::<u64>("START_TIMEOUT_MS") {
            config.session.start_timeout = Duration::from_millis(ms);
        }
        if let Some(capacity) = read_env::<usize>("RESULT_BUFFER") {
            config.session.result_buffer = capacity.max(1);
        }

        if let Some(rows) = read_env::<u32>("BOARD_ROWS") {
            config.board.rows = rows.max(1);
        }
        if let Some(cols) = read_env::<u32>("BOARD_COLS") {
            config.board.cols = cols.max(1);
        }
        if let Some(clamp) = read_env_bool("CLAMP_CURSOR") {
            config.board.clamp_cursor = clamp;
        }

        if let Some(capacity) = read_env::<usize>("MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_backoff: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(150),
            max_backoff: Duration::from_millis(5000),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub start_timeout: Duration,
    pub result_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_timeout: Duration::from_secs(10),
            result_buffer: 32,
        }
    }
}

/// Board fallback used when the start payload carries no dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: u32,
    pub cols: u32,
    pub clamp_cursor: bool,
}

impl BoardConfig {
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.rows, self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            clamp_cursor: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
