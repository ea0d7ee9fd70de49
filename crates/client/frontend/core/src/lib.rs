//! Cross-frontend core of the tactics client.
//!
//! Houses the interaction state machine, the result poll loop and the
//! session that ties them to a transport, plus the small UI primitives
//! (cursor, selector, message log) every frontend renders.
pub mod board;
pub mod config;
pub mod cursor;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod frontend;
pub mod input;
pub mod machine;
pub mod message;
pub mod notification;
pub mod outbox;
pub mod poll;
pub mod roster;
pub mod selector;
pub mod session;

pub use board::{BoardGeometry, Placement};
pub use config::{BoardConfig, FrontendConfig, MessageConfig, PollConfig, SessionConfig};
pub use cursor::Cursor;
pub use dispatcher::{Dispatch, dispatch};
pub use error::ClientError;
pub use event::{EventImpact, NotificationConsumer};
pub use frontend::Frontend;
pub use input::Input;
pub use machine::{InteractionMachine, Mode};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use notification::{Notification, NotificationBus, Outcome};
pub use outbox::Outbox;
pub use poll::{PollControl, PollLoop, PollSummary};
pub use roster::{Roster, Unit};
pub use selector::Selector;
pub use session::{Connected, GameSession};
