//! Mock transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use game_protocol::{GameInfo, Message, Player, ResultFrame};

use crate::traits::{Transport, TransportError};

enum Scripted {
    Frame(ResultFrame),
    Empty,
    Failure(String),
}

#[derive(Default)]
struct MockState {
    script: VecDeque<Scripted>,
    sent: Vec<(Message, GameInfo)>,
    polls: usize,
    fail_init: Option<String>,
}

/// Mock server for testing without network.
///
/// Polls pop a scripted queue (an exhausted queue answers "no result yet")
/// and every sent message is recorded for later inspection.
#[derive(Clone)]
pub struct MockTransport {
    info: GameInfo,
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new(info: GameInfo) -> Self {
        Self {
            info,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    pub fn for_player(player: Player) -> Self {
        Self::new(GameInfo::new("mock-session", player))
    }

    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    /// Queues a frame to be returned by a future poll.
    pub fn push_frame(&self, frame: ResultFrame) {
        self.state().script.push_back(Scripted::Frame(frame));
    }

    /// Queues an explicit "no result yet" answer.
    pub fn push_empty(&self) {
        self.state().script.push_back(Scripted::Empty);
    }

    /// Queues a failing poll.
    pub fn push_failure(&self, reason: impl Into<String>) {
        self.state()
            .script
            .push_back(Scripted::Failure(reason.into()));
    }

    pub fn fail_init(&self, reason: impl Into<String>) {
        self.state().fail_init = Some(reason.into());
    }

    /// Messages sent so far, in order.
    pub fn sent(&self) -> Vec<Message> {
        self.state()
            .sent
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    pub fn poll_count(&self) -> usize {
        self.state().polls
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn init(&self) -> Result<GameInfo, TransportError> {
        match self.state().fail_init.take() {
            Some(reason) => Err(TransportError::NetworkError(reason)),
            None => Ok(self.info.clone()),
        }
    }

    async fn poll(&self, info: &GameInfo) -> Result<Option<ResultFrame>, TransportError> {
        let mut state = self.state();
        state.polls += 1;

        if info.id != self.info.id {
            return Err(TransportError::Rejected {
                status: 404,
                body: format!("unknown session {}", info.id),
            });
        }

        match state.script.pop_front() {
            Some(Scripted::Frame(frame)) => Ok(Some(frame)),
            Some(Scripted::Empty) | None => Ok(None),
            Some(Scripted::Failure(reason)) => Err(TransportError::NetworkError(reason)),
        }
    }

    async fn update(&self, message: &Message, info: &GameInfo) -> Result<(), TransportError> {
        tracing::debug!(tag = message.tag(), "Mock transport recorded {}", message.name());
        self.state().sent.push((message.clone(), info.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_transport_script() {
        let transport = MockTransport::for_player(Player::Player2);
        let info = transport.init().await.unwrap();
        assert_eq!(info.player, Player::Player2);

        transport.push_empty();
        transport.push_frame(ResultFrame::new("PlayerWin", json!({ "player": "Player2" })));
        transport.push_failure("connection reset");

        assert!(transport.poll(&info).await.unwrap().is_none());
        let frame = transport.poll(&info).await.unwrap().unwrap();
        assert_eq!(frame.kind, "PlayerWin");
        assert!(matches!(
            transport.poll(&info).await,
            Err(TransportError::NetworkError(_))
        ));

        // Exhausted script keeps answering "nothing yet"
        assert!(transport.poll(&info).await.unwrap().is_none());
        assert_eq!(transport.poll_count(), 4);
    }

    #[tokio::test]
    async fn test_mock_transport_records_messages() {
        let transport = MockTransport::for_player(Player::Player1);
        let info = transport.init().await.unwrap();

        transport.update(&Message::Cancel, &info).await.unwrap();
        transport
            .update(&Message::SelectAction("Attack".into()), &info)
            .await
            .unwrap();

        assert_eq!(
            transport.sent(),
            vec![Message::Cancel, Message::SelectAction("Attack".into())]
        );
    }

    #[tokio::test]
    async fn test_mock_transport_init_failure() {
        let transport = MockTransport::for_player(Player::Player1);
        transport.fail_init("server down");

        assert!(transport.init().await.is_err());
        // Failure is one-shot
        assert!(transport.init().await.is_ok());
    }
}
