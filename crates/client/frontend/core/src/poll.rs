//! Background task that pulls results from the server.
//!
//! The loop never touches the interaction machine. It forwards frames over an
//! mpsc channel, in the order the transport returns them, to whichever task
//! owns the [`GameSession`](crate::GameSession).
use std::sync::Arc;
use std::time::Duration;

use client_transport_core::Transport;
use game_protocol::{GameInfo, ResultFrame};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_retry::strategy::ExponentialBackoff;
use tokio_util::sync::CancellationToken;

use crate::config::PollConfig;

/// Shared stop switch for a poll loop.
///
/// Stopping suppresses further iterations; a poll already in flight is left
/// to finish and its frame is discarded.
#[derive(Clone, Debug, Default)]
pub struct PollControl {
    token: CancellationToken,
}

impl PollControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Stopping poll loop");
        }
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    pub async fn stopped(&self) {
        self.token.cancelled().await;
    }
}

/// Counters reported when the loop exits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub polls: u64,
    pub frames: u64,
    pub failures: u64,
}

pub struct PollLoop {
    transport: Arc<dyn Transport>,
    info: GameInfo,
    config: PollConfig,
    results: mpsc::Sender<ResultFrame>,
    control: PollControl,
}

impl PollLoop {
    pub fn new(
        transport: Arc<dyn Transport>,
        info: GameInfo,
        config: PollConfig,
        results: mpsc::Sender<ResultFrame>,
        control: PollControl,
    ) -> Self {
        Self {
            transport,
            info,
            config,
            results,
            control,
        }
    }

    pub fn control(&self) -> &PollControl {
        &self.control
    }

    pub fn spawn(self) -> JoinHandle<PollSummary> {
        tokio::spawn(self.run())
    }

    /// Runs until stopped or until the receiving side is dropped.
    pub async fn run(self) -> PollSummary {
        let mut summary = PollSummary::default();
        let mut backoff = self.backoff();
        let mut delay = self.config.interval;

        tracing::info!(session = %self.info.id, interval = ?self.config.interval, "Poll loop started");

        loop {
            tokio::select! {
                biased;
                _ = self.control.stopped() => break,
                _ = time::sleep(delay) => {}
            }

            summary.polls += 1;
            let outcome = self.transport.poll(&self.info).await;
            if self.control.is_stopped() {
                break;
            }

            match outcome {
                Ok(Some(frame)) => {
                    backoff = self.backoff();
                    delay = self.config.interval;
                    summary.frames += 1;
                    tracing::debug!(kind = %frame.kind, "Received result");
                    if self.results.send(frame).await.is_err() {
                        tracing::debug!("Result receiver dropped");
                        break;
                    }
                }
                Ok(None) => {
                    backoff = self.backoff();
                    delay = self.config.interval;
                }
                Err(error) => {
                    summary.failures += 1;
                    delay = backoff.next().unwrap_or(self.config.max_backoff);
                    tracing::warn!(%error, retry_in = ?delay, "Poll failed");
                }
            }
        }

        tracing::info!(?summary, "Poll loop stopped");
        summary
    }

    /// Doubling delays starting at twice the poll interval, capped.
    fn backoff(&self) -> ExponentialBackoff {
        let interval_ms = u64::try_from(self.config.interval.as_millis()).unwrap_or(u64::MAX);
        ExponentialBackoff::from_millis(2)
            .factor(interval_ms.max(1))
            .max_delay(self.config.max_backoff.max(Duration::from_millis(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_transport_core::MockTransport;
    use game_protocol::Player;
    use serde_json::json;

    fn config() -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(100),
            max_backoff: Duration::from_millis(1000),
        }
    }

    fn spawn_loop(
        transport: &MockTransport,
        buffer: usize,
    ) -> (PollControl, mpsc::Receiver<ResultFrame>, JoinHandle<PollSummary>) {
        let (tx, rx) = mpsc::channel(buffer);
        let control = PollControl::new();
        let poller = PollLoop::new(
            Arc::new(transport.clone()),
            transport.info().clone(),
            config(),
            tx,
            control.clone(),
        );
        (control, rx, poller.spawn())
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_frames_in_order() {
        let transport = MockTransport::for_player(Player::Player1);
        transport.push_frame(ResultFrame::new("CharacterDefeat", json!({ "characterId": "a" })));
        transport.push_empty();
        transport.push_frame(ResultFrame::new("CharacterDefeat", json!({ "characterId": "b" })));

        let (control, mut rx, handle) = spawn_loop(&transport, 8);

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.data["characterId"], "a");
        assert_eq!(second.data["characterId"], "b");

        control.stop();
        let summary = handle.await.unwrap();
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.failures, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_one_interval_between_polls() {
        let transport = MockTransport::for_player(Player::Player1);
        let (control, _rx, handle) = spawn_loop(&transport, 8);

        time::sleep(Duration::from_millis(350)).await;
        control.stop();
        handle.await.unwrap();

        assert_eq!(transport.poll_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn failures_back_off_and_recover() {
        let transport = MockTransport::for_player(Player::Player1);
        transport.push_failure("connection refused");
        transport.push_failure("connection refused");
        transport.push_frame(ResultFrame::new("PlayerWin", json!({ "player": "Player1" })));

        let (control, mut rx, handle) = spawn_loop(&transport, 8);
        let started = time::Instant::now();

        let frame = rx.recv().await.unwrap();
        // 100ms first poll, then 200ms and 400ms of backoff
        assert_eq!(started.elapsed(), Duration::from_millis(700));
        assert_eq!(frame.kind, "PlayerWin");

        control.stop();
        let summary = handle.await.unwrap();
        assert_eq!(summary.failures, 2);
        assert_eq!(summary.frames, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_prevents_further_polls() {
        let transport = MockTransport::for_player(Player::Player1);
        let (control, _rx, handle) = spawn_loop(&transport, 8);

        control.stop();
        let summary = handle.await.unwrap();
        time::sleep(Duration::from_secs(5)).await;

        assert_eq!(summary.polls, 0);
        assert_eq!(transport.poll_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn exits_when_receiver_is_dropped() {
        let transport = MockTransport::for_player(Player::Player1);
        transport.push_frame(ResultFrame::new("PlayerWin", json!({ "player": "Player2" })));

        let (control, rx, handle) = spawn_loop(&transport, 1);
        drop(rx);

        let summary = handle.await.unwrap();
        assert_eq!(summary.frames, 1);
        assert!(!control.is_stopped());
    }
}
