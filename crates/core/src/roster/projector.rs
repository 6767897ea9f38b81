//! View-state projector for the roster fetch operation
//!
//! Holds the latest-known roster plus its row projection and republishes
//! state changes and errors on two independent channels. The roster
//! channel has latest-value semantics (new subscribers immediately see
//! the most recent roster); the error channel is fire-once with no
//! replay. Consumers are responsible for hopping to their presentation
//! context before touching UI-adjacent state.

use std::sync::Arc;

use futures::StreamExt;
use multisync_domain::constants::ERROR_EVENT_CAPACITY;
use multisync_domain::{FetchError, Member, Roster, RosterRow};
use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::error;

use super::use_case::RosterUseCase;

#[derive(Default)]
struct ProjectorState {
    roster: Roster,
    rows: Vec<RosterRow>,
}

/// Projects use-case results into observable presentation state.
///
/// The held roster and its row projection are the only mutable shared
/// state in the pipeline; both live behind one mutex and are replaced
/// together, so no subscriber ever observes them mid-update. Concurrent
/// refresh triggers race freely - there is no in-flight deduplication.
pub struct RosterProjector {
    use_case: Arc<dyn RosterUseCase>,
    state: Mutex<ProjectorState>,
    roster_tx: watch::Sender<Roster>,
    error_tx: broadcast::Sender<FetchError>,
}

impl RosterProjector {
    /// Create a projector with an empty roster and empty row projection.
    pub fn new(use_case: Arc<dyn RosterUseCase>) -> Self {
        let (roster_tx, _) = watch::channel(Roster::default());
        let (error_tx, _) = broadcast::channel(ERROR_EVENT_CAPACITY);

        Self { use_case, state: Mutex::new(ProjectorState::default()), roster_tx, error_tx }
    }

    /// Trigger a fetch in the suspendable-task style.
    pub async fn refresh(&self) {
        match self.use_case.execute().await {
            Ok(roster) => self.apply_roster(roster),
            Err(err) => self.publish_error(err),
        }
    }

    /// Trigger a fetch in the callback style.
    ///
    /// The result is applied on whatever execution context the fetch
    /// completes on.
    pub fn refresh_with_callback(self: &Arc<Self>) {
        let projector = Arc::clone(self);
        self.use_case.execute_with(Box::new(move |result| match result {
            Ok(roster) => projector.apply_roster(roster),
            Err(err) => projector.publish_error(err),
        }));
    }

    /// Trigger a fetch in the one-shot-stream style.
    ///
    /// Returns the handle of the task driving the subscription; dropping
    /// it detaches the task without cancelling the fetch.
    pub fn refresh_with_stream(self: &Arc<Self>) -> JoinHandle<()> {
        let projector = Arc::clone(self);
        let mut stream = self.use_case.execute_stream();

        tokio::spawn(async move {
            if let Some(result) = stream.next().await {
                match result {
                    Ok(roster) => projector.apply_roster(roster),
                    Err(err) => projector.publish_error(err),
                }
            }
        })
    }

    /// Subscribe to roster changes; the receiver immediately holds the
    /// most recent roster.
    pub fn subscribe_roster(&self) -> watch::Receiver<Roster> {
        self.roster_tx.subscribe()
    }

    /// Subscribe to fetch errors; past events are not replayed.
    pub fn subscribe_errors(&self) -> broadcast::Receiver<FetchError> {
        self.error_tx.subscribe()
    }

    /// Number of members in the latest-known roster.
    pub fn member_count(&self) -> usize {
        self.state.lock().roster.members.len()
    }

    /// The member at `index` in the latest-known roster.
    ///
    /// Index-based lookup reads the backing member list, not the row
    /// projection.
    pub fn member_at(&self, index: usize) -> Option<Member> {
        self.state.lock().roster.members.get(index).cloned()
    }

    /// Snapshot of the current row projection.
    pub fn rows(&self) -> Vec<RosterRow> {
        self.state.lock().rows.clone()
    }

    fn apply_roster(&self, roster: Roster) {
        let mut state = self.state.lock();
        state.rows = roster.members.iter().map(RosterRow::from).collect();
        state.roster = roster;
        // Emit while the lock is held: no subscriber may observe the new
        // roster before the row projection matches it.
        let _ = self.roster_tx.send_replace(state.roster.clone());
    }

    fn publish_error(&self, err: FetchError) {
        error!(error = %err, "roster refresh failed");
        let _ = self.error_tx.send(err);
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use futures::stream;
    use multisync_domain::Result;

    use super::*;
    use crate::roster::ports::{RosterCallback, RosterStream};

    struct StubUseCase {
        outcome: Mutex<Result<Roster>>,
    }

    impl StubUseCase {
        fn new(outcome: Result<Roster>) -> Self {
            Self { outcome: Mutex::new(outcome) }
        }

        fn set(&self, outcome: Result<Roster>) {
            *self.outcome.lock() = outcome;
        }

        fn outcome(&self) -> Result<Roster> {
            self.outcome.lock().clone()
        }
    }

    #[async_trait]
    impl RosterUseCase for StubUseCase {
        async fn execute(&self) -> Result<Roster> {
            self.outcome()
        }

        fn execute_with(&self, callback: RosterCallback) {
            callback(self.outcome());
        }

        fn execute_stream(&self) -> RosterStream {
            let outcome = self.outcome();
            Box::pin(stream::once(async move { outcome }))
        }
    }

    fn sample_roster() -> Roster {
        Roster {
            members: vec![
                Member {
                    activity_name: "A".into(),
                    name: "Ann".into(),
                    personality_code: "INTJ".into(),
                },
                Member {
                    activity_name: "B".into(),
                    name: "Bea".into(),
                    personality_code: "ENFP".into(),
                },
            ],
        }
    }

    fn projector_with(outcome: Result<Roster>) -> Arc<RosterProjector> {
        Arc::new(RosterProjector::new(Arc::new(StubUseCase::new(outcome))))
    }

    #[tokio::test]
    async fn refresh_success_updates_state_and_emits() {
        let projector = projector_with(Ok(sample_roster()));
        let mut roster_rx = projector.subscribe_roster();

        projector.refresh().await;

        assert!(roster_rx.has_changed().unwrap());
        assert_eq!(*roster_rx.borrow_and_update(), sample_roster());
        assert_eq!(projector.member_count(), 2);
        assert_eq!(projector.member_at(1).unwrap().name, "Bea");
        assert_eq!(projector.rows()[0].display_name, "Ann");
    }

    #[tokio::test]
    async fn refresh_failure_leaves_state_untouched() {
        let stub = Arc::new(StubUseCase::new(Ok(sample_roster())));
        let projector = Arc::new(RosterProjector::new(stub.clone()));
        projector.refresh().await;
        let before_rows = projector.rows();

        stub.set(Err(FetchError::Transport));
        let mut error_rx = projector.subscribe_errors();
        projector.refresh().await;

        assert_eq!(error_rx.try_recv().unwrap(), FetchError::Transport);
        assert_eq!(projector.member_count(), 2);
        assert_eq!(projector.rows(), before_rows);
        assert_eq!(projector.member_at(0).unwrap().name, "Ann");
    }

    #[tokio::test]
    async fn refresh_failure_emits_error_event_only() {
        let projector = projector_with(Err(FetchError::StatusRejected));
        let mut roster_rx = projector.subscribe_roster();
        let mut error_rx = projector.subscribe_errors();

        projector.refresh().await;

        assert_eq!(error_rx.try_recv().unwrap(), FetchError::StatusRejected);
        assert!(!roster_rx.has_changed().unwrap());
        assert_eq!(projector.member_count(), 0);
        assert!(projector.member_at(0).is_none());
    }

    #[tokio::test]
    async fn error_events_are_not_replayed_to_late_subscribers() {
        let projector = projector_with(Err(FetchError::DecodeFailed));

        projector.refresh().await;

        let mut late_rx = projector.subscribe_errors();
        assert!(late_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn late_roster_subscriber_observes_latest_state() {
        let projector = projector_with(Ok(sample_roster()));

        projector.refresh().await;

        let late_rx = projector.subscribe_roster();
        assert_eq!(*late_rx.borrow(), sample_roster());
    }

    #[tokio::test]
    async fn repeated_refresh_emits_each_time() {
        let projector = projector_with(Ok(sample_roster()));
        let mut roster_rx = projector.subscribe_roster();

        projector.refresh().await;
        assert!(roster_rx.has_changed().unwrap());
        let first = roster_rx.borrow_and_update().clone();

        projector.refresh().await;
        assert!(roster_rx.has_changed().unwrap());
        let second = roster_rx.borrow_and_update().clone();

        assert_eq!(first, second);
        assert_eq!(projector.member_count(), 2);
    }

    #[tokio::test]
    async fn callback_trigger_matches_task_trigger() {
        let via_task = projector_with(Ok(sample_roster()));
        via_task.refresh().await;

        let via_callback = projector_with(Ok(sample_roster()));
        via_callback.refresh_with_callback();

        assert_eq!(via_callback.member_count(), via_task.member_count());
        assert_eq!(via_callback.rows(), via_task.rows());
    }

    #[tokio::test]
    async fn stream_trigger_matches_task_trigger() {
        let via_task = projector_with(Ok(sample_roster()));
        via_task.refresh().await;

        let via_stream = projector_with(Ok(sample_roster()));
        via_stream.refresh_with_stream().await.unwrap();

        assert_eq!(via_stream.member_count(), via_task.member_count());
        assert_eq!(via_stream.rows(), via_task.rows());
    }
}
