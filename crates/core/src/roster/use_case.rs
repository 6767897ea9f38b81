//! Fetch-roster use case - names the business operation

use std::sync::Arc;

use async_trait::async_trait;
use multisync_domain::{Result, Roster};

use super::ports::{RosterCallback, RosterRepository, RosterStream};

/// Application-facing entry point for the roster fetch operation.
///
/// Pure delegation to the repository under all three calling
/// conventions; exists so presentation code depends on the operation's
/// name rather than its implementation. No transformation, no
/// additional error mapping.
#[async_trait]
pub trait RosterUseCase: Send + Sync {
    /// Task-style fetch.
    async fn execute(&self) -> Result<Roster>;

    /// Callback-style fetch; `callback` is invoked exactly once.
    fn execute_with(&self, callback: RosterCallback);

    /// Stream-style fetch: one item, then termination.
    fn execute_stream(&self) -> RosterStream;
}

/// Default use case backed by a [`RosterRepository`].
pub struct FetchRosterUseCase {
    repository: Arc<dyn RosterRepository>,
}

impl FetchRosterUseCase {
    /// Create a new use case over the given repository.
    pub fn new(repository: Arc<dyn RosterRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RosterUseCase for FetchRosterUseCase {
    async fn execute(&self) -> Result<Roster> {
        self.repository.fetch().await
    }

    fn execute_with(&self, callback: RosterCallback) {
        self.repository.fetch_with(callback);
    }

    fn execute_stream(&self) -> RosterStream {
        self.repository.fetch_stream()
    }
}
