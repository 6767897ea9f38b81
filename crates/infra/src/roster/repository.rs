//! Remote roster repository

use std::sync::Arc;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use multisync_core::{RosterCallback, RosterRepository, RosterStream, TransferService};
use multisync_domain::{Result, Roster};
use url::Url;

/// [`RosterRepository`] backed by the remote roster endpoint.
///
/// Owns the fixed endpoint URL; callers supply nothing. The wire payload
/// is mapped to the domain roster after each convention's success path,
/// and transfer errors pass through unchanged.
pub struct RemoteRosterRepository {
    transfer: Arc<dyn TransferService>,
    endpoint: Url,
}

impl RemoteRosterRepository {
    /// Create a repository fetching from `endpoint`.
    pub fn new(transfer: Arc<dyn TransferService>, endpoint: Url) -> Self {
        Self { transfer, endpoint }
    }
}

#[async_trait]
impl RosterRepository for RemoteRosterRepository {
    async fn fetch(&self) -> Result<Roster> {
        let payload = self.transfer.fetch(&self.endpoint).await?;
        Ok(Roster::from(payload))
    }

    fn fetch_with(&self, callback: RosterCallback) {
        self.transfer.fetch_with(
            self.endpoint.clone(),
            Box::new(move |result| callback(result.map(Roster::from))),
        );
    }

    fn fetch_stream(&self) -> RosterStream {
        self.transfer.fetch_stream(self.endpoint.clone()).map_ok(Roster::from).boxed()
    }
}
