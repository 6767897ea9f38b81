//! Application context - dependency injection container

use std::sync::Arc;

use multisync_core::{
    FetchRosterUseCase, RosterProjector, RosterRepository, RosterUseCase, TransferService,
    Transport,
};
use multisync_domain::constants::ASSIGNED_GROUP_NAME;
use multisync_domain::Config;
use multisync_infra::config::roster_endpoint;
use multisync_infra::{HttpTransport, InfraError, JsonTransferService, RemoteRosterRepository};

use crate::sync::{AssignService, CanvasSyncService};

/// Application context - holds all services and dependencies.
///
/// Every service is an explicitly constructed instance owned here;
/// collaborators communicate over the channels each service exposes,
/// never through process-wide state.
pub struct AppContext {
    pub config: Config,
    pub roster: Arc<RosterProjector>,
    pub canvas: Arc<CanvasSyncService>,
    pub assign: Arc<AssignService>,
}

impl AppContext {
    /// Wire the full pipeline from configuration.
    ///
    /// # Errors
    /// Returns `InfraError` when the configured endpoint is not a valid
    /// URL or the HTTP client cannot be constructed.
    pub fn build(config: Config) -> Result<Self, InfraError> {
        let endpoint = roster_endpoint(&config)?;

        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new()?);
        let transfer: Arc<dyn TransferService> = Arc::new(JsonTransferService::new(transport));
        let repository: Arc<dyn RosterRepository> =
            Arc::new(RemoteRosterRepository::new(transfer, endpoint));
        let use_case: Arc<dyn RosterUseCase> = Arc::new(FetchRosterUseCase::new(repository));

        Ok(Self {
            config,
            roster: Arc::new(RosterProjector::new(use_case)),
            canvas: Arc::new(CanvasSyncService::new()),
            assign: Arc::new(AssignService::new(ASSIGNED_GROUP_NAME)),
        })
    }
}
