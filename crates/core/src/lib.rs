//! # MultiSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the roster fetch pipeline
//! - The fetch-roster use case
//! - The view-state projector consumed by presentation code
//!
//! ## Architecture Principles
//! - Only depends on `multisync-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod roster;

// Re-export specific items to avoid ambiguity
pub use roster::ports::{
    PayloadCallback, PayloadStream, ResponseMeta, RosterCallback, RosterRepository, RosterStream,
    TransferService, Transport, TransportCallback, TransportReply, TransportStream,
};
pub use roster::projector::RosterProjector;
pub use roster::use_case::{FetchRosterUseCase, RosterUseCase};
