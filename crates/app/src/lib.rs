//! # MultiSync App
//!
//! Composition root for the MultiSync pipeline.
//!
//! This crate contains:
//! - The [`AppContext`] dependency-injection container
//! - The drawing-sync and name-assignment collaborators
//! - Logging helpers shared by consumers
//!
//! ## Architecture
//! - Wires `multisync-infra` adapters into `multisync-core` services
//! - Owns every constructed service instance; nothing is process-global

pub mod context;
pub mod logging;
pub mod sync;

pub use context::AppContext;
pub use sync::{AssignService, CanvasSyncService};
