//! Local sync collaborators
//!
//! Small services that keep multiple on-screen surfaces converged on the
//! same state. They are unrelated to the roster pipeline: each one is an
//! explicitly constructed instance with its own typed channel, owned by
//! the composition root.

pub mod assign;
pub mod canvas;

pub use assign::AssignService;
pub use canvas::CanvasSyncService;
