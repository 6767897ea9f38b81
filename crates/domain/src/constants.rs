//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Configuration constants
pub const DEFAULT_ROSTER_ENDPOINT: &str =
    "https://544a9ef9-2c3c-441a-824b-97788c0761e8.mock.pstmn.io/omgtest/main/group";

// Channel configuration
pub const ERROR_EVENT_CAPACITY: usize = 16;
pub const DRAWING_EVENT_CAPACITY: usize = 16;

// Sync collaborators
pub const ASSIGNED_GROUP_NAME: &str = "OEA";
