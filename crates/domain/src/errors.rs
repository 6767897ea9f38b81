//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failed roster fetch.
///
/// Exactly one kind is raised by the layer that first detects the
/// failure; layers above pass it through unchanged. The variants carry
/// no payload so a kind can be compared, copied, and broadcast freely.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// The underlying network call failed before a response arrived.
    #[error("transport failure during roster request")]
    Transport,

    /// Response status metadata was missing or unreadable.
    #[error("response metadata missing or unreadable")]
    ResponseInvalid,

    /// The server answered 200 with an empty body.
    #[error("empty body on a successful response")]
    BodyMissing,

    /// The body was present but did not parse as a roster payload.
    #[error("roster payload failed to decode")]
    DecodeFailed,

    /// Status in the rejected range `[300, 500)`.
    #[error("server rejected the request")]
    StatusRejected,

    /// Any other status outside 200 and outside `[300, 500)`.
    #[error("unexpected response status")]
    StatusUnknown,
}

/// Result type alias for MultiSync operations
pub type Result<T> = std::result::Result<T, FetchError>;
