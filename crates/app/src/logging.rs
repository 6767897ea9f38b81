//! Logging helpers

use multisync_domain::FetchError;

/// Convert a [`FetchError`] into a stable label suitable for log fields.
#[inline]
pub fn error_label(error: &FetchError) -> &'static str {
    match error {
        FetchError::Transport => "transport",
        FetchError::ResponseInvalid => "response_invalid",
        FetchError::BodyMissing => "body_missing",
        FetchError::DecodeFailed => "decode_failed",
        FetchError::StatusRejected => "status_rejected",
        FetchError::StatusUnknown => "status_unknown",
    }
}
