//! Transfer service: status validation and payload decoding
//!
//! The protocol logic of the pipeline lives here. One validation
//! function backs all three entry points so the callback, task, and
//! stream styles can never drift apart in how they classify a reply.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use multisync_core::{
    PayloadCallback, PayloadStream, ResponseMeta, TransferService, Transport,
};
use multisync_domain::{FetchError, Result, RosterPayload};
use tracing::warn;
use url::Url;

/// Decodes transport replies into roster payloads.
pub struct JsonTransferService {
    transport: Arc<dyn Transport>,
}

impl JsonTransferService {
    /// Create a transfer service over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

/// Classify one transport reply: status metadata first, body second.
///
/// Only the first failing stage is reported. Status 200 proceeds to the
/// body checks; `[300, 500)` is rejected outright; everything else
/// non-200 is unknown. Absent or unreadable status metadata fails before
/// the body is ever looked at.
fn validate_reply(body: Option<Vec<u8>>, meta: Option<ResponseMeta>) -> Result<RosterPayload> {
    let status = match meta.and_then(|m| m.status_code) {
        Some(status) => status,
        None => {
            warn!("roster response carried no readable status");
            return Err(FetchError::ResponseInvalid);
        }
    };

    match status {
        200 => {
            let bytes = match body {
                Some(bytes) if !bytes.is_empty() => bytes,
                _ => return Err(FetchError::BodyMissing),
            };
            serde_json::from_slice(&bytes).map_err(|err| {
                warn!(error = %err, "roster payload failed to decode");
                FetchError::DecodeFailed
            })
        }
        300..=499 => {
            warn!(status, "roster request rejected");
            Err(FetchError::StatusRejected)
        }
        _ => {
            warn!(status, "unexpected roster response status");
            Err(FetchError::StatusUnknown)
        }
    }
}

#[async_trait]
impl TransferService for JsonTransferService {
    async fn fetch(&self, url: &Url) -> Result<RosterPayload> {
        let reply = self.transport.fetch(url).await?;
        validate_reply(Some(reply.body), Some(reply.meta))
    }

    fn fetch_with(&self, url: Url, callback: PayloadCallback) {
        self.transport.fetch_with(
            url,
            Box::new(move |body, meta, err| {
                let result = match err {
                    Some(err) => Err(err),
                    None => validate_reply(body, meta),
                };
                callback(result);
            }),
        );
    }

    fn fetch_stream(&self, url: Url) -> PayloadStream {
        self.transport
            .fetch_stream(url)
            .map(|reply| {
                reply.and_then(|reply| validate_reply(Some(reply.body), Some(reply.meta)))
            })
            .boxed()
    }
}
