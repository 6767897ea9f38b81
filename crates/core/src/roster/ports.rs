//! Port interfaces for the roster fetch pipeline
//!
//! These traits define the boundaries between core business logic and
//! infrastructure implementations. Every seam exposes the same logical
//! fetch under three calling conventions: a suspendable task method, a
//! fire-once callback method, and a one-shot stream method. A caller
//! picks exactly one convention end-to-end per invocation; the three are
//! never composed for a single fetch.

use async_trait::async_trait;
use futures::stream::BoxStream;
use multisync_domain::{FetchError, Result, Roster, RosterPayload};
use url::Url;

/// Status metadata read off a transport reply.
///
/// `status_code` is `None` when the response carried no readable status
/// line; the transfer layer turns that into
/// [`FetchError::ResponseInvalid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status_code: Option<u16>,
}

impl ResponseMeta {
    /// Metadata for a reply with a readable status code.
    pub fn with_status(status_code: u16) -> Self {
        Self { status_code: Some(status_code) }
    }
}

/// Raw outcome of a single transport call: body bytes plus status
/// metadata. Validation and decoding happen one layer up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub body: Vec<u8>,
    pub meta: ResponseMeta,
}

/// Callback for the transport's callback-style entry point.
///
/// Invoked exactly once. The reply fields and the error are mutually
/// exclusive: a transport-level failure means body and metadata are both
/// absent.
pub type TransportCallback =
    Box<dyn FnOnce(Option<Vec<u8>>, Option<ResponseMeta>, Option<FetchError>) + Send + 'static>;

/// Callback carrying a validated, decoded roster payload.
pub type PayloadCallback = Box<dyn FnOnce(Result<RosterPayload>) + Send + 'static>;

/// Callback carrying a mapped domain roster.
pub type RosterCallback = Box<dyn FnOnce(Result<Roster>) + Send + 'static>;

/// One-shot stream of transport replies: at most one item, then done.
pub type TransportStream = BoxStream<'static, Result<TransportReply>>;

/// One-shot stream of decoded roster payloads.
pub type PayloadStream = BoxStream<'static, Result<RosterPayload>>;

/// One-shot stream of domain rosters.
pub type RosterStream = BoxStream<'static, Result<Roster>>;

/// Trait for performing the raw HTTP GET against the roster endpoint.
///
/// Implementations issue exactly one outbound request per call - no
/// retries, no timeout overrides - and the same request regardless of
/// which entry point was used. Concurrent calls are fully independent.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Suspend the calling task until the reply is available.
    async fn fetch(&self, url: &Url) -> Result<TransportReply>;

    /// Invoke `callback` exactly once on whatever execution context the
    /// underlying client completes on.
    fn fetch_with(&self, url: Url, callback: TransportCallback);

    /// Produce a one-shot stream carrying the reply or the error.
    fn fetch_stream(&self, url: Url) -> TransportStream;
}

/// Trait for validating and decoding a transport reply into the wire
/// payload.
///
/// All three entry points apply the same two validation stages in the
/// same order - status first, body second - and report only the first
/// failing stage.
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Suspend until a validated payload or classified error is ready.
    async fn fetch(&self, url: &Url) -> Result<RosterPayload>;

    /// Callback-style fetch; `callback` is invoked exactly once.
    fn fetch_with(&self, url: Url, callback: PayloadCallback);

    /// One-shot stream of the validated payload.
    fn fetch_stream(&self, url: Url) -> PayloadStream;
}

/// Trait for fetching the domain roster.
///
/// Implementations own the fixed endpoint URL; callers supply nothing.
/// The payload-to-domain mapping is total and order-preserving, and
/// transfer errors pass through unchanged.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Suspend until the mapped roster or a pass-through error is ready.
    async fn fetch(&self) -> Result<Roster>;

    /// Callback-style fetch; `callback` is invoked exactly once.
    fn fetch_with(&self, callback: RosterCallback);

    /// One-shot stream of the mapped roster.
    fn fetch_stream(&self) -> RosterStream;
}
