//! HTTP transport for the roster endpoint

use async_trait::async_trait;
use futures::stream;
use multisync_core::{ResponseMeta, Transport, TransportCallback, TransportReply, TransportStream};
use multisync_domain::{FetchError, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::errors::InfraError;

/// reqwest-backed [`Transport`].
///
/// Issues exactly one GET per call over a shared client, with the
/// client's defaults left alone - no retries, no redirect or timeout
/// overrides. Concurrent calls share no mutable request state. The three
/// entry points are thin adapters over one internal request function, so
/// every style issues the identical request.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with a default client.
    pub fn new() -> std::result::Result<Self, InfraError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    async fn execute(client: Client, url: Url) -> Result<TransportReply> {
        debug!(%url, "sending roster request");

        let response = client.get(url.clone()).send().await.map_err(|err| {
            debug!(%url, error = %err, "roster request failed");
            FetchError::Transport
        })?;

        let status = response.status();
        debug!(%url, %status, "received roster response");

        let body = response.bytes().await.map_err(|err| {
            debug!(%url, error = %err, "roster body read failed");
            FetchError::Transport
        })?;

        Ok(TransportReply {
            body: body.to_vec(),
            meta: ResponseMeta::with_status(status.as_u16()),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<TransportReply> {
        Self::execute(self.client.clone(), url.clone()).await
    }

    fn fetch_with(&self, url: Url, callback: TransportCallback) {
        let client = self.client.clone();
        tokio::spawn(async move {
            match Self::execute(client, url).await {
                Ok(reply) => callback(Some(reply.body), Some(reply.meta), None),
                Err(err) => callback(None, None, Some(err)),
            }
        });
    }

    fn fetch_stream(&self, url: Url) -> TransportStream {
        let client = self.client.clone();
        Box::pin(stream::once(async move { Self::execute(client, url).await }))
    }
}
