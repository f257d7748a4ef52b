//! Transport seam for the classification endpoint.
//!
//! The controller is generic over `AnalysisTransport`, so tests can script
//! replies and the CLI can plug in `HttpTransport`. One call = one POST; no
//! retries or queueing happen at this layer.

use std::future::Future;

use ss_core::{AnalysisRequest, ServiceReply};

use crate::TransportError;

pub trait AnalysisTransport {
    /// Issue exactly one request and decode its reply.
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<ServiceReply, TransportError>>;
}

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use tracing::debug;

    use ss_core::{AnalysisRequest, ServiceReply, SiteConfig};

    use super::AnalysisTransport;
    use crate::wire::{self, RequestBody};
    use crate::TransportError;

    /// reqwest-backed client for `POST {endpoint}` with a JSON body.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::Client,
        url: String,
    }

    impl HttpTransport {
        /// `timeout = None` keeps the client default (requests may hang forever).
        pub fn new(
            url: impl Into<String>,
            timeout: Option<Duration>,
        ) -> Result<Self, TransportError> {
            let mut builder = reqwest::Client::builder();
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
            let client = builder.build().map_err(from_reqwest)?;
            Ok(Self { client, url: url.into() })
        }

        pub fn from_config(cfg: &SiteConfig) -> Result<Self, TransportError> {
            Self::new(cfg.endpoint_url(), cfg.timeout_ms.map(Duration::from_millis))
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    impl AnalysisTransport for HttpTransport {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<ServiceReply, TransportError> {
            let chars = request.text().chars().count();
            debug!(url = %self.url, chars, "POST analysis request");
            let resp = self
                .client
                .post(&self.url)
                .json(&RequestBody::from(request))
                .send()
                .await
                .map_err(from_reqwest)?;

            let status = resp.status().as_u16();
            let bytes = resp.bytes().await.map_err(from_reqwest)?;
            debug!(status, len = bytes.len(), "analysis response received");
            wire::decode_reply(status, &bytes)
        }
    }

    fn from_reqwest(e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

#[cfg(feature = "http")]
pub use http::HttpTransport;
