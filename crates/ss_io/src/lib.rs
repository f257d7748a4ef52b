//! crates/ss_io/src/lib.rs
//! Wire + transport crate for the analysis endpoint.
//!
//! - `wire`: request body encoding and strict response decoding.
//! - `schema`: embedded JSON Schema for the success payload.
//! - `transport`: the `AnalysisTransport` seam and the reqwest-backed client.
//! - `config`: `SiteConfig` loading (JSON file + environment).
//!
//! Two error surfaces: `IoError` for local files/config, `TransportError` for
//! everything that can go wrong between "request sent" and "reply decoded".

#![forbid(unsafe_code)]

use thiserror::Error;

/// Local I/O and configuration errors.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors.
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON deserialization errors with a JSON Pointer-like location.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Value parsed but not acceptable (bad env var, size limit, …).
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports line/column, not a pointer; default to root.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

/// Failures between sending the request and holding a decoded reply.
///
/// An `{ "error": … }` payload is **not** a transport error; it decodes to
/// `ServiceReply::Rejected`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body is not JSON.
    #[error("malformed body: {0}")]
    Body(String),

    /// Body is JSON but does not match the response schema.
    #[error("schema mismatch at {pointer}: {msg}")]
    Schema { pointer: String, msg: String },
}

pub mod config;
pub mod schema;
pub mod transport;
pub mod wire;

pub use transport::AnalysisTransport;
#[cfg(feature = "http")]
pub use transport::HttpTransport;

pub mod prelude {
    pub use crate::{IoError, IoResult, TransportError};

    pub use crate::config::{apply_env, load_site_config, read_config_file};
    pub use crate::transport::AnalysisTransport;
    #[cfg(feature = "http")]
    pub use crate::transport::HttpTransport;
    pub use crate::wire::{decode_reply, RequestBody};
}
