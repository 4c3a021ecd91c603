//! Transport seam for the inference call
//!
//! The facade never talks to the network itself. It hands a JSON body to a
//! [`Transport`] and gets back a status and body text. A non-2xx status is a
//! normal response here; turning it into an error is the facade's job.
//!
//! Any `Fn(&str, String) -> DispatchResult<TransportResponse>` is a transport,
//! which is how tests stand in for the remote side.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpTransport;

use crate::error::DispatchResult;

/// Status and body of a completed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP-style status code
    pub status: u16,
    /// Body text
    pub body: String,
}

impl TransportResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one POST-style call and waits for its completion
pub trait Transport {
    /// POST `body` to `path`
    fn post(&self, path: &str, body: String) -> DispatchResult<TransportResponse>;
}

impl<F> Transport for F
where
    F: Fn(&str, String) -> DispatchResult<TransportResponse>,
{
    fn post(&self, path: &str, body: String) -> DispatchResult<TransportResponse> {
        self(path, body)
    }
}
