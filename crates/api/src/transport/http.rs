//! Blocking HTTP transport

use super::{Transport, TransportResponse};
use crate::config::ClientConfig;
use crate::error::{DispatchError, DispatchResult};
use std::time::Duration;
use tracing::debug;

/// Posts request bodies to `base_url + path` over HTTP
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport from `config`; `base_url` is required
    pub fn new(config: &ClientConfig) -> DispatchResult<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| DispatchError::Config("base_url is required for HTTP".into()))?;
        let mut builder = ureq::AgentBuilder::new();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(Self {
            agent: builder.build(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests go to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn post(&self, path: &str, body: String) -> DispatchResult<TransportResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, bytes = body.len(), "POST");

        match self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(response) | Err(ureq::Error::Status(_, response)) => {
                let status = response.status();
                let body = response.into_string().map_err(|e| {
                    DispatchError::Connection(format!(
                        "failed to read {} response body: {}",
                        status, e
                    ))
                })?;
                Ok(TransportResponse { status, body })
            }
            Err(e) => Err(DispatchError::Connection(format!(
                "HTTP POST failed for '{}': {}",
                url, e
            ))),
        }
    }
}
