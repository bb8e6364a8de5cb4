//! Private REST transport for Prefab server communication
//!
//! This crate provides a minimal blocking HTTP client specifically designed
//! for talking to a Prefab server's JSON API. It executes exactly one request
//! per call and classifies the outcome; it never parses response bodies and
//! never retries.

mod error;

pub use error::RestError;

use std::time::Duration;

/// HTTP methods supported by the Prefab REST surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// A minimal single-attempt HTTP client
///
/// Wraps a `ureq::Agent` configured once with the overall request timeout.
/// Redirects are followed by the agent; a response arriving via a redirect is
/// treated the same as a direct one.
#[derive(Debug, Clone)]
pub struct RestClient {
    agent: ureq::Agent,
}

impl RestClient {
    /// Create a new client with the given overall request timeout
    pub fn new(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    /// Execute a single request and return the raw response body
    ///
    /// `path` is appended to `base_url` verbatim; callers are responsible for
    /// percent-encoding path segments before composing the path. For POST and
    /// PUT the body is sent as-is with `Content-Type: application/json`
    /// (an empty body is valid for operations without a payload).
    ///
    /// Returns `RestError::Status` for any response with status >= 400, with
    /// the response body preserved for diagnostics, and `RestError::Transport`
    /// when no response was obtained at all.
    pub fn execute(
        &self,
        method: Method,
        base_url: &str,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, RestError> {
        let url = format!("{}{}", base_url, path);
        let request = self.agent.request(method.as_str(), &url);

        let result = match method {
            Method::Get => request.call(),
            Method::Post | Method::Put => request
                .set("Content-Type", "application/json")
                .send_string(body.unwrap_or("")),
        };

        match result {
            Ok(response) => response
                .into_string()
                .map_err(|e| RestError::Transport(e.to_string())),
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(RestError::Status { code, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(RestError::Transport(transport.to_string()))
            }
        }
    }
}
