//! REST client for the activities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning a transport error since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The variant tells the caller
//! which of the three failure classes happened so it can pick between the
//! server's `detail` text and a generic fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::{ActivityCollection, MessageResponse};

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Non-2xx status with a structured error body.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-supplied detail text, only for HTTP-level failures.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// True for HTTP-level failures, false for transport/decoding failures.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Percent-encode one path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

pub fn unregister_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// Backend operations used by the activity board.
#[async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`, bypassing the HTTP cache.
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError>;

    /// `POST /activities/{name}/signup?email={email}`.
    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError>;

    /// `DELETE /activities/{name}/unregister?email={email}`.
    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError>;
}

/// `ActivityApi` over the browser's `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    /// `base` is prefixed to every endpoint path; empty means same origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Send a roster-changing request and map the response into a message or
/// an `ApiError`.
#[cfg(feature = "csr")]
async fn send_roster_change(request: gloo_net::http::RequestBuilder) -> Result<MessageResponse, ApiError> {
    use super::types::ErrorResponse;

    let resp = request.send().await.map_err(transport_error)?;
    if resp.ok() {
        return resp.json::<MessageResponse>().await.map_err(decode_error);
    }
    let status = resp.status();
    let body = resp.json::<ErrorResponse>().await.map_err(decode_error)?;
    Err(ApiError::Status { status, detail: body.detail_text() })
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = activities_endpoint(&self.base);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .cache(web_sys::RequestCache::NoStore)
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status(), detail: None });
            }
            resp.json::<ActivityCollection>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity, email);
            log::debug!("POST {url}");
            send_roster_change(gloo_net::http::Request::post(&url)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = unregister_endpoint(&self.base, activity, email);
            log::debug!("DELETE {url}");
            send_roster_change(gloo_net::http::Request::delete(&url)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}
