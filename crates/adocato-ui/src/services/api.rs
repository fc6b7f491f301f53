//! HTTP client for the dark-mode endpoint.

use crate::core::error::{UiError, UiResult};
use gloo_net::http::Request;

#[derive(Clone, Debug)]
pub(crate) struct ToggleClient {
    endpoint: String,
}

impl ToggleClient {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Ask the server to flip the preference and return the raw response body.
    ///
    /// Same-origin GET with no body and no custom headers; cookies carry the session.
    pub(crate) async fn toggle(&self) -> UiResult<String> {
        let resp = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|err| self.request_error(&err))?;
        if !resp.ok() {
            return Err(UiError::Status {
                endpoint: self.endpoint.clone(),
                status: resp.status(),
            });
        }
        resp.text().await.map_err(|err| self.request_error(&err))
    }

    fn request_error(&self, err: &gloo_net::Error) -> UiError {
        UiError::Request {
            endpoint: self.endpoint.clone(),
            detail: err.to_string(),
        }
    }
}
