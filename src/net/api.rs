//! HTTP calls against the auth endpoints.
//!
//! Client-side (hydrate): real `fetch` requests via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpTransport`] returns
//! [`RequestError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is never inspected. Whatever text the server sends back is
//! returned as `Ok`, matching browser `fetch` semantics where only network
//! failures reject.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::RequestError;
use crate::auth::form::FormFields;

/// Async request seam used by the auth handlers.
///
/// Implementations run on the single-threaded browser executor, so the
/// returned futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// `POST` the given fields as form data and return the response text.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when no response text could be obtained.
    async fn post_form(&self, url: &str, fields: &FormFields) -> Result<String, RequestError>;

    /// `POST` with no body and return the response text.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when no response text could be obtained.
    async fn post_empty(&self, url: &str) -> Result<String, RequestError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, fields: &FormFields) -> Result<String, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let body = fields.to_form_data()?;
            let resp = gloo_net::http::Request::post(url)
                .body(body)
                .map_err(|e| RequestError::Form(gloo_error_message(&e)))?
                .send()
                .await
                .map_err(|e| RequestError::Network(gloo_error_message(&e)))?;
            read_text(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, fields);
            Err(RequestError::Unavailable)
        }
    }

    async fn post_empty(&self, url: &str) -> Result<String, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .send()
                .await
                .map_err(|e| RequestError::Network(gloo_error_message(&e)))?;
            read_text(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(RequestError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_text(resp: gloo_net::http::Response) -> Result<String, RequestError> {
    if !resp.ok() {
        leptos::logging::log!("POST {} replied {}", resp.url(), resp.status());
    }
    resp.text()
        .await
        .map_err(|e| RequestError::Body(gloo_error_message(&e)))
}

/// The JS `message` of a fetch failure, without gloo's `name:` prefix.
#[cfg(feature = "hydrate")]
fn gloo_error_message(err: &gloo_net::Error) -> String {
    match err {
        gloo_net::Error::JsError(js) => js.message.clone(),
        other => other.to_string(),
    }
}
