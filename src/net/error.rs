//! Transport-level failures for the auth endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Only failures where no response text could be obtained end up here. A
//! reply with an error status but a readable body is an application-level
//! message and is shown to the user verbatim instead.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Prefix of the notification shown for transport failures.
pub const SERVER_ERROR_PREFIX: &str = "Server error - ";

/// A request that never produced a response body.
///
/// `Display` is the bare underlying message so it can be appended to
/// [`SERVER_ERROR_PREFIX`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The fetch itself was rejected (connection refused, DNS, CORS, ...).
    #[error("{0}")]
    Network(String),
    /// The response arrived but its body could not be read as text.
    #[error("{0}")]
    Body(String),
    /// The request body could not be assembled from the form.
    #[error("{0}")]
    Form(String),
    /// No browser runtime is available (server-side rendering, tests).
    #[error("not available on server")]
    Unavailable,
}

/// User-facing notification for a transport failure.
pub fn server_error_message(err: &RequestError) -> String {
    format!("{SERVER_ERROR_PREFIX}{err}")
}

/// Extract the `message` of a thrown JS value, falling back to its string
/// form.
#[cfg(feature = "hydrate")]
pub(crate) fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
