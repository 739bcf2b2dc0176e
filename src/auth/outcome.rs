//! Reply interpretation for the auth endpoints.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use crate::net::error::{RequestError, server_error_message};

/// The only reply body that counts as success.
pub const SUCCESS_SENTINEL: &str = "OK";

/// What the page should do once a request has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Point the browser at this (relative) location.
    Navigate(String),
    /// Show this text in a blocking alert.
    Notify(String),
}

/// Exact, case-sensitive comparison against [`SUCCESS_SENTINEL`].
pub fn is_success(body: &str) -> bool {
    body == SUCCESS_SENTINEL
}

/// Map a reply body to an outcome. Anything but the sentinel is shown as-is.
pub fn interpret(body: String, success_target: &str) -> Outcome {
    if is_success(&body) {
        Outcome::Navigate(success_target.to_owned())
    } else {
        Outcome::Notify(body)
    }
}

/// Map a finished request, successful or not, to an outcome.
pub fn from_result(result: Result<String, RequestError>, success_target: &str) -> Outcome {
    match result {
        Ok(body) => interpret(body, success_target),
        Err(err) => Outcome::Notify(server_error_message(&err)),
    }
}
