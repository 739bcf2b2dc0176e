//! Login and logout handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages bind these to `submit`/`click` events. Each invocation cancels the
//! event's default action, issues exactly one `POST`, then either navigates
//! on the `"OK"` sentinel or alerts the reply text.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are alerted as `"Server error - <message>"` and also
//! handed to [`Browser::report_error`] for the console. There are no retries.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

use super::form::FormFields;
use super::outcome::{Outcome, from_result};
use crate::config::ClientConfig;
use crate::net::api::Transport;
use crate::net::error::RequestError;

/// Browser side effects a handler can trigger.
pub trait Browser {
    /// Change `location.href`.
    fn navigate(&self, target: &str);
    /// Show a blocking notification.
    fn alert(&self, message: &str);
    /// Record a transport failure for diagnostics.
    fn report_error(&self, err: &RequestError);
}

/// An event whose default browser action can be suppressed.
pub trait Cancelable {
    fn prevent_default(&self);
}

/// Cancel the event's default action, then hand `action` to `spawn`.
///
/// The default is suppressed before any work starts, so it holds for every
/// outcome of the request.
pub fn intercept<E, F, S>(event: &E, spawn: S, action: F)
where
    E: Cancelable + ?Sized,
    S: FnOnce(F),
{
    event.prevent_default();
    spawn(action);
}

/// Submit the login form fields and act on the reply.
pub async fn login<T, B>(transport: &T, browser: &B, config: &ClientConfig, fields: FormFields) -> Outcome
where
    T: Transport,
    B: Browser,
{
    let result = transport.post_form(&config.login_endpoint, &fields).await;
    settle(browser, result, &config.login_success_target)
}

/// Request a logout and act on the reply.
pub async fn logout<T, B>(transport: &T, browser: &B, config: &ClientConfig) -> Outcome
where
    T: Transport,
    B: Browser,
{
    let result = transport.post_empty(&config.logout_endpoint).await;
    settle(browser, result, &config.logout_success_target)
}

/// Surface a failure that happened before any request was sent.
pub fn report_failure<B: Browser>(browser: &B, err: &RequestError) -> Outcome {
    settle(browser, Err(err.clone()), "")
}

/// Perform the browser side of an outcome.
pub fn apply<B: Browser>(browser: &B, outcome: &Outcome) {
    match outcome {
        Outcome::Navigate(target) => browser.navigate(target),
        Outcome::Notify(message) => browser.alert(message),
    }
}

fn settle<B: Browser>(browser: &B, result: Result<String, RequestError>, success_target: &str) -> Outcome {
    let failure = result.as_ref().err().cloned();
    let outcome = from_result(result, success_target);
    apply(browser, &outcome);
    if let Some(err) = failure {
        browser.report_error(&err);
    }
    outcome
}
