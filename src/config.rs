//! Endpoint and redirect configuration for the auth handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides a `ClientConfig` through Leptos context; pages read it when
//! binding handlers so endpoint paths live in one place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default login endpoint.
pub const LOGIN_ENDPOINT: &str = "/lin";
/// Default logout endpoint.
pub const LOGOUT_ENDPOINT: &str = "/lout";
/// Where a successful login sends the browser, relative to the login page.
pub const LOGIN_SUCCESS_TARGET: &str = "../portals";
/// Where a successful logout sends the browser.
pub const LOGOUT_SUCCESS_TARGET: &str = "../login";
/// DOM id of the login `<form>`.
pub const LOGIN_FORM_ID: &str = "login";

/// Paths and element ids used by the login/logout handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub login_endpoint: String,
    pub logout_endpoint: String,
    pub login_success_target: String,
    pub logout_success_target: String,
    pub login_form_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_endpoint: LOGIN_ENDPOINT.to_owned(),
            logout_endpoint: LOGOUT_ENDPOINT.to_owned(),
            login_success_target: LOGIN_SUCCESS_TARGET.to_owned(),
            logout_success_target: LOGOUT_SUCCESS_TARGET.to_owned(),
            login_form_id: LOGIN_FORM_ID.to_owned(),
        }
    }
}
