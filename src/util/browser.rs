//! `window`-backed implementations of the handler seams.
//!
//! Requires a browser environment; outside the `hydrate` build navigation and
//! alerts are no-ops and diagnostics go to the server log.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::future::Future;

use crate::auth::handlers::{Browser, Cancelable};
use crate::net::error::RequestError;

/// The real browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn navigate(&self, target: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(target);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }

    fn report_error(&self, err: &RequestError) {
        leptos::logging::error!("{}", diagnostic_line(err));
    }
}

/// Console line recorded for a transport failure.
fn diagnostic_line(err: &RequestError) -> String {
    format!("auth request failed: {err:?}")
}

// Both event types deref to `web_sys::Event`.
impl Cancelable for leptos::ev::SubmitEvent {
    fn prevent_default(&self) {
        (**self).prevent_default();
    }
}

impl Cancelable for leptos::ev::MouseEvent {
    fn prevent_default(&self) {
        (**self).prevent_default();
    }
}

/// Run a handler future on the browser's event loop.
pub fn spawn_action<F>(action: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(action);
    #[cfg(not(feature = "hydrate"))]
    drop(action);
}
