//! Portals landing page with the logout control.

use leptos::prelude::*;

use crate::auth::handlers::{intercept, logout};
use crate::config::ClientConfig;
use crate::net::api::HttpTransport;
use crate::util::browser::{WebBrowser, spawn_action};

#[component]
pub fn PortalsPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        let config = config.clone();
        intercept(&ev, spawn_action, async move {
            logout(&HttpTransport, &WebBrowser, &config).await;
        });
    };

    view! {
        <div class="portals-page">
            <header class="portals-header">
                <h1>"Portals"</h1>
                <button class="logout-button" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </header>
        </div>
    }
}
