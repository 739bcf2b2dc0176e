//! Login page: username + password form posted to the login endpoint.

use leptos::prelude::*;

use crate::auth::form::read_form;
use crate::auth::handlers::{intercept, login, report_failure};
use crate::config::ClientConfig;
use crate::net::api::HttpTransport;
use crate::util::browser::{WebBrowser, spawn_action};

/// Read the login form and submit it.
async fn submit_login(config: ClientConfig) {
    let browser = WebBrowser;
    match read_form(&config.login_form_id) {
        Ok(fields) => {
            login(&HttpTransport, &browser, &config, fields).await;
        }
        Err(err) => {
            report_failure(&browser, &err);
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let form_id = config.login_form_id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        intercept(&ev, spawn_action, submit_login(config.clone()));
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"STB Proxy"</h1>
                <form id=form_id class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        placeholder="Username"
                        autocomplete="username"
                        required
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        required
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
