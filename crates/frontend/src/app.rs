use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::ApiClient;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Every screen talks to the API through the same client
    provide_context(ApiClient::browser(config.clone()));
    provide_context(config);

    view! {
        <AppShell />
    }
}
