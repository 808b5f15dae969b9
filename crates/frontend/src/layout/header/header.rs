use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let config = leptos::context::use_context::<AppConfig>().expect("AppConfig not found in context");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {icon("book")}
                <span class="header__title">"Quản lý Giáo viên"</span>
            </div>
            <div class="header__actions">
                <span class="header__api" title="API">{config.base_url}</span>
            </div>
        </header>
    }
}
