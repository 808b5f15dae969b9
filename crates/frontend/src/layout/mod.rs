pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// `center` is re-run whenever a signal it reads changes.
///
/// ```text
/// +------------------------------------------+
/// |                Header                    |
/// +------------------------------------------+
/// |  Navbar  |           Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Navbar />
                <main data-zone="center" class="app-main">
                    {move || center()}
                </main>
            </div>
        </div>
    }
}
