use crate::shared::outcome::Outcome;
use leptos::prelude::*;

/// Shows the latest submission outcome until dismissed
#[component]
pub fn OutcomeBanner(outcome: RwSignal<Option<Outcome>>) -> impl IntoView {
    view! {
        {move || outcome.get().map(|o| {
            let icon = match o {
                Outcome::Success(_) => "✓",
                Outcome::Warning(_) | Outcome::Error(_) => "⚠",
            };
            view! {
                <div class=format!("outcome-banner outcome-banner--{}", o.variant()) role="status">
                    <span class="outcome-banner__icon">{icon}</span>
                    <span class="outcome-banner__text">{o.message().to_string()}</span>
                    <button
                        class="outcome-banner__close"
                        title="Đóng"
                        on:click=move |_| outcome.set(None)
                    >
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
