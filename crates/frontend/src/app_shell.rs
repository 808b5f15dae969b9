//! Application Shell - root layout and page switch

use crate::domain::a001_teacher_position::ui::details::TeacherPositionDetails;
use crate::domain::a002_teacher::ui::details::TeacherDetails;
use crate::domain::a002_teacher::ui::list::TeacherDirectory;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::Shell;
use crate::shared::outcome::Outcome;
use leptos::prelude::*;

/// Shell with the page selected in [`AppGlobalContext`].
///
/// Syncs the active page with the URL (`?page=...`).
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || {
            match ctx.active.get() {
                AppPage::Directory => view! { <TeacherDirectory /> }.into_any(),
                AppPage::NewTeacher => view! { <TeacherDetails /> }.into_any(),
                AppPage::NewPosition => view! {
                    <TeacherPositionDetails on_close=Callback::new(move |outcome: Outcome| {
                        ctx.navigate_with_notice(AppPage::Directory, outcome)
                    }) />
                }
                .into_any(),
            }
        } />
    }
}
