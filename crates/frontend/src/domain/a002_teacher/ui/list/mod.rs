//! Teacher directory: paginated teacher cards and position cards under two tabs

pub mod card;
pub mod state;
pub mod view_model;

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner, Tab, TabList};

use self::card::{TeacherCard, TeacherCardView};
use self::state::{DirectoryTab, TeacherListState};
use self::view_model::TeacherListViewModel;
use crate::domain::a001_teacher_position::ui::details::TeacherPositionDetails;
use crate::domain::a001_teacher_position::ui::list::PositionGrid;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{OutcomeBanner, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::outcome::Outcome;

#[component]
pub fn TeacherDirectory() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = TeacherListViewModel::new(api);
    vm.mount_command();

    let state = vm.state;
    let selected_tab = RwSignal::new(DirectoryTab::Teachers.code().to_string());
    let show_position_form = RwSignal::new(false);

    let teachers_label = move || {
        format!(
            "Giáo viên ({})",
            state.with(|s| s.pagination.total_teachers)
        )
    };
    let positions_label = move || format!("Chức vụ ({})", state.with(|s| s.positions.len()));

    let on_page_change = {
        let vm = vm.clone();
        Callback::new(move |(page, size): (u32, u32)| vm.page_change_command(page, size))
    };

    let on_position_created = {
        let vm = vm.clone();
        Callback::new(move |outcome: Outcome| {
            ctx.notice.set(Some(outcome));
            show_position_form.set(false);
            selected_tab.set(DirectoryTab::Positions.code().to_string());
            vm.reload_positions_command();
        })
    };

    view! {
        <div class="page teacher-directory">
            <div class="page-header">
                <div>
                    <h2>"Quản lý Giáo viên"</h2>
                    <p class="page-header__subtitle">
                        "Xem và quản lý thông tin giáo viên và chức vụ"
                    </p>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.refresh_command()
                    }
                >
                    {icon("refresh")}
                    " Làm mới"
                </Button>
            </div>

            <OutcomeBanner outcome=ctx.notice />

            <TabList selected_value=selected_tab>
                <Tab value=DirectoryTab::Teachers.code()>
                    {icon("user")} " " {teachers_label}
                </Tab>
                <Tab value=DirectoryTab::Positions.code()>
                    {icon("team")} " " {positions_label}
                </Tab>
            </TabList>

            <div class="tab-content">
                {move || match DirectoryTab::from_code(&selected_tab.get()).unwrap_or_default() {
                    DirectoryTab::Teachers => view! {
                        <TeacherTab state=state on_page_change=on_page_change />
                    }.into_any(),
                    DirectoryTab::Positions => view! {
                        {move || state.with(|s| s.positions_error.clone()).map(|e| view! {
                            <div class="warning-box">{e}</div>
                        })}
                        <div class="tab-toolbar">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| show_position_form.update(|v| *v = !*v)
                            >
                                {icon("plus")}
                                " Thêm chức vụ"
                            </Button>
                        </div>
                        {move || show_position_form.get().then(|| view! {
                            <TeacherPositionDetails on_close=on_position_created />
                        })}
                        <PositionGrid positions=Signal::derive(move || state.with(|s| s.positions.clone())) />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TeacherTab(
    state: RwSignal<TeacherListState>,
    on_page_change: Callback<(u32, u32)>,
) -> impl IntoView {
    let pagination = move || state.with(|s| s.pagination);

    view! {
        {move || state.with(|s| s.teachers_error.clone()).map(|e| view! {
            <div class="warning-box">{e}</div>
        })}
        {move || {
            if state.with(|s| s.loading) {
                return view! {
                    <div class="loading-state"><Spinner /></div>
                }
                .into_any();
            }
            let cards: Vec<TeacherCardView> =
                state.with(|s| s.teachers.iter().map(Into::into).collect());
            if cards.is_empty() {
                view! { <div class="empty-state">"Không có dữ liệu giáo viên"</div> }.into_any()
            } else {
                view! {
                    <div class="card-grid card-grid--2">
                        {cards
                            .into_iter()
                            .map(|card| view! { <TeacherCard card=card /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }}
        {move || state.with(TeacherListState::shows_pager).then(|| view! {
            <PaginationControls
                current_page=Signal::derive(move || pagination().current_page)
                total_pages=Signal::derive(move || pagination().total_pages)
                total_count=Signal::derive(move || pagination().total_teachers)
                page_size=Signal::derive(move || pagination().limit)
                on_change=on_page_change
                item_label="giáo viên"
            />
        })}
    }
}
