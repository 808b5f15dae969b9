use crate::shared::icons::icon;
use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

/// PaginationControls component - server-side pagination
///
/// Pages are 1-based, as reported by the API. Every change reports the
/// pair `(page, page_size)`; picking a new page size restarts at page 1.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback with `(page, page_size)` when either changes
    on_change: Callback<(u32, u32)>,

    /// Noun shown in the total, e.g. "giáo viên"
    #[prop(optional, into)]
    item_label: MaybeProp<String>,

    /// Available page size options (optional, defaults to [10, 20, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts =
        page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
    let last_page = move || total_pages.get().max(1);
    let go_to = move |page: u32| on_change.run((page, page_size.get_untracked()));

    view! {
        <div class="pagination-controls">
            <span class="pagination-total">
                {move || format!(
                    "Tổng {} {}",
                    total_count.get(),
                    item_label.get().unwrap_or_default()
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(1)
                disabled=move || current_page.get() <= 1
                title="Trang đầu"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 1 {
                        go_to(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Trang trước"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), last_page())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page < last_page() {
                        go_to(page + 1);
                    }
                }
                disabled=move || current_page.get() >= last_page()
                title="Trang sau"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(last_page())
                disabled=move || current_page.get() >= last_page()
                title="Trang cuối"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse()
                        .unwrap_or(DEFAULT_PAGE_SIZE_OPTIONS[0]);
                    on_change.run((1, size));
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {format!("{} / trang", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
