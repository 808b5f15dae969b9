use crate::shared::outcome::Outcome;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the active page
pub const PAGE_PARAM: &str = "page";

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPage {
    #[default]
    Directory,
    NewTeacher,
    NewPosition,
}

impl AppPage {
    pub fn code(&self) -> &'static str {
        match self {
            AppPage::Directory => "directory",
            AppPage::NewTeacher => "new-teacher",
            AppPage::NewPosition => "new-position",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppPage::Directory => "Danh sách",
            AppPage::NewTeacher => "Thêm giáo viên",
            AppPage::NewPosition => "Thêm vị trí công tác",
        }
    }

    /// Icon name for the navigation bar
    pub fn icon(&self) -> &'static str {
        match self {
            AppPage::Directory => "team",
            AppPage::NewTeacher => "user",
            AppPage::NewPosition => "plus",
        }
    }

    pub fn all() -> Vec<AppPage> {
        vec![AppPage::Directory, AppPage::NewTeacher, AppPage::NewPosition]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "directory" => Some(AppPage::Directory),
            "new-teacher" => Some(AppPage::NewTeacher),
            "new-position" => Some(AppPage::NewPosition),
            _ => None,
        }
    }

    /// Page named by a location search string such as `?page=new-teacher`
    pub fn from_query(search: &str) -> Self {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params
            .get(PAGE_PARAM)
            .and_then(|code| AppPage::from_code(code))
            .unwrap_or_default()
    }

    /// Location search string selecting this page
    pub fn to_query(&self) -> String {
        let query = serde_qs::to_string(&HashMap::from([(
            PAGE_PARAM.to_string(),
            self.code().to_string(),
        )]))
        .unwrap_or_default();
        format!("?{}", query)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
    /// Outcome handed over by a screen that closed itself
    pub notice: RwSignal<Option<Outcome>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::default()),
            notice: RwSignal::new(None),
        }
    }

    /// Restores the page from the URL and keeps the URL in step afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(AppPage::from_query(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.active.get().to_query();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: AppPage) {
        log::debug!("navigate: {}", page.code());
        self.notice.set(None);
        self.active.set(page);
    }

    /// Switches page and shows `outcome` there
    pub fn navigate_with_notice(&self, page: AppPage, outcome: Outcome) {
        self.navigate(page);
        self.notice.set(Some(outcome));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(AppPage::from_query("?page=new-teacher"), AppPage::NewTeacher);
        assert_eq!(AppPage::from_query("page=new-position&x=1"), AppPage::NewPosition);
        assert_eq!(AppPage::from_query(""), AppPage::Directory);
        assert_eq!(AppPage::from_query("?page=unknown"), AppPage::Directory);
    }

    #[test]
    fn test_page_query_restores_same_page() {
        for page in AppPage::all() {
            assert_eq!(AppPage::from_query(&page.to_query()), page);
        }
        assert_eq!(AppPage::NewTeacher.to_query(), "?page=new-teacher");
    }

    #[test]
    fn test_navigate_reaches_tracking_readers() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();
        let shown = Memo::new(move |_| ctx.active.get().display_name());
        assert_eq!(shown.get_untracked(), "Danh sách");

        ctx.navigate(AppPage::NewTeacher);
        assert_eq!(shown.get_untracked(), "Thêm giáo viên");
        ctx.navigate(AppPage::NewPosition);
        assert_eq!(shown.get_untracked(), "Thêm vị trí công tác");
    }

    #[test]
    fn test_notice_survives_only_its_own_navigation() {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::new();
        ctx.navigate(AppPage::NewPosition);

        let created = Outcome::Success("Tạo vị trí công tác thành công!".to_string());
        ctx.navigate_with_notice(AppPage::Directory, created.clone());
        assert_eq!(ctx.active.get_untracked(), AppPage::Directory);
        assert_eq!(ctx.notice.get_untracked(), Some(created));

        ctx.navigate(AppPage::NewTeacher);
        assert_eq!(ctx.notice.get_untracked(), None);
    }
}
