use super::state::{create_state, TeacherListState};
use crate::domain::a001_teacher_position::api as position_api;
use crate::domain::a002_teacher::api as teacher_api;
use crate::shared::api_client::ApiClient;
use contracts::domain::common::Pagination;
use leptos::prelude::*;

/// ViewModel behind the teacher directory
#[derive(Clone)]
pub struct TeacherListViewModel {
    api: ApiClient,
    pub state: RwSignal<TeacherListState>,
}

impl TeacherListViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: create_state(),
        }
    }

    /// Load one page of teachers, replacing the held page on success
    pub async fn load_teachers(&self, page: u32, page_size: u32) {
        log::debug!("Loading teachers page {} (limit {})", page, page_size);
        self.state.update(|s| s.loading = true);

        let result = teacher_api::fetch_teachers(&self.api, page, page_size).await;

        self.state.update(|s| {
            s.loading = false;
            match result {
                Ok((teachers, pagination)) => {
                    log::info!(
                        "Loaded {} teachers (page {}/{})",
                        teachers.len(),
                        pagination.current_page,
                        pagination.total_pages
                    );
                    s.teachers = teachers;
                    s.pagination = pagination;
                    s.teachers_error = None;
                }
                Err(e) => {
                    log::error!("Error fetching teachers: {}", e);
                    s.teachers_error = Some(format!("Không thể tải danh sách giáo viên: {}", e));
                }
            }
        });
    }

    /// Load every teacher position
    pub async fn load_positions(&self) {
        log::debug!("Loading teacher positions");
        let result = position_api::fetch_positions(&self.api).await;

        self.state.update(|s| match result {
            Ok(positions) => {
                log::info!("Loaded {} teacher positions", positions.len());
                s.positions = positions;
                s.positions_error = None;
            }
            Err(e) => {
                log::error!("Error fetching positions: {}", e);
                s.positions_error = Some(format!("Không thể tải danh sách chức vụ: {}", e));
            }
        });
    }

    /// First page of teachers and all positions, side by side
    pub async fn mount(&self) {
        futures::join!(
            self.load_teachers(Pagination::DEFAULT_PAGE, Pagination::DEFAULT_LIMIT),
            self.load_positions()
        );
    }

    pub async fn on_page_change(&self, page: u32, page_size: u32) {
        self.load_teachers(page, page_size).await;
    }

    /// Reload the page currently shown
    pub async fn refresh(&self) {
        let Pagination {
            current_page,
            limit,
            ..
        } = self.state.with_untracked(|s| s.pagination);
        self.load_teachers(current_page, limit).await;
    }

    pub fn mount_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.mount().await });
    }

    pub fn page_change_command(&self, page: u32, page_size: u32) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.on_page_change(page, page_size).await });
    }

    pub fn refresh_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            futures::join!(vm.refresh(), vm.load_positions());
        });
    }

    pub fn reload_positions_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load_positions().await });
    }
}
