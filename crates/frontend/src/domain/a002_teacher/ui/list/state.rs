use contracts::domain::a001_teacher_position::aggregate::TeacherPosition;
use contracts::domain::a002_teacher::aggregate::Teacher;
use contracts::domain::common::Pagination;
use leptos::prelude::*;

/// Which collection the directory shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectoryTab {
    #[default]
    Teachers,
    Positions,
}

impl DirectoryTab {
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryTab::Teachers => "teachers",
            DirectoryTab::Positions => "positions",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "teachers" => Some(DirectoryTab::Teachers),
            "positions" => Some(DirectoryTab::Positions),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeacherListState {
    pub teachers: Vec<Teacher>,
    pub positions: Vec<TeacherPosition>,
    pub pagination: Pagination,
    /// True while a teacher page is in flight
    pub loading: bool,
    pub teachers_error: Option<String>,
    pub positions_error: Option<String>,
}

impl Default for TeacherListState {
    fn default() -> Self {
        Self {
            teachers: Vec::new(),
            positions: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            teachers_error: None,
            positions_error: None,
        }
    }
}

impl TeacherListState {
    /// Pager is only offered over a settled, non-empty page
    pub fn shows_pager(&self) -> bool {
        !self.loading && !self.teachers.is_empty()
    }
}

pub fn create_state() -> RwSignal<TeacherListState> {
    RwSignal::new(TeacherListState::default())
}
