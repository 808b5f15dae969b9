use super::model::TeacherForm;
use crate::domain::a001_teacher_position::api as position_api;
use crate::domain::a002_teacher::api as teacher_api;
use crate::shared::api_client::ApiClient;
use crate::shared::date_utils;
use crate::shared::outcome::Outcome;
use crate::shared::validation::ValidationErrors;
use chrono::NaiveDate;
use contracts::domain::a001_teacher_position::aggregate::TeacherPosition;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

pub const VALIDATION_WARNING: &str = "Vui lòng kiểm tra lại các trường bị lỗi.";
pub const SUCCESS_FALLBACK: &str = "Tạo giáo viên thành công!";
pub const STATUS_FALLBACK: &str = "Có lỗi xảy ra.";
pub const POSITIONS_FAILURE: &str = "Không thể tải danh sách vị trí công tác.";

/// ViewModel for the teacher creation form
#[derive(Clone)]
pub struct TeacherFormViewModel {
    api: ApiClient,
    pub form: RwSignal<TeacherForm>,
    pub positions: RwSignal<Vec<TeacherPosition>>,
    pub errors: RwSignal<ValidationErrors>,
    pub saving: RwSignal<bool>,
    pub outcome: RwSignal<Option<Outcome>>,
}

impl TeacherFormViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            form: RwSignal::new(TeacherForm::default()),
            positions: RwSignal::new(Vec::new()),
            errors: RwSignal::new(ValidationErrors::new()),
            saving: RwSignal::new(false),
            outcome: RwSignal::new(None),
        }
    }

    /// `(id, name)` pairs for the position select
    pub fn position_options(&self) -> Signal<Vec<(String, String)>> {
        let positions = self.positions;
        Signal::derive(move || {
            positions.with(|items| {
                items
                    .iter()
                    .map(|p| (p.id.as_string(), p.name.clone()))
                    .collect()
            })
        })
    }

    pub fn field_error(&self, field: impl Into<String>) -> Signal<Option<String>> {
        let errors = self.errors;
        let field = field.into();
        Signal::derive(move || errors.with(|e| e.get(&field).map(str::to_string)))
    }

    pub fn add_degree(&self) {
        self.form.update(|f| f.add_degree());
    }

    pub fn remove_degree(&self, key: u32) {
        self.form.update(|f| f.remove_degree(key));
    }

    /// Fill the position select
    pub async fn load_positions(&self) {
        match position_api::fetch_positions(&self.api).await {
            Ok(positions) => {
                log::info!("Loaded {} teacher positions", positions.len());
                self.positions.set(positions);
            }
            Err(e) => {
                log::error!("Error fetching teacher positions: {}", e);
                self.outcome
                    .set(Some(Outcome::Error(POSITIONS_FAILURE.to_string())));
            }
        }
    }

    pub async fn submit(&self) -> Outcome {
        self.submit_on(date_utils::today()).await
    }

    /// Validate, send and record the outcome, using `today` as the start date
    pub async fn submit_on(&self, today: NaiveDate) -> Outcome {
        let dto = match self.form.with_untracked(|f| f.build_payload(today)) {
            Ok(dto) => dto,
            Err(errors) => {
                log::warn!("Teacher form blocked: {} invalid field(s)", errors.len());
                self.errors.set(errors);
                return self.finish(Outcome::Warning(VALIDATION_WARNING.to_string()));
            }
        };
        self.errors.set(ValidationErrors::new());

        self.saving.set(true);
        let result = teacher_api::create_teacher(&self.api, &dto).await;
        self.saving.set(false);

        let outcome = match result {
            Ok(response) => {
                log::info!("Teacher '{}' created", dto.name);
                self.form.set(TeacherForm::default());
                Outcome::Success(response.text().unwrap_or(SUCCESS_FALLBACK).to_string())
            }
            Err(e) => {
                log::warn!("Teacher creation failed: {}", e);
                Outcome::from_submit_error(&e, STATUS_FALLBACK)
            }
        };
        self.finish(outcome)
    }

    pub fn load_positions_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load_positions().await });
    }

    pub fn submit_command(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.submit().await;
        });
    }

    fn finish(&self, outcome: Outcome) -> Outcome {
        self.outcome.set(Some(outcome.clone()));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::DegreeRow;
    use super::*;
    use crate::shared::api_client::testing::{mock_client, MockTransport};
    use crate::shared::api_client::{ApiError, HttpResponse};
    use serde_json::json;
    use std::sync::Arc;

    const CREATE: &str = "/teachers/newTeacher";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
    }

    fn setup() -> (Arc<MockTransport>, TeacherFormViewModel) {
        let owner = Owner::new();
        owner.set();
        // Keep the reactive owner alive for the rest of the test; dropping it
        // here would dispose every signal the view model creates.
        std::mem::forget(owner);
        let mock = MockTransport::new();
        let vm = TeacherFormViewModel::new(mock_client(mock.clone()));
        vm.form.update(|f| {
            f.name = "Lê Văn C".to_string();
            f.dob = "1985-11-20".to_string();
            f.phone_number = "0987654321".to_string();
            f.email = "levanc@thcs.edu.vn".to_string();
            f.identity = "079085000456".to_string();
            f.address = "Quận 3, TP.HCM".to_string();
            f.position_id = "p-02".to_string();
            f.degrees[0] = DegreeRow {
                key: 0,
                degree_type: "Bachelor".to_string(),
                school: "ĐH Sư phạm TP.HCM".to_string(),
                major: "Ngữ văn".to_string(),
                is_graduated: "true".to_string(),
                year: "2007".to_string(),
            };
        });
        (mock, vm)
    }

    #[tokio::test]
    async fn test_created_sends_payload_and_resets() {
        let (mock, vm) = setup();
        mock.on_json("POST", CREATE, 201, json!({"message": "Tạo giáo viên thành công"}));

        let outcome = vm.submit_on(today()).await;

        assert_eq!(outcome, Outcome::Success("Tạo giáo viên thành công".to_string()));
        assert_eq!(vm.form.get_untracked(), TeacherForm::default());
        assert!(!vm.saving.get_untracked());

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://api.test/teachers/newTeacher");
        let body = requests[0].body.clone().unwrap();
        assert_eq!(body["startDate"], json!("2025-09-05"));
        assert_eq!(body["isActive"], json!(true));
        assert_eq!(body["isDeleted"], json!(false));
        assert_eq!(body["address"], json!("Quận 3, TP.HCM"));
        assert_eq!(body["degrees"][0]["year"], json!(2007));
        assert_eq!(body["degrees"][0]["isGraduated"], json!(true));
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let (mock, vm) = setup();
        vm.form.update(|f| f.identity.clear());

        let outcome = vm.submit_on(today()).await;

        assert_eq!(outcome, Outcome::Warning(VALIDATION_WARNING.to_string()));
        assert!(mock.requests().is_empty());
        assert_eq!(
            vm.field_error("identity").get_untracked(),
            Some("Vui lòng nhập số CCCD!".to_string())
        );
        assert_eq!(vm.errors.get_untracked().len(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_keeps_form() {
        let (mock, vm) = setup();
        mock.on("POST", CREATE, Err(ApiError::Network("offline".to_string())));
        let before = vm.form.get_untracked();

        let outcome = vm.submit_on(today()).await;

        assert!(outcome.message().contains("Không thể kết nối đến máy chủ."));
        assert_eq!(vm.form.get_untracked(), before);
        assert_eq!(vm.outcome.get_untracked(), Some(outcome));
    }

    #[tokio::test]
    async fn test_unconfirmed_success_status_is_error() {
        let (mock, vm) = setup();
        mock.on("POST", CREATE, Ok(HttpResponse::new(202, "{}")));

        let outcome = vm.submit_on(today()).await;
        assert_eq!(outcome, Outcome::Error("Lỗi: Có lỗi xảy ra.".to_string()));
    }

    #[tokio::test]
    async fn test_errors_cleared_after_valid_submit() {
        let (mock, vm) = setup();
        mock.on_json("POST", CREATE, 200, json!({}));
        vm.form.update(|f| f.email = "sai".to_string());
        vm.submit_on(today()).await;
        assert!(!vm.errors.get_untracked().is_empty());

        vm.form.update(|f| f.email = "levanc@thcs.edu.vn".to_string());
        let outcome = vm.submit_on(today()).await;
        assert_eq!(outcome.message(), SUCCESS_FALLBACK);
        assert!(vm.errors.get_untracked().is_empty());
    }

    #[tokio::test]
    async fn test_positions_feed_select() {
        let (mock, vm) = setup();
        mock.on_json(
            "GET",
            "/teacherPosition",
            200,
            json!({"data": [{"_id": "p-02", "code": "GVBM", "name": "Giáo viên bộ môn"}]}),
        );

        vm.load_positions().await;

        assert_eq!(
            vm.position_options().get_untracked(),
            vec![("p-02".to_string(), "Giáo viên bộ môn".to_string())]
        );
    }

    #[tokio::test]
    async fn test_positions_failure_reported() {
        let (_mock, vm) = setup();

        vm.load_positions().await;

        assert_eq!(
            vm.outcome.get_untracked(),
            Some(Outcome::Error(POSITIONS_FAILURE.to_string()))
        );
        assert!(vm.positions.get_untracked().is_empty());
    }
}
