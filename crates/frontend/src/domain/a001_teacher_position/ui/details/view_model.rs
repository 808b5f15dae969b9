use super::model::PositionForm;
use crate::domain::a001_teacher_position::api;
use crate::shared::api_client::ApiClient;
use crate::shared::outcome::Outcome;
use crate::shared::validation::ValidationErrors;
use leptos::prelude::*;

pub const VALIDATION_WARNING: &str = "Vui lòng điền đầy đủ và chính xác các trường bắt buộc.";
pub const SUCCESS_FALLBACK: &str = "Tạo vị trí công tác thành công!";
pub const STATUS_FALLBACK: &str = "Có lỗi xảy ra khi tạo vị trí.";

/// ViewModel for the teacher position creation form
#[derive(Clone)]
pub struct PositionFormViewModel {
    api: ApiClient,
    pub form: RwSignal<PositionForm>,
    pub errors: RwSignal<ValidationErrors>,
    pub saving: RwSignal<bool>,
    pub outcome: RwSignal<Option<Outcome>>,
}

impl PositionFormViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            form: RwSignal::new(PositionForm::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            saving: RwSignal::new(false),
            outcome: RwSignal::new(None),
        }
    }

    /// Inline message for one field
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Validate, send and record the outcome.
    ///
    /// `on_close` runs once, only after the server confirmed the creation,
    /// and receives the recorded success outcome.
    pub async fn submit(&self, on_close: Option<Callback<Outcome>>) -> Outcome {
        let dto = match self.form.get_untracked().build_payload() {
            Ok(dto) => dto,
            Err(errors) => {
                log::warn!("Position form blocked: {} invalid field(s)", errors.len());
                self.errors.set(errors);
                return self.finish(Outcome::Warning(VALIDATION_WARNING.to_string()));
            }
        };
        self.errors.set(ValidationErrors::new());

        self.saving.set(true);
        let result = api::create_position(&self.api, &dto).await;
        self.saving.set(false);

        match result {
            Ok(response) => {
                log::info!("Teacher position '{}' created", dto.code);
                self.form.set(PositionForm::default());
                let outcome = self.finish(Outcome::Success(
                    response.text().unwrap_or(SUCCESS_FALLBACK).to_string(),
                ));
                // the form may unmount inside on_close, so the outcome is handed over
                if let Some(on_close) = on_close {
                    on_close.run(outcome.clone());
                }
                outcome
            }
            Err(e) => {
                log::warn!("Teacher position creation failed: {}", e);
                self.finish(Outcome::from_submit_error(&e, STATUS_FALLBACK))
            }
        }
    }

    /// Fire-and-forget wrapper for the submit button
    pub fn submit_command(&self, on_close: Option<Callback<Outcome>>) {
        if self.saving.get_untracked() {
            return;
        }
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.submit(on_close).await;
        });
    }

    fn finish(&self, outcome: Outcome) -> Outcome {
        self.outcome.set(Some(outcome.clone()));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::testing::{mock_client, MockTransport};
    use crate::shared::api_client::{ApiError, HttpResponse};
    use contracts::enums::PositionStatus;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn filled_vm(mock: Arc<MockTransport>) -> PositionFormViewModel {
        let vm = PositionFormViewModel::new(mock_client(mock));
        vm.form.set(PositionForm {
            name: "Tổ trưởng chuyên môn".to_string(),
            code: "TTCM".to_string(),
            description: "Phụ trách tổ".to_string(),
            status: Some(PositionStatus::Inactive),
        });
        vm
    }

    #[tokio::test]
    async fn test_created_resets_form_and_closes_once() {
        let owner = Owner::new();
        owner.set();

        let mock = MockTransport::new();
        mock.on_json(
            "POST",
            "/teacherPosition/newTeacherPosition",
            201,
            json!({"message": "Đã tạo"}),
        );
        let vm = filled_vm(mock.clone());

        let closed = Arc::new(AtomicUsize::new(0));
        let counter = closed.clone();
        let handed_over = Arc::new(Mutex::new(None));
        let received = handed_over.clone();
        let recorded = vm.outcome;
        let on_close = Callback::new(move |outcome: Outcome| {
            counter.fetch_add(1, Ordering::SeqCst);
            // already recorded when the caller takes over
            assert_eq!(recorded.get_untracked(), Some(outcome.clone()));
            *received.lock().unwrap() = Some(outcome);
        });

        let outcome = vm.submit(Some(on_close)).await;

        assert_eq!(outcome, Outcome::Success("Đã tạo".to_string()));
        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(*handed_over.lock().unwrap(), Some(outcome.clone()));
        assert_eq!(vm.form.get_untracked(), PositionForm::default());
        assert!(!vm.saving.get_untracked());

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            Some(json!({
                "name": "Tổ trưởng chuyên môn",
                "code": "TTCM",
                "des": "Phụ trách tổ",
                "status": false
            }))
        );
    }

    #[tokio::test]
    async fn test_success_without_message_uses_fallback() {
        let owner = Owner::new();
        owner.set();

        let mock = MockTransport::new();
        mock.on(
            "POST",
            "/teacherPosition/newTeacherPosition",
            Ok(HttpResponse::new(200, "")),
        );
        let vm = filled_vm(mock);

        let outcome = vm.submit(None).await;
        assert_eq!(outcome.message(), SUCCESS_FALLBACK);
    }

    #[tokio::test]
    async fn test_missing_fields_block_request() {
        let owner = Owner::new();
        owner.set();

        let mock = MockTransport::new();
        let vm = PositionFormViewModel::new(mock_client(mock.clone()));
        vm.form.update(|f| f.name = "Hiệu trưởng".to_string());

        let outcome = vm.submit(None).await;

        assert_eq!(outcome, Outcome::Warning(VALIDATION_WARNING.to_string()));
        assert!(mock.requests().is_empty());
        assert_eq!(
            vm.field_error("code").get_untracked(),
            Some("Vui lòng nhập Mã!".to_string())
        );
        assert_eq!(vm.field_error("name").get_untracked(), None);
        assert_eq!(vm.outcome.get_untracked(), Some(outcome));
    }

    #[tokio::test]
    async fn test_rejection_keeps_form_and_skips_close() {
        let owner = Owner::new();
        owner.set();

        let mock = MockTransport::new();
        mock.on_json(
            "POST",
            "/teacherPosition/newTeacherPosition",
            400,
            json!({"message": "Mã đã tồn tại"}),
        );
        let vm = filled_vm(mock);
        let before = vm.form.get_untracked();

        let closed = Arc::new(AtomicUsize::new(0));
        let counter = closed.clone();
        let on_close = Callback::new(move |_: Outcome| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let outcome = vm.submit(Some(on_close)).await;

        assert_eq!(outcome, Outcome::Error("Thất bại: Mã đã tồn tại".to_string()));
        assert_eq!(closed.load(Ordering::SeqCst), 0);
        assert_eq!(vm.form.get_untracked(), before);
    }

    #[tokio::test]
    async fn test_network_failure_uses_connection_text() {
        let owner = Owner::new();
        owner.set();

        let mock = MockTransport::new();
        mock.on(
            "POST",
            "/teacherPosition/newTeacherPosition",
            Err(ApiError::Network("offline".to_string())),
        );
        let vm = filled_vm(mock);

        let outcome = vm.submit(None).await;
        assert_eq!(
            outcome.message(),
            "Thất bại: Không thể kết nối đến máy chủ."
        );
    }
}
