use super::model::{PositionForm, CODE_RULES, DESCRIPTION_RULES, NAME_RULES, STATUS_RULES};
use super::view_model::PositionFormViewModel;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{FormField, OutcomeBanner, RadioButtons, TextArea, TextInput};
use crate::shared::icons::icon;
use crate::shared::outcome::Outcome;
use contracts::enums::PositionStatus;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Teacher position creation form.
///
/// `on_close` runs after the server confirms the new position and gets the
/// success outcome to show once the form is gone.
#[component]
pub fn TeacherPositionDetails(
    #[prop(optional)] on_close: Option<Callback<Outcome>>,
) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let vm = PositionFormViewModel::new(api);

    let form = vm.form;
    let saving = vm.saving;
    let text_field = move |get: fn(&PositionForm) -> String| Signal::derive(move || form.with(get));

    let status_options: Vec<(String, String)> = PositionStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    view! {
        <div class="details-container position-details">
            <div class="details-header">
                <h3>"Tạo vị trí công tác"</h3>
            </div>

            <OutcomeBanner outcome=vm.outcome />

            <div class="details-form">
                <FormField label="Tên" required=true error=vm.field_error(NAME_RULES.field)>
                    <TextInput
                        value=text_field(|f| f.name.clone())
                        on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                        placeholder="Nhập tên vị trí"
                    />
                </FormField>

                <FormField label="Mã" required=true error=vm.field_error(CODE_RULES.field)>
                    <TextInput
                        value=text_field(|f| f.code.clone())
                        on_input=Callback::new(move |v: String| form.update(|f| f.code = v))
                        placeholder="Nhập mã vị trí"
                    />
                </FormField>

                <FormField
                    label="Mô tả"
                    required=true
                    error=vm.field_error(DESCRIPTION_RULES.field)
                >
                    <TextArea
                        value=text_field(|f| f.description.clone())
                        on_input=Callback::new(move |v: String| form.update(|f| f.description = v))
                        placeholder="Nhập mô tả"
                        rows=4
                    />
                </FormField>

                <FormField label="Trạng thái" required=true error=vm.field_error(STATUS_RULES.field)>
                    <RadioButtons
                        name="position-status"
                        value=text_field(|f| {
                            f.status.map(|s| s.code().to_string()).unwrap_or_default()
                        })
                        on_change=Callback::new(move |code: String| {
                            form.update(|f| f.status = PositionStatus::from_code(&code))
                        })
                        options=status_options
                    />
                </FormField>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    loading=Signal::derive(move || saving.get())
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.submit_command(on_close)
                    }
                >
                    {icon("save")}
                    {move || if saving.get() { "Đang Lưu..." } else { "LƯU" }}
                </Button>
            </div>
        </div>
    }
}
