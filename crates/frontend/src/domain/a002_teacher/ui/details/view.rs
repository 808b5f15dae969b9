use super::degrees::DegreeRows;
use super::model::{
    TeacherForm, DOB_RULES, EMAIL_RULES, IDENTITY_RULES, NAME_RULES, PHONE_RULES, POSITION_RULES,
};
use super::view_model::TeacherFormViewModel;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{FormField, OutcomeBanner, SelectInput, TextInput};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn TeacherDetails() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let vm = TeacherFormViewModel::new(api);
    vm.load_positions_command();

    let form = vm.form;
    let saving = vm.saving;
    let value = move |get: fn(&TeacherForm) -> String| Signal::derive(move || form.with(get));
    let setter = move |set: fn(&mut TeacherForm, String)| {
        Callback::new(move |v: String| form.update(|f| set(f, v)))
    };
    let degree_vm = vm.clone();

    view! {
        <div class="details-container teacher-details">
            <div class="details-header">
                <h3>"Tạo thông tin giáo viên"</h3>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    loading=Signal::derive(move || saving.get())
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.submit_command()
                    }
                >
                    {icon("save")}
                    {move || if saving.get() { " Đang Lưu..." } else { " LƯU" }}
                </Button>
            </div>

            <OutcomeBanner outcome=vm.outcome />

            <div class="teacher-details__body">
                <div class="teacher-details__avatar">
                    <div class="avatar-placeholder">{icon("user")}</div>
                    <label class="upload-button upload-button--disabled" title="Chưa hỗ trợ tải ảnh lên">
                        {icon("upload")}
                        " Tải ảnh lên"
                        <input type="file" accept="image/*" disabled=true />
                    </label>
                </div>

                <div class="details-form details-form--grid">
                    <h4 class="form-section__title">"Thông tin cá nhân"</h4>

                    <FormField label="Họ và tên" required=true error=vm.field_error(NAME_RULES.field)>
                        <TextInput
                            value=value(|f| f.name.clone())
                            on_input=setter(|f, v| f.name = v)
                            placeholder="VD: Nguyễn Văn A"
                        />
                    </FormField>

                    <FormField label="Ngày sinh" required=true error=vm.field_error(DOB_RULES.field)>
                        <TextInput
                            value=value(|f| f.dob.clone())
                            on_input=setter(|f, v| f.dob = v)
                            input_type="date"
                        />
                    </FormField>

                    <FormField label="Số điện thoại" required=true error=vm.field_error(PHONE_RULES.field)>
                        <TextInput
                            value=value(|f| f.phone_number.clone())
                            on_input=setter(|f, v| f.phone_number = v)
                            placeholder="Nhập số điện thoại"
                            input_type="tel"
                        />
                    </FormField>

                    <FormField label="Email" required=true error=vm.field_error(EMAIL_RULES.field)>
                        <TextInput
                            value=value(|f| f.email.clone())
                            on_input=setter(|f, v| f.email = v)
                            placeholder="example@school.edu.vn"
                            input_type="email"
                        />
                    </FormField>

                    <FormField label="Số CCCD" required=true error=vm.field_error(IDENTITY_RULES.field)>
                        <TextInput
                            value=value(|f| f.identity.clone())
                            on_input=setter(|f, v| f.identity = v)
                            placeholder="Nhập số CCCD"
                        />
                    </FormField>

                    <FormField label="Địa chỉ" error=Signal::derive(|| None::<String>)>
                        <TextInput
                            value=value(|f| f.address.clone())
                            on_input=setter(|f, v| f.address = v)
                            placeholder="Địa chỉ thường trú"
                        />
                    </FormField>

                    <h4 class="form-section__title">"Thông tin công tác"</h4>

                    <FormField
                        label="Vị trí công tác"
                        required=true
                        error=vm.field_error(POSITION_RULES.field)
                    >
                        <SelectInput
                            value=value(|f| f.position_id.clone())
                            on_change=setter(|f, v| f.position_id = v)
                            options=vm.position_options()
                            placeholder="Chọn các vị trí công tác"
                        />
                    </FormField>

                    <h4 class="form-section__title">"Học vị"</h4>
                    <DegreeRows vm=degree_vm />
                </div>
            </div>
        </div>
    }
}
