use super::model::{
    degree_field, DegreeRow, DEGREE_TYPE_RULES, GRADUATED_OPTIONS, GRADUATED_RULES, MAJOR_RULES,
    SCHOOL_RULES, YEAR_RULES,
};
use super::view_model::TeacherFormViewModel;
use crate::shared::components::{SelectInput, TextInput};
use crate::shared::icons::icon;
use contracts::enums::DegreeType;
use leptos::prelude::*;

/// Editable table of degree rows
#[component]
pub fn DegreeRows(vm: TeacherFormViewModel) -> impl IntoView {
    let form = vm.form;
    let keys = move || form.with(|f| f.degrees.iter().map(|d| d.key).collect::<Vec<_>>());

    view! {
        <div class="degree-table">
            <div class="degree-table__header">
                <span>"Bậc"</span>
                <span>"Trường"</span>
                <span>"Chuyên ngành"</span>
                <span>"Trạng thái"</span>
                <span>"Tốt nghiệp (Năm)"</span>
                <span></span>
            </div>
            <For
                each=keys
                key=|key| *key
                children={
                    let vm = vm.clone();
                    move |key| view! { <DegreeRowEditor vm=vm.clone() row_key=key /> }
                }
            />
            <button
                type="button"
                class="btn btn-dashed"
                on:click={
                    let vm = vm.clone();
                    move |_| vm.add_degree()
                }
            >
                {icon("plus")}
                " Thêm Học Vị"
            </button>
        </div>
    }
}

#[component]
fn DegreeRowEditor(vm: TeacherFormViewModel, row_key: u32) -> impl IntoView {
    let form = vm.form;

    let value = move |get: fn(&DegreeRow) -> String| {
        Signal::derive(move || {
            form.with(|f| {
                f.degrees
                    .iter()
                    .find(|d| d.key == row_key)
                    .map(get)
                    .unwrap_or_default()
            })
        })
    };
    let setter = move |set: fn(&mut DegreeRow, String)| {
        Callback::new(move |v: String| {
            form.update(|f| {
                if let Some(row) = f.degree_mut(row_key) {
                    set(row, v);
                }
            })
        })
    };
    let error = |field: &str| vm.field_error(degree_field(row_key, field));

    let type_options: Vec<(String, String)> = DegreeType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();
    let graduated_options: Vec<(String, String)> = GRADUATED_OPTIONS
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect();

    view! {
        <div class="degree-table__row">
            <Cell error=error(DEGREE_TYPE_RULES.field)>
                <SelectInput
                    value=value(|d| d.degree_type.clone())
                    on_change=setter(|d, v| d.degree_type = v)
                    options=type_options
                    placeholder="Chọn bậc"
                />
            </Cell>
            <Cell error=error(SCHOOL_RULES.field)>
                <TextInput
                    value=value(|d| d.school.clone())
                    on_input=setter(|d, v| d.school = v)
                    placeholder="Nhập trường"
                />
            </Cell>
            <Cell error=error(MAJOR_RULES.field)>
                <TextInput
                    value=value(|d| d.major.clone())
                    on_input=setter(|d, v| d.major = v)
                    placeholder="Nhập ngành"
                />
            </Cell>
            <Cell error=error(GRADUATED_RULES.field)>
                <SelectInput
                    value=value(|d| d.is_graduated.clone())
                    on_change=setter(|d, v| d.is_graduated = v)
                    options=graduated_options
                    placeholder="Chọn trạng thái"
                />
            </Cell>
            <Cell error=error(YEAR_RULES.field)>
                <TextInput
                    value=value(|d| d.year.clone())
                    on_input=setter(|d, v| d.year = v)
                    placeholder="Chọn năm"
                    input_type="number"
                />
            </Cell>
            <button
                type="button"
                class="btn-icon btn-icon--danger"
                title="Xóa"
                on:click={
                    let vm = vm.clone();
                    move |_| vm.remove_degree(row_key)
                }
            >
                {icon("minus-circle")}
            </button>
        </div>
    }
}

#[component]
fn Cell(#[prop(into)] error: Signal<Option<String>>, children: Children) -> impl IntoView {
    view! {
        <div class="degree-table__cell" class:degree-table__cell--invalid=move || error.get().is_some()>
            {children()}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
