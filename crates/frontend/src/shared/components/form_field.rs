//! Form controls bound to plain string values.
//!
//! Every control takes its current value as a `Signal<String>` and reports
//! edits through a `Callback<String>`, so the owning view model stays the
//! single source of truth.

use leptos::prelude::*;

/// Label, control and inline validation message
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,
    /// Marks the label with a red asterisk
    #[prop(optional)]
    required: bool,
    /// Validation message for this field, if any
    #[prop(into)]
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">
                {required.then(|| view! { <span class="form__required">"* "</span> })}
                {label}
            </label>
            {children()}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn TextInput(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "tel", "date", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <input
            class="form__input"
            type=input_t
            prop:value=move || value.get()
            placeholder=move || placeholder.get().unwrap_or_default()
            disabled=move || disabled.get().unwrap_or(false)
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <textarea
            class="form__textarea"
            rows=rows.unwrap_or(4).to_string()
            prop:value=move || value.get()
            placeholder=move || placeholder.get().unwrap_or_default()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Native select with an empty placeholder entry
#[component]
pub fn SelectInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" disabled=true selected=move || value.get().is_empty()>
                {move || placeholder.get().unwrap_or_default()}
            </option>
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|(val, label)| {
                        let selected = val == current;
                        view! { <option value=val selected=selected>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// Segmented radio buttons
#[component]
pub fn RadioButtons(
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__radio-group">
            {options
                .into_iter()
                .map(|(val, label)| {
                    let id = format!("{}-{}", name, val);
                    let label_for = id.clone();
                    let val_for_check = val.clone();
                    let val_for_change = val.clone();
                    view! {
                        <label class="form__radio-button" for=label_for>
                            <input
                                id=id
                                type="radio"
                                class="form__radio"
                                name=name.clone()
                                value=val
                                prop:checked=move || value.get() == val_for_check
                                on:change=move |_| on_change.run(val_for_change.clone())
                            />
                            <span>{label}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
