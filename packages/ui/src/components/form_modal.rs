use dioxus::prelude::*;

use super::Modal;
use crate::form::{submit, value, Field, FieldErrors, FieldKind, FormValues};

/// Modal form generated from a field list.
///
/// The draft is seeded from `default_values` when the modal mounts and
/// re-seeded whenever the caller passes different defaults. "Salvar"
/// validates and hands the raw values to `on_submit`; "Cancelar" and the
/// backdrop call `on_close` without validating.
#[component]
pub fn FormModal(
    title: String,
    fields: Vec<Field>,
    #[props(!optional)] default_values: Option<FormValues>,
    on_submit: EventHandler<FormValues>,
    on_close: EventHandler<()>,
) -> Element {
    let initial = default_values.clone();
    let mut draft = use_signal(move || initial.unwrap_or_default());
    let mut errors = use_signal(FieldErrors::new);

    use_effect(use_reactive((&default_values,), move |(defaults,)| {
        draft.set(defaults.unwrap_or_default());
        errors.set(FieldErrors::new());
    }));

    let rules = fields.clone();
    let handle_submit = move |_| match submit(&rules, draft()) {
        Ok(values) => {
            errors.set(FieldErrors::new());
            on_submit.call(values);
        }
        Err(found) => errors.set(found),
    };

    rsx! {
        Modal {
            title,
            on_close: move |_| on_close.call(()),
            div {
                class: "form-modal",
                for field in fields {
                    FormFieldInput {
                        key: "{field.name}",
                        value: value(&draft.read(), &field.name).to_string(),
                        error: errors.read().get(&field.name).cloned(),
                        field: field.clone(),
                        on_change: move |(name, text): (String, String)| {
                            draft.write().insert(name, text);
                        },
                    }
                }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: handle_submit,
                        "Salvar"
                    }
                }
            }
        }
    }
}

/// One labelled input with its validation message.
#[component]
fn FormFieldInput(
    field: Field,
    value: String,
    #[props(!optional)] error: Option<String>,
    on_change: EventHandler<(String, String)>,
) -> Element {
    let id = format!("campo-{}", field.name);
    let name = field.name.clone();
    let input = match field.kind {
        FieldKind::Text { max_length } => rsx! {
            input {
                id: "{id}",
                class: "form-input",
                r#type: "text",
                maxlength: max_length.map(|n| n.to_string()),
                value: "{value}",
                oninput: move |evt: FormEvent| on_change.call((name.clone(), evt.value())),
            }
        },
        FieldKind::Number => rsx! {
            input {
                id: "{id}",
                class: "form-input",
                r#type: "number",
                min: "0",
                step: "any",
                value: "{value}",
                oninput: move |evt: FormEvent| on_change.call((name.clone(), evt.value())),
            }
        },
        FieldKind::Select { options } => rsx! {
            select {
                id: "{id}",
                class: "form-input",
                value: "{value}",
                onchange: move |evt: FormEvent| on_change.call((name.clone(), evt.value())),
                option { value: "", "Selecione" }
                for choice in options {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "form-field",
            label {
                r#for: "{id}",
                "{field.label}"
                if field.required {
                    span { class: "form-required", " *" }
                }
            }
            {input}
            if let Some(error) = error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}
