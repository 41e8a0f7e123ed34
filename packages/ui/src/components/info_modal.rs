use dioxus::prelude::*;

use super::Modal;

/// Tone of an [`InfoModal`]; also decides its title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Success,
    Error,
    Confirm,
}

impl NoticeKind {
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::Success => "Sucesso",
            NoticeKind::Error => "Erro",
            NoticeKind::Confirm => "Confirmação",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
            NoticeKind::Confirm => "notice notice-confirm",
        }
    }
}

/// A message waiting to be shown in an [`InfoModal`].
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Message dialog. Without `actions` a single "OK" button closes it.
#[component]
pub fn InfoModal(
    #[props(default)] kind: NoticeKind,
    message: String,
    on_close: EventHandler<()>,
    actions: Option<Element>,
) -> Element {
    rsx! {
        Modal {
            title: kind.title().to_string(),
            on_close: move |_| on_close.call(()),
            p { class: kind.class(), "{message}" }
            div {
                class: "modal-actions",
                if let Some(actions) = actions {
                    {actions}
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
