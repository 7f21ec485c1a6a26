use std::time::Duration;

use dioxus::prelude::*;
use uuid::Uuid;

use crate::ui::theme;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Appends a toast, evicting the oldest once the stack is full.
pub fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_VISIBLE_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    title: impl Into<String>,
    description: impl Into<String>,
) {
    let message = ToastMessage::new(kind, title, description);
    toasts.with_mut(|entries| enqueue(entries, message));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for message in entries {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let id = message.id;
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let (class, icon) = theme::toast_style(message.kind);
    rsx! {
        li {
            class: "{class}",
            "role": "status",
            span { "{icon}" }
            div {
                strong { "{message.title}" }
                p { "{message.description}" }
            }
            button {
                onclick: move |_| {
                    let mut toasts = toasts;
                    toasts.with_mut(|items| items.retain(|toast| toast.id != id));
                },
                "Dismiss"
            }
        }
    }
}
