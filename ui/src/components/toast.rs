//! Transient success/error notifications.

use dioxus::prelude::*;

use crate::core::timing::sleep_ms;
use crate::t;

pub const TOAST_TTL_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle shared through context; cheap to copy into handlers and tasks.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastCenter {
    queue: Signal<ToastQueue>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::default()),
        }
    }

    pub fn success(self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    pub fn dismiss(self, id: u64) {
        let mut queue = self.queue;
        queue.with_mut(|q| q.dismiss(id));
    }

    fn push(self, kind: ToastKind, text: impl Into<String>) {
        let mut queue = self.queue;
        let text = text.into();
        queue.with_mut(|q| q.push(kind, text));
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a [`ToastCenter`] to descendants (or reuse an ancestor's).
pub fn use_toast_center() -> ToastCenter {
    let inherited = try_use_context::<ToastCenter>();
    use_hook(move || inherited.unwrap_or_else(|| provide_context(ToastCenter::new())))
}

#[component]
pub fn ToastHost() -> Element {
    let center = use_toast_center();
    let toasts = center.queue.read().items().to_vec();

    rsx! {
        div { class: "toast-host", aria_live: "polite",
            for toast in toasts.into_iter() {
                ToastItem { key: "{toast.id}", toast: toast.clone(), center: center }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, center: ToastCenter) -> Element {
    let id = toast.id;
    use_future(move || async move {
        sleep_ms(TOAST_TTL_MS).await;
        center.dismiss(id);
    });

    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    let icon = match toast.kind {
        ToastKind::Success => "✅",
        ToastKind::Error => "⚠️",
    };

    rsx! {
        div { class: "{class}", role: "status",
            span { class: "toast__icon", "{icon}" }
            span { class: "toast__text", "{toast.text}" }
            button {
                r#type: "button",
                class: "toast__close",
                aria_label: t!("toast-close"),
                onclick: move |_| center.dismiss(id),
                "×"
            }
        }
    }
}
