use crate::error::FormError;
use crate::icons::*;
use crate::models::{FieldKey, SubmissionReceipt};
use dioxus::prelude::*;
use std::time::Duration;

const TOAST_VISIBLE: Duration = Duration::from_millis(3000);
const TOAST_FADE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    /// The request went out; carries the support reference.
    Sent,
    /// The form needs attention before it can be sent.
    Flagged,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
    /// Fields the user has to fix. Empty for `Sent`.
    pub fields: Vec<FieldKey>,
    pub is_closing: bool,
}

impl Toast {
    fn sent(id: usize, receipt: &SubmissionReceipt) -> Self {
        Self {
            id,
            kind: ToastKind::Sent,
            message: format!("Support request sent. Reference {}", receipt.reference),
            fields: Vec::new(),
            is_closing: false,
        }
    }

    fn flagged(id: usize, error: &FormError) -> Self {
        let fields = match error {
            FormError::Validation { missing } => missing.clone(),
            FormError::InvalidValue { field, .. } => vec![*field],
            FormError::InvalidField(_) => Vec::new(),
        };
        Self {
            id,
            kind: ToastKind::Flagged,
            message: error.user_friendly_message(),
            fields,
            is_closing: false,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<usize>,
}

impl ToastManager {
    pub fn show_sent(&mut self, receipt: &SubmissionReceipt) {
        let id = self.take_id();
        self.push(Toast::sent(id, receipt));
    }

    pub fn show_error(&mut self, error: &FormError) {
        let id = self.take_id();
        self.push(Toast::flagged(id, error));
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.toasts.peek().clone()
    }

    fn take_id(&mut self) -> usize {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        id
    }

    fn push(&mut self, toast: Toast) {
        let id = toast.id;
        self.toasts.write().push(toast);

        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(TOAST_VISIBLE).await;
            toasts.with_mut(|t| {
                if let Some(toast) = t.iter_mut().find(|t| t.id == id) {
                    toast.is_closing = true;
                }
            });

            tokio::time::sleep(TOAST_FADE).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0);

    use_context_provider(|| ToastManager { toasts, next_id });

    rsx! {
        div { class: "contents",
            {children}

            div {
                class: "absolute bottom-8 left-0 right-0 flex flex-col items-center gap-2 pointer-events-none z-[100]",
                role: "status",
                for toast in toasts() {
                    div {
                        key: "{toast.id}",
                        class: "pointer-events-auto bg-card border border-border text-foreground px-4 py-3 rounded-2xl shadow-xl flex items-start gap-3 transition-all duration-300",
                        class: if toast.is_closing { "opacity-0 translate-y-2 scale-95" } else { "animate-in slide-in-from-bottom-2 fade-in" },
                        match toast.kind {
                            ToastKind::Sent => rsx! {
                                CircleCheck { size: 18, class: Some("text-status-success".to_string()) }
                            },
                            ToastKind::Flagged => rsx! {
                                CircleAlert { size: 18, class: Some("text-status-error".to_string()) }
                            },
                        }
                        div { class: "flex flex-col gap-1.5",
                            span { class: "text-sm font-medium", "{toast.message}" }
                            if !toast.fields.is_empty() {
                                div { class: "flex flex-wrap gap-1",
                                    for field in toast.fields.iter().copied() {
                                        span {
                                            key: "{field}",
                                            class: "text-[10px] font-bold uppercase tracking-wider px-2 py-0.5 rounded-full bg-status-error/10 text-status-error",
                                            {field.label()}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
