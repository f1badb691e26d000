use crate::components::ui::{BackButton, PrimaryButton};
use crate::components::{MessageField, TextField, UrgencySelect};
use crate::hooks::{use_support_form, SupportFormState};
use crate::icons::*;
use crate::models::FieldKey;
use crate::services::{NavigationService, SubmitService};
use dioxus::prelude::*;

#[component]
pub fn Support() -> Element {
    let support = use_support_form();
    render_support_form(support)
}

/// Form body shared by the routed view and tests that inject their own services.
pub fn render_support_form<S: SubmitService, N: NavigationService>(
    support: SupportFormState<S, N>,
) -> Element {
    let state = (support.form)();
    let missing = (support.missing)();
    let editable = state.is_idle();
    let fields = state.fields.clone();
    let invalid = |key: FieldKey| missing.contains(&key);

    rsx! {
        div { class: "h-full flex flex-col bg-background text-foreground",
            div { class: "flex items-center gap-3 px-4 py-2 border-b border-border/50",
                BackButton { onclick: move |_| support.go_back() }
                h2 { class: "text-lg font-bold tracking-tight", "Contact support" }
            }

            div { class: "flex-1 p-4 overflow-y-auto custom-scrollbar",
                if let Some(receipt) = state.receipt.clone().filter(|_| state.is_submitted()) {
                    div {
                        id: "support-confirmation",
                        class: "flex flex-col items-center text-center gap-4 py-10",
                        div { class: "w-16 h-16 rounded-full bg-status-success/10 flex items-center justify-center",
                            CircleCheck { size: 32, class: Some("text-status-success".to_string()) }
                        }
                        h3 { class: "text-xl font-bold", "Request received" }
                        p { class: "text-xs text-muted-foreground max-w-[260px]",
                            "Our support team will get back to you at {fields.email}."
                        }
                        div { class: "mt-2",
                            p { class: "text-[10px] text-muted-foreground font-bold uppercase tracking-widest", "Support ID" }
                            p { class: "text-xs font-mono text-foreground mt-1", "{receipt.reference}" }
                        }
                        PrimaryButton {
                            label: "Back to dashboard".to_string(),
                            onclick: move |_| support.acknowledge_and_return(),
                        }
                    }
                } else {
                    div {
                        id: "support-request",
                        class: "flex flex-col gap-4",
                        div { class: "flex items-center gap-3 p-3 rounded-xl bg-status-info/10 text-xs text-muted-foreground",
                            LifeBuoy { size: 18, class: Some("text-status-info shrink-0".to_string()) }
                            "Tell us what went wrong and we'll reply by email."
                        }
                        TextField {
                            field: FieldKey::Name,
                            value: fields.name.clone(),
                            placeholder: Some("Jane Doe".to_string()),
                            invalid: invalid(FieldKey::Name),
                            disabled: !editable,
                            oninput: move |v: String| support.edit(FieldKey::Name, v),
                        }
                        TextField {
                            field: FieldKey::Email,
                            value: fields.email.clone(),
                            input_type: Some("email".to_string()),
                            placeholder: Some("you@example.com".to_string()),
                            invalid: invalid(FieldKey::Email),
                            disabled: !editable,
                            oninput: move |v: String| support.edit(FieldKey::Email, v),
                        }
                        TextField {
                            field: FieldKey::Subject,
                            value: fields.subject.clone(),
                            placeholder: Some("What do you need help with?".to_string()),
                            invalid: invalid(FieldKey::Subject),
                            disabled: !editable,
                            oninput: move |v: String| support.edit(FieldKey::Subject, v),
                        }
                        UrgencySelect {
                            value: fields.urgency,
                            disabled: !editable,
                            onchange: move |v: String| support.edit(FieldKey::Urgency, v),
                        }
                        MessageField {
                            value: fields.message.clone(),
                            invalid: invalid(FieldKey::Message),
                            disabled: !editable,
                            oninput: move |v: String| support.edit(FieldKey::Message, v),
                        }
                        PrimaryButton {
                            label: "Send request".to_string(),
                            busy_label: Some("Sending...".to_string()),
                            busy: state.is_submitting(),
                            onclick: move |_| support.submit(),
                        }
                    }
                }
            }
        }
    }
}
