//! Inputs of the support request form.
//!
//! Each input is controlled: it renders the value it is given and reports
//! raw input through `oninput`. `disabled` makes it inert while a request
//! is in flight or done.

use crate::models::{FieldKey, Urgency};
use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full bg-accent/20 border rounded-xl px-3 py-2.5 text-sm focus:outline-none focus:ring-2 focus:ring-primary/20 transition-all disabled:opacity-60";

fn border_class(invalid: bool) -> &'static str {
    if invalid {
        "border-destructive ring-2 ring-destructive/20"
    } else {
        "border-border"
    }
}

#[component]
fn FieldLabel(field: FieldKey) -> Element {
    let label = field.label();
    rsx! {
        label {
            r#for: "support-{field}",
            class: "text-[11px] font-bold uppercase tracking-widest text-muted-foreground",
            "{label}"
            if field.is_required() {
                span { class: "text-destructive ml-0.5", "*" }
            }
        }
    }
}

#[component]
pub fn TextField(
    field: FieldKey,
    value: String,
    #[props(default)] input_type: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] invalid: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let kind = input_type.unwrap_or_else(|| "text".to_string());
    let placeholder = placeholder.unwrap_or_default();
    let border = border_class(invalid);

    rsx! {
        div { class: "flex flex-col gap-1.5",
            FieldLabel { field }
            input {
                id: "support-{field}",
                name: "{field}",
                r#type: "{kind}",
                class: "{INPUT_CLASS} {border}",
                placeholder: "{placeholder}",
                required: field.is_required(),
                "aria-invalid": "{invalid}",
                disabled,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[component]
pub fn MessageField(
    value: String,
    #[props(default)] invalid: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let border = border_class(invalid);
    let field = FieldKey::Message;

    rsx! {
        div { class: "flex flex-col gap-1.5",
            FieldLabel { field }
            textarea {
                id: "support-{field}",
                name: "{field}",
                class: "{INPUT_CLASS} {border} h-32 resize-none",
                placeholder: "Describe your issue in detail...",
                required: true,
                "aria-invalid": "{invalid}",
                disabled,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[component]
pub fn UrgencySelect(
    value: Urgency,
    #[props(default)] disabled: bool,
    onchange: EventHandler<String>,
) -> Element {
    let field = FieldKey::Urgency;
    let border = border_class(false);
    let options: Vec<(Urgency, &'static str)> =
        Urgency::all().iter().map(|u| (*u, u.name())).collect();

    rsx! {
        div { class: "flex flex-col gap-1.5",
            FieldLabel { field }
            select {
                id: "support-{field}",
                name: "{field}",
                class: "{INPUT_CLASS} {border}",
                disabled,
                onchange: move |e| onchange.call(e.value()),
                for (urgency, name) in options {
                    option {
                        key: "{urgency}",
                        value: "{urgency}",
                        selected: urgency == value,
                        "{name}"
                    }
                }
            }
        }
    }
}
