use crate::icons::{ArrowLeft, Loader};
use dioxus::prelude::*;

#[component]
pub fn BackButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "w-12 flex items-center justify-center hover:bg-accent rounded-xl transition-all text-foreground active:scale-90 shadow-sm border border-transparent hover:border-border shrink-0",
            style: "height: 48px !important; min-height: 48px !important;",
            r#type: "button",
            onclick: move |e| onclick.call(e),
            ArrowLeft { size: 24 }
        }
    }
}

#[component]
pub fn PrimaryButton(
    label: String,
    #[props(default)] busy_label: Option<String>,
    #[props(default)] busy: bool,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let busy_text = busy_label.clone().unwrap_or_else(|| label.clone());
    rsx! {
        button {
            class: "w-full bg-primary hover:brightness-110 text-primary-foreground font-bold py-3 rounded-xl transition-all active:scale-95 flex items-center justify-center gap-2 disabled:opacity-50",
            r#type: "button",
            disabled: disabled || busy,
            onclick: move |e| onclick.call(e),
            if busy {
                Loader { size: 18, class: Some("animate-spin".to_string()) }
                "{busy_text}"
            } else {
                "{label}"
            }
        }
    }
}
