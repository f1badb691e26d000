use crate::icons::LifeBuoy;
use crate::Route;
use dioxus::prelude::*;

/// Landing page the support form returns to.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "h-full flex flex-col items-center justify-center gap-4 bg-background text-foreground",
            h2 { class: "text-lg font-bold tracking-tight", "Dashboard" }
            Link {
                to: Route::Support {},
                class: "flex items-center gap-2 px-4 py-2 rounded-xl border border-border hover:bg-accent transition-all",
                LifeBuoy { size: 18 }
                "Contact support"
            }
        }
    }
}
