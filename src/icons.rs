use dioxus::prelude::*;

#[component]
fn IconBase(
    size: u32,
    #[props(default)] class: Option<String>,
    #[props(default = 2)] stroke_width: u32,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class,
            {children}
        }
    }
}

#[component]
pub fn ArrowLeft(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "m12 19-7-7 7-7" }
            path { d: "M19 12H5" }
        }
    }
}

#[component]
pub fn Loader(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M12 2v4" }
            path { d: "m16.2 7.8 2.9-2.9" }
            path { d: "M18 12h4" }
            path { d: "m16.2 16.2 2.9 2.9" }
            path { d: "M12 18v4" }
            path { d: "m4.9 19.1 2.9-2.9" }
            path { d: "M2 12h4" }
            path { d: "m4.9 4.9 2.9 2.9" }
        }
    }
}

#[component]
pub fn CircleCheck(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

#[component]
pub fn CircleAlert(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        }
    }
}

#[component]
pub fn LifeBuoy(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "m4.93 4.93 4.24 4.24" }
            path { d: "m14.83 9.17 4.24-4.24" }
            path { d: "m14.83 14.83 4.24 4.24" }
            path { d: "m9.17 14.83-4.24 4.24" }
        }
    }
}
