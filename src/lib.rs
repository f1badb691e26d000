#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod models;
pub mod services;
pub mod state;
pub mod views;

use dioxus::prelude::*;

use components::toast::ToastProvider;
use views::{dashboard::Dashboard, support::Support};

pub const WINDOW_WIDTH: f64 = 380.0;
pub const WINDOW_HEIGHT: f64 = 700.0;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Support {},
    #[route("/dashboard")]
    Dashboard {},
}

pub fn App() -> Element {
    rsx! {
        ToastProvider {
            div {
                class: "bg-background text-foreground",
                style: "height: {WINDOW_HEIGHT}px; width: {WINDOW_WIDTH}px; position: relative; display: flex; flex-direction: column; overflow: hidden;",
                Router::<Route> {}
            }
        }
    }
}

#[cfg(feature = "desktop")]
pub fn run_app() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    tracing_subscriber::fmt::init();
    tracing::info!(
        "Starting support desk (submit delay {:?})",
        config::CONFIG.submit_delay
    );

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Support")
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}
