use dioxus::prelude::*;
use std::env;

use views::{Apply, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/apply")]
    Apply {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    {
        init_tracing();
        api::config::load_dotenv();
    }
    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let events_dir = env::var("EVENTS_DIR").unwrap_or_else(|_| "<default: data>".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "<default: production>".to_string());

    eprintln!("startup: IP={ip} PORT={port}");
    eprintln!("startup: EVENTS_DIR={events_dir} APP_MODE={mode}");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::ApexTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

/// Shared chrome around every route.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        ui::Navbar {}
        main { class: "route_view", Outlet::<Route> {} }
        ui::Footer {}
    }
}
