use dioxus::prelude::*;
use std::env;

use views::{Home, Sico};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/sico")]
    Sico {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// Bootstrap drives the collapsible menu; AOS runs the scroll animations.
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const AOS_CSS: &str = "https://unpkg.com/aos@2.3.4/dist/aos.css";
const AOS_JS: &str = "https://unpkg.com/aos@2.3.4/dist/aos.js";

fn main() {
    install_panic_hook();
    #[cfg(feature = "server")]
    init_tracing();
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

    let mode = site::AppMode::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_log_filter()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = site::AppMode::from_env();

    tracing::info!("startup: IP={ip} PORT={port} APP_MODE={mode:?}");
}

#[component]
fn App() -> Element {
    // Handlers attach to the rendered markup, so boot after the first mount.
    use_effect(|| {
        #[cfg(target_arch = "wasm32")]
        {
            let config = site::SiteConfig::default();
            let bundled = ui::bundled_tables(&config.i18n);
            site::web::boot(config, bundled);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: AOS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: BOOTSTRAP_JS }
        document::Script { src: AOS_JS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        Router::<Route> {}
    }
}
