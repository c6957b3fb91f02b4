use dioxus::prelude::*;
use shared_types::Session;

mod components;
mod config;
mod format_helpers;
mod routes;

use routes::Shell;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| config::load_config().clone());

    // The one session for the lifetime of the app; starts anonymous on landing.
    let session = use_signal(|| {
        tracing::info!(platform = client_platform(), "Starting shell");
        Session::new()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Shell { session }
    }
}
