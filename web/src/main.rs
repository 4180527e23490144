use dioxus::prelude::*;

use tavola_web::state::AppState;
use tavola_web::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // dioxus-logger routes tracing output to the browser console
    dioxus::logger::initialize_default();

    tracing::info!("Starting Tavola - MySQL table browser");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize shared application state
    use_context_provider(|| Signal::new(AppState::new()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
