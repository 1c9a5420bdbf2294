//! State & Routing Demo
//!
//! Server builds render the first page and serve the JSON endpoints;
//! web builds hydrate the same component tree in the browser.

use state_routing_demo::app::App;

#[cfg(feature = "server")]
fn main() {
    use state_routing_demo::{config, server};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Config is loaded before logging so its filter can seed the subscriber
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting State & Routing Demo v{} ({})",
        env!("APP_VERSION"),
        env!("APP_GIT_SHA")
    );
    tracing::info!(
        site_title = %config.site_title,
        default_theme = config.default_theme.as_str(),
        "Configuration loaded"
    );

    server::install_site_settings(&config);
    let config = std::sync::Arc::new(config);
    dioxus::serve(move || {
        let config = config.clone();
        async move { Ok(dioxus::server::router(App).merge(server::api_router(config))) }
    });
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
