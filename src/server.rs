//! JSON endpoints served next to the Dioxus SSR routes, and the settings
//! the SSR pass renders with.

use std::sync::{Arc, OnceLock};

use axum::{extract::State, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::app::api::{AppStatus, SiteSettings};
use crate::config::Config;

static SITE_SETTINGS: OnceLock<SiteSettings> = OnceLock::new();

impl From<&Config> for SiteSettings {
    fn from(config: &Config) -> Self {
        Self {
            site_title: config.site_title.clone(),
            default_theme: config.default_theme,
        }
    }
}

/// Make the configured settings visible to server-side renders. First call wins.
pub fn install_site_settings(config: &Config) {
    if SITE_SETTINGS.set(SiteSettings::from(config)).is_err() {
        tracing::warn!("Site settings already installed; keeping the first value");
    }
}

/// Settings for server-side renders (defaults until installed)
pub fn site_settings() -> SiteSettings {
    SITE_SETTINGS.get().cloned().unwrap_or_default()
}

/// Build the API router. Merged into the Dioxus router by `main`.
pub fn api_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/api/settings", get(settings_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// GET /status - build info
pub async fn status_handler() -> Json<AppStatus> {
    Json(AppStatus {
        version: env!("APP_VERSION").to_string(),
        git_sha: env!("APP_GIT_SHA").to_string(),
    })
}

/// GET /api/settings - client-facing subset of the server config
pub async fn settings_handler(State(config): State<Arc<Config>>) -> Json<SiteSettings> {
    Json(SiteSettings::from(config.as_ref()))
}
