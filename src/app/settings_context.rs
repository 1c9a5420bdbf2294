//! Settings context for shared site settings.
//!
//! Holds the server-provided site title and default calculator theme so the
//! shell and the calculator read the same values.

use dioxus::prelude::*;

use crate::app::api::SiteSettings;
use crate::app::theme::Theme;

/// Global settings state shared via context
#[derive(Clone, Copy)]
pub struct SettingsContext {
    site_title: Signal<String>,
    default_theme: Signal<Theme>,
}

impl SettingsContext {
    pub fn site_title(&self) -> String {
        self.site_title.read().clone()
    }

    pub fn default_theme(&self) -> Theme {
        (self.default_theme)()
    }

    pub fn update(&self, settings: SiteSettings) {
        let mut title = self.site_title;
        let mut theme = self.default_theme;
        title.set(settings.site_title);
        theme.set(settings.default_theme);
    }
}

/// Settings the server renders with. Client builds only see these through
/// hydration data, so they return the defaults.
fn initial_site_settings() -> SiteSettings {
    #[cfg(feature = "server")]
    {
        crate::server::site_settings()
    }
    #[cfg(not(feature = "server"))]
    {
        SiteSettings::default()
    }
}

/// Initialize settings context provider - call once at app root
pub fn use_settings_provider() {
    // SSR renders with the configured settings and ships them in the hydration data
    let initial = use_server_cached(initial_site_settings);
    let ctx = use_settings_provider_with(initial);

    // Web-only launches have no hydration data; ask the server instead
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            spawn(async move {
                match crate::app::api::fetch_json::<SiteSettings>("/api/settings").await {
                    Ok(settings) => {
                        tracing::debug!(?settings, "Site settings loaded");
                        ctx.update(settings);
                    }
                    Err(e) => tracing::warn!("Failed to load site settings: {}", e),
                }
            });
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;
}

/// Provide the context seeded with known settings
pub fn use_settings_provider_with(initial: SiteSettings) -> SettingsContext {
    let site_title = use_signal(|| initial.site_title.clone());
    let default_theme = use_signal(|| initial.default_theme);

    let ctx = SettingsContext {
        site_title,
        default_theme,
    };

    use_context_provider(|| ctx)
}

/// Get settings context - use in any component under the provider
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
}

/// Settings context if a provider exists (standalone renders have none)
pub fn try_use_settings() -> Option<SettingsContext> {
    try_use_context::<SettingsContext>()
}
