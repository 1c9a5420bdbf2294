//! Configuration management

use anyhow::Result;
use serde::Deserialize;

use crate::app::theme::Theme;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Shown in the browser tab
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Initial calculator theme for new page views
    #[serde(default)]
    pub default_theme: Theme,

    /// Used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_site_title() -> String {
    "Our App".to_string()
}

fn default_log_filter() -> String {
    "state_routing_demo=debug,tower_http=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            default_theme: Theme::default(),
            log_filter: default_log_filter(),
        }
    }
}

const APP_DIR_NAME: &str = "state-routing-demo";

/// Config directory: DEMO_CONFIG_DIR, then XDG_CONFIG_HOME, then ~/.config, then "."
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("DEMO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return std::path::PathBuf::from(xdg).join(APP_DIR_NAME);
    }
    if let Ok(home) = std::env::var("HOME") {
        return std::path::PathBuf::from(home)
            .join(".config")
            .join(APP_DIR_NAME);
    }

    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let builder = ::config::Config::builder()
        .set_default("site_title", default_site_title())?
        .set_default("default_theme", Theme::default().as_str())?
        .set_default("log_filter", default_log_filter())?
        // Load from config file if it exists (config.toml, config.json, ...)
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (DEMO_SITE_TITLE, DEMO_DEFAULT_THEME, ...)
        .add_source(
            ::config::Environment::with_prefix("DEMO")
                .prefix_separator("_")
                .separator("__"),
        );

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
