//! Shared API types and client-side fetch helpers.

use serde::{Deserialize, Serialize};

use crate::app::theme::Theme;

// =============================================================================
// Response Types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AppStatus {
    pub version: String,
    #[serde(default)]
    pub git_sha: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_site_title() -> String {
    "Our App".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            default_theme: Theme::default(),
        }
    }
}

// =============================================================================
// Fetch Helpers
// =============================================================================

/// Fetch JSON from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP {} from {}", resp.status(), url));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: for<'de> Deserialize<'de>>(_url: &str) -> Result<T, String> {
    Err("fetch_json is only available in browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_settings_fill_missing_fields() {
        let parsed: SiteSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SiteSettings::default());

        let parsed: SiteSettings =
            serde_json::from_str(r#"{"site_title":"Lab","default_theme":"dark"}"#).unwrap();
        assert_eq!(parsed.site_title, "Lab");
        assert_eq!(parsed.default_theme, Theme::Dark);
    }

    #[tokio::test]
    async fn fetch_json_is_unavailable_outside_the_browser() {
        let result = fetch_json::<AppStatus>("/status").await;
        assert!(result.is_err());
    }
}
