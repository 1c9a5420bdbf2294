//! Light/dark theme flag and the style tables derived from it.
//!
//! The flag is plain view state; nothing here touches storage or the DOM.

use serde::{Deserialize, Serialize};

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: names the theme a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "🌞 Light",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

/// Explicit color table for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub button_bg: &'static str,
    pub button_text: &'static str,
    pub input_bg: &'static str,
    pub input_border: &'static str,
    pub error_bg: &'static str,
    pub success_bg: &'static str,
    pub result_bg: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#333333",
    border: "#ccc",
    button_bg: "#4CAF50",
    button_text: "white",
    input_bg: "#ffffff",
    input_border: "#ccc",
    error_bg: "#ffebee",
    success_bg: "#e8f5e9",
    result_bg: "#f5f5f5",
};

pub const DARK: Palette = Palette {
    background: "#333333",
    text: "#ffffff",
    border: "#555555",
    button_bg: "#1a8a1f",
    button_text: "#ffffff",
    input_bg: "#444444",
    input_border: "#666666",
    error_bg: "#3c1f1f",
    success_bg: "#1c3c1e",
    result_bg: "#444444",
};

/// Same in both themes
pub const ERROR_TEXT: &str = "#f44336";
pub const SUCCESS_TEXT: &str = "#4CAF50";

// =============================================================================
// Inline style strings
// =============================================================================

impl Palette {
    pub fn panel_style(&self) -> String {
        format!(
            "border: 1px solid {}; padding: 20px; border-radius: 8px; max-width: 400px; \
             margin: 20px auto; background-color: {}; color: {}; transition: all 0.3s ease;",
            self.border, self.background, self.text
        )
    }

    pub fn button_style(&self) -> String {
        format!(
            "padding: 8px 15px; background-color: {}; color: {}; border: none; \
             border-radius: 4px; cursor: pointer;",
            self.button_bg, self.button_text
        )
    }

    pub fn input_style(&self) -> String {
        format!(
            "padding: 8px; width: 150px; background-color: {}; color: {}; \
             border: 1px solid {}; border-radius: 4px;",
            self.input_bg, self.text, self.input_border
        )
    }

    pub fn error_style(&self) -> String {
        format!(
            "color: {ERROR_TEXT}; padding: 10px; background-color: {}; \
             border-radius: 4px; margin-bottom: 10px;",
            self.error_bg
        )
    }

    pub fn success_style(&self) -> String {
        format!(
            "color: {SUCCESS_TEXT}; padding: 10px; background-color: {}; \
             border-radius: 4px; margin-bottom: 10px;",
            self.success_bg
        )
    }

    pub fn result_style(&self) -> String {
        format!(
            "font-size: 1.2em; font-weight: bold; margin-top: 10px; padding: 10px; \
             background-color: {}; border-radius: 4px;",
            self.result_bg
        )
    }
}
