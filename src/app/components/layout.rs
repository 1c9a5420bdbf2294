//! Application shell wrapping every routed page.

use dioxus::prelude::*;

use super::footer::SiteFooter;
use super::nav::Nav;
use crate::app::settings_context::use_settings;
use crate::app::Route;

/// Shell stylesheet, compiled into the binary
pub const APP_CSS: &str = include_str!("../../../public/app.css");

/// Layout route: navigation on top, the routed page, then the site footer.
#[component]
pub fn AppShell() -> Element {
    let settings = use_settings();
    let title = settings.site_title();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{title}" }
        document::Style { {APP_CSS} }

        div { class: "app",
            Nav {}
            main { class: "page",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}
