//! Page footer and site-wide footer.

use dioxus::prelude::*;

/// Footer shown inside the state example page.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "section-footer",
            p { "This is the Footer" }
        }
    }
}

/// Footer at the bottom of every page, with build info.
#[component]
pub fn SiteFooter() -> Element {
    let version = env!("APP_VERSION");
    let git_sha = env!("APP_GIT_SHA");

    rsx! {
        footer { class: "site-footer",
            small { "State & Routing Demo v{version} ({git_sha})" }
        }
    }
}
