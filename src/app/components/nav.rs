//! Navigation component for the web UI.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation list. Links swap the routed page client-side.
#[component]
pub fn Nav() -> Element {
    let current = use_route::<Route>();

    rsx! {
        nav {
            ul {
                for (route, label) in Route::nav_links() {
                    li { key: "{label}",
                        class: if route == current { "active" },
                        Link { to: route.clone(), active_class: "active", "{label}" }
                    }
                }
            }
        }
    }
}
