//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component and the route table.

use dioxus::prelude::*;

pub mod api;
pub mod calculator;
pub mod components;
pub mod pages;
pub mod settings_context;
pub mod theme;

use components::AppShell;
use pages::{About, Details, Home, NotFound, StateExample};
use settings_context::use_settings_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Site settings are fetched once here and shared with every page
    use_settings_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/state-example")]
        StateExample {},
        #[route("/details")]
        Details {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Navigation entries, in display order
    pub fn nav_links() -> [(Route, &'static str); 4] {
        [
            (Route::Home {}, "Home"),
            (Route::About {}, "About"),
            (Route::StateExample {}, "State Example"),
            (Route::Details {}, "Details"),
        ]
    }
}
