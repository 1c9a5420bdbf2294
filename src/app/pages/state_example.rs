//! State example page.
//!
//! Puts a signal-backed widget next to one that keeps its value in a plain
//! variable, so the difference in re-rendering is visible side by side.

use dioxus::prelude::*;

use crate::app::components::{Calculator, Footer, Header, StatelessCounter};

/// State example page component.
#[component]
pub fn StateExample() -> Element {
    rsx! {
        div { class: "state-example",
            Header {}
            Footer {}

            h1 { "Understanding State" }

            section { class: "demo demo-stateful",
                h3 { "With State" }
                Calculator {}
            }

            StatelessCounter {}
        }
    }
}
