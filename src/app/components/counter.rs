//! Counter kept in a plain variable instead of a signal.

use dioxus::prelude::*;

/// Clicking increments a captured `u32` and logs it. Nothing subscribes to
/// the value, so the rendered count stays at zero.
#[component]
pub fn StatelessCounter() -> Element {
    let mut count: u32 = 0;
    let shown = count;

    rsx! {
        section { class: "demo demo-stateless",
            h3 { "Without State" }
            p { "Count: {shown}" }
            button {
                onclick: move |_| {
                    count += 1;
                    tracing::info!(count, "Plain variable incremented; view not re-rendered");
                },
                "Increment"
            }
        }
    }
}
