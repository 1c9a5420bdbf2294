use dioxus::prelude::*;

/// Catch-all for paths outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div { class: "not-found",
            h2 { "Page not found" }
            p { "Nothing lives at {path}." }
        }
    }
}
