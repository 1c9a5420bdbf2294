use dioxus::prelude::*;

/// About page component.
#[component]
pub fn About() -> Element {
    rsx! {
        div {
            h2 { "About Us" }
            p { "Learn more about our application and its features." }
        }
    }
}
