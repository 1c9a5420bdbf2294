use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            h2 { "This is the Header" }
        }
    }
}
