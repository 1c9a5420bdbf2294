use dioxus::prelude::*;

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            h2 { "Welcome to Our App" }
            p { "This is the home page of our application." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_welcome() {
        let html = crate::app::pages::render_to_string(Home);
        assert!(html.contains("Welcome to Our App"));
        assert!(html.contains("home page of our application"));
    }
}
