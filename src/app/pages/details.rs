//! Details page: a static profile card.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Profile {
    name: &'static str,
    age: u32,
    city: &'static str,
    state: &'static str,
    photo: &'static str,
}

const PROFILE: Profile = Profile {
    name: "Tharun Vankayala",
    age: 21,
    city: "Hyderabad",
    state: "Telangana",
    photo: "/profile.jpg",
};

/// Details page component.
#[component]
pub fn Details() -> Element {
    let profile = PROFILE;
    let alt = format!("{}'s photo", profile.name);

    rsx! {
        div { class: "details",
            h2 { "This is the Details" }
            img { src: profile.photo, alt: alt }
            p { "Name: {profile.name}" }
            p { "Age: {profile.age}" }
            p { "City: {profile.city}" }
            p { "State: {profile.state}" }
        }
    }
}
