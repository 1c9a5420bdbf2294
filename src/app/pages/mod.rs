//! Routed page components.

mod about;
mod details;
mod home;
mod not_found;
mod state_example;

pub use about::About;
pub use details::Details;
pub use home::Home;
pub use not_found::NotFound;
pub use state_example::StateExample;

#[cfg(test)]
pub(crate) fn render_to_string(app: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
