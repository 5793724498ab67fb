use dioxus::prelude::*;

/// Busy indicator shown while a request is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner", aria_label: "loading" }
    }
}
