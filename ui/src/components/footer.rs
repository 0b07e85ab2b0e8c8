use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "screen-footer",
            small { "Rates provided by Coinbase." }
        }
    }
}
