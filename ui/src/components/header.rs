use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "screen-header",
            h1 { "Currency Converter" }
            p { "Live exchange rates for the most used currencies" }
        }
    }
}
