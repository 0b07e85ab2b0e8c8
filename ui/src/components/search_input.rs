use dioxus::prelude::*;

/// Free-text box that narrows the rate list.
#[component]
pub fn SearchInput(query: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "search",
            class: "pico-input",
            placeholder: "Search currencies...",
            value: "{query}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}
