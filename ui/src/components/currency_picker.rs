// ui/src/components/currency_picker.rs
#![allow(non_snake_case)]

use api::fiat_currency::FiatCurrency;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// Currencies whose code or name contains `filter`, ignoring case.
pub fn matching_currencies(filter: &str) -> Vec<FiatCurrency> {
    let filter_lower = filter.to_lowercase();
    FiatCurrency::iter()
        .filter(|fiat| {
            fiat.name().to_lowercase().contains(&filter_lower)
                || fiat.code().to_lowercase().contains(&filter_lower)
        })
        .collect()
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyPickerProps {
    /// The base currency currently selected.
    pub selected: FiatCurrency,
    /// Called with the newly chosen base currency.
    pub on_select: EventHandler<FiatCurrency>,
    #[props(optional)]
    pub style: Option<String>,
}

/// A dropdown button for choosing the base currency, with its own search box.
pub fn CurrencyPicker(props: CurrencyPickerProps) -> Element {
    let mut is_open = use_signal(|| false);
    let mut filter_text = use_signal(|| "".to_string());

    let selected = props.selected;
    let filtered_fiats = matching_currencies(&filter_text.read());

    rsx! {
        div {
            style: "{props.style.as_deref().unwrap_or(\"\")}",
            div {
                style: "position: relative; min-width: 6rem;",
                div {
                    class: "secondary",
                    role: "button",
                    title: "{selected.name()}",
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.4rem;
                        padding: 0.375rem 0.6rem;
                        cursor: pointer;
                        ",
                    onclick: move |_| is_open.toggle(),
                    span { "{selected}" }
                    span { "↓" }
                }
                if is_open() {
                    // Backdrop to catch clicks outside the dropdown
                    div {
                        style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                        onclick: move |_| is_open.set(false),
                    }
                    div {
                        // Stop click propagation to prevent the backdrop from closing the dropdown
                        onclick: |e| e.stop_propagation(),
                        style: "
                            position: absolute;
                            right: 0;
                            min-width: 16rem;
                            z-index: 10;
                            background-color: var(--pico-card-background-color);
                            border: 1px solid var(--pico-card-border-color);
                            border-radius: var(--pico-border-radius);
                            padding: 0.5rem;
                            margin-top: 0.25rem;
                        ",
                        input {
                            r#type: "text",
                            placeholder: "Search currencies...",
                            value: "{filter_text}",
                            oninput: move |evt| filter_text.set(evt.value()),
                            style: "margin-bottom: 0.5rem; width: 100%;",
                            onmounted: move |mounted| {
                                spawn(async move {
                                    mounted.data.set_focus(true).await.ok();
                                });
                            },
                        }
                        ul {
                            role: "listbox",
                            style: "list-style: none; margin: 0; padding: 0; max-height: 250px; overflow-y: auto;",
                            for fiat in filtered_fiats {
                                li {
                                    key: "{fiat}",
                                    style: "display: flex; align-items: center; cursor: pointer; padding: 0.3rem; white-space: nowrap;",
                                    onclick: move |_| {
                                        is_open.set(false);
                                        filter_text.set(String::new());
                                        props.on_select.call(fiat);
                                    },
                                    span {
                                        style: if fiat == selected { "width: 1.5rem;" } else { "width: 1.5rem; visibility: hidden;" },
                                        "✓"
                                    }
                                    span { "{fiat.code()} - {fiat.name()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
