// ui/src/components/amount_input.rs
use dioxus::prelude::*;

/// Digits allowed before the decimal point.
pub const MAX_INTEGERS: u8 = 12;
/// Digits allowed after the decimal point.
pub const MAX_DECIMALS: u8 = 2;

/// Keeps only digits and the first decimal point, capping each side's length.
pub fn sanitize_amount(input: &str, max_integers: u8, max_decimals: u8) -> String {
    let mut sanitized = String::new();
    let mut has_decimal = false;
    let mut integer_digits = 0;
    let mut decimal_digits = 0;
    for ch in input.chars() {
        if ch.is_ascii_digit() {
            if has_decimal {
                if decimal_digits < max_decimals {
                    sanitized.push(ch);
                    decimal_digits += 1;
                }
            } else if integer_digits < max_integers {
                sanitized.push(ch);
                integer_digits += 1;
            }
        } else if (ch == '.' || ch == ',') && !has_decimal {
            sanitized.push('.');
            has_decimal = true;
        }
    }
    sanitized
}

/// Text field for the amount to convert. Emits the sanitized value on every keystroke.
#[component]
pub fn AmountInput(value: String, on_input: EventHandler<String>) -> Element {
    // Local mirror of the field, rewritten on every keystroke so a rejected
    // character disappears even when the sanitized value did not change.
    let mut value_signal = use_signal(|| value.clone());

    rsx! {
        input {
            r#type: "text",
            class: "pico-input",
            style: "margin-bottom: 0; width: 100%;",
            inputmode: "decimal",
            placeholder: "1",
            "aria-label": "Amount",
            value: "{value_signal}",
            oninput: move |event| {
                let sanitized = sanitize_amount(&event.value(), MAX_INTEGERS, MAX_DECIMALS);
                value_signal.set(sanitized.clone());
                on_input.call(sanitized);
            },
        }
    }
}
