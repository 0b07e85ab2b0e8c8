use api::conversion_screen::ConvertedRow;
use dioxus::prelude::*;

/// One line of the converted list, e.g. `USD - 1.50`.
#[component]
pub fn RateRow(row: ConvertedRow) -> Element {
    rsx! {
        div {
            class: "rate-row",
            title: "1 unit = {row.rate()} {row.code()}",
            "{row.code()} - {row.converted()}"
        }
    }
}
