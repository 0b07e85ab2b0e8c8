// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use components::footer::Footer;
use components::header::Header;
use components::pico::Container;
use screens::rates::RatesScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

/// Page-wide styles, including the `--pico-*` variables the components read.
const APP_CSS: &str = r#"
    :root {
        --pico-border-radius: 0.5rem;
        --pico-muted-color: #6b7280;
        --pico-primary: #0891b2;
        --pico-card-background-color: #ffffff;
        --pico-card-border-color: #d1d5db;
        --pico-form-element-border-color: #cbd5e1;
    }

    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        background-color: #fdfdfd;
        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        max-width: 480px;
        margin: 0 auto;
    }

    .app-main-container main.container {
        flex: 1;
        padding: 0 1.5rem;
    }

    .screen-header { padding: 1.5rem 1.5rem 0.5rem; }
    .screen-header h1 { margin: 0; font-size: 1.6rem; }
    .screen-header p { margin: 0.25rem 0 0; color: #6b7280; }

    .form-row {
        display: flex;
        gap: 10px;
        align-items: stretch;
        margin: 1.5rem 0;
    }

    .list-header {
        font-size: 18px;
        font-weight: bold;
        margin: 10px 0;
    }

    article {
        background-color: #fff;
        border-radius: 10px;
        padding: 10px;
        box-shadow: 0 1px 3px rgba(0,0,0,0.15);
        max-height: 60vh;
        overflow-y: auto;
    }

    .pico-input {
        width: 100%;
        padding: 0.5rem 0.75rem;
        font-size: 1rem;
        border: 1px solid var(--pico-form-element-border-color);
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-background-color);
    }

    .pico-input:focus {
        outline: none;
        border-color: var(--pico-primary);
    }

    [role="button"].secondary {
        height: 100%;
        color: #fff;
        background-color: var(--pico-muted-color);
        border-radius: var(--pico-border-radius);
    }

    .rate-row {
        padding: 10px 0;
        border-bottom: 1px solid #ddd;
        font-size: 18px;
    }

    .screen-footer {
        padding: 1rem 1.5rem;
        text-align: center;
        color: #6b7280;
    }
"#;

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{APP_CSS}"
        }
        div {
            class: "app-main-container",
            Header {}
            Container {
                RatesScreen {}
            }
            Footer {}
        }
    }
}
