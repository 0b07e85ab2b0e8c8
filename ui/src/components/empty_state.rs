// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
}

/// A dashed placeholder box shown where a list has nothing to show.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                padding: 1.5rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                margin: 1rem 0;
            ",
            h5 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }
            if let Some(desc) = props.description {
                p {
                    style: "margin: 0;",
                    "{desc}"
                }
            }
        }
    }
}
