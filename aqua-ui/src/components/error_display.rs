//! Notice box for form values that are not numbers.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub messages: Vec<String>,
}

/// Lists parameter problems. Informational only: predictions still run.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    if props.messages.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 8px 0; background: #FFFBEB; color: #92400E; border-radius: 4px; border: 1px solid #FCD34D; font-size: 13px;",
            strong { "Note: " }
            for message in props.messages.iter() {
                div { "{message}" }
            }
        }
    }
}
