//! Card container with title and optional description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Card title
    pub title: String,
    /// Muted line under the title
    #[props(default = String::new())]
    pub description: String,
    /// Glyph shown before the title
    #[props(default = String::new())]
    pub icon: String,
    pub children: Element,
}

/// Bordered white card used for every dashboard section.
#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "background: #FFFFFF; border: 1px solid #E5E7EB; border-radius: 8px; padding: 20px; box-shadow: 0 1px 2px rgba(0,0,0,0.04);",
            div {
                style: "margin-bottom: 12px;",
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px; display: flex; align-items: center; gap: 8px;",
                    if !props.icon.is_empty() {
                        span { "{props.icon}" }
                    }
                    "{props.title}"
                }
                if !props.description.is_empty() {
                    p {
                        style: "margin: 0; font-size: 13px; color: #6B7280;",
                        "{props.description}"
                    }
                }
            }
            {props.children}
        }
    }
}
