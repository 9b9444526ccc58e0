//! Small pill label.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
}

#[component]
pub fn Badge(text: String, #[props(default)] variant: BadgeVariant) -> Element {
    let (background, color) = match variant {
        BadgeVariant::Default => ("#059669", "#FFFFFF"),
        BadgeVariant::Secondary => ("#ECFDF5", "#065F46"),
    };
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; gap: 4px; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 600; background: {background}; color: {color};",
            "{text}"
        }
    }
}
