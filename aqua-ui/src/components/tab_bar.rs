//! Tab strip switching between the dashboard sections.

use crate::state::AppState;
use aqua_core::state::{Action, Tab};
use dioxus::prelude::*;

const ACTIVE_STYLE: &str = "padding: 8px; border: none; border-radius: 6px; background: #FFFFFF; font-weight: 600; box-shadow: 0 1px 2px rgba(0,0,0,0.08); cursor: pointer;";
const INACTIVE_STYLE: &str = "padding: 8px; border: none; border-radius: 6px; background: transparent; color: #6B7280; cursor: pointer;";

#[component]
pub fn TabBar() -> Element {
    let state = use_context::<AppState>();
    let active = state.dashboard.read().active_tab;
    let tabs: Vec<(Tab, &'static str, &'static str)> = Tab::ALL
        .iter()
        .map(|&tab| {
            let style = if tab == active { ACTIVE_STYLE } else { INACTIVE_STYLE };
            (tab, tab.label(), style)
        })
        .collect();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 4px; padding: 4px; background: #F3F4F6; border-radius: 8px; margin-bottom: 24px;",
            for (tab, label, style) in tabs.into_iter() {
                button {
                    key: "{label}",
                    style: "{style}",
                    onclick: move |_| {
                        let mut state = state;
                        state.dispatch(Action::SelectTab(tab));
                    },
                    "{label}"
                }
            }
        }
    }
}
