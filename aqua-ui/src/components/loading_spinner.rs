//! Busy indicator shown while a prediction is in flight.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #6B7280;",
            "Analyzing water parameters..."
        }
    }
}
