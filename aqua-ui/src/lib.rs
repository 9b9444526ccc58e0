//! Shared Dioxus components and browser glue for the AquaPredict dashboard.
//!
//! This crate provides:
//! - `js_bridge`: `setTimeout`-backed timer for the prediction delay
//! - `state`: Reactive `AppState` wrapping the core dashboard state machine
//! - `components`: Reusable RSX components (cards, badges, tabs, SVG charts)

pub mod components;
pub mod js_bridge;
pub mod state;
