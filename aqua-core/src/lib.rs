//! Core types and logic for the AquaPredict water-quality dashboard.
//!
//! Everything in this crate is plain Rust with no DOM access, so it is
//! shared by the Dioxus WASM dashboard and the native CLI and is tested
//! natively:
//! - `models`: data-model records (samples, contaminants, cards)
//! - `samples`: the fixed datasets shown on the dashboard
//! - `quality`: score to quality-label classifier
//! - `prediction`: the simulated prediction service
//! - `state`: dashboard state machine driven by `Action`s
//! - `chart`: SVG geometry for the line, area, bar and pie charts

pub mod chart;
pub mod models;
pub mod prediction;
pub mod quality;
pub mod samples;
pub mod state;

pub use prediction::{PredictionInput, PredictionResult, PredictionService};
pub use quality::{classify, Quality};
pub use state::{Action, DashboardState, Effect};
