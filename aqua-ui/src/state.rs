//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the core [`DashboardState`] in a single signal provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and change it only through [`AppState::dispatch`],
//! which also runs any effect the update asks for.

use crate::js_bridge::WebTimer;
use aqua_core::prediction::{PredictionInput, PredictionResult, PredictionService, UniformScore};
use aqua_core::state::{Action, DashboardState, Effect};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::future::Future;
use std::pin::Pin;

pub type PredictionFuture = Pin<Box<dyn Future<Output = PredictionResult>>>;

/// Runs one prediction for the submitted form contents.
pub type Predictor = fn(PredictionInput) -> PredictionFuture;

/// Prediction backed by an OS-seeded `SmallRng` and the browser timer.
pub fn browser_predictor(input: PredictionInput) -> PredictionFuture {
    Box::pin(async move {
        PredictionService::new(UniformScore::from_os_rng(), WebTimer)
            .predict(&input)
            .await
    })
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub dashboard: Signal<DashboardState>,
    predictor: Predictor,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_predictor(browser_predictor)
    }

    pub fn with_predictor(predictor: Predictor) -> Self {
        Self {
            dashboard: Signal::new(DashboardState::new()),
            predictor,
        }
    }

    /// Apply `action` and run the resulting effect, if any.
    pub fn dispatch(&mut self, action: Action) {
        let current = self.dashboard.peek().clone();
        let (next, effect) = current.update(action);
        self.dashboard.set(next);
        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::RunPrediction { request, input } => {
                log::info!("prediction {} submitted", request.0);
                let mut state = *self;
                let pending = (self.predictor)(input);
                // Not tied to the submitting component: switching tabs
                // unmounts the form while the prediction is pending.
                let _ = spawn_forever(async move {
                    let result = pending.await;
                    log::info!(
                        "prediction {} completed: {}/100 {}",
                        request.0,
                        result.score,
                        result.quality
                    );
                    state.dispatch(Action::PredictionReady(request, result));
                });
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
