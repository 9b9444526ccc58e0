//! Dashboard state machine.
//!
//! The view owns one [`DashboardState`] and feeds it [`Action`]s. `update`
//! is pure: it returns the next state plus an optional [`Effect`] the view
//! must run (currently only the prediction call). At most one prediction is
//! in flight; its completion is matched by [`RequestId`].

use crate::prediction::{InputField, PredictionInput, PredictionResult};
use serde::Serialize;

/// Navigation tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Dashboard,
    Predictor,
    Analytics,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Predictor, Tab::Analytics, Tab::Reports];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Predictor => "AI Predictor",
            Tab::Analytics => "Analytics",
            Tab::Reports => "Reports",
        }
    }
}

/// Identifies one prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "request", rename_all = "snake_case")]
pub enum PredictionStatus {
    #[default]
    Idle,
    Analyzing(RequestId),
}

/// The most recent completed prediction and the form contents it was
/// requested with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastPrediction {
    pub input: PredictionInput,
    pub result: PredictionResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    EditField(InputField, String),
    SubmitPrediction,
    PredictionReady(RequestId, PredictionResult),
}

/// Work the view must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the prediction service on `input` and dispatch
    /// `Action::PredictionReady(request, result)` when it resolves.
    RunPrediction {
        request: RequestId,
        input: PredictionInput,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub form: PredictionInput,
    pub status: PredictionStatus,
    pub last_prediction: Option<LastPrediction>,
    /// Snapshot of the form taken when the pending request was submitted.
    pending_input: Option<PredictionInput>,
    next_request: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a prediction is in flight. The submit control is
    /// disabled and shows a busy label.
    pub fn is_busy(&self) -> bool {
        matches!(self.status, PredictionStatus::Analyzing(_))
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.last_prediction.as_ref().map(|p| &p.result)
    }

    pub fn update(mut self, action: Action) -> (Self, Option<Effect>) {
        match action {
            Action::SelectTab(tab) => {
                self.active_tab = tab;
                (self, None)
            }
            Action::EditField(field, value) => {
                self.form.set(field, value);
                (self, None)
            }
            Action::SubmitPrediction => {
                if let PredictionStatus::Analyzing(pending) = self.status {
                    log::debug!("prediction {} already pending, ignoring submit", pending.0);
                    return (self, None);
                }
                let request = RequestId(self.next_request);
                self.next_request += 1;
                self.status = PredictionStatus::Analyzing(request);
                self.pending_input = Some(self.form.clone());
                let effect = Effect::RunPrediction {
                    request,
                    input: self.form.clone(),
                };
                (self, Some(effect))
            }
            Action::PredictionReady(request, result) => {
                if self.status != PredictionStatus::Analyzing(request) {
                    log::warn!("ignoring result for stale prediction {}", request.0);
                    return (self, None);
                }
                let input = self.pending_input.take().unwrap_or_default();
                self.status = PredictionStatus::Idle;
                self.last_prediction = Some(LastPrediction { input, result });
                (self, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::Quality;

    fn result(score: u8, quality: Quality) -> PredictionResult {
        PredictionResult {
            score,
            quality,
            recommendations: vec!["Check it".to_string()],
        }
    }

    fn submit(state: DashboardState) -> (DashboardState, RequestId) {
        match state.update(Action::SubmitPrediction) {
            (next, Some(Effect::RunPrediction { request, .. })) => (next, request),
            (_, None) => panic!("submit from idle should start a prediction"),
        }
    }

    #[test]
    fn starts_idle_on_dashboard_tab() {
        let state = DashboardState::new();
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert!(!state.is_busy());
        assert!(state.prediction().is_none());
        assert!(state.form.is_blank());
    }

    #[test]
    fn edits_update_one_field_at_a_time() {
        let (state, effect) =
            DashboardState::new().update(Action::EditField(InputField::Ph, "7.1".into()));
        assert!(effect.is_none());
        let (state, _) = state.update(Action::EditField(InputField::Location, "Plant B".into()));
        assert_eq!(state.form.ph, "7.1");
        assert_eq!(state.form.location, "Plant B");
        assert_eq!(state.form.turbidity, "");
    }

    #[test]
    fn submit_snapshots_the_form() {
        let (state, _) =
            DashboardState::new().update(Action::EditField(InputField::Ph, "6.9".into()));
        let (state, effect) = state.update(Action::SubmitPrediction);
        assert!(state.is_busy());
        match effect {
            Some(Effect::RunPrediction { input, .. }) => assert_eq!(input.ph, "6.9"),
            None => panic!("expected a prediction effect"),
        }
    }

    #[test]
    fn second_submit_while_pending_is_a_no_op() {
        let (state, first) = submit(DashboardState::new());
        let before = state.clone();
        let (state, effect) = state.update(Action::SubmitPrediction);
        assert!(effect.is_none(), "must not start a second prediction");
        assert_eq!(state, before);
        assert_eq!(state.status, PredictionStatus::Analyzing(first));
    }

    #[test]
    fn ready_result_completes_the_request() {
        let (state, request) = submit(DashboardState::new());
        let (state, effect) =
            state.update(Action::PredictionReady(request, result(91, Quality::Excellent)));
        assert!(effect.is_none());
        assert!(!state.is_busy());
        assert_eq!(state.prediction().map(|r| r.score), Some(91));
    }

    #[test]
    fn stale_results_are_ignored() {
        let (state, first) = submit(DashboardState::new());
        let (state, _) = state.update(Action::PredictionReady(first, result(10, Quality::Poor)));
        let (state, second) = submit(state);
        assert_ne!(first, second);

        let (state, _) = state.update(Action::PredictionReady(first, result(99, Quality::Excellent)));
        assert!(state.is_busy(), "a stale id must not finish the pending request");
        assert_eq!(state.prediction().map(|r| r.score), Some(10));

        let idle = DashboardState::new();
        let (idle_after, _) = idle.clone().update(Action::PredictionReady(second, result(50, Quality::Fair)));
        assert_eq!(idle_after, idle);
    }

    #[test]
    fn new_result_replaces_previous_one() {
        let (state, first) = submit(DashboardState::new());
        let (state, _) = state.update(Action::PredictionReady(first, result(85, Quality::Excellent)));
        let (state, second) = submit(state);
        let (state, _) = state.update(Action::PredictionReady(second, result(30, Quality::Poor)));
        let last = state.last_prediction.as_ref().unwrap();
        assert_eq!(last.result.quality, Quality::Poor);
        assert_eq!(last.result.score, 30);
    }

    #[test]
    fn editing_while_busy_keeps_submitted_snapshot() {
        let (state, _) =
            DashboardState::new().update(Action::EditField(InputField::Temperature, "22".into()));
        let (state, request) = submit(state);
        let (state, _) = state.update(Action::EditField(InputField::Temperature, "30".into()));
        let (state, _) = state.update(Action::PredictionReady(request, result(65, Quality::Good)));
        let last = state.last_prediction.as_ref().unwrap();
        assert_eq!(last.input.temperature, "22");
        assert_eq!(state.form.temperature, "30");
    }

    #[test]
    fn tab_selection_keeps_prediction_state() {
        let (state, request) = submit(DashboardState::new());
        let (state, _) = state.update(Action::SelectTab(Tab::Reports));
        assert_eq!(state.active_tab, Tab::Reports);
        assert_eq!(state.status, PredictionStatus::Analyzing(request));
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Dashboard", "AI Predictor", "Analytics", "Reports"]);
    }
}
