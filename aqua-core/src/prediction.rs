//! Simulated water-quality prediction.
//!
//! The service does not look at the submitted parameters: it waits for
//! [`ANALYSIS_DELAY`], draws a score uniformly from `[0, 100)`, classifies
//! it and attaches the fixed [`RECOMMENDATIONS`]. The score source and the
//! timer are injected so the service is deterministic under test.

use crate::quality::{classify, Quality, Severity};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Artificial "analysis in progress" delay before a result is produced.
pub const ANALYSIS_DELAY: Duration = Duration::from_secs(2);

/// Recommendations attached to every result, whatever the rating.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Monitor chlorine levels regularly",
    "Check for bacterial contamination",
    "Maintain optimal pH balance",
    "Ensure proper filtration system",
];

/// Upper clamp for draws; truncates to 99.
const MAX_DRAW: f64 = 99.999_999_999_999;

/// A field of the predictor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Ph,
    Turbidity,
    Temperature,
    DissolvedOxygen,
    Location,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::Ph,
        InputField::Turbidity,
        InputField::Temperature,
        InputField::DissolvedOxygen,
        InputField::Location,
    ];

    /// The four numeric-looking measurement fields.
    pub const MEASUREMENTS: [InputField; 4] = [
        InputField::Ph,
        InputField::Turbidity,
        InputField::Temperature,
        InputField::DissolvedOxygen,
    ];

    /// DOM id of the form input.
    pub fn id(self) -> &'static str {
        match self {
            InputField::Ph => "ph",
            InputField::Turbidity => "turbidity",
            InputField::Temperature => "temperature",
            InputField::DissolvedOxygen => "dissolved_oxygen",
            InputField::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::Ph => "pH Level",
            InputField::Turbidity => "Turbidity (NTU)",
            InputField::Temperature => "Temperature (°C)",
            InputField::DissolvedOxygen => "Dissolved O₂ (mg/L)",
            InputField::Location => "Location",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            InputField::Ph => "7.0",
            InputField::Turbidity => "2.0",
            InputField::Temperature => "22",
            InputField::DissolvedOxygen => "8.5",
            InputField::Location => "e.g., Municipal Water Plant A",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw predictor form contents. An empty string means "not provided".
///
/// Values are kept exactly as typed and are never required to be numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PredictionInput {
    pub ph: String,
    pub turbidity: String,
    pub temperature: String,
    pub dissolved_oxygen: String,
    pub location: String,
}

/// Numeric view of the measurement fields. Blank fields are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WaterParameters {
    pub ph: Option<f64>,
    pub turbidity: Option<f64>,
    pub temperature: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
}

/// A measurement field that does not hold a number.
///
/// Only produced by [`PredictionInput::parameters`]; prediction itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("{field} must be a number, got {value:?}")]
    NotNumeric { field: InputField, value: String },
}

impl PredictionInput {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Ph => &self.ph,
            InputField::Turbidity => &self.turbidity,
            InputField::Temperature => &self.temperature,
            InputField::DissolvedOxygen => &self.dissolved_oxygen,
            InputField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::Ph => &mut self.ph,
            InputField::Turbidity => &mut self.turbidity,
            InputField::Temperature => &mut self.temperature,
            InputField::DissolvedOxygen => &mut self.dissolved_oxygen,
            InputField::Location => &mut self.location,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: InputField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_blank(&self) -> bool {
        InputField::ALL.iter().all(|f| self.get(*f).trim().is_empty())
    }

    /// Parse the measurement fields as numbers.
    ///
    /// Returns the first field, in form order, that is non-blank and not a
    /// finite number.
    pub fn parameters(&self) -> Result<WaterParameters, ParameterError> {
        Ok(WaterParameters {
            ph: self.parse_field(InputField::Ph)?,
            turbidity: self.parse_field(InputField::Turbidity)?,
            temperature: self.parse_field(InputField::Temperature)?,
            dissolved_oxygen: self.parse_field(InputField::DissolvedOxygen)?,
        })
    }

    /// Every measurement field that fails to parse, in form order.
    pub fn parameter_errors(&self) -> Vec<ParameterError> {
        InputField::MEASUREMENTS
            .iter()
            .filter_map(|f| self.parse_field(*f).err())
            .collect()
    }

    fn parse_field(&self, field: InputField) -> Result<Option<f64>, ParameterError> {
        let raw = self.get(field).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(ParameterError::NotNumeric {
                field,
                value: raw.to_string(),
            }),
        }
    }
}

/// Outcome of one prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    /// Integer score in `[0, 99]`.
    pub score: u8,
    pub quality: Quality,
    pub recommendations: Vec<String>,
}

impl PredictionResult {
    /// One-line assessment shown under the score.
    pub fn summary(&self) -> String {
        format!(
            "Based on the provided parameters, the water quality is rated as {}.",
            self.quality.label().to_lowercase()
        )
    }

    pub fn severity(&self) -> Severity {
        self.quality.severity()
    }
}

/// Source of raw scores in `[0, 100)`.
pub trait ScoreSource {
    fn draw(&mut self) -> f64;
}

/// Uniform draws in `[0, 100)` from any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformScore<R> {
    rng: R,
}

impl<R: Rng> UniformScore<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformScore<SmallRng> {
    /// Non-cryptographic generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ScoreSource for UniformScore<R> {
    fn draw(&mut self) -> f64 {
        self.rng.random_range(0.0..100.0)
    }
}

/// Always draws the same score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScore(pub f64);

impl ScoreSource for FixedScore {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Suspends the caller for a duration without blocking the thread.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Timer that resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Timer for Immediate {
    async fn sleep(&self, _duration: Duration) {}
}

/// Produces simulated predictions from a score source and a timer.
#[derive(Debug, Clone)]
pub struct PredictionService<S, T> {
    scores: S,
    timer: T,
}

impl<S: ScoreSource, T: Timer> PredictionService<S, T> {
    pub fn new(scores: S, timer: T) -> Self {
        Self { scores, timer }
    }

    /// Wait [`ANALYSIS_DELAY`], then evaluate.
    ///
    /// Callers must not start a second prediction while one is pending.
    pub async fn predict(&mut self, input: &PredictionInput) -> PredictionResult {
        self.timer.sleep(ANALYSIS_DELAY).await;
        self.evaluate(input)
    }

    /// Produce a result immediately. `input` does not affect the result.
    pub fn evaluate(&mut self, input: &PredictionInput) -> PredictionResult {
        let raw = self.scores.draw();
        let draw = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, MAX_DRAW) };
        let quality = classify(draw);
        let score = draw.trunc() as u8;
        log::debug!(
            "prediction for location {:?}: raw draw {:.3}, score {}, {}",
            input.location,
            raw,
            score,
            quality
        );
        PredictionResult {
            score,
            quality,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every requested delay and resolves immediately.
    #[derive(Default)]
    struct RecordingTimer {
        calls: RefCell<Vec<Duration>>,
    }

    impl Timer for &RecordingTimer {
        async fn sleep(&self, duration: Duration) {
            self.calls.borrow_mut().push(duration);
        }
    }

    fn plant_a() -> PredictionInput {
        PredictionInput::default()
            .with(InputField::Ph, "7.0")
            .with(InputField::Turbidity, "2.0")
            .with(InputField::Temperature, "22")
            .with(InputField::DissolvedOxygen, "8.5")
            .with(InputField::Location, "Plant A")
    }

    #[tokio::test]
    async fn predict_waits_for_analysis_delay() {
        let timer = RecordingTimer::default();
        let mut service = PredictionService::new(FixedScore(72.4), &timer);
        let result = service.predict(&plant_a()).await;
        assert_eq!(*timer.calls.borrow(), vec![ANALYSIS_DELAY]);
        assert_eq!(ANALYSIS_DELAY, Duration::from_secs(2));
        assert_eq!(result.score, 72);
        assert_eq!(result.quality, Quality::Good);
    }

    #[tokio::test]
    async fn plant_a_scenario_yields_valid_result() {
        let mut service = PredictionService::new(UniformScore::seeded(7), Immediate);
        let result = service.predict(&plant_a()).await;
        assert!(result.score <= 99);
        assert!(Quality::ALL.contains(&result.quality));
    }

    #[test]
    fn scores_stay_in_range_for_many_draws() {
        let mut service = PredictionService::new(UniformScore::seeded(42), Immediate);
        let input = PredictionInput::default();
        for _ in 0..10_000 {
            let result = service.evaluate(&input);
            assert!(result.score <= 99, "score {} out of range", result.score);
            assert_eq!(result.recommendations, RECOMMENDATIONS);
        }
    }

    #[test]
    fn input_contents_do_not_change_the_result() {
        let inputs = [
            PredictionInput::default(),
            plant_a(),
            PredictionInput::default().with(InputField::Ph, "not a number"),
        ];
        for input in &inputs {
            let mut service = PredictionService::new(UniformScore::seeded(9), Immediate);
            let mut reference = PredictionService::new(UniformScore::seeded(9), Immediate);
            assert_eq!(
                service.evaluate(input),
                reference.evaluate(&PredictionInput::default())
            );
        }
    }

    #[test]
    fn raw_draw_is_classified_before_truncation() {
        let mut service = PredictionService::new(FixedScore(80.5), Immediate);
        let result = service.evaluate(&PredictionInput::default());
        assert_eq!(result.score, 80);
        assert_eq!(result.quality, Quality::Excellent);

        let mut service = PredictionService::new(FixedScore(80.0), Immediate);
        assert_eq!(service.evaluate(&PredictionInput::default()).quality, Quality::Good);
    }

    #[test]
    fn out_of_range_draws_are_clamped() {
        let cases = [
            (-3.0, 0, Quality::Poor),
            (100.0, 99, Quality::Excellent),
            (250.0, 99, Quality::Excellent),
            (f64::NAN, 0, Quality::Poor),
        ];
        for (raw, score, quality) in cases {
            let mut service = PredictionService::new(FixedScore(raw), Immediate);
            let result = service.evaluate(&PredictionInput::default());
            assert_eq!((result.score, result.quality), (score, quality), "raw {raw}");
        }
    }

    #[test]
    fn summary_lowercases_the_label() {
        let mut service = PredictionService::new(FixedScore(50.0), Immediate);
        let result = service.evaluate(&PredictionInput::default());
        assert_eq!(
            result.summary(),
            "Based on the provided parameters, the water quality is rated as fair."
        );
        assert_eq!(result.severity(), Severity::Elevated);
    }

    #[test]
    fn parameters_parse_blank_and_numeric_fields() {
        let params = plant_a().parameters().unwrap();
        assert_eq!(params.ph, Some(7.0));
        assert_eq!(params.temperature, Some(22.0));
        assert_eq!(params.dissolved_oxygen, Some(8.5));

        let blank = PredictionInput::default().parameters().unwrap();
        assert_eq!(blank, WaterParameters::default());

        let padded = PredictionInput::default().with(InputField::Ph, "  6.8 ");
        assert_eq!(padded.parameters().unwrap().ph, Some(6.8));
    }

    #[test]
    fn parameters_reject_non_numeric_fields() {
        let input = plant_a()
            .with(InputField::Turbidity, "cloudy")
            .with(InputField::Temperature, "NaN");
        let err = input.parameters().unwrap_err();
        assert_eq!(
            err,
            ParameterError::NotNumeric {
                field: InputField::Turbidity,
                value: "cloudy".to_string()
            }
        );
        assert_eq!(err.to_string(), "Turbidity (NTU) must be a number, got \"cloudy\"");
        assert_eq!(input.parameter_errors().len(), 2);
    }

    #[test]
    fn location_is_free_text() {
        let input = PredictionInput::default().with(InputField::Location, "Well #3");
        assert!(input.parameters().is_ok());
        assert!(input.parameter_errors().is_empty());
        assert!(!input.is_blank());
        assert!(PredictionInput::default().is_blank());
    }
}
