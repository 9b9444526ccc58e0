//! Data-model records for the dashboard.
//!
//! All structs derive `Serialize` so the CLI can emit them as JSON.

use chrono::Month;
use serde::{Serialize, Serializer};

/// Three-letter label for a month ("Jan", "Feb", ...).
pub fn month_label(month: Month) -> &'static str {
    &month.name()[..3]
}

fn serialize_month<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month_label(*month))
}

/// One historical monthly record of the four tracked water metrics.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WaterSample {
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    pub ph: f64,
    /// Turbidity in NTU.
    pub turbidity: f64,
    /// Dissolved oxygen in mg/L.
    pub dissolved_oxygen: f64,
    /// Temperature in °C.
    pub temperature: f64,
}

impl WaterSample {
    pub fn month_label(&self) -> &'static str {
        month_label(self.month)
    }

    /// Value of a single metric for this sample.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Ph => self.ph,
            Metric::Turbidity => self.turbidity,
            Metric::DissolvedOxygen => self.dissolved_oxygen,
            Metric::Temperature => self.temperature,
        }
    }
}

/// A metric column of [`WaterSample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Ph,
    Turbidity,
    DissolvedOxygen,
    Temperature,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Ph,
        Metric::Turbidity,
        Metric::DissolvedOxygen,
        Metric::Temperature,
    ];

    /// Column key, matching the serialized field name on `WaterSample`.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Ph => "ph",
            Metric::Turbidity => "turbidity",
            Metric::DissolvedOxygen => "dissolved_oxygen",
            Metric::Temperature => "temperature",
        }
    }
}

/// A measured substance with its current value and regulatory safe limit.
///
/// `value` and `safe_limit` are non-negative.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Contaminant {
    pub name: &'static str,
    pub value: f64,
    pub safe_limit: f64,
    /// Display unit ("mg/L", "CFU/100ml").
    pub unit: &'static str,
    pub display_color: &'static str,
}

impl Contaminant {
    /// `value / safe_limit`, unclamped. Greater than 1 when over the limit.
    pub fn ratio(&self) -> f64 {
        if self.safe_limit > 0.0 {
            self.value / self.safe_limit
        } else if self.value > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }

    /// Fraction of the gauge to fill, clamped to `[0, 1]`.
    pub fn fill_fraction(&self) -> f64 {
        let ratio = self.ratio();
        if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        }
    }

    pub fn exceeds_limit(&self) -> bool {
        self.value > self.safe_limit
    }
}

/// One slice of the quality distribution pie.
///
/// Percentages are presentation-only and need not sum to 100.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct QualityBucket {
    pub label: &'static str,
    pub percentage: f64,
    pub display_color: &'static str,
}

/// Icon shown in a metric card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricIcon {
    CheckCircle,
    Beaker,
    Thermometer,
    Bolt,
}

/// A static key-metric card on the dashboard tab.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    /// Progress bar fill, 0-100.
    pub progress: f64,
    pub icon: MetricIcon,
    pub accent_color: &'static str,
    /// Colour the headline value is drawn in, if not the default text colour.
    pub value_color: Option<&'static str>,
}

/// Right-hand side of a report card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ReportValue {
    Text(&'static str),
    Badge(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: ReportValue,
}

/// A canned report card with an action button that has no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportCard {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: &'static [ReportRow],
    pub action: &'static str,
}
