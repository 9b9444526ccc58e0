//! Fixed datasets displayed by the dashboard.
//!
//! These are sample values, not measurements. The historical trend is in
//! chronological order.

use crate::models::{
    Contaminant, MetricCard, MetricIcon, QualityBucket, ReportCard, ReportRow, ReportValue,
    WaterSample,
};
use chrono::Month;

const fn sample(
    month: Month,
    ph: f64,
    turbidity: f64,
    dissolved_oxygen: f64,
    temperature: f64,
) -> WaterSample {
    WaterSample {
        month,
        ph,
        turbidity,
        dissolved_oxygen,
        temperature,
    }
}

/// Six months of historical readings, January through June.
pub const WATER_QUALITY_TREND: [WaterSample; 6] = [
    sample(Month::January, 7.2, 2.1, 8.5, 15.0),
    sample(Month::February, 7.1, 2.3, 8.2, 16.0),
    sample(Month::March, 7.3, 1.9, 8.7, 18.0),
    sample(Month::April, 7.0, 2.5, 8.1, 20.0),
    sample(Month::May, 7.2, 2.0, 8.6, 22.0),
    sample(Month::June, 7.4, 1.8, 8.9, 25.0),
];

pub const CONTAMINANT_LEVELS: [Contaminant; 4] = [
    Contaminant {
        name: "Chlorine",
        value: 0.5,
        safe_limit: 2.0,
        unit: "mg/L",
        display_color: "#059669",
    },
    Contaminant {
        name: "Lead",
        value: 0.003,
        safe_limit: 0.015,
        unit: "mg/L",
        display_color: "#10b981",
    },
    Contaminant {
        name: "Nitrates",
        value: 8.2,
        safe_limit: 10.0,
        unit: "mg/L",
        display_color: "#34d399",
    },
    Contaminant {
        name: "Bacteria",
        value: 2.0,
        safe_limit: 100.0,
        unit: "CFU/100ml",
        display_color: "#6ee7b7",
    },
];

pub const QUALITY_DISTRIBUTION: [QualityBucket; 4] = [
    QualityBucket {
        label: "Excellent",
        percentage: 45.0,
        display_color: "#059669",
    },
    QualityBucket {
        label: "Good",
        percentage: 35.0,
        display_color: "#10b981",
    },
    QualityBucket {
        label: "Fair",
        percentage: 15.0,
        display_color: "#fbbf24",
    },
    QualityBucket {
        label: "Poor",
        percentage: 5.0,
        display_color: "#ef4444",
    },
];

pub const KEY_METRICS: [MetricCard; 4] = [
    MetricCard {
        title: "Overall Quality",
        value: "Excellent",
        caption: "Score: 87/100",
        progress: 87.0,
        icon: MetricIcon::CheckCircle,
        accent_color: "#16a34a",
        value_color: Some("#16a34a"),
    },
    MetricCard {
        title: "pH Level",
        value: "7.2",
        caption: "Optimal range: 6.5-8.5",
        progress: 75.0,
        icon: MetricIcon::Beaker,
        accent_color: "#2563eb",
        value_color: None,
    },
    MetricCard {
        title: "Temperature",
        value: "22°C",
        caption: "Ideal: 20-25°C",
        progress: 80.0,
        icon: MetricIcon::Thermometer,
        accent_color: "#ea580c",
        value_color: None,
    },
    MetricCard {
        title: "Dissolved O₂",
        value: "8.6 mg/L",
        caption: "Minimum: 5.0 mg/L",
        progress: 95.0,
        icon: MetricIcon::Bolt,
        accent_color: "#0891b2",
        value_color: None,
    },
];

pub const REPORT_CARDS: [ReportCard; 3] = [
    ReportCard {
        title: "Monthly Report",
        description: "Comprehensive water quality analysis",
        rows: &[
            ReportRow {
                label: "Status:",
                value: ReportValue::Badge("Excellent"),
            },
            ReportRow {
                label: "Samples:",
                value: ReportValue::Text("1,247"),
            },
            ReportRow {
                label: "Compliance:",
                value: ReportValue::Text("98.5%"),
            },
        ],
        action: "Download Report",
    },
    ReportCard {
        title: "Compliance Report",
        description: "Regulatory compliance status",
        rows: &[
            ReportRow {
                label: "EPA Standards:",
                value: ReportValue::Badge("Compliant"),
            },
            ReportRow {
                label: "WHO Guidelines:",
                value: ReportValue::Badge("Compliant"),
            },
            ReportRow {
                label: "Local Standards:",
                value: ReportValue::Badge("Compliant"),
            },
        ],
        action: "View Details",
    },
    ReportCard {
        title: "Trend Analysis",
        description: "6-month quality trends",
        rows: &[
            ReportRow {
                label: "Overall Trend:",
                value: ReportValue::Badge("Improving"),
            },
            ReportRow {
                label: "pH Stability:",
                value: ReportValue::Text("95%"),
            },
            ReportRow {
                label: "Contamination:",
                value: ReportValue::Badge("Low"),
            },
        ],
        action: "Generate Report",
    },
];
