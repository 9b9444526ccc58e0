//! Reusable Dioxus RSX components for the AquaPredict dashboard.

mod area_chart;
mod badge;
mod bar_chart;
mod card;
mod chart_axes;
mod contaminant_list;
mod error_display;
mod icon;
mod line_chart;
mod loading_spinner;
mod metric_card;
mod pie_chart;
mod prediction_panel;
mod predictor_form;
mod progress;
mod report_card;
mod tab_bar;

pub use area_chart::AreaChart;
pub use badge::{Badge, BadgeVariant};
pub use bar_chart::BarChart;
pub use card::Card;
pub use chart_axes::{ChartAxes, ChartLegend};
pub use contaminant_list::ContaminantList;
pub use error_display::ErrorDisplay;
pub use icon::{metric_glyph, Icon, ACTIVITY, ALERT, CHECK, DROPLETS, TRENDING_UP};
pub use line_chart::LineChart;
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCardView;
pub use pie_chart::PieChart;
pub use prediction_panel::PredictionPanel;
pub use predictor_form::PredictorForm;
pub use progress::ProgressBar;
pub use report_card::ReportCardView;
pub use tab_bar::TabBar;
