//! AquaPredict Dashboard
//!
//! Single-page water-quality dashboard with four tabs:
//! - Dashboard: key metric cards, pH / dissolved-oxygen trend, quality
//!   distribution pie and contaminant levels against safe limits.
//! - AI Predictor: parameter form and the simulated prediction result.
//! - Analytics: temperature / turbidity area chart and a monthly parameter
//!   comparison bar chart.
//! - Reports: three canned report cards.
//!
//! All figures come from the fixed datasets in `aqua_core::samples`. The
//! only state is the `DashboardState` held in `AppState`; the prediction
//! runs as a spawned task that sleeps on the browser timer.

use aqua_core::chart::Series;
use aqua_core::models::Metric;
use aqua_core::samples::{
    CONTAMINANT_LEVELS, KEY_METRICS, QUALITY_DISTRIBUTION, REPORT_CARDS,
};
use aqua_core::state::Tab;
use aqua_ui::components::{
    AreaChart, Badge, BadgeVariant, BarChart, Card, ContaminantList, Icon, LineChart,
    MetricCardView, PieChart, PredictionPanel, PredictorForm, ReportCardView, TabBar, ACTIVITY,
    DROPLETS, TRENDING_UP,
};
use aqua_ui::js_bridge;
use aqua_ui::state::AppState;
use dioxus::prelude::*;

const PH: Series = Series {
    metric: Metric::Ph,
    label: "pH Level",
    color: "#2563EB",
};
const DISSOLVED_OXYGEN: Series = Series {
    metric: Metric::DissolvedOxygen,
    label: "Dissolved O₂",
    color: "#0891B2",
};
const TURBIDITY: Series = Series {
    metric: Metric::Turbidity,
    label: "Turbidity (NTU)",
    color: "#10B981",
};
const TEMPERATURE: Series = Series {
    metric: Metric::Temperature,
    label: "Temperature (°C)",
    color: "#F59E0B",
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("aqua-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    use_effect(|| {
        js_bridge::console_log("[AquaPredict] dashboard mounted");
    });

    let active = state.dashboard.read().active_tab;

    rsx! {
        div {
            style: "min-height: 100vh; background: #F9FAFB; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #111827;",
            Header {}
            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 32px 16px;",
                TabBar {}
                {tab_panel(active)}
            }
        }
    }
}

fn tab_panel(tab: Tab) -> Element {
    match tab {
        Tab::Dashboard => rsx! { DashboardTab {} },
        Tab::Predictor => rsx! { PredictorTab {} },
        Tab::Analytics => rsx! { AnalyticsTab {} },
        Tab::Reports => rsx! { ReportsTab {} },
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 50; border-bottom: 1px solid #E5E7EB; background: rgba(255,255,255,0.85); backdrop-filter: blur(4px);",
            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 16px; display: flex; justify-content: space-between; align-items: center;",
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    div {
                        style: "padding: 8px; background: #059669; border-radius: 8px; font-size: 20px;",
                        Icon { glyph: DROPLETS }
                    }
                    div {
                        h1 { style: "margin: 0; font-size: 24px; font-weight: 700;", "AquaPredict" }
                        p { style: "margin: 0; font-size: 13px; color: #6B7280;", "AI-Powered Water Quality Analysis" }
                    }
                }
                Badge { text: format!("{ACTIVITY} Live Monitoring"), variant: BadgeVariant::Secondary }
            }
        }
    }
}

#[component]
fn DashboardTab() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px;",
                for card in KEY_METRICS {
                    MetricCardView { card }
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px;",
                Card {
                    title: "Water Quality Trends".to_string(),
                    description: "6-month historical data".to_string(),
                    icon: TRENDING_UP.to_string(),
                    LineChart { series: vec![PH, DISSOLVED_OXYGEN] }
                }
                Card {
                    title: "Quality Distribution".to_string(),
                    description: "Current water quality ratings".to_string(),
                    PieChart { buckets: QUALITY_DISTRIBUTION.to_vec() }
                }
            }
            Card {
                title: "Contaminant Levels".to_string(),
                description: "Current levels vs. safety thresholds".to_string(),
                ContaminantList { contaminants: CONTAMINANT_LEVELS.to_vec() }
            }
        }
    }
}

#[component]
fn PredictorTab() -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px;",
            PredictorForm {}
            PredictionPanel {}
        }
    }
}

#[component]
fn AnalyticsTab() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",
            Card {
                title: "Temperature & Turbidity Analysis".to_string(),
                description: "Correlation between temperature and water clarity".to_string(),
                AreaChart { series: vec![TEMPERATURE, TURBIDITY] }
            }
            Card {
                title: "Monthly Parameter Comparison".to_string(),
                description: "Comparative analysis of key water quality indicators".to_string(),
                BarChart { series: vec![PH, TURBIDITY, DISSOLVED_OXYGEN] }
            }
        }
    }
}

#[component]
fn ReportsTab() -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px;",
            for report in REPORT_CARDS {
                ReportCardView { report }
            }
        }
    }
}
