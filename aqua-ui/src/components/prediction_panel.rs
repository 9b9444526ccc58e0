//! Prediction results card.

use super::card::Card;
use super::icon::{Icon, ALERT, CHECK, DROPLETS};
use super::loading_spinner::LoadingSpinner;
use super::progress::ProgressBar;
use crate::state::AppState;
use aqua_core::prediction::InputField;
use dioxus::prelude::*;

/// Shows the latest result, a busy indicator, or the empty-state hint.
#[component]
pub fn PredictionPanel() -> Element {
    let state = use_context::<AppState>();
    let dashboard = state.dashboard.read().clone();

    let body = if dashboard.is_busy() {
        rsx! { LoadingSpinner {} }
    } else if let Some(last) = dashboard.last_prediction.as_ref() {
        let result = &last.result;
        let color = result.quality.accent_color();
        let (alert_background, alert_border) = result.severity().alert_colors();
        let summary = result.summary();
        let label = result.quality.label();
        let score = result.score;
        let recommendations = result.recommendations.clone();
        let submitted: Vec<(&'static str, String)> = InputField::ALL
            .iter()
            .map(|&f| (f.label(), last.input.get(f).to_string()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                div {
                    style: "text-align: center;",
                    div { style: "font-size: 36px; font-weight: 700; color: {color};", "{score}/100" }
                    div { style: "font-size: 20px; font-weight: 600; color: {color};", "{label}" }
                    ProgressBar { value: score as f64, color: color.to_string() }
                }
                div {
                    style: "display: flex; gap: 8px; align-items: flex-start; padding: 12px; border: 1px solid {alert_border}; background: {alert_background}; border-radius: 6px; font-size: 14px;",
                    Icon { glyph: ALERT, color: color.to_string() }
                    span { "{summary}" }
                }
                if !submitted.is_empty() {
                    div {
                        style: "font-size: 12px; color: #6B7280;",
                        for (name, value) in submitted.into_iter() {
                            div { "{name}: {value}" }
                        }
                    }
                }
                div {
                    h4 { style: "margin: 0 0 8px 0; font-size: 14px;", "Recommendations:" }
                    ul {
                        style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 6px; font-size: 14px;",
                        for rec in recommendations.into_iter() {
                            li {
                                style: "display: flex; gap: 8px; align-items: center;",
                                Icon { glyph: CHECK, color: "#16A34A".to_string() }
                                "{rec}"
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {
            div {
                style: "text-align: center; padding: 48px 0; color: #6B7280;",
                div { style: "font-size: 40px; opacity: 0.5; margin-bottom: 12px;", "{DROPLETS}" }
                p { "Enter water parameters and click \"Predict\" to see AI analysis results" }
            }
        }
    };

    rsx! {
        Card {
            title: "Prediction Results".to_string(),
            description: "AI-powered water quality assessment".to_string(),
            {body}
        }
    }
}
