//! Canned report summary card.

use super::badge::{Badge, BadgeVariant};
use super::card::Card;
use aqua_core::models::{ReportCard, ReportValue};
use dioxus::prelude::*;

/// The action button is intentionally unwired; clicking only logs.
#[component]
pub fn ReportCardView(report: ReportCard) -> Element {
    let action = report.action;
    rsx! {
        Card {
            title: report.title.to_string(),
            description: report.description.to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 8px; font-size: 14px;",
                for row in report.rows.iter() {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center;",
                        span { "{row.label}" }
                        {report_value(row.value)}
                    }
                }
            }
            button {
                style: "margin-top: 16px; width: 100%; padding: 8px; border: 1px solid #D1D5DB; border-radius: 6px; background: #FFFFFF; cursor: pointer;",
                onclick: move |_| log::debug!("report action {:?} has no behaviour", action),
                "{action}"
            }
        }
    }
}

fn report_value(value: ReportValue) -> Element {
    match value {
        ReportValue::Badge(text) => rsx! {
            Badge { text: text.to_string(), variant: BadgeVariant::Secondary }
        },
        ReportValue::Text(text) => rsx! {
            span { style: "font-weight: 600;", "{text}" }
        },
    }
}
