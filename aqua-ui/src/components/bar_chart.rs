//! Grouped bar chart, one group per month.

use super::chart_axes::{ChartAxes, ChartLegend};
use aqua_core::chart::{svg_title, CartesianChart, Frame, Series, XLayout};
use aqua_core::samples::WATER_QUALITY_TREND;
use dioxus::prelude::*;

#[component]
pub fn BarChart(series: Vec<Series>) -> Element {
    let samples = &WATER_QUALITY_TREND;
    let chart = CartesianChart::new(Frame::STANDARD, XLayout::Bands, samples, &series);
    let view_box = chart.frame.view_box();
    let bars: Vec<_> = chart
        .grouped_bars(samples, &series)
        .into_iter()
        .map(|bar| {
            let tooltip = svg_title(&format!("{}: {}", bar.month, bar.value));
            (bar, tooltip)
        })
        .collect();

    rsx! {
        div {
            svg {
                view_box: "{view_box}",
                width: "100%",
                height: "300",
                ChartAxes { chart: chart.clone() }
                for (bar, tooltip) in bars.into_iter() {
                    rect {
                        x: "{bar.x:.2}",
                        y: "{bar.y:.2}",
                        width: "{bar.width:.2}",
                        height: "{bar.height:.2}",
                        fill: "{bar.color}",
                        dangerous_inner_html: "{tooltip}",
                    }
                }
            }
            ChartLegend { series: series.clone() }
        }
    }
}
