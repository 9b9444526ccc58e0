//! Month-by-month line chart over the historical samples.

use super::chart_axes::{ChartAxes, ChartLegend};
use aqua_core::chart::{polyline, svg_title, CartesianChart, Frame, Series, XLayout};
use aqua_core::samples::WATER_QUALITY_TREND;
use dioxus::prelude::*;

#[component]
pub fn LineChart(series: Vec<Series>) -> Element {
    let samples = &WATER_QUALITY_TREND;
    let chart = CartesianChart::new(Frame::STANDARD, XLayout::Points, samples, &series);
    let view_box = chart.frame.view_box();
    let lines: Vec<(Series, String, Vec<(f64, f64, String)>)> = series
        .iter()
        .map(|s| {
            let points = chart.points(samples, s.metric);
            let dots = points
                .iter()
                .zip(samples.iter())
                .map(|(p, sample)| {
                    let tooltip = svg_title(&format!("{}: {}", s.label, sample.value(s.metric)));
                    (p.x, p.y, tooltip)
                })
                .collect();
            (*s, polyline(&points), dots)
        })
        .collect();

    rsx! {
        div {
            svg {
                view_box: "{view_box}",
                width: "100%",
                height: "300",
                ChartAxes { chart: chart.clone() }
                for (s, points, dots) in lines.into_iter() {
                    g {
                        polyline {
                            points: "{points}",
                            fill: "none",
                            stroke: "{s.color}",
                            stroke_width: "2",
                        }
                        for (x, y, tooltip) in dots.into_iter() {
                            circle {
                                cx: "{x:.2}",
                                cy: "{y:.2}",
                                r: "3",
                                fill: "{s.color}",
                                dangerous_inner_html: "{tooltip}",
                            }
                        }
                    }
                }
            }
            ChartLegend { series: series.clone() }
        }
    }
}
