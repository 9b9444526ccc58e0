//! Filled area chart; each series is drawn from the baseline, not stacked.

use super::chart_axes::{ChartAxes, ChartLegend};
use aqua_core::chart::{area_path, polyline, CartesianChart, Frame, Series, XLayout};
use aqua_core::samples::WATER_QUALITY_TREND;
use dioxus::prelude::*;

#[component]
pub fn AreaChart(series: Vec<Series>) -> Element {
    let samples = &WATER_QUALITY_TREND;
    let chart = CartesianChart::new(Frame::STANDARD, XLayout::Points, samples, &series);
    let view_box = chart.frame.view_box();
    let areas: Vec<(Series, String, String)> = series
        .iter()
        .map(|s| {
            let points = chart.points(samples, s.metric);
            (*s, area_path(&points, chart.baseline()), polyline(&points))
        })
        .collect();

    rsx! {
        div {
            svg {
                view_box: "{view_box}",
                width: "100%",
                height: "300",
                ChartAxes { chart: chart.clone() }
                for (s, area, outline) in areas.into_iter() {
                    g {
                        path {
                            d: "{area}",
                            fill: "{s.color}",
                            fill_opacity: "0.6",
                        }
                        polyline {
                            points: "{outline}",
                            fill: "none",
                            stroke: "{s.color}",
                            stroke_width: "2",
                        }
                    }
                }
            }
            ChartLegend { series: series.clone() }
        }
    }
}
