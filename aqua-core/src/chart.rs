//! Geometry for the dashboard's inline SVG charts.
//!
//! Everything here is pure arithmetic over the sample datasets; the UI
//! crate turns the results into `svg` elements.

use crate::models::{Metric, QualityBucket, WaterSample};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

/// Outer size and margins of a chart's SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Frame {
    /// Default frame for the 300px-high trend and analytics charts.
    pub const STANDARD: Frame = Frame {
        width: 560.0,
        height: 300.0,
        margin_top: 16.0,
        margin_right: 16.0,
        margin_bottom: 56.0,
        margin_left: 40.0,
    };

    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// Round `value` up to 1, 2, 2.5 or 5 times a power of ten.
/// Non-positive or non-finite input yields 1.
pub fn nice_max(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 || value.is_infinite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One plotted metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Series {
    pub metric: Metric,
    pub label: &'static str,
    pub color: &'static str,
}

/// How categories are laid out along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XLayout {
    /// First and last category touch the plot edges (line, area).
    Points,
    /// Each category owns an equal band; positions are band centres (bar).
    Bands,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub text: &'static str,
}

/// Shared axes for a month-by-month chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianChart {
    pub frame: Frame,
    pub layout: XLayout,
    pub y_scale: LinearScale,
    pub y_ticks: Vec<Tick>,
    pub x_labels: Vec<AxisLabel>,
    /// Width of one category band (whole plot width for a single point).
    pub band_width: f64,
    x_positions: Vec<f64>,
}

const TICK_COUNT: usize = 5;

impl CartesianChart {
    /// Axes sized to fit every series over `samples`, starting at zero.
    pub fn new(frame: Frame, layout: XLayout, samples: &[WaterSample], series: &[Series]) -> Self {
        let data_max = samples
            .iter()
            .flat_map(|s| series.iter().map(move |se| s.value(se.metric)))
            .fold(0.0_f64, f64::max);
        let y_max = nice_max(data_max);
        let y_scale = LinearScale::new((0.0, y_max), (frame.plot_bottom(), frame.plot_top()));

        let y_ticks = (0..=TICK_COUNT)
            .map(|i| {
                let value = y_max * i as f64 / TICK_COUNT as f64;
                Tick {
                    y: y_scale.map(value),
                    label: format_tick(value),
                }
            })
            .collect();

        let n = samples.len();
        let band_width = if n == 0 { 0.0 } else { frame.plot_width() / n as f64 };
        let x_positions: Vec<f64> = (0..n)
            .map(|i| match layout {
                XLayout::Bands => frame.plot_left() + band_width * (i as f64 + 0.5),
                XLayout::Points if n == 1 => frame.plot_left() + frame.plot_width() / 2.0,
                XLayout::Points => {
                    frame.plot_left() + frame.plot_width() * i as f64 / (n - 1) as f64
                }
            })
            .collect();

        let x_labels = samples
            .iter()
            .zip(&x_positions)
            .map(|(s, &x)| AxisLabel {
                x,
                text: s.month_label(),
            })
            .collect();

        Self {
            frame,
            layout,
            y_scale,
            y_ticks,
            x_labels,
            band_width,
            x_positions,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.frame.plot_bottom()
    }

    /// Data points of one metric in sample order.
    pub fn points(&self, samples: &[WaterSample], metric: Metric) -> Vec<Point> {
        samples
            .iter()
            .zip(&self.x_positions)
            .map(|(s, &x)| Point {
                x,
                y: self.y_scale.map(s.value(metric)),
            })
            .collect()
    }

    /// Side-by-side bars, one group per sample and one bar per series.
    pub fn grouped_bars(&self, samples: &[WaterSample], series: &[Series]) -> Vec<BarRect> {
        if series.is_empty() {
            return Vec::new();
        }
        let group_width = self.band_width * 0.8;
        let bar_width = group_width / series.len() as f64;
        let baseline = self.baseline();
        samples
            .iter()
            .zip(&self.x_positions)
            .flat_map(|(sample, &center)| {
                let left = center - group_width / 2.0;
                series.iter().enumerate().map(move |(i, se)| {
                    let value = sample.value(se.metric);
                    let top = self.y_scale.map(value);
                    BarRect {
                        x: left + bar_width * i as f64,
                        y: top.min(baseline),
                        width: bar_width,
                        height: (baseline - top).abs(),
                        color: se.color,
                        month: sample.month_label(),
                        value,
                    }
                })
            })
            .collect()
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// SVG `points` attribute for a polyline.
pub fn polyline(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
    }
    out
}

/// Closed SVG path running along `points` and back along `baseline`.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut out = format!("M{:.2},{:.2}", first.x, baseline);
    for p in points {
        let _ = write!(out, " L{:.2},{:.2}", p.x, p.y);
    }
    let _ = write!(out, " L{:.2},{:.2} Z", last.x, baseline);
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub month: &'static str,
    pub value: f64,
}

/// One wedge of the quality-distribution pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub percentage: f64,
    pub color: &'static str,
    /// Radians, clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path `d` for the wedge.
    pub path: String,
    /// Anchor for the outside "<label>: <value>%" text.
    pub label_at: Point,
}

impl PieSlice {
    pub fn caption(&self) -> String {
        format!("{}: {}%", self.label, self.percentage)
    }
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> Point {
    // 0 is 12 o'clock, increasing clockwise in screen coordinates.
    Point {
        x: cx + r * (angle - FRAC_PI_2).cos(),
        y: cy + r * (angle - FRAC_PI_2).sin(),
    }
}

/// Wedges sized by each bucket's share of the total.
///
/// Buckets with a non-positive percentage get no wedge; a zero total yields
/// no slices.
pub fn pie_slices(buckets: &[QualityBucket], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: f64 = buckets.iter().map(|b| b.percentage.max(0.0)).sum();
    if total.is_nan() || total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    buckets
        .iter()
        .filter(|b| b.percentage > 0.0)
        .map(|b| {
            let sweep = b.percentage / total * TAU;
            let end = start + sweep;
            let path = wedge_path(cx, cy, radius, start, end);
            let label_at = polar(cx, cy, radius * 1.25, start + sweep / 2.0);
            let slice = PieSlice {
                label: b.label,
                percentage: b.percentage,
                color: b.display_color,
                start_angle: start,
                end_angle: end,
                path,
                label_at,
            };
            start = end;
            slice
        })
        .collect()
}

fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        // A single arc cannot describe a full circle; split it in two.
        let top = polar(cx, cy, r, 0.0);
        let bottom = polar(cx, cy, r, TAU / 2.0);
        return format!(
            "M{:.2},{:.2} A{r:.2},{r:.2} 0 1,1 {:.2},{:.2} A{r:.2},{r:.2} 0 1,1 {:.2},{:.2} Z",
            top.x, top.y, bottom.x, bottom.y, top.x, top.y
        );
    }
    let from = polar(cx, cy, r, start);
    let to = polar(cx, cy, r, end);
    let large_arc = if sweep > TAU / 2.0 { 1 } else { 0 };
    format!(
        "M{cx:.2},{cy:.2} L{:.2},{:.2} A{r:.2},{r:.2} 0 {large_arc},1 {:.2},{:.2} Z",
        from.x, from.y, to.x, to.y
    )
}

/// Tooltip markup for the inner HTML of an SVG shape. Parsed under the
/// shape, the `<title>` lands in the SVG namespace.
pub fn svg_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 15);
    out.push_str("<title>");
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out.push_str("</title>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{QUALITY_DISTRIBUTION, WATER_QUALITY_TREND};

    const PH: Series = Series {
        metric: Metric::Ph,
        label: "pH Level",
        color: "#2563eb",
    };
    const DO: Series = Series {
        metric: Metric::DissolvedOxygen,
        label: "Dissolved O₂",
        color: "#0891b2",
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn nice_max_rounds_up() {
        assert_eq!(nice_max(8.9), 10.0);
        assert_eq!(nice_max(25.0), 25.0);
        assert_eq!(nice_max(26.0), 50.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
        assert_eq!(nice_max(f64::INFINITY), 1.0);
        assert_eq!(nice_max(-3.0), 1.0);
        assert_eq!(nice_max(2.5), 2.5);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(-4.0), 1.0);
        assert!(approx(nice_max(0.013), 0.02));
    }

    #[test]
    fn linear_scale_maps_and_inverts_axis() {
        let scale = LinearScale::new((0.0, 10.0), (244.0, 16.0));
        assert!(approx(scale.map(0.0), 244.0));
        assert!(approx(scale.map(10.0), 16.0));
        assert!(approx(scale.map(5.0), 130.0));
        let flat = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(flat.map(3.0), 0.0);
    }

    #[test]
    fn point_layout_spans_the_plot() {
        let chart =
            CartesianChart::new(Frame::STANDARD, XLayout::Points, &WATER_QUALITY_TREND, &[PH, DO]);
        let points = chart.points(&WATER_QUALITY_TREND, Metric::Ph);
        assert_eq!(points.len(), 6);
        assert!(approx(points[0].x, Frame::STANDARD.plot_left()));
        assert!(approx(points[5].x, Frame::STANDARD.plot_right()));
        assert_eq!(chart.y_scale.domain_max(), 10.0);
        // Higher pH sits higher on screen.
        assert!(points[5].y < points[3].y);
        let labels: Vec<&str> = chart.x_labels.iter().map(|l| l.text).collect();
        assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn ticks_run_from_zero_to_max() {
        let chart =
            CartesianChart::new(Frame::STANDARD, XLayout::Points, &WATER_QUALITY_TREND, &[PH]);
        assert_eq!(chart.y_ticks.len(), TICK_COUNT + 1);
        assert_eq!(chart.y_ticks[0].label, "0");
        assert_eq!(chart.y_ticks[TICK_COUNT].label, "10");
        assert!(approx(chart.y_ticks[0].y, chart.baseline()));
    }

    #[test]
    fn bars_sit_on_the_baseline_inside_their_band() {
        let series = [PH, DO];
        let chart =
            CartesianChart::new(Frame::STANDARD, XLayout::Bands, &WATER_QUALITY_TREND, &series);
        let bars = chart.grouped_bars(&WATER_QUALITY_TREND, &series);
        assert_eq!(bars.len(), 12);
        for bar in &bars {
            assert!(approx(bar.y + bar.height, chart.baseline()));
            assert!(bar.x >= Frame::STANDARD.plot_left());
            assert!(bar.x + bar.width <= Frame::STANDARD.plot_right() + 1e-9);
        }
        assert_eq!(bars[1].month, "Jan");
        assert_eq!(bars[1].value, 8.5);
        assert!(chart.grouped_bars(&WATER_QUALITY_TREND, &[]).is_empty());
    }

    #[test]
    fn area_path_closes_on_baseline() {
        let points = [Point { x: 0.0, y: 5.0 }, Point { x: 10.0, y: 2.0 }];
        assert_eq!(
            area_path(&points, 20.0),
            "M0.00,20.00 L0.00,5.00 L10.00,2.00 L10.00,20.00 Z"
        );
        assert_eq!(area_path(&[], 20.0), "");
        assert_eq!(polyline(&points), "0.00,5.00 10.00,2.00");
    }

    #[test]
    fn pie_slices_cover_the_circle_in_order() {
        let slices = pie_slices(&QUALITY_DISTRIBUTION, 100.0, 100.0, 80.0);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!(approx(slices[3].end_angle, TAU));
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        // Excellent is 45% of the total.
        assert!(approx(slices[0].end_angle, 0.45 * TAU));
        assert_eq!(slices[0].caption(), "Excellent: 45%");
        assert!(slices[0].path.starts_with("M100.00,100.00 L100.00,20.00"));
    }

    #[test]
    fn tooltips_are_escaped_titles() {
        assert_eq!(svg_title("Jan: 7.2"), "<title>Jan: 7.2</title>");
        assert_eq!(
            svg_title("<b> & \"x\""),
            "<title>&lt;b&gt; &amp; &quot;x&quot;</title>"
        );
    }

    #[test]
    fn degenerate_pies() {
        let zero = [QualityBucket {
            label: "None",
            percentage: 0.0,
            display_color: "#000",
        }];
        assert!(pie_slices(&zero, 0.0, 0.0, 10.0).is_empty());

        let unknown = [QualityBucket {
            label: "Unknown",
            percentage: f64::NAN,
            display_color: "#000",
        }];
        assert!(pie_slices(&unknown, 0.0, 0.0, 10.0).is_empty());

        let whole = [QualityBucket {
            label: "All",
            percentage: 100.0,
            display_color: "#000",
        }];
        let slices = pie_slices(&whole, 0.0, 0.0, 10.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches('A').count(), 2);
    }
}
