//! Inline SVG charts.
//!
//! Layout is fixed: a plot area inset by fixed margins inside a
//! [`WIDTH`] x [`HEIGHT`] canvas, a dashed horizontal grid and
//! [`Y_TICKS`] evenly spaced y-axis ticks from zero to a rounded maximum.

use std::fmt::Write;

use super::escape;

pub const WIDTH: f64 = 960.0;
pub const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
pub const Y_TICKS: usize = 5;

/// Diverging blue-to-red palette for categorical bars.
pub const COOLWARM: &[&str] = &["#3b4cc0", "#dddcdc", "#b40426"];
/// Sequential purple-to-yellow palette for ordered bars.
pub const VIRIDIS: &[&str] = &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"];

/// Axis titles shared by both chart kinds.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    pub title: &'a str,
    pub x: &'a str,
    pub y: &'a str,
}

/// One line of a [`line_chart`].
#[derive(Debug, Clone)]
pub struct LineSeries<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub points: Vec<(u8, f64)>,
}

/// Rounds `v` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ceiling(v: f64) -> f64 {
    if v.is_nan() || v.is_infinite() || v <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(v.log10().floor() as i32);
    for step in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if step * magnitude >= v {
            return step * magnitude;
        }
    }
    10.0 * magnitude
}

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn y_of(value: f64, y_max: f64) -> f64 {
    MARGIN_TOP + plot_height() * (1.0 - value / y_max)
}

fn open_svg(out: &mut String, labels: &Labels<'_>) {
    let _ = write!(
        out,
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{title}" xmlns="http://www.w3.org/2000/svg">"#,
        title = escape(labels.title)
    );
    let _ = write!(
        out,
        r#"<text class="chart-title" x="{x}" y="28" text-anchor="middle">{title}</text>"#,
        x = WIDTH / 2.0,
        title = escape(labels.title)
    );
    let _ = write!(
        out,
        r#"<text class="axis-label" x="{x}" y="{y}" text-anchor="middle">{label}</text>"#,
        x = MARGIN_LEFT + plot_width() / 2.0,
        y = HEIGHT - 12.0,
        label = escape(labels.x)
    );
    let _ = write!(
        out,
        r#"<text class="axis-label" transform="translate(18 {y}) rotate(-90)" text-anchor="middle">{label}</text>"#,
        y = MARGIN_TOP + plot_height() / 2.0,
        label = escape(labels.y)
    );
}

fn y_grid(out: &mut String, y_max: f64) {
    for i in 0..=Y_TICKS {
        let value = y_max * i as f64 / Y_TICKS as f64;
        let y = y_of(value, y_max);
        let _ = write!(
            out,
            r#"<line class="grid" x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke-dasharray="4 4"/>"#,
            x1 = MARGIN_LEFT,
            x2 = WIDTH - MARGIN_RIGHT,
        );
        let _ = write!(
            out,
            r#"<text class="tick" x="{x}" y="{y:.1}" text-anchor="end" dominant-baseline="middle">{value:.0}</text>"#,
            x = MARGIN_LEFT - 8.0,
        );
    }
    let _ = write!(
        out,
        r#"<line class="axis" x1="{x1}" y1="{y}" x2="{x2}" y2="{y}"/>"#,
        x1 = MARGIN_LEFT,
        x2 = WIDTH - MARGIN_RIGHT,
        y = MARGIN_TOP + plot_height(),
    );
}

fn no_data(out: &mut String) {
    let _ = write!(
        out,
        r#"<text class="no-data" x="{x}" y="{y}" text-anchor="middle">No data</text>"#,
        x = WIDTH / 2.0,
        y = HEIGHT / 2.0
    );
}

/// Renders one bar per `(label, value)` pair, in the given order.
///
/// Colors cycle through `palette`. Each bar carries its value above it.
pub fn bar_chart(labels: &Labels<'_>, bars: &[(&str, f64)], palette: &[&str]) -> String {
    let mut out = String::new();
    open_svg(&mut out, labels);

    if bars.is_empty() {
        no_data(&mut out);
        out.push_str("</svg>");
        return out;
    }

    let y_max = nice_ceiling(bars.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    y_grid(&mut out, y_max);

    let slot = plot_width() / bars.len() as f64;
    let bar_width = slot * 0.6;
    for (i, (label, value)) in bars.iter().enumerate() {
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let y = y_of(*value, y_max);
        let color = palette.get(i % palette.len().max(1)).copied().unwrap_or("#4c72b0");
        let _ = write!(
            out,
            r#"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{h:.1}" fill="{color}"><title>{label}: {value:.1}</title></rect>"#,
            h = MARGIN_TOP + plot_height() - y,
            label = escape(label),
        );
        let _ = write!(
            out,
            r#"<text class="bar-value" x="{cx:.1}" y="{ty:.1}" text-anchor="middle">{value:.1}</text>"#,
            cx = x + bar_width / 2.0,
            ty = y - 6.0,
        );
        let _ = write!(
            out,
            r#"<text class="tick" x="{cx:.1}" y="{ty:.1}" text-anchor="middle">{label}</text>"#,
            cx = x + bar_width / 2.0,
            ty = MARGIN_TOP + plot_height() + 20.0,
            label = escape(label),
        );
    }

    out.push_str("</svg>");
    out
}

/// Renders each series as a polyline with a marker on every point over a
/// fixed x-axis `0..x_ticks`.
///
/// Points are joined in the order given; hours absent from a series are not
/// filled in, and points at or beyond `x_ticks` are left off the chart.
pub fn line_chart(
    labels: &Labels<'_>,
    legend_title: &str,
    series: &[LineSeries<'_>],
    x_ticks: u8,
) -> String {
    let mut out = String::new();
    open_svg(&mut out, labels);

    let visible: Vec<Vec<(u8, f64)>> = series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .copied()
                .filter(|(hour, _)| *hour < x_ticks)
                .collect()
        })
        .collect();

    if visible.iter().all(Vec::is_empty) {
        no_data(&mut out);
        out.push_str("</svg>");
        return out;
    }

    let y_max = nice_ceiling(
        visible
            .iter()
            .flat_map(|points| points.iter().map(|(_, v)| *v))
            .fold(0.0, f64::max),
    );
    y_grid(&mut out, y_max);

    let span = f64::from(x_ticks.saturating_sub(1).max(1));
    let x_of = |hour: u8| MARGIN_LEFT + plot_width() * f64::from(hour) / span;

    for hour in 0..x_ticks {
        let _ = write!(
            out,
            r#"<text class="tick" x="{x:.1}" y="{y:.1}" text-anchor="middle">{hour}</text>"#,
            x = x_of(hour),
            y = MARGIN_TOP + plot_height() + 20.0,
        );
    }

    for (s, points) in series.iter().zip(&visible) {
        let path: Vec<String> = points
            .iter()
            .map(|(hour, value)| format!("{:.1},{:.1}", x_of(*hour), y_of(*value, y_max)))
            .collect();
        let _ = write!(
            out,
            r#"<polyline class="line" fill="none" stroke="{color}" stroke-width="2" points="{points}"/>"#,
            color = s.color,
            points = path.join(" "),
        );
        for (hour, value) in points {
            let _ = write!(
                out,
                r#"<circle class="marker" cx="{cx:.1}" cy="{cy:.1}" r="4" fill="{color}"><title>{name} {hour}:00: {value:.0}</title></circle>"#,
                cx = x_of(*hour),
                cy = y_of(*value, y_max),
                color = s.color,
                name = escape(s.name),
            );
        }
    }

    let legend_x = WIDTH - MARGIN_RIGHT - 150.0;
    let _ = write!(
        out,
        r#"<g class="legend"><text x="{legend_x}" y="{y}">{title}</text>"#,
        y = MARGIN_TOP + 4.0,
        title = escape(legend_title),
    );
    for (i, s) in series.iter().enumerate() {
        let y = MARGIN_TOP + 24.0 + 20.0 * i as f64;
        let _ = write!(
            out,
            r#"<rect x="{legend_x}" y="{ry}" width="14" height="4" fill="{color}"/><text x="{tx}" y="{y}" dominant-baseline="middle">{name}</text>"#,
            ry = y - 2.0,
            tx = legend_x + 22.0,
            color = s.color,
            name = escape(s.name),
        );
    }
    out.push_str("</g></svg>");
    out
}
