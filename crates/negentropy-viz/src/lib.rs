//! # Negentropy Viz
//!
//! Renders the two entropy-decay series of a recorded run as a
//! self-contained HTML page with an inline SVG line chart: a solid
//! environment series, a dashed agent series, shared axes, and a legend.
//! No drawing dependencies — the chart is plain string generation.

use negentropy_runtime::metrics::EntropyHistory;
use std::fmt::Write;

const WIDTH: f64 = 840.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Generate a standalone HTML page charting both series.
///
/// Empty histories render an empty chart frame rather than failing.
pub fn generate_html(history: &EntropyHistory) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Entropy Decay Rate: Agent vs Environment</title>\n");
    html.push_str("<style>body { font-family: sans-serif; margin: 2em; }</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<h2>Entropy Decay Rate: Agent vs Environment</h2>\n");
    html.push_str(&render_svg(history));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_svg(history: &EntropyHistory) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let y_max = history
        .environment
        .iter()
        .chain(history.agent.iter())
        .cloned()
        .fold(0.0_f64, f64::max)
        .max(1e-9);
    let steps = history.len().max(2) as f64;

    let x = |step: usize| MARGIN_LEFT + (step as f64 / (steps - 1.0)) * plot_w;
    let y = |value: f64| MARGIN_TOP + (1.0 - value / y_max) * plot_h;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg viewBox=\"0 0 {WIDTH} {HEIGHT}\" width=\"{WIDTH}\" height=\"{HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );

    // Axes
    let _ = write!(
        svg,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#333\"/>\n",
        MARGIN_LEFT,
        MARGIN_TOP + plot_h,
        MARGIN_LEFT + plot_w,
        MARGIN_TOP + plot_h
    );
    let _ = write!(
        svg,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#333\"/>\n",
        MARGIN_LEFT,
        MARGIN_TOP,
        MARGIN_LEFT,
        MARGIN_TOP + plot_h
    );

    // Axis labels
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\">Time Steps</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 15.0
    );
    let _ = write!(
        svg,
        "<text x=\"18\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\" transform=\"rotate(-90 18 {})\">Entropy Decay Rate</text>\n",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    );

    // Y-axis tick labels (0 and max)
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"12\">0</text>\n",
        MARGIN_LEFT - 8.0,
        MARGIN_TOP + plot_h + 4.0
    );
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"12\">{:.3}</text>\n",
        MARGIN_LEFT - 8.0,
        MARGIN_TOP + 4.0,
        y_max
    );

    // Series
    svg.push_str(&polyline(&history.environment, x, y, "#1f77b4", false));
    svg.push_str(&polyline(&history.agent, x, y, "#ff7f0e", true));

    // Legend
    let lx = MARGIN_LEFT + 16.0;
    let _ = write!(
        svg,
        "<line x1=\"{lx}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#1f77b4\" stroke-width=\"2\"/>\n",
        MARGIN_TOP + 8.0,
        lx + 28.0,
        MARGIN_TOP + 8.0
    );
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" font-size=\"13\">Environment Entropy Decay</text>\n",
        lx + 36.0,
        MARGIN_TOP + 12.0
    );
    let _ = write!(
        svg,
        "<line x1=\"{lx}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#ff7f0e\" stroke-width=\"2\" stroke-dasharray=\"6 4\"/>\n",
        MARGIN_TOP + 28.0,
        lx + 28.0,
        MARGIN_TOP + 28.0
    );
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" font-size=\"13\">Agent Entropy Decay</text>\n",
        lx + 36.0,
        MARGIN_TOP + 32.0
    );

    svg.push_str("</svg>\n");
    svg
}

fn polyline(
    series: &[f64],
    x: impl Fn(usize) -> f64,
    y: impl Fn(f64) -> f64,
    color: &str,
    dashed: bool,
) -> String {
    if series.is_empty() {
        return String::new();
    }
    let points: Vec<String> = series
        .iter()
        .enumerate()
        .map(|(step, value)| format!("{:.2},{:.2}", x(step), y(*value)))
        .collect();
    let dash = if dashed {
        " stroke-dasharray=\"6 4\""
    } else {
        ""
    };
    format!(
        "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\"{} points=\"{}\"/>\n",
        color,
        dash,
        points.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_contains_both_labeled_series() {
        let history = EntropyHistory {
            environment: vec![0.1, 0.3, 0.2],
            agent: vec![0.05, 0.0, 0.1],
        };
        let html = generate_html(&history);

        assert!(html.contains("Environment Entropy Decay"));
        assert!(html.contains("Agent Entropy Decay"));
        assert!(html.contains("Time Steps"));
        assert!(html.contains("Entropy Decay Rate"));
        assert!(html.contains("stroke-dasharray"));
        assert_eq!(html.matches("<polyline").count(), 2);
    }

    #[test]
    fn empty_history_renders_a_frame() {
        let html = generate_html(&EntropyHistory::default());
        assert!(html.contains("<svg"));
        assert_eq!(html.matches("<polyline").count(), 0);
    }
}
