//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - per-domain curve points: one marker glyph per series
//! - per-domain all-model averages: `-` lines
//! - domain medians: `#` bars

use crate::report::format::fmt_minutes;
use crate::view::{CurvesView, DomainBarsView};

/// Marker glyphs assigned to series in order.
const SERIES_MARKS: [char; 6] = ['o', 'x', '+', '*', '#', '@'];

/// Render the success curves on a log2 duration axis.
pub fn render_curves_plot(view: &CurvesView, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    for &(t, _) in view
        .series
        .iter()
        .chain(view.domain_averages.iter())
        .flat_map(|s| s.points.iter())
    {
        t_min = t_min.min(t);
        t_max = t_max.max(t);
    }
    if !(t_min.is_finite() && t_max.is_finite() && t_max > t_min && t_min > 0.0) {
        return "Plot: no usable points\n".to_string();
    }

    let (y_min, y_max) = pad_range(0.0, 1.0, 0.05);
    let mut grid = vec![vec![' '; width]; height];

    // Averages first so series markers can overlay them.
    for avg in &view.domain_averages {
        if avg.points.len() < 2 {
            continue;
        }
        let mut prev = None;
        for &(t, y) in &avg.points {
            let x = map_log_x(t, t_min, t_max, width);
            let yy = map_y(y, y_min, y_max, height);
            if let Some((x0, y0)) = prev {
                draw_line(&mut grid, x0, y0, x, yy, '-');
            } else {
                grid[yy][x] = '-';
            }
            prev = Some((x, yy));
        }
    }

    for (i, series) in view.series.iter().enumerate() {
        let mark = SERIES_MARKS[i % SERIES_MARKS.len()];
        for &(t, y) in &series.points {
            let x = map_log_x(t, t_min, t_max, width);
            let yy = map_y(y, y_min, y_max, height);
            grid[yy][x] = mark;
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: minutes=[{t_min:.0}, {t_max:.0}] (log2) | success=[0%, 100%]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let mut legend = Vec::new();
    if view.domain_averages.iter().any(|s| s.points.len() >= 2) {
        legend.push("domain averages=-".to_string());
    }
    for (i, series) in view.series.iter().enumerate() {
        legend.push(format!("{}={}", series.label, SERIES_MARKS[i % SERIES_MARKS.len()]));
    }
    if !legend.is_empty() {
        out.push_str(&format!("legend: {}\n", legend.join("  ")));
    }
    out
}

/// Render the domain medians as horizontal bars.
pub fn render_bars(view: &DomainBarsView, width: usize) -> String {
    let width = width.max(10);
    let max = view
        .bars
        .iter()
        .map(|b| b.p50_minutes)
        .fold(0.0f64, f64::max);
    if !(max.is_finite() && max > 0.0) {
        return String::new();
    }

    let mut out = String::new();
    for bar in &view.bars {
        let n = ((bar.p50_minutes / max) * width as f64).round().max(1.0) as usize;
        out.push_str(&format!(
            "{:<20.20} {} {}\n",
            bar.label,
            "#".repeat(n),
            fmt_minutes(bar.p50_minutes),
        ));
    }
    out
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_log_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t.log2() - t_min.log2()) / (t_max.log2() - t_min.log2())).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{CurveSeries, DomainBar};

    #[test]
    fn curves_plot_golden_snapshot_small() {
        let points = vec![
            (1.0, 1.0),
            (4.0, 0.75),
            (16.0, 0.5),
            (64.0, 0.25),
            (256.0, 0.0),
        ];
        let view = CurvesView {
            model: Some("frontier-1".to_string()),
            series: vec![CurveSeries {
                domain: "reasoning".to_string(),
                label: "Reasoning".to_string(),
                color: "#9a7fb8",
                points: points.clone(),
                hour_mark: None,
            }],
            domain_averages: vec![CurveSeries {
                domain: "reasoning".to_string(),
                label: "Reasoning".to_string(),
                color: "#9a7fb8",
                points,
                hour_mark: None,
            }],
        };

        let txt = render_curves_plot(&view, 9, 5);
        let expected = concat!(
            "Plot: minutes=[1, 256] (log2) | success=[0%, 100%]\n",
            "o        \n",
            " -o      \n",
            "   -o    \n",
            "     -o  \n",
            "       -o\n",
            "legend: domain averages=-  Reasoning=o\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn curves_plot_without_points_degrades() {
        let view = CurvesView {
            model: None,
            series: Vec::new(),
            domain_averages: Vec::new(),
        };
        assert_eq!(render_curves_plot(&view, 40, 10), "Plot: no usable points\n");
    }

    #[test]
    fn bars_golden_snapshot_small() {
        let view = DomainBarsView {
            bars: vec![
                DomainBar {
                    domain: "reasoning".to_string(),
                    label: "Reasoning".to_string(),
                    color: "#9a7fb8",
                    p50_minutes: 60.0,
                    ci_low_minutes: 60.0,
                    ci_high_minutes: 60.0,
                    models: 3,
                    points: 30,
                },
                DomainBar {
                    domain: "cybersecurity".to_string(),
                    label: "Cybersecurity".to_string(),
                    color: "#c85663",
                    p50_minutes: 30.0,
                    ci_low_minutes: 30.0,
                    ci_high_minutes: 30.0,
                    models: 3,
                    points: 30,
                },
            ],
        };
        let txt = render_bars(&view, 10);
        let expected = concat!(
            "Reasoning            ########## 1.0 h\n",
            "Cybersecurity        ##### 30 min\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn bars_with_no_medians_render_nothing() {
        let view = DomainBarsView { bars: Vec::new() };
        assert_eq!(render_bars(&view, 10), "");
    }
}
