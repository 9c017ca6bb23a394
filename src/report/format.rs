//! Formatted terminal output for every view.
//!
//! We keep formatting code in one place so:
//! - the view builders stay plain data and easy to test
//! - output changes are localized (important for future snapshot tests)

use crate::story::StoryView;
use crate::view::{
    heatmap_cell_label, CurvesView, DomainBarsView, EconomicsView, ForecastView, HeatmapView,
    RankingView, TableView,
};

/// Human duration in minutes: sub-minute collapses, hours past 60 minutes,
/// days past 24 hours.
pub fn fmt_minutes(minutes: f64) -> String {
    if minutes < 1.0 {
        return "<1 min".to_string();
    }
    if minutes < 60.0 {
        return format!("{minutes:.0} min");
    }
    let hours = minutes / 60.0;
    if hours < 24.0 {
        return format!("{hours:.1} h");
    }
    format!("{:.1} d", hours / 24.0)
}

fn fmt_months(months: f64) -> String {
    format!("{months:.1} mo")
}

/// Section header for the domain medians.
pub fn format_domain_bars(view: &DomainBarsView) -> String {
    let mut out = String::new();
    out.push_str("Domain horizons (p50, widest first):\n");
    out.push_str(&format!(
        "{:<22} {:>9} {:>9} {:>9} {:>7} {:>7}\n",
        "domain", "p50", "ci low", "ci high", "models", "points"
    ));
    out.push_str(&format!(
        "{:-<22} {:-<9} {:-<9} {:-<9} {:-<7} {:-<7}\n",
        "", "", "", "", "", ""
    ));
    for bar in &view.bars {
        out.push_str(
            format!(
                "{:<22} {:>9} {:>9} {:>9} {:>7} {:>7}\n",
                truncate(&bar.label, 22),
                fmt_minutes(bar.p50_minutes),
                fmt_minutes(bar.ci_low_minutes),
                fmt_minutes(bar.ci_high_minutes),
                bar.models,
                bar.points,
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

/// The model/domain grid with per-cell minute labels.
pub fn format_heatmap(view: &HeatmapView) -> String {
    let mut out = String::new();
    out.push_str("Horizon grid (minutes, strongest models):\n");
    out.push_str(&format!("{:<26}", ""));
    for label in &view.domain_labels {
        out.push_str(&format!(" {:>12}", truncate(label, 12)));
    }
    out.push('\n');
    for (row, model) in view.models.iter().enumerate() {
        out.push_str(&format!("{:<26}", truncate(model, 26)));
        for col in 0..view.domains.len() {
            out.push_str(&format!(" {:>12}", heatmap_cell_label(view.values[row][col])));
        }
        out.push('\n');
    }
    out
}

pub fn format_ranking(view: &RankingView) -> String {
    let mut out = String::new();
    out.push_str("Model ranking (best domain each):\n");
    out.push_str(&format!(
        "{:>3} {:<26} {:<20} {:>9} {:<10}\n",
        "#", "model", "best domain", "horizon", "released"
    ));
    for (i, row) in view.rows.iter().enumerate() {
        out.push_str(
            format!(
                "{:>3} {:<26} {:<20} {:>9} {:<10}\n",
                i + 1,
                truncate(&row.model, 26),
                truncate(&row.label, 20),
                fmt_minutes(row.horizon_minutes),
                row.release_date.as_deref().unwrap_or(""),
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

pub fn format_curves(view: &CurvesView) -> String {
    let mut out = String::new();
    match view.model.as_deref() {
        Some(model) => out.push_str(&format!("Success curves: {model}\n")),
        None => out.push_str("Success curves: no model selected\n"),
    }
    for series in &view.series {
        let mark = match series.hour_mark {
            Some((minutes, success)) => {
                format!("{:.0}% near {}", success * 100.0, fmt_minutes(minutes))
            }
            None => "no usable points".to_string(),
        };
        out.push_str(
            format!(
                "{:<22} {:>4} pts  at 1h: {}\n",
                truncate(&series.label, 22),
                series.points.len(),
                mark,
            )
            .trim_end(),
        );
        out.push('\n');
    }
    if !view.domain_averages.is_empty() {
        out.push_str("Domain averages (all models):\n");
        for series in &view.domain_averages {
            let mark = match series.hour_mark {
                Some((minutes, success)) => {
                    format!("{:.0}% near {}", success * 100.0, fmt_minutes(minutes))
                }
                None => "no usable points".to_string(),
            };
            out.push_str(
                format!(
                    "{:<22} {:>4} pts  at 1h: {}\n",
                    truncate(&series.label, 22),
                    series.points.len(),
                    mark,
                )
                .trim_end(),
            );
            out.push('\n');
        }
    }
    out
}

pub fn format_economics(view: &EconomicsView) -> String {
    let mut out = String::new();
    match view.split_label.as_deref() {
        Some(label) => out.push_str(&format!("Agent economics ({label} split):\n")),
        None => out.push_str("Agent economics:\n"),
    }
    if let Some(note) = view.note.as_deref() {
        out.push_str(&format!("{note}\n"));
    }
    out.push_str(&format!(
        "{:<26} {:>14} {:>9} {:>9} {:>8} {:>9}\n",
        "model", "tokens/succ-h", "usd/h", "runs", "success", "frontier"
    ));
    for point in &view.points {
        out.push_str(
            format!(
                "{:<26} {:>14.0} {:>9.2} {:>4}/{:<4} {:>7.0}% {:>9}\n",
                truncate(&point.model, 26),
                point.tokens_per_success_hour,
                point.usd_per_hour,
                point.runs_success,
                point.runs_total,
                point.success_rate * 100.0,
                if point.on_frontier { "*" } else { "" },
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out.push_str("\nMost token-efficient:\n");
    for &i in &view.efficiency {
        let p = &view.points[i];
        out.push_str(&format!(
            "- {} ({:.0} tokens/succ-h)\n",
            p.model, p.tokens_per_success_hour
        ));
    }
    out.push_str("Cheapest autonomous hour:\n");
    for &i in &view.cheapest {
        let p = &view.points[i];
        out.push_str(&format!("- {} (${:.2}/h)\n", p.model, p.usd_per_hour));
    }
    for source in &view.pricing_sources {
        out.push_str(&format!("Pricing: {source}\n"));
    }
    for note in &view.notes {
        out.push_str(&format!("Note: {note}\n"));
    }
    out
}

pub fn format_forecast(view: &ForecastView) -> String {
    let mut out = String::new();
    match view.from_date {
        Some(date) => out.push_str(&format!(
            "Forecast: doubling every {:.1} months from {date}\n",
            view.doubling_months
        )),
        None => out.push_str(&format!(
            "Forecast: doubling every {:.1} months (document carries no date)\n",
            view.doubling_months
        )),
    }
    out.push_str(&format!("{:<22} {:>9}", "domain", "now"));
    for target in &view.targets {
        out.push_str(&format!(" {:>22}", format!("to {}", target.label)));
    }
    out.push('\n');
    for row in &view.rows {
        out.push_str(&format!(
            "{:<22} {:>9}",
            truncate(&row.label, 22),
            fmt_minutes(row.horizon_minutes)
        ));
        for cell in &row.cells {
            let text = match cell.date {
                Some(date) => format!("{} ({date})", fmt_months(cell.months)),
                None => fmt_months(cell.months),
            };
            out.push_str(&format!(" {:>22}", text));
        }
        out.push('\n');
    }
    out
}

pub fn format_table(view: &TableView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Task records ({} of {} rows):\n",
        view.rows.len(),
        view.total_rows
    ));
    out.push_str(&format!(
        "{:<16} {:<20} {:<26} {:>10} {:>7} {:<10}\n",
        "benchmark", "domain", "model", "human min", "score", "released"
    ));
    for row in &view.rows {
        out.push_str(
            format!(
                "{:<16} {:<20} {:<26} {:>10.2} {:>7.3} {:<10}\n",
                truncate(&row.benchmark, 16),
                truncate(&row.domain_label, 20),
                truncate(&row.model, 26),
                row.human_minutes,
                row.score,
                row.release_date.as_deref().unwrap_or(""),
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

pub fn format_story(view: &StoryView) -> String {
    let mut out = String::new();
    out.push_str("Walkthrough:\n");
    for (i, step) in view.steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step.title));
        out.push_str(&format!("   {}\n", step.body));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_minutes_switches_units() {
        assert_eq!(fmt_minutes(0.4), "<1 min");
        assert_eq!(fmt_minutes(38.0), "38 min");
        assert_eq!(fmt_minutes(90.0), "1.5 h");
        assert_eq!(fmt_minutes(2880.0), "2.0 d");
    }

    #[test]
    fn fmt_minutes_at_the_hour_boundary() {
        assert_eq!(fmt_minutes(59.4), "59 min");
        assert_eq!(fmt_minutes(60.0), "1.0 h");
    }

    #[test]
    fn truncate_marks_clipped_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-rather-long-model-name", 10), "a-rather-.");
    }
}
