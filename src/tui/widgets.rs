//! Native Ratatui renderers for the cell-based views.
//!
//! The plotted charts go through Plotters (`charts`); everything that reads
//! better as styled text cells — chips, bars, the heatmap grid, the lollipop
//! ranking, the forecast and records tables — is drawn here directly.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::domain::{self, Selection};
use crate::report::format::fmt_minutes;
use crate::view::{
    heatmap_cell_label, heatmap_color, heatmap_text_color, DomainBarsView, EconomicsView,
    ForecastView, HeatmapView, RankingView, TableView,
};

pub fn rgb(hex: &str) -> Color {
    let (r, g, b) = domain::parse_hex_color(hex);
    Color::Rgb(r, g, b)
}

/// Filled cell count for a value on a linear bar scale.
fn bar_cells(value: f64, max: f64, width: usize) -> usize {
    if !(value.is_finite() && max.is_finite()) || max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round().clamp(1.0, width as f64) as usize
}

/// The domain filter chips, with the cursor marked.
pub fn domain_chips_line(domains: &[String], selection: &Selection, cursor: usize) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::styled(
        "domains: ",
        Style::default().fg(Color::Gray),
    )];
    for (i, key) in domains.iter().enumerate() {
        let active = selection.domain_active(key);
        let mut style = if active {
            Style::default().fg(Color::Black).bg(rgb(domain::domain_color(key)))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if i == cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(
            format!(" {} ", domain::domain_label(key)),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Horizontal median bars with the confidence interval spelled out.
pub fn draw_domain_bars(frame: &mut ratatui::Frame<'_>, area: Rect, view: &DomainBarsView) {
    if view.bars.is_empty() {
        frame.render_widget(
            Paragraph::new("No domain medians in this document.")
                .style(Style::default().fg(Color::Yellow)),
            area,
        );
        return;
    }

    let label_width = 22usize;
    let bar_width = (area.width as usize)
        .saturating_sub(label_width + 30)
        .max(10);
    let max = view
        .bars
        .iter()
        .map(|b| b.ci_high_minutes.max(b.p50_minutes))
        .fold(0.0f64, f64::max);

    let mut lines: Vec<Line> = Vec::new();
    for bar in &view.bars {
        let filled = bar_cells(bar.p50_minutes, max, bar_width);
        let whisker = bar_cells(bar.ci_high_minutes, max, bar_width).saturating_sub(filled);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<label_width$.label_width$}", bar.label),
                Style::default().fg(rgb(bar.color)),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(rgb(bar.color))),
            Span::styled("─".repeat(whisker), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    " {} [{} – {}]",
                    fmt_minutes(bar.p50_minutes),
                    fmt_minutes(bar.ci_low_minutes),
                    fmt_minutes(bar.ci_high_minutes),
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "{:label_width$}{} models, {} records",
                "", bar.models, bar.points
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// The models-by-domains grid with value-ramped cell backgrounds.
pub fn draw_heatmap(frame: &mut ratatui::Frame<'_>, area: Rect, view: &HeatmapView) {
    if view.models.is_empty() || view.domains.is_empty() {
        frame.render_widget(
            Paragraph::new("No model/domain horizons in this document.")
                .style(Style::default().fg(Color::Yellow)),
            area,
        );
        return;
    }

    let name_width = 24usize;
    let cell_width = ((area.width as usize).saturating_sub(name_width) / view.domains.len())
        .clamp(6, 16);

    let mut lines: Vec<Line> = Vec::new();
    let mut header: Vec<Span> = vec![Span::raw(format!("{:name_width$}", ""))];
    for label in &view.domain_labels {
        header.push(Span::styled(
            format!("{:^cell_width$.cell_width$}", label),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::from(header));

    for (row, model) in view.models.iter().enumerate() {
        let mut spans: Vec<Span> =
            vec![Span::raw(format!("{:<name_width$.name_width$}", model))];
        for col in 0..view.domains.len() {
            let value = view.values[row][col];
            let (r, g, b) = heatmap_color(value, view.vmax);
            spans.push(Span::styled(
                format!("{:^cell_width$}", heatmap_cell_label(value)),
                Style::default()
                    .bg(Color::Rgb(r, g, b))
                    .fg(rgb(heatmap_text_color(value, view.vmax))),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "cell = horizon in minutes; <1 marks sub-minute horizons",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Lollipop ranking: every model's best-domain horizon, longest first.
pub fn draw_ranking(frame: &mut ratatui::Frame<'_>, area: Rect, view: &RankingView) {
    if view.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("No per-model horizons in this document.")
                .style(Style::default().fg(Color::Yellow)),
            area,
        );
        return;
    }

    let name_width = 26usize;
    let stick_width = (area.width as usize)
        .saturating_sub(name_width + 36)
        .max(10);
    let max = view
        .rows
        .iter()
        .map(|r| r.horizon_minutes)
        .fold(0.0f64, f64::max);

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in view.rows.iter().enumerate().take(area.height as usize) {
        let n = bar_cells(row.horizon_minutes, max, stick_width);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>3} ", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("{:<name_width$.name_width$}", row.model)),
            Span::styled(
                format!("{}●", "─".repeat(n.saturating_sub(1))),
                Style::default().fg(rgb(row.color)),
            ),
            Span::styled(
                format!(" {} ({})", fmt_minutes(row.horizon_minutes), row.label),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// The forecast grid plus the doubling-time slider.
pub fn draw_forecast(frame: &mut ratatui::Frame<'_>, area: Rect, view: &ForecastView) {
    let mut lines: Vec<Line> = Vec::new();

    let slider_width = 24usize;
    let span = crate::domain::DOUBLING_MONTHS_MAX - crate::domain::DOUBLING_MONTHS_MIN;
    let u = ((view.doubling_months - crate::domain::DOUBLING_MONTHS_MIN) / span).clamp(0.0, 1.0);
    let filled = (u * slider_width as f64).round() as usize;
    lines.push(Line::from(vec![
        Span::styled("doubling every ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.1} months ", view.doubling_months),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled("■".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled(
            "·".repeat(slider_width - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("]  ←/→ adjust", Style::default().fg(Color::DarkGray)),
    ]));
    match view.from_date {
        Some(date) => lines.push(Line::from(Span::styled(
            format!("projected from {date}"),
            Style::default().fg(Color::DarkGray),
        ))),
        None => lines.push(Line::from(Span::styled(
            "document carries no date; months only",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines.push(Line::raw(""));

    if view.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "No forecast rows in this document.",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
        return;
    }

    let mut header: Vec<Span> = vec![Span::styled(
        format!("{:<22} {:>9}", "domain", "now"),
        Style::default().fg(Color::Gray),
    )];
    for target in &view.targets {
        header.push(Span::styled(
            format!(" {:>22}", format!("to {}", target.label)),
            Style::default().fg(rgb(target.color)),
        ));
    }
    lines.push(Line::from(header));

    for row in &view.rows {
        let mut spans: Vec<Span> = vec![
            Span::styled(
                format!("{:<22.22}", row.label),
                Style::default().fg(rgb(row.color)),
            ),
            Span::raw(format!(" {:>8}", fmt_minutes(row.horizon_minutes))),
        ];
        for (cell, target) in row.cells.iter().zip(&view.targets) {
            let text = if cell.months <= 0.0 {
                "reached".to_string()
            } else {
                match cell.date {
                    Some(date) => format!("{:.1} mo ({date})", cell.months),
                    None => format!("{:.1} mo", cell.months),
                }
            };
            spans.push(Span::styled(
                format!(" {:>22}", text),
                Style::default().fg(rgb(target.color)),
            ));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// The top lists and disclaimers beside the economics chart, side by side.
pub fn draw_economics_lists(frame: &mut ratatui::Frame<'_>, area: Rect, view: &EconomicsView) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut left: Vec<Line> = Vec::new();
    let mut right: Vec<Line> = Vec::new();
    if let Some(note) = view.note.as_deref() {
        left.push(Line::from(Span::styled(
            note.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        right.push(Line::raw(""));
    }

    left.push(Line::from(Span::styled(
        "Most token-efficient:",
        Style::default().fg(Color::Gray),
    )));
    for &i in &view.efficiency {
        let p = &view.points[i];
        left.push(Line::from(vec![
            Span::raw(format!("  {:<26.26}", p.model)),
            Span::styled(
                format!("{:.0}k tokens/succ-h", p.tokens_per_success_hour / 1000.0),
                Style::default().fg(Color::Magenta),
            ),
            if p.on_frontier {
                Span::styled("  frontier", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("")
            },
        ]));
    }

    right.push(Line::from(Span::styled(
        "Cheapest autonomous hour:",
        Style::default().fg(Color::Gray),
    )));
    for &i in &view.cheapest {
        let p = &view.points[i];
        right.push(Line::from(vec![
            Span::raw(format!("  {:<26.26}", p.model)),
            Span::styled(
                format!("${:.2}/h", p.usd_per_hour),
                Style::default().fg(Color::Green),
            ),
            if p.on_frontier {
                Span::styled("  frontier", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("")
            },
        ]));
    }

    frame.render_widget(Paragraph::new(Text::from(left)), halves[0]);
    frame.render_widget(Paragraph::new(Text::from(right)), halves[1]);
}

/// One page of the records table. Returns the number of body rows drawn so
/// the caller can page by what actually fit.
pub fn draw_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    view: &TableView,
    offset: usize,
) -> usize {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            "{:<16} {:<20} {:<26} {:>10} {:>7} {:<10}",
            "benchmark", "domain", "model", "human min", "score", "released"
        ),
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    )));

    let body_rows = (area.height as usize).saturating_sub(2).max(1);
    let offset = offset.min(view.rows.len().saturating_sub(1));
    for row in view.rows.iter().skip(offset).take(body_rows) {
        lines.push(Line::from(vec![
            Span::raw(format!("{:<16.16} ", row.benchmark)),
            Span::styled(
                format!("{:<20.20} ", row.domain_label),
                Style::default().fg(rgb(domain::domain_color(&row.domain))),
            ),
            Span::raw(format!("{:<26.26} ", row.model)),
            Span::raw(format!("{:>10.2} {:>7.3} ", row.human_minutes, row.score)),
            Span::styled(
                row.release_date.clone().unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let shown = lines.len() - 1;
    lines.push(Line::from(Span::styled(
        format!(
            "rows {}–{} of {} shown ({} in document)  n/p scroll",
            offset + 1,
            offset + shown,
            view.rows.len(),
            view.total_rows,
        ),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
    body_rows
}
