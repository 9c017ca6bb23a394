//! Ratatui-based terminal dashboard.
//!
//! One tab per chart, plus the records table and the guided walkthrough.
//! Every tab renders from the same pre-computed [`Views`] bundle; key events
//! mutate the [`Selection`] and recompute, nothing else carries state.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Terminal,
};

use crate::cli::DataArgs;
use crate::domain::{
    self, HorizonsDoc, Selection, DOUBLING_MONTHS_MAX, DOUBLING_MONTHS_MIN, DOUBLING_MONTHS_STEP,
    RESIZE_DEBOUNCE,
};
use crate::error::AppError;
use crate::report::format::fmt_minutes;
use crate::story::{build_story, StoryChart, StoryView};
use crate::view::Views;

mod charts;
mod widgets;

use charts::{chart_layout, draw_axis_ticks, HzChart, Series};

/// Start the TUI over an already-resolvable data source.
pub fn run(args: DataArgs) -> Result<(), AppError> {
    let (doc, selection) = crate::app::load_run(&args)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(doc, selection);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Grid,
    Ranking,
    Curves,
    Economics,
    Forecast,
    Records,
    Story,
}

impl Tab {
    const ALL: [Tab; 8] = [
        Tab::Overview,
        Tab::Grid,
        Tab::Ranking,
        Tab::Curves,
        Tab::Economics,
        Tab::Forecast,
        Tab::Records,
        Tab::Story,
    ];

    fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Grid => "Grid",
            Tab::Ranking => "Ranking",
            Tab::Curves => "Curves",
            Tab::Economics => "Economics",
            Tab::Forecast => "Forecast",
            Tab::Records => "Records",
            Tab::Story => "Story",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    fn shifted(self, delta: isize) -> Tab {
        let n = Tab::ALL.len() as isize;
        let i = (self.index() as isize + delta).rem_euclid(n);
        Tab::ALL[i as usize]
    }
}

struct App {
    doc: HorizonsDoc,
    selection: Selection,
    views: Views,
    story: StoryView,
    tab: Tab,
    models: Vec<String>,
    domains: Vec<String>,
    splits: Vec<String>,
    domain_cursor: usize,
    table_offset: usize,
    /// Body rows the records table fit on the last draw; n/p pages by this.
    table_page_rows: usize,
    status: String,
}

impl App {
    fn new(doc: HorizonsDoc, selection: Selection) -> Self {
        let views = Views::build(&doc, &selection);
        let story = build_story(&views);
        let models = doc.model_names();
        let domains = doc.domain_keys();
        let splits = doc.agent_economics.split_presets.keys().cloned().collect();
        Self {
            doc,
            selection,
            views,
            story,
            tab: Tab::Overview,
            models,
            domains,
            splits,
            domain_cursor: 0,
            table_offset: 0,
            table_page_rows: 20,
            status: "Loaded document.".to_string(),
        }
    }

    fn recompute(&mut self) {
        self.views = Views::build(&self.doc, &self.selection);
        self.story = build_story(&self.views);
        self.selection.story_step = self.story.clamp_step(self.selection.story_step);
        self.table_offset = self
            .table_offset
            .min(self.views.table.rows.len().saturating_sub(1));
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        // Resize bursts coalesce: only the deadline passing triggers the
        // recompute, never the individual events.
        let mut resize_deadline: Option<Instant> = None;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            let timeout = match resize_deadline {
                Some(deadline) => deadline
                    .saturating_duration_since(Instant::now())
                    .min(Duration::from_millis(100)),
                None => Duration::from_millis(100),
            };
            let got_event = event::poll(timeout)
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?;

            if let Some(deadline) = resize_deadline {
                if Instant::now() >= deadline {
                    resize_deadline = None;
                    self.recompute();
                    needs_redraw = true;
                }
            }
            if !got_event {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    resize_deadline = Some(Instant::now() + RESIZE_DEBOUNCE);
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.tab = self.tab.shifted(1),
            KeyCode::BackTab => self.tab = self.tab.shifted(-1),
            KeyCode::Char(c @ '1'..='8') => {
                self.tab = Tab::ALL[(c as usize) - ('1' as usize)];
            }
            KeyCode::Char('m') => self.cycle_model(1),
            KeyCode::Char('M') => self.cycle_model(-1),
            KeyCode::Char('s') => self.cycle_split(),
            KeyCode::Left => self.adjust_doubling(-DOUBLING_MONTHS_STEP),
            KeyCode::Right => self.adjust_doubling(DOUBLING_MONTHS_STEP),
            KeyCode::Up => {
                self.domain_cursor = self.domain_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.domain_cursor + 1 < self.domains.len() {
                    self.domain_cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_domain(),
            KeyCode::Char('a') => {
                self.selection.domains = self.domains.iter().cloned().collect();
                self.recompute();
                self.status = "All domains active.".to_string();
            }
            KeyCode::Char('n') => self.page(1),
            KeyCode::Char('p') => self.page(-1),
            _ => {}
        }
        false
    }

    fn cycle_model(&mut self, delta: isize) {
        let Some(next) = cycle(&self.models, self.selection.model.as_deref(), delta) else {
            self.status = "Document names no models.".to_string();
            return;
        };
        self.status = format!("model: {}", domain::display_model(&next));
        self.selection.model = Some(next);
        self.recompute();
    }

    fn cycle_split(&mut self) {
        let Some(next) = cycle(&self.splits, self.selection.split.as_deref(), 1) else {
            self.status = "Document carries no split presets.".to_string();
            return;
        };
        self.status = format!("split: {next}");
        self.selection.split = Some(next);
        self.recompute();
    }

    fn adjust_doubling(&mut self, delta: f64) {
        let next = (self.selection.doubling_months + delta)
            .clamp(DOUBLING_MONTHS_MIN, DOUBLING_MONTHS_MAX);
        self.selection.doubling_months = next;
        self.recompute();
        self.status = format!("doubling time: {next:.1} months");
    }

    fn toggle_domain(&mut self) {
        let Some(key) = self.domains.get(self.domain_cursor).cloned() else {
            return;
        };
        if !self.selection.domains.remove(&key) {
            self.selection.domains.insert(key.clone());
        }
        let state = if self.selection.domain_active(&key) { "on" } else { "off" };
        self.status = format!("{}: {state}", domain::domain_label(&key));
        self.recompute();
    }

    fn page(&mut self, delta: isize) {
        match self.tab {
            Tab::Records => {
                let step = self.table_page_rows.max(1);
                let last = self.views.table.rows.len().saturating_sub(1);
                self.table_offset = if delta >= 0 {
                    (self.table_offset + step).min(last)
                } else {
                    self.table_offset.saturating_sub(step)
                };
            }
            Tab::Story => {
                let step = self.selection.story_step as isize + delta;
                self.selection.story_step = self.story.clamp_step(step.max(0) as usize);
            }
            _ => {}
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_tab_bar(frame, chunks[1]);
        self.draw_body(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        let stamp = self.doc.generated_at.as_deref().unwrap_or("-");
        lines.push(Line::from(vec![
            Span::styled("hz", Style::default().fg(Color::Cyan)),
            Span::raw(" — AI task time horizons"),
            Span::styled(
                format!("  generated {stamp}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let model = self
            .selection
            .model
            .as_deref()
            .map(domain::display_model)
            .unwrap_or("-");
        lines.push(Line::from(Span::styled(
            format!(
                "model: {model} | split: {} | doubling: {:.1} mo | models: {} | records: {}",
                self.selection.split.as_deref().unwrap_or("-"),
                self.selection.doubling_months,
                self.models.len(),
                self.doc.table_rows.len(),
            ),
            Style::default().fg(Color::Gray),
        )));

        lines.push(widgets::domain_chips_line(
            &self.domains,
            &self.selection,
            self.domain_cursor,
        ));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_tab_bar(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, t)| Line::from(format!("{} {}", i + 1, t.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_body(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.tab.title())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        match self.tab {
            Tab::Overview => widgets::draw_domain_bars(frame, inner, &self.views.domain_bars),
            Tab::Grid => widgets::draw_heatmap(frame, inner, &self.views.heatmap),
            Tab::Ranking => widgets::draw_ranking(frame, inner, &self.views.ranking),
            Tab::Curves => self.draw_curves(frame, inner),
            Tab::Economics => self.draw_economics(frame, inner),
            Tab::Forecast => widgets::draw_forecast(frame, inner, &self.views.forecast),
            Tab::Records => {
                self.table_page_rows =
                    widgets::draw_table(frame, inner, &self.views.table, self.table_offset);
            }
            Tab::Story => self.draw_story(frame, inner),
        }
    }

    fn draw_curves(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let view = &self.views.curves;
        if view.series.iter().all(|s| s.points.is_empty())
            && view.domain_averages.iter().all(|s| s.points.is_empty())
        {
            frame.render_widget(
                Paragraph::new("No curve points for the selected model.")
                    .style(Style::default().fg(Color::Yellow)),
                area,
            );
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        // Durations plot on a log axis; the bounds and every point carry
        // log10(minutes).
        let mut line_data: Vec<(Vec<(f64, f64)>, (u8, u8, u8))> = Vec::new();
        // Domain averages first, dimmed, so the selected model draws on top.
        for avg in &view.domain_averages {
            let (r, g, b) = domain::parse_hex_color(avg.color);
            line_data.push((log_x(&avg.points), (r / 2, g / 2, b / 2)));
        }
        for series in &view.series {
            line_data.push((
                log_x(&series.points),
                domain::parse_hex_color(series.color),
            ));
        }

        let marks: Vec<(f64, f64)> = view
            .series
            .iter()
            .chain(view.domain_averages.iter())
            .filter_map(|s| s.hour_mark)
            .map(|(m, s)| (m.log10(), s))
            .collect();

        let (mut x0, mut x1) = (f64::INFINITY, f64::NEG_INFINITY);
        for (points, _) in &line_data {
            for &(x, _) in points {
                x0 = x0.min(x);
                x1 = x1.max(x);
            }
        }
        if !(x0.is_finite() && x1.is_finite() && x1 > x0) {
            x0 = 0.0;
            x1 = 3.0;
        }

        // 50% reference: the horizon threshold every curve is measured against.
        let threshold = [(x0, 0.5), (x1, 0.5)];
        let mut lines: Vec<Series> = vec![Series {
            points: &threshold,
            color: (0x40, 0x40, 0x40),
        }];
        lines.extend(line_data.iter().map(|(points, color)| Series {
            points,
            color: *color,
        }));
        let scatter = vec![Series {
            points: &marks,
            color: (0xff, 0xd7, 0x00),
        }];

        let x_bounds = [x0, x1];
        let y_bounds = [-0.05, 1.05];
        let (chart_rect, insets) = chart_layout(chunks[0]);
        frame.render_widget(
            HzChart {
                lines,
                scatter,
                x_bounds,
                y_bounds,
                x_label: "task length",
                y_label: "success",
                fmt_x: fmt_log_minutes,
                fmt_y: fmt_percent,
            },
            chart_rect,
        );
        if let Some(insets) = insets {
            draw_axis_ticks(
                frame,
                chunks[0],
                chart_rect,
                insets,
                x_bounds,
                y_bounds,
                fmt_log_minutes,
                fmt_percent,
            );
        }

        let mut legend: Vec<Span> = Vec::new();
        for series in &view.series {
            legend.push(Span::styled(
                format!("── {}  ", series.label),
                Style::default().fg(widgets::rgb(series.color)),
            ));
        }
        legend.push(Span::styled(
            "── domain average (dim)  ",
            Style::default().fg(Color::Gray),
        ));
        legend.push(Span::styled(
            "● nearest 1h point",
            Style::default().fg(Color::Yellow),
        ));

        let at_hour: Vec<String> = view
            .domain_averages
            .iter()
            .filter_map(|s| {
                s.hour_mark
                    .map(|(_, success)| format!("{} {:.0}%", s.label, success * 100.0))
            })
            .collect();
        let mut lines = vec![Line::from(legend)];
        if !at_hour.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("average at 1h: {}", at_hour.join("  ")),
                Style::default().fg(Color::DarkGray),
            )));
        }
        frame.render_widget(Paragraph::new(Text::from(lines)), chunks[1]);
    }

    fn draw_economics(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let view = &self.views.economics;
        if view.points.is_empty() {
            frame.render_widget(
                Paragraph::new("No economics rows under the selected split.")
                    .style(Style::default().fg(Color::Yellow)),
                area,
            );
            return;
        }

        let list_height = (view.efficiency.len().max(view.cheapest.len()) + 2) as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(list_height)])
            .split(area);

        let all: Vec<(f64, f64)> = view
            .points
            .iter()
            .map(|p| (p.tokens_per_success_hour.log10(), p.usd_per_hour))
            .collect();
        let frontier: Vec<(f64, f64)> = view
            .frontier
            .iter()
            .map(|&i| {
                (
                    view.points[i].tokens_per_success_hour.log10(),
                    view.points[i].usd_per_hour,
                )
            })
            .collect();

        let (mut x0, mut x1) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y0, mut y1) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in &all {
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        if !(x1 > x0) {
            x0 -= 0.5;
            x1 += 0.5;
        }
        let pad = ((y1 - y0).abs() * 0.1).max(0.5);
        let x_bounds = [x0 - 0.1, x1 + 0.1];
        let y_bounds = [(y0 - pad).max(0.0), y1 + pad];

        let (chart_rect, insets) = chart_layout(chunks[0]);
        frame.render_widget(
            HzChart {
                lines: vec![Series {
                    points: &frontier,
                    color: (0x00, 0xc8, 0x60),
                }],
                scatter: vec![
                    Series {
                        points: &all,
                        color: (0xf0, 0xf0, 0xf0),
                    },
                    Series {
                        points: &frontier,
                        color: (0x00, 0xff, 0x80),
                    },
                ],
                x_bounds,
                y_bounds,
                x_label: "tokens per success-hour",
                y_label: "usd per hour",
                fmt_x: fmt_log_tokens,
                fmt_y: fmt_usd,
            },
            chart_rect,
        );
        if let Some(insets) = insets {
            draw_axis_ticks(
                frame,
                chunks[0],
                chart_rect,
                insets,
                x_bounds,
                y_bounds,
                fmt_log_tokens,
                fmt_usd,
            );
        }

        widgets::draw_economics_lists(frame, chunks[1], view);
    }

    fn draw_story(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let step_idx = self.story.clamp_step(self.selection.story_step);
        let Some(step) = self.story.steps.get(step_idx).cloned() else {
            frame.render_widget(
                Paragraph::new("No story steps.").style(Style::default().fg(Color::Yellow)),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let header = vec![
            Line::from(vec![
                Span::styled(
                    format!("step {}/{}  ", step_idx + 1, self.story.steps.len()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    step.title.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled("   n/p to move", Style::default().fg(Color::DarkGray)),
            ]),
            Line::raw(""),
            Line::from(Span::raw(step.body.clone())),
        ];
        frame.render_widget(
            Paragraph::new(Text::from(header)).wrap(Wrap { trim: true }),
            chunks[0],
        );

        match step.chart {
            StoryChart::DomainBars => {
                widgets::draw_domain_bars(frame, chunks[1], &self.views.domain_bars)
            }
            StoryChart::Heatmap => widgets::draw_heatmap(frame, chunks[1], &self.views.heatmap),
            StoryChart::Ranking => widgets::draw_ranking(frame, chunks[1], &self.views.ranking),
            StoryChart::Curves => self.draw_curves(frame, chunks[1]),
            StoryChart::Economics => self.draw_economics(frame, chunks[1]),
            StoryChart::Forecast => widgets::draw_forecast(frame, chunks[1], &self.views.forecast),
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Tab/1-8 views  m model  s split  ←/→ doubling  ↑/↓ Space domains  a all  n/p page  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Next element after `current` in `list`, wrapping at both ends. An unknown
/// or absent current lands on the first element.
fn cycle(list: &[String], current: Option<&str>, delta: isize) -> Option<String> {
    if list.is_empty() {
        return None;
    }
    let n = list.len() as isize;
    let next = match current.and_then(|c| list.iter().position(|x| x == c)) {
        Some(i) => (i as isize + delta).rem_euclid(n) as usize,
        None => 0,
    };
    list.get(next).cloned()
}

fn log_x(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|(x, _)| *x > 0.0)
        .map(|&(x, y)| (x.log10(), y))
        .collect()
}

fn fmt_log_minutes(v: f64) -> String {
    fmt_minutes(10f64.powf(v))
}

fn fmt_percent(v: f64) -> String {
    format!("{:.0}%", v * 100.0)
}

fn fmt_log_tokens(v: f64) -> String {
    let tokens = 10f64.powf(v);
    if tokens >= 1e6 {
        format!("{:.1}M", tokens / 1e6)
    } else if tokens >= 1e3 {
        format!("{:.0}k", tokens / 1e3)
    } else {
        format!("{tokens:.0}")
    }
}

fn fmt_usd(v: f64) -> String {
    format!("${v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let list = names(&["a", "b", "c"]);
        assert_eq!(cycle(&list, Some("c"), 1).as_deref(), Some("a"));
        assert_eq!(cycle(&list, Some("a"), -1).as_deref(), Some("c"));
        assert_eq!(cycle(&list, Some("missing"), 1).as_deref(), Some("a"));
        assert_eq!(cycle(&list, None, 1).as_deref(), Some("a"));
        assert_eq!(cycle(&[], Some("a"), 1), None);
    }

    #[test]
    fn tab_shift_wraps() {
        assert_eq!(Tab::Overview.shifted(-1), Tab::Story);
        assert_eq!(Tab::Story.shifted(1), Tab::Overview);
        assert_eq!(Tab::Grid.shifted(2), Tab::Curves);
    }

    #[test]
    fn log_axis_formatters() {
        assert_eq!(fmt_log_minutes(3.0), "16.7 h");
        assert_eq!(fmt_percent(0.45), "45%");
        assert_eq!(fmt_log_tokens(5.0), "100k");
        assert_eq!(fmt_log_tokens(6.5), "3.2M");
        assert_eq!(fmt_usd(4.5), "$4.50");
    }

    #[test]
    fn log_x_drops_non_positive_durations() {
        let points = vec![(0.0, 0.5), (10.0, 0.4), (100.0, 0.2)];
        let out = log_x(&points);
        assert_eq!(out.len(), 2);
        assert!((out[0].0 - 1.0).abs() < 1e-12);
        assert!((out[1].0 - 2.0).abs() < 1e-12);
    }
}
