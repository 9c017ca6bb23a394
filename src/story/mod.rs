//! The guided walkthrough.
//!
//! A fixed sequence of steps, each pairing a short narrative with one chart.
//! The narrative is recomputed from the current views, so filtering domains or
//! changing the doubling cadence rewrites the copy in place.

use serde::Serialize;

use crate::report::format::fmt_minutes;
use crate::view::Views;

/// Which chart a story step pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoryChart {
    DomainBars,
    Heatmap,
    Ranking,
    Curves,
    Economics,
    Forecast,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryStep {
    pub title: String,
    pub body: String,
    pub chart: StoryChart,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryView {
    pub steps: Vec<StoryStep>,
}

impl StoryView {
    /// Clamp a requested step index to the available range.
    pub fn clamp_step(&self, step: usize) -> usize {
        if self.steps.is_empty() {
            0
        } else {
            step.min(self.steps.len() - 1)
        }
    }
}

/// Build the walkthrough over already-computed views.
pub fn build_story(views: &Views) -> StoryView {
    StoryView {
        steps: vec![
            step_autonomy(views),
            step_spread(views),
            step_frontier_models(views),
            step_one_hour(views),
            step_cost(views),
            step_forecast(views),
        ],
    }
}

fn step_autonomy(views: &Views) -> StoryStep {
    let bars = &views.domain_bars.bars;
    let body = if bars.is_empty() {
        "No domain medians in this document.".to_string()
    } else {
        let widest = &bars[0];
        let narrowest = &bars[bars.len() - 1];
        format!(
            "Across {} domains, the median model holds out longest on {} tasks \
             ({}) and shortest on {} ({}). Each bar is the task length a \
             mid-pack model finishes half the time.",
            bars.len(),
            widest.label,
            fmt_minutes(widest.p50_minutes),
            narrowest.label,
            fmt_minutes(narrowest.p50_minutes),
        )
    };
    StoryStep {
        title: "Hours of autonomy".to_string(),
        body,
        chart: StoryChart::DomainBars,
    }
}

fn step_spread(views: &Views) -> StoryStep {
    let bars = &views.domain_bars.bars;
    let body = if bars.len() < 2 {
        "Too few domains to compare.".to_string()
    } else {
        let widest = &bars[0];
        let narrowest = &bars[bars.len() - 1];
        let ratio = widest.p50_minutes / narrowest.p50_minutes.max(1e-6);
        format!(
            "{} runs about {:.1}x longer than {} before success drops to a \
             coin flip. The grid shows every model against every domain; \
             blank-looking cells are horizons under a minute.",
            widest.label, ratio, narrowest.label,
        )
    };
    StoryStep {
        title: "Domains do not move together".to_string(),
        body,
        chart: StoryChart::Heatmap,
    }
}

fn step_frontier_models(views: &Views) -> StoryStep {
    let rows = &views.ranking.rows;
    let body = match rows.first() {
        None => "No per-model horizons in this document.".to_string(),
        Some(top) => format!(
            "{} posts the longest horizon, {} on {}. Sticks are each model's \
             best domain, so the ordering is generous by construction.",
            top.model,
            fmt_minutes(top.horizon_minutes),
            top.label,
        ),
    };
    StoryStep {
        title: "Who leads the board".to_string(),
        body,
        chart: StoryChart::Ranking,
    }
}

fn step_one_hour(views: &Views) -> StoryStep {
    let averages = &views.curves.domain_averages;
    let marks: Vec<(&str, f64)> = averages
        .iter()
        .filter_map(|s| s.hour_mark.map(|(_, success)| (s.label.as_str(), success)))
        .collect();
    let body = if marks.is_empty() {
        "No curve points near the one-hour mark.".to_string()
    } else {
        let best = marks
            .iter()
            .cloned()
            .fold(("", f64::NEG_INFINITY), |a, b| if b.1 > a.1 { b } else { a });
        let worst = marks
            .iter()
            .cloned()
            .fold(("", f64::INFINITY), |a, b| if b.1 < a.1 { b } else { a });
        format!(
            "At the one-hour mark the average model still succeeds {:.0}% of \
             the time on {} tasks but only {:.0}% on {}. Every curve bends \
             down as tasks get longer; the hour is where they diverge most.",
            best.1 * 100.0,
            best.0,
            worst.1 * 100.0,
            worst.0,
        )
    };
    StoryStep {
        title: "The one-hour wall".to_string(),
        body,
        chart: StoryChart::Curves,
    }
}

fn step_cost(views: &Views) -> StoryStep {
    let econ = &views.economics;
    let body = if econ.points.is_empty() {
        "No economics rows under the selected split.".to_string()
    } else {
        let mut cheapest = f64::INFINITY;
        let mut priciest = f64::NEG_INFINITY;
        for p in &econ.points {
            cheapest = cheapest.min(p.usd_per_hour);
            priciest = priciest.max(p.usd_per_hour);
        }
        let split = econ.split_label.as_deref().unwrap_or("default");
        format!(
            "Under the {} split, an autonomous hour runs ${:.2} to ${:.2}. \
             {} of {} models sit on the cost frontier; the rest pay more for \
             fewer tokens.",
            split,
            cheapest,
            priciest,
            econ.frontier.len(),
            econ.points.len(),
        )
    };
    StoryStep {
        title: "What an hour costs".to_string(),
        body,
        chart: StoryChart::Economics,
    }
}

fn step_forecast(views: &Views) -> StoryStep {
    let fc = &views.forecast;
    let day_target = fc.targets.iter().position(|t| t.label == "1d");
    let body = match (fc.rows.first(), day_target) {
        (Some(row), Some(i)) => {
            let cell = &row.cells[i];
            let when = match cell.date {
                Some(date) => format!("around {date}"),
                None => format!("in {:.1} months", cell.months),
            };
            format!(
                "If horizons keep doubling every {:.1} months, {} reaches a \
                 full working day of autonomy {}. Slower domains follow the \
                 same curve from further back.",
                fc.doubling_months, row.label, when,
            )
        }
        _ => "No forecast rows in this document.".to_string(),
    };
    StoryStep {
        title: "The road to a full day".to_string(),
        body,
        chart: StoryChart::Forecast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_document;
    use crate::domain::Selection;

    fn sample_story() -> StoryView {
        let doc = sample_document().unwrap();
        let selection = Selection::for_document(&doc);
        build_story(&Views::build(&doc, &selection))
    }

    #[test]
    fn story_has_six_steps_with_copy() {
        let story = sample_story();
        assert_eq!(story.steps.len(), 6);
        for step in &story.steps {
            assert!(!step.title.is_empty());
            assert!(step.body.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn story_each_step_pins_a_distinct_chart() {
        let story = sample_story();
        for pair in story.steps.windows(2) {
            assert_ne!(pair[0].chart, pair[1].chart);
        }
    }

    #[test]
    fn clamp_step_stays_in_range() {
        let story = sample_story();
        assert_eq!(story.clamp_step(0), 0);
        assert_eq!(story.clamp_step(5), 5);
        assert_eq!(story.clamp_step(99), 5);
        let empty = StoryView { steps: Vec::new() };
        assert_eq!(empty.clamp_step(3), 0);
    }

    #[test]
    fn story_reacts_to_empty_documents() {
        let doc = crate::domain::HorizonsDoc::default();
        let views = Views::build(&doc, &Selection::for_document(&doc));
        let story = build_story(&views);
        assert_eq!(story.steps.len(), 6);
        assert!(story.steps[0].body.contains("No domain"));
        assert!(story.steps[3].body.contains("No curve points"));
    }
}
