//! Cost-versus-efficiency view over the agent economics section.

use serde::Serialize;

use crate::domain::{self, HorizonsDoc, Selection};
use crate::view::transform::{pareto_frontier, top_n_by};

/// One bubble of the cost/efficiency chart. The cost driver is tokens per
/// successful autonomous hour, the assumption-free efficiency metric.
#[derive(Debug, Clone, Serialize)]
pub struct EconomicsPoint {
    pub model: String,
    pub tokens_per_success_hour: f64,
    pub usd_per_hour: f64,
    pub runs_total: u64,
    /// Bubble weight in the upstream chart.
    pub runs_success: u64,
    /// Successful share of runs, zero when the model logged none.
    pub success_rate: f64,
    pub on_frontier: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EconomicsView {
    /// Key of the split preset the costs were computed under.
    pub split: Option<String>,
    pub split_label: Option<String>,
    /// Disclosure line for the assumed input/output split.
    pub note: Option<String>,
    pub points: Vec<EconomicsPoint>,
    /// Indices into `points`, ascending token driver, on the cost frontier.
    pub frontier: Vec<usize>,
    /// Indices of the most token-efficient models, fewest tokens first.
    pub efficiency: Vec<usize>,
    /// Indices of the cheapest autonomous hours, cheapest first.
    pub cheapest: Vec<usize>,
    pub pricing_sources: Vec<String>,
    pub notes: Vec<String>,
}

/// Bubbles for every model with a finite token driver and a finite cost under
/// the selected split, plus the cost frontier and the two top lists. Domain
/// chips do not narrow this view; economics rows aggregate over domains.
pub fn economics(doc: &HorizonsDoc, selection: &Selection) -> EconomicsView {
    let econ = &doc.agent_economics;
    let split = selection.split.clone();
    let preset = split.as_deref().and_then(|key| econ.split_presets.get(key));
    let split_label = preset.map(|p| p.label.clone());
    let note = preset.map(|p| {
        format!(
            "Assumption: {:.0}% input, {:.0}% output. Source data does not contain input/output split.",
            p.input_share * 100.0,
            p.output_share * 100.0
        )
    });

    let mut points = Vec::new();
    for row in &econ.models {
        let Some(tokens) = row
            .tokens_per_success_hour
            .filter(|v| v.is_finite() && *v > 0.0)
        else {
            continue;
        };
        let usd = split
            .as_deref()
            .and_then(|key| row.estimated_cost_scenarios.get(key))
            .and_then(|scenario| scenario.usd_per_autonomous_hour)
            .filter(|v| v.is_finite() && *v > 0.0);
        let Some(usd) = usd else {
            continue;
        };
        let success_rate = if row.runs_total == 0 {
            0.0
        } else {
            row.runs_success as f64 / row.runs_total as f64
        };
        points.push(EconomicsPoint {
            model: domain::display_model(&row.model).to_string(),
            tokens_per_success_hour: tokens,
            usd_per_hour: usd,
            runs_total: row.runs_total,
            runs_success: row.runs_success,
            success_rate,
            on_frontier: false,
        });
    }

    let rows: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.tokens_per_success_hour, p.usd_per_hour))
        .collect();
    let frontier = pareto_frontier(&rows);
    for &i in &frontier {
        points[i].on_frontier = true;
    }

    let efficiency = top_n_by(&points, selection.top_n, false, |p| p.tokens_per_success_hour);
    let cheapest = top_n_by(&points, selection.top_n, false, |p| p.usd_per_hour);

    EconomicsView {
        split,
        split_label,
        note,
        points,
        frontier,
        efficiency,
        cheapest,
        pricing_sources: econ.pricing_sources.clone(),
        notes: econ.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgentEconomics, CostScenario, ModelEconomics, SplitPreset};
    use std::collections::BTreeMap;

    fn model(name: &str, tokens: Option<f64>, usd: Option<f64>) -> ModelEconomics {
        let mut scenarios = BTreeMap::new();
        scenarios.insert(
            "input_70_output_30".to_string(),
            CostScenario {
                blended_usd_per_1m_tokens: Some(4.0),
                usd_per_autonomous_hour: usd,
            },
        );
        ModelEconomics {
            model: name.to_string(),
            domains: vec!["reasoning".to_string()],
            runs_total: 40,
            runs_success: 10,
            tokens_per_hour: Some(100_000.0),
            tokens_per_success_hour: tokens,
            estimated_cost_scenarios: scenarios,
        }
    }

    fn econ_doc(models: Vec<ModelEconomics>) -> HorizonsDoc {
        let mut split_presets = BTreeMap::new();
        split_presets.insert(
            "input_70_output_30".to_string(),
            SplitPreset {
                label: "70/30".to_string(),
                input_share: 0.7,
                output_share: 0.3,
            },
        );
        HorizonsDoc {
            agent_economics: AgentEconomics {
                models,
                split_presets,
                pricing_sources: vec!["vendor price sheets".to_string()],
                notes: Vec::new(),
            },
            ..HorizonsDoc::default()
        }
    }

    #[test]
    fn frontier_marks_cheapest_staircase() {
        let doc = econ_doc(vec![
            model("a", Some(10.0), Some(5.0)),
            model("b", Some(20.0), Some(3.0)),
            model("c", Some(30.0), Some(4.0)),
        ]);
        let view = economics(&doc, &Selection::for_document(&doc));
        assert_eq!(view.frontier, vec![0, 1]);
        assert!(view.points[0].on_frontier);
        assert!(view.points[1].on_frontier);
        assert!(!view.points[2].on_frontier);
    }

    #[test]
    fn rows_without_cost_or_tokens_are_dropped() {
        let doc = econ_doc(vec![
            model("a", Some(10.0), Some(5.0)),
            model("no-tokens", None, Some(2.0)),
            model("no-cost", Some(50.0), None),
            model("nan-cost", Some(50.0), Some(f64::NAN)),
        ]);
        let view = economics(&doc, &Selection::for_document(&doc));
        assert_eq!(view.points.len(), 1);
        assert_eq!(view.points[0].model, "a");
    }

    #[test]
    fn split_note_spells_out_the_assumption() {
        let doc = econ_doc(vec![model("a", Some(10.0), Some(5.0))]);
        let view = economics(&doc, &Selection::for_document(&doc));
        assert_eq!(view.split.as_deref(), Some("input_70_output_30"));
        assert_eq!(view.split_label.as_deref(), Some("70/30"));
        assert_eq!(
            view.note.as_deref(),
            Some(
                "Assumption: 70% input, 30% output. Source data does not contain input/output split."
            )
        );
    }

    #[test]
    fn top_lists_rank_tokens_and_cost_ascending() {
        let doc = econ_doc(vec![
            model("lean-pricey", Some(5.0), Some(9.0)),
            model("hungry-cheap", Some(90.0), Some(1.0)),
            model("middle", Some(40.0), Some(4.0)),
        ]);
        let view = economics(&doc, &Selection::for_document(&doc));
        let efficiency: Vec<&str> = view
            .efficiency
            .iter()
            .map(|&i| view.points[i].model.as_str())
            .collect();
        assert_eq!(efficiency, vec!["lean-pricey", "middle", "hungry-cheap"]);
        let cheapest: Vec<&str> = view
            .cheapest
            .iter()
            .map(|&i| view.points[i].model.as_str())
            .collect();
        assert_eq!(cheapest, vec!["hungry-cheap", "middle", "lean-pricey"]);
    }

    #[test]
    fn top_lists_honor_the_selection_cap() {
        let doc = econ_doc(vec![
            model("a", Some(5.0), Some(9.0)),
            model("b", Some(90.0), Some(1.0)),
            model("c", Some(40.0), Some(4.0)),
        ]);
        let mut selection = Selection::for_document(&doc);
        selection.top_n = 2;
        let view = economics(&doc, &selection);
        assert_eq!(view.efficiency.len(), 2);
        assert_eq!(view.cheapest.len(), 2);
        // The cap trims the tail, not the head.
        assert_eq!(view.points[view.efficiency[0]].model, "a");
        assert_eq!(view.points[view.cheapest[0]].model, "b");
    }

    #[test]
    fn success_rate_handles_empty_run_counts() {
        let mut rows = vec![model("a", Some(10.0), Some(5.0))];
        rows[0].runs_total = 0;
        rows[0].runs_success = 0;
        let doc = econ_doc(rows);
        let view = economics(&doc, &Selection::for_document(&doc));
        assert_eq!(view.points[0].success_rate, 0.0);
    }
}
