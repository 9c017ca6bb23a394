//! Shared dashboard types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - deserialized straight from the upstream `data.json` document
//! - re-exported in CSV/JSON view bundles
//! - constructed by the bundled sample generator
//!
//! Every section and numeric leaf tolerates absence: a partial document still
//! renders whichever views it can support, and the affected views simply skip
//! records with missing or non-finite values.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The full input document. Read-only after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HorizonsDoc {
    /// Upstream export timestamp (ISO 8601). Display-only; forecast date
    /// projection degrades gracefully when it does not parse.
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub domain_horizons: Vec<DomainHorizon>,
    #[serde(default)]
    pub model_domain: Vec<ModelDomainHorizon>,
    #[serde(default)]
    pub curves: Vec<ModelCurve>,
    #[serde(default)]
    pub agent_economics: AgentEconomics,
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
    #[serde(default)]
    pub meta: Option<DocMeta>,
}

/// Aggregate horizon estimate for one task domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainHorizon {
    #[serde(default)]
    pub domain: String,
    /// Duration (minutes) at which pooled success crosses 50%.
    #[serde(default)]
    pub horizon_p50_minutes: f64,
    #[serde(default)]
    pub horizon_ci_low_minutes: f64,
    #[serde(default)]
    pub horizon_ci_high_minutes: f64,
    /// Measured doubling cadence for this domain, when estimable.
    #[serde(default)]
    pub doubling_time_months: Option<f64>,
    #[serde(default)]
    pub models: Option<u64>,
    #[serde(default)]
    pub points: Option<u64>,
    #[serde(default)]
    pub median_record_minutes: Option<f64>,
}

/// Horizon estimate for one (model, domain) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelDomainHorizon {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub horizon_minutes: f64,
    #[serde(default)]
    pub beta_proxy: Option<f64>,
    #[serde(default)]
    pub n_points: u64,
}

/// Success curve for one (model, domain) pair, ordered by duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelCurve {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub points: Vec<CurvePoint>,
}

/// One point of a success curve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Human task duration in minutes. Non-positive points are ignored.
    #[serde(default)]
    pub minutes: f64,
    /// Raw success rate in `[0, 1]`.
    #[serde(default)]
    pub success: Option<f64>,
    /// Monotone (non-increasing) smoothing of `success`.
    #[serde(default)]
    pub success_smoothed: Option<f64>,
}

/// Token/cost economics section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentEconomics {
    #[serde(default)]
    pub models: Vec<ModelEconomics>,
    #[serde(default)]
    pub split_presets: BTreeMap<String, SplitPreset>,
    #[serde(default)]
    pub pricing_sources: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Per-model efficiency aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelEconomics {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub runs_total: u64,
    #[serde(default)]
    pub runs_success: u64,
    #[serde(default)]
    pub tokens_per_hour: Option<f64>,
    /// Tokens per successful autonomous hour; the assumption-free
    /// efficiency metric.
    #[serde(default)]
    pub tokens_per_success_hour: Option<f64>,
    /// Cost scenarios keyed by split preset.
    #[serde(default)]
    pub estimated_cost_scenarios: BTreeMap<String, CostScenario>,
}

/// Estimated cost under one input/output split assumption.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostScenario {
    #[serde(default)]
    pub blended_usd_per_1m_tokens: Option<f64>,
    #[serde(default)]
    pub usd_per_autonomous_hour: Option<f64>,
}

/// An assumed input/output token split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitPreset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub input_share: f64,
    #[serde(default)]
    pub output_share: f64,
}

/// One raw benchmark observation for the records table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub benchmark: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub human_minutes: f64,
    #[serde(default)]
    pub score: f64,
}

/// Export bookkeeping carried along for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocMeta {
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub rows: u64,
}

impl HorizonsDoc {
    /// Sorted unique model names across every section that mentions one.
    pub fn model_names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for row in &self.model_domain {
            if !row.model.is_empty() {
                names.insert(row.model.clone());
            }
        }
        for curve in &self.curves {
            if !curve.model.is_empty() {
                names.insert(curve.model.clone());
            }
        }
        for econ in &self.agent_economics.models {
            if !econ.model.is_empty() {
                names.insert(econ.model.clone());
            }
        }
        names.into_iter().collect()
    }

    /// Sorted unique domain keys across every section that mentions one.
    pub fn domain_keys(&self) -> Vec<String> {
        let mut keys = BTreeSet::new();
        for row in &self.domain_horizons {
            if !row.domain.is_empty() {
                keys.insert(row.domain.clone());
            }
        }
        for row in &self.model_domain {
            if !row.domain.is_empty() {
                keys.insert(row.domain.clone());
            }
        }
        for curve in &self.curves {
            if !curve.domain.is_empty() {
                keys.insert(curve.domain.clone());
            }
        }
        keys.into_iter().collect()
    }

    /// True when no section carries a single record.
    pub fn is_empty(&self) -> bool {
        self.domain_horizons.is_empty()
            && self.model_domain.is_empty()
            && self.curves.is_empty()
            && self.agent_economics.models.is_empty()
            && self.table_rows.is_empty()
    }

    /// Lenient parse of `generated_at` for forecast date projection.
    pub fn generated_at_date(&self) -> Option<NaiveDate> {
        let raw = self.generated_at.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

/// UI selection state driving every derived view.
///
/// Rendering is a pure function of `(document, selection)`: the event loop
/// mutates this struct and recomputes, nothing else carries UI state.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Model whose success curves are shown.
    pub model: Option<String>,
    /// Active domain filter chips. Domain-driven views only show these keys.
    pub domains: BTreeSet<String>,
    /// Cost split preset key for the cost/frontier views.
    pub split: Option<String>,
    /// Assumed horizon doubling time in months.
    pub doubling_months: f64,
    /// Model cap for the heatmap and the economics top lists.
    pub top_n: usize,
    /// Current step of the guided story sequence.
    pub story_step: usize,
}

impl Selection {
    /// Startup defaults for a freshly loaded document: first model, every
    /// domain active, the preferred split preset when present.
    pub fn for_document(doc: &HorizonsDoc) -> Self {
        let model = doc.model_names().into_iter().next();
        let domains: BTreeSet<String> = doc.domain_keys().into_iter().collect();
        let presets = &doc.agent_economics.split_presets;
        let split = if presets.contains_key(crate::domain::DEFAULT_SPLIT_PRESET) {
            Some(crate::domain::DEFAULT_SPLIT_PRESET.to_string())
        } else {
            presets.keys().next().cloned()
        };

        Self {
            model,
            domains,
            split,
            doubling_months: crate::domain::DEFAULT_DOUBLING_MONTHS,
            top_n: crate::domain::TOP_MODELS,
            story_step: 0,
        }
    }

    /// Active domain keys in sorted order.
    pub fn active_domains(&self) -> Vec<String> {
        self.domains.iter().cloned().collect()
    }

    /// True when the domain passes the active filter.
    pub fn domain_active(&self, key: &str) -> bool {
        self.domains.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_presets(keys: &[&str]) -> HorizonsDoc {
        let mut doc = HorizonsDoc::default();
        for key in keys {
            doc.agent_economics
                .split_presets
                .insert(key.to_string(), SplitPreset::default());
        }
        doc.model_domain.push(ModelDomainHorizon {
            model: "b-model".to_string(),
            domain: "reasoning".to_string(),
            ..Default::default()
        });
        doc.model_domain.push(ModelDomainHorizon {
            model: "a-model".to_string(),
            domain: "cybersecurity".to_string(),
            ..Default::default()
        });
        doc
    }

    #[test]
    fn selection_defaults_prefer_known_split() {
        let doc = doc_with_presets(&["input_50_output_50", "input_70_output_30"]);
        let sel = Selection::for_document(&doc);
        assert_eq!(sel.split.as_deref(), Some("input_70_output_30"));
        // First model in sorted order.
        assert_eq!(sel.model.as_deref(), Some("a-model"));
        // Every domain starts active.
        assert!(sel.domain_active("reasoning"));
        assert!(sel.domain_active("cybersecurity"));
        assert_eq!(sel.doubling_months, crate::domain::DEFAULT_DOUBLING_MONTHS);
    }

    #[test]
    fn selection_defaults_fall_back_to_first_split() {
        let doc = doc_with_presets(&["input_90_output_10", "input_50_output_50"]);
        let sel = Selection::for_document(&doc);
        assert_eq!(sel.split.as_deref(), Some("input_50_output_50"));
    }

    #[test]
    fn selection_defaults_on_empty_document() {
        let doc = HorizonsDoc::default();
        let sel = Selection::for_document(&doc);
        assert!(sel.model.is_none());
        assert!(sel.split.is_none());
        assert!(sel.domains.is_empty());
    }

    #[test]
    fn generated_at_parses_iso_and_plain_dates() {
        let mut doc = HorizonsDoc::default();
        doc.generated_at = Some("2025-06-01T12:34:56.789012+00:00".to_string());
        assert_eq!(
            doc.generated_at_date(),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );

        doc.generated_at = Some("2025-06-01".to_string());
        assert_eq!(
            doc.generated_at_date(),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );

        doc.generated_at = Some("not a date".to_string());
        assert_eq!(doc.generated_at_date(), None);

        doc.generated_at = None;
        assert_eq!(doc.generated_at_date(), None);
    }

    #[test]
    fn document_empty_check() {
        let mut doc = HorizonsDoc::default();
        assert!(doc.is_empty());
        doc.table_rows.push(TableRow::default());
        assert!(!doc.is_empty());
    }
}
