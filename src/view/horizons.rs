//! Domain-level views: capability bars, the model/domain heatmap, the model
//! ranking, and the doubling-time forecast.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{self, HorizonsDoc, Selection, FORECAST_COLORS, FORECAST_TARGETS};
use crate::view::transform::{months_to_target, project_date, top_n_by};

/// One bar of the per-domain capability chart.
#[derive(Debug, Clone, Serialize)]
pub struct DomainBar {
    pub domain: String,
    pub label: String,
    pub color: &'static str,
    pub p50_minutes: f64,
    pub ci_low_minutes: f64,
    pub ci_high_minutes: f64,
    pub models: u64,
    pub points: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainBarsView {
    pub bars: Vec<DomainBar>,
}

/// Per-domain median horizons, widest first. A confidence bound that is
/// missing or non-finite collapses onto the median so the whisker draws with
/// zero extent.
pub fn domain_bars(doc: &HorizonsDoc, selection: &Selection) -> DomainBarsView {
    let mut bars: Vec<DomainBar> = doc
        .domain_horizons
        .iter()
        .filter(|row| selection.domain_active(&row.domain))
        .filter(|row| row.horizon_p50_minutes.is_finite())
        .map(|row| {
            let p50 = row.horizon_p50_minutes;
            let clamp = |v: f64| if v.is_finite() { v } else { p50 };
            DomainBar {
                domain: row.domain.clone(),
                label: domain::domain_label(&row.domain).to_string(),
                color: domain::domain_color(&row.domain),
                p50_minutes: p50,
                ci_low_minutes: clamp(row.horizon_ci_low_minutes),
                ci_high_minutes: clamp(row.horizon_ci_high_minutes),
                models: row.models.unwrap_or(0),
                points: row.points.unwrap_or(0),
            }
        })
        .collect();
    bars.sort_by(|a, b| {
        b.p50_minutes
            .partial_cmp(&a.p50_minutes)
            .unwrap_or(Ordering::Equal)
    });
    DomainBarsView { bars }
}

/// Color ramp for heatmap cells, light to dark with increasing value.
pub const HEATMAP_RAMP: [&str; 3] = ["#ffffd9", "#41b6c4", "#081d58"];

/// Models-by-domains horizon grid.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapView {
    /// Display names of the ranked models, strongest first.
    pub models: Vec<String>,
    /// Domain keys of the columns, sorted.
    pub domains: Vec<String>,
    pub domain_labels: Vec<String>,
    /// `values[row][col]` in minutes; a pair the document never measured
    /// reads as zero.
    pub values: Vec<Vec<f64>>,
    pub vmax: f64,
}

/// Horizon grid over the strongest models.
///
/// Human baseline rows are dropped, then models rank by their best horizon
/// across the active domains and the selection's top cap keeps the leading
/// rank order. Ties keep document order.
pub fn heatmap(doc: &HorizonsDoc, selection: &Selection) -> HeatmapView {
    let domains: Vec<String> = doc
        .model_domain
        .iter()
        .filter(|row| selection.domain_active(&row.domain))
        .map(|row| row.domain.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut best: BTreeMap<String, f64> = BTreeMap::new();
    let mut cells: BTreeMap<(String, String), f64> = BTreeMap::new();
    for row in &doc.model_domain {
        if domain::is_human_baseline(&row.model) {
            continue;
        }
        if !selection.domain_active(&row.domain) || !row.horizon_minutes.is_finite() {
            continue;
        }
        if !best.contains_key(&row.model) {
            order.push(row.model.clone());
        }
        let entry = best.entry(row.model.clone()).or_insert(f64::NEG_INFINITY);
        *entry = entry.max(row.horizon_minutes);
        cells.insert((row.model.clone(), row.domain.clone()), row.horizon_minutes);
    }

    let ranked = top_n_by(&order, selection.top_n, true, |m| {
        best.get(m).copied().unwrap_or(f64::NAN)
    });

    let mut models = Vec::with_capacity(ranked.len());
    let mut values = Vec::with_capacity(ranked.len());
    let mut vmax = 0.0f64;
    for &i in &ranked {
        let model = &order[i];
        let mut row = Vec::with_capacity(domains.len());
        for key in &domains {
            let v = cells
                .get(&(model.clone(), key.clone()))
                .copied()
                .unwrap_or(0.0);
            vmax = vmax.max(v);
            row.push(v);
        }
        models.push(domain::display_model(model).to_string());
        values.push(row);
    }

    let domain_labels = domains
        .iter()
        .map(|key| domain::domain_label(key).to_string())
        .collect();
    HeatmapView {
        models,
        domains,
        domain_labels,
        values,
        vmax,
    }
}

/// Cell label: sub-minute horizons collapse to `<1`, everything else rounds
/// to whole minutes.
pub fn heatmap_cell_label(value: f64) -> String {
    if value < 1.0 {
        "<1".to_string()
    } else {
        format!("{value:.0}")
    }
}

/// Cell background along the [`HEATMAP_RAMP`].
pub fn heatmap_color(value: f64, vmax: f64) -> (u8, u8, u8) {
    let t = (value / vmax.max(1e-9)).clamp(0.0, 1.0);
    let (lo, hi, local) = if t < 0.5 {
        (HEATMAP_RAMP[0], HEATMAP_RAMP[1], t * 2.0)
    } else {
        (HEATMAP_RAMP[1], HEATMAP_RAMP[2], (t - 0.5) * 2.0)
    };
    let (r0, g0, b0) = domain::parse_hex_color(lo);
    let (r1, g1, b1) = domain::parse_hex_color(hi);
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * local).round() as u8;
    (mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Label color for a cell: dark ink on light cells, switching to light ink
/// once the cell passes 55% of the scale maximum.
pub fn heatmap_text_color(value: f64, vmax: f64) -> &'static str {
    if value < 0.55 * vmax.max(1e-9) {
        "#102030"
    } else {
        "#f8fbff"
    }
}

/// One stick of the model ranking chart.
#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    pub model: String,
    /// Domain key where the model posts its best horizon.
    pub domain: String,
    pub label: String,
    pub color: &'static str,
    pub horizon_minutes: f64,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingView {
    pub rows: Vec<RankingRow>,
}

/// Every model ranked by its best horizon across the active domains,
/// longest first. Unlike the heatmap this keeps human baseline rows, so the
/// chart can show where the reference sits.
pub fn ranking(doc: &HorizonsDoc, selection: &Selection) -> RankingView {
    let mut order: Vec<String> = Vec::new();
    let mut best: BTreeMap<String, usize> = BTreeMap::new();
    for (i, row) in doc.model_domain.iter().enumerate() {
        if !selection.domain_active(&row.domain) || !row.horizon_minutes.is_finite() {
            continue;
        }
        match best.get(&row.model) {
            Some(&j) if doc.model_domain[j].horizon_minutes >= row.horizon_minutes => {}
            Some(_) => {
                best.insert(row.model.clone(), i);
            }
            None => {
                order.push(row.model.clone());
                best.insert(row.model.clone(), i);
            }
        }
    }

    let mut rows: Vec<RankingRow> = order
        .iter()
        .map(|model| {
            let row = &doc.model_domain[best[model]];
            RankingRow {
                model: domain::display_model(model).to_string(),
                domain: row.domain.clone(),
                label: domain::domain_label(&row.domain).to_string(),
                color: domain::domain_color(&row.domain),
                horizon_minutes: row.horizon_minutes,
                release_date: row.release_date.clone(),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.horizon_minutes
            .partial_cmp(&a.horizon_minutes)
            .unwrap_or(Ordering::Equal)
    });
    RankingView { rows }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastTarget {
    pub minutes: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// Months until one domain reaches one target, with the projected calendar
/// date when the document carries a usable generation stamp.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastCell {
    pub months: f64,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastRow {
    pub domain: String,
    pub label: String,
    pub color: &'static str,
    pub horizon_minutes: f64,
    pub cells: Vec<ForecastCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastView {
    pub doubling_months: f64,
    pub from_date: Option<NaiveDate>,
    pub targets: Vec<ForecastTarget>,
    pub rows: Vec<ForecastRow>,
}

/// Constant-doubling projection from each domain's median horizon to the
/// fixed targets, rows ordered like the capability bars.
pub fn forecast(doc: &HorizonsDoc, selection: &Selection) -> ForecastView {
    let from_date = doc.generated_at_date();
    let targets: Vec<ForecastTarget> = FORECAST_TARGETS
        .iter()
        .zip(FORECAST_COLORS.iter())
        .map(|(&(minutes, label), &color)| ForecastTarget {
            minutes,
            label,
            color,
        })
        .collect();

    let mut rows: Vec<ForecastRow> = doc
        .domain_horizons
        .iter()
        .filter(|row| selection.domain_active(&row.domain))
        .filter(|row| row.horizon_p50_minutes.is_finite())
        .map(|row| {
            let cells = targets
                .iter()
                .map(|target| {
                    let months = months_to_target(
                        row.horizon_p50_minutes,
                        target.minutes,
                        selection.doubling_months,
                    );
                    let date = from_date.and_then(|d| project_date(d, months));
                    ForecastCell { months, date }
                })
                .collect();
            ForecastRow {
                domain: row.domain.clone(),
                label: domain::domain_label(&row.domain).to_string(),
                color: domain::domain_color(&row.domain),
                horizon_minutes: row.horizon_p50_minutes,
                cells,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.horizon_minutes
            .partial_cmp(&a.horizon_minutes)
            .unwrap_or(Ordering::Equal)
    });

    ForecastView {
        doubling_months: selection.doubling_months,
        from_date,
        targets,
        rows,
    }
}
