//! Built-in sample document for offline runs.
//!
//! The generator is seeded, so every invocation renders the same dashboard.
//! It produces one model per capability tier plus a human baseline, curves on
//! a doubling duration grid, economics rows with a non-trivial cost frontier,
//! and more table rows than the table view will show.

use std::collections::BTreeMap;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{
    AgentEconomics, CostScenario, CurvePoint, DocMeta, DomainHorizon, HorizonsDoc, ModelCurve,
    ModelDomainHorizon, ModelEconomics, SplitPreset, TableRow, is_human_baseline,
};
use crate::error::AppError;

const SAMPLE_SEED: u64 = 0x485a_2025;

const SAMPLE_GENERATED_AT: &str = "2025-06-01T00:00:00+00:00";

/// Duration grid in minutes, doubling per step.
const MINUTES_GRID: [f64; 10] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0];

/// Name, characteristic horizon in minutes, release date. The human row
/// anchors charts that keep a reference series and is skipped by the
/// economics section.
const SAMPLE_MODELS: [(&str, f64, &str); 6] = [
    ("atlas-72b (Inspect)", 95.0, "2025-03-01"),
    ("borealis-large (Inspect)", 70.0, "2025-01-15"),
    ("cascade-pro", 45.0, "2024-11-01"),
    ("drift-coder", 30.0, "2024-08-01"),
    ("everest-mini", 12.0, "2024-05-01"),
    ("human baseline", 480.0, ""),
];

/// Domain keys with a difficulty factor applied to each model's horizon.
const SAMPLE_DOMAINS: [(&str, f64); 5] = [
    ("reasoning", 1.0),
    ("software_engineering", 0.8),
    ("data_analysis", 0.7),
    ("ml_research", 0.55),
    ("cybersecurity", 0.45),
];

/// USD per million tokens, input and output, per non-human model in
/// [`SAMPLE_MODELS`] order. Heavier models price higher and run slower.
const SAMPLE_PRICES: [(f64, f64); 5] = [
    (6.0, 24.0),
    (3.0, 12.0),
    (2.4, 9.6),
    (0.6, 2.4),
    (0.25, 1.0),
];

const SAMPLE_TOKENS_PER_HOUR: [f64; 5] = [190_000.0, 260_000.0, 420_000.0, 520_000.0, 610_000.0];

const SAMPLE_SPLITS: [(&str, &str, f64, f64); 3] = [
    ("input_70_output_30", "70% input / 30% output", 0.7, 0.3),
    ("input_50_output_50", "50% input / 50% output", 0.5, 0.5),
    ("input_30_output_70", "30% input / 70% output", 0.3, 0.7),
];

const SAMPLE_BENCHMARKS: [&str; 5] = [
    "cyber-range",
    "repo-fix",
    "notebook-qa",
    "proof-chain",
    "ops-triage",
];

const SAMPLE_TABLE_ROWS: usize = 180;

pub fn sample_document() -> Result<HorizonsDoc, AppError> {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let noise = Normal::new(0.0, 0.02)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;
    let duration = Normal::new(20.0f64.ln(), 1.1)
        .map_err(|e| AppError::new(4, format!("Duration distribution error: {e}")))?;

    let mut curves = Vec::new();
    let mut model_domain = Vec::new();
    let mut per_domain: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for &(model, skill, release) in &SAMPLE_MODELS {
        for &(domain, difficulty) in &SAMPLE_DOMAINS {
            let characteristic = skill * difficulty;
            let points = curve_points(&mut rng, &noise, characteristic);
            let horizon = crossing_minutes(&points, characteristic);

            if !is_human_baseline(model) {
                per_domain.entry(domain).or_default().push(horizon);
            }
            model_domain.push(ModelDomainHorizon {
                model: model.to_string(),
                domain: domain.to_string(),
                release_date: release_date(release),
                horizon_minutes: horizon,
                beta_proxy: Some(1.2 + 0.1 * rng.r#gen::<f64>()),
                n_points: MINUTES_GRID.len() as u64,
            });
            curves.push(ModelCurve {
                model: model.to_string(),
                domain: domain.to_string(),
                points,
            });
        }
    }

    let domain_horizons = SAMPLE_DOMAINS
        .iter()
        .map(|&(domain, _)| {
            let mut horizons = per_domain.remove(domain).unwrap_or_default();
            let p50 = median(&mut horizons);
            DomainHorizon {
                domain: domain.to_string(),
                horizon_p50_minutes: p50,
                horizon_ci_low_minutes: p50 * 0.55,
                horizon_ci_high_minutes: p50 * 1.8,
                doubling_time_months: Some(4.0 + 4.0 * rng.r#gen::<f64>()),
                models: Some(horizons.len() as u64),
                points: Some((horizons.len() * MINUTES_GRID.len()) as u64),
                median_record_minutes: Some(p50 * 2.2),
            }
        })
        .collect();

    let agent_economics = sample_economics(&mut rng);
    let table_rows = sample_table(&mut rng, &noise, &duration);
    let meta = DocMeta {
        domains: SAMPLE_DOMAINS
            .iter()
            .map(|&(domain, _)| domain.to_string())
            .collect(),
        rows: table_rows.len() as u64,
    };

    Ok(HorizonsDoc {
        generated_at: Some(SAMPLE_GENERATED_AT.to_string()),
        domain_horizons,
        model_domain,
        curves,
        agent_economics,
        table_rows,
        meta: Some(meta),
    })
}

fn release_date(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Noisy logistic over the duration grid. The smoothed series is the running
/// minimum of the raw rates, so it never rises with duration.
fn curve_points(rng: &mut StdRng, noise: &Normal<f64>, characteristic: f64) -> Vec<CurvePoint> {
    let mut running_min = f64::INFINITY;
    MINUTES_GRID
        .iter()
        .map(|&minutes| {
            let logit = 1.2 * (minutes.ln() - characteristic.max(1e-6).ln());
            let clean = 1.0 / (1.0 + logit.exp());
            let raw = (clean + noise.sample(rng)).clamp(0.0, 1.0);
            running_min = running_min.min(raw);
            CurvePoint {
                minutes,
                success: Some(raw),
                success_smoothed: Some(running_min),
            }
        })
        .collect()
}

/// Duration where the smoothed rate crosses one half, interpolated in log
/// space between the bracketing grid points.
fn crossing_minutes(points: &[CurvePoint], fallback: f64) -> f64 {
    let series: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|p| p.success_smoothed.map(|s| (p.minutes, s)))
        .collect();
    let Some(&(first_t, first_s)) = series.first() else {
        return fallback;
    };
    if first_s <= 0.5 {
        return first_t;
    }
    for pair in series.windows(2) {
        let (t0, s0) = pair[0];
        let (t1, s1) = pair[1];
        if s1 <= 0.5 {
            if (s0 - s1).abs() < 1e-12 {
                return t1;
            }
            let u = (s0 - 0.5) / (s0 - s1);
            return (t0.ln() + u * (t1.ln() - t0.ln())).exp();
        }
    }
    // Never crossed inside the grid.
    series.last().map(|&(t, _)| t).unwrap_or(fallback)
}

fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

fn sample_economics(rng: &mut StdRng) -> AgentEconomics {
    let mut split_presets = BTreeMap::new();
    for &(key, label, input_share, output_share) in &SAMPLE_SPLITS {
        split_presets.insert(
            key.to_string(),
            SplitPreset {
                label: label.to_string(),
                input_share,
                output_share,
            },
        );
    }

    let models = SAMPLE_MODELS
        .iter()
        .take(SAMPLE_PRICES.len())
        .enumerate()
        .map(|(i, &(model, skill, _))| {
            let (input_price, output_price) = SAMPLE_PRICES[i];
            let tokens_per_hour = SAMPLE_TOKENS_PER_HOUR[i] * (0.97 + 0.06 * rng.r#gen::<f64>());
            let runs_total = 40 + (i as u64) * 7;
            let success_share = (skill / 140.0).clamp(0.15, 0.75);
            let runs_success = (runs_total as f64 * success_share).round() as u64;

            let mut estimated_cost_scenarios = BTreeMap::new();
            for &(key, _, input_share, output_share) in &SAMPLE_SPLITS {
                let blended = input_share * input_price + output_share * output_price;
                estimated_cost_scenarios.insert(
                    key.to_string(),
                    CostScenario {
                        blended_usd_per_1m_tokens: Some(blended),
                        usd_per_autonomous_hour: Some(tokens_per_hour / 1.0e6 * blended),
                    },
                );
            }

            ModelEconomics {
                model: model.to_string(),
                domains: SAMPLE_DOMAINS
                    .iter()
                    .map(|&(domain, _)| domain.to_string())
                    .collect(),
                runs_total,
                runs_success,
                tokens_per_hour: Some(tokens_per_hour),
                tokens_per_success_hour: Some(tokens_per_hour / success_share.max(0.05)),
                estimated_cost_scenarios,
            }
        })
        .collect();

    AgentEconomics {
        models,
        split_presets,
        pricing_sources: vec!["Published vendor price sheets, May 2025".to_string()],
        notes: vec!["Token throughput is measured over completed runs only.".to_string()],
    }
}

fn sample_table(rng: &mut StdRng, noise: &Normal<f64>, duration: &Normal<f64>) -> Vec<TableRow> {
    (0..SAMPLE_TABLE_ROWS)
        .map(|i| {
            let (model, skill, release) = SAMPLE_MODELS[i % SAMPLE_MODELS.len()];
            let (domain, difficulty) = SAMPLE_DOMAINS[i % SAMPLE_DOMAINS.len()];
            let human_minutes = duration.sample(rng).exp().clamp(0.2, 2000.0);
            let characteristic = (skill * difficulty).max(1e-6);
            let logit = 0.9 * (human_minutes.ln() - characteristic.ln());
            let score = (1.0 / (1.0 + logit.exp()) + noise.sample(rng)).clamp(0.0, 1.0);
            let benchmark = format!(
                "{}-{:02}",
                SAMPLE_BENCHMARKS[i % SAMPLE_BENCHMARKS.len()],
                i / SAMPLE_BENCHMARKS.len()
            );
            TableRow {
                benchmark,
                domain: domain.to_string(),
                model: model.to_string(),
                release_date: release_date(release),
                human_minutes,
                score,
            }
        })
        .collect()
}
