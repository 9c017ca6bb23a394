//! Success-versus-duration curves: the selected model per domain, plus the
//! per-domain averages across every model.

use serde::Serialize;

use crate::domain::{self, HorizonsDoc, Selection, ONE_HOUR_MINUTES};
use crate::view::transform::{average_curve, average_success, nearest_point, plot_points};

/// One plotted curve within one domain.
#[derive(Debug, Clone, Serialize)]
pub struct CurveSeries {
    pub domain: String,
    pub label: String,
    pub color: &'static str,
    /// `(minutes, success)` with the smoothed rate when present.
    pub points: Vec<(f64, f64)>,
    /// The point nearest the one-hour mark, when the series has any.
    pub hour_mark: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurvesView {
    /// Display name of the selected model, if the document has one.
    pub model: Option<String>,
    /// The selected model's curve per active domain, sorted by domain key.
    pub series: Vec<CurveSeries>,
    /// Every model's points in a domain averaged at identical durations; one
    /// series per active domain. Independent of the selected model.
    pub domain_averages: Vec<CurveSeries>,
}

/// Curves for the selected model plus the cross-model domain averages.
pub fn curves(doc: &HorizonsDoc, selection: &Selection) -> CurvesView {
    let mut series: Vec<CurveSeries> = Vec::new();
    if let Some(model) = selection.model.as_deref() {
        series = doc
            .curves
            .iter()
            .filter(|curve| curve.model == model && selection.domain_active(&curve.domain))
            .map(|curve| {
                let points = plot_points(&curve.points);
                let hour_mark = nearest_point(&points, ONE_HOUR_MINUTES);
                CurveSeries {
                    domain: curve.domain.clone(),
                    label: domain::domain_label(&curve.domain).to_string(),
                    color: domain::domain_color(&curve.domain),
                    points,
                    hour_mark,
                }
            })
            .collect();
        series.sort_by(|a, b| a.domain.cmp(&b.domain));
    }

    let domain_averages = selection
        .active_domains()
        .into_iter()
        .map(|key| {
            let points = average_curve(
                doc.curves
                    .iter()
                    .filter(|curve| curve.domain == key)
                    .flat_map(|curve| curve.points.iter())
                    .map(|p| (p.minutes, average_success(p))),
            );
            let hour_mark = nearest_point(&points, ONE_HOUR_MINUTES);
            CurveSeries {
                label: domain::domain_label(&key).to_string(),
                color: domain::domain_color(&key),
                domain: key,
                points,
                hour_mark,
            }
        })
        .filter(|s| !s.points.is_empty())
        .collect();

    CurvesView {
        model: selection
            .model
            .as_deref()
            .map(|m| domain::display_model(m).to_string()),
        series,
        domain_averages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurvePoint, ModelCurve};

    fn curve(model: &str, domain: &str, points: &[(f64, Option<f64>, Option<f64>)]) -> ModelCurve {
        ModelCurve {
            model: model.to_string(),
            domain: domain.to_string(),
            points: points
                .iter()
                .map(|&(minutes, success, smoothed)| CurvePoint {
                    minutes,
                    success,
                    success_smoothed: smoothed,
                })
                .collect(),
        }
    }

    fn two_domain_doc() -> HorizonsDoc {
        HorizonsDoc {
            curves: vec![
                curve(
                    "frontier-1 (Inspect)",
                    "reasoning",
                    &[
                        (2.0, Some(0.9), Some(0.9)),
                        (60.0, Some(0.5), Some(0.45)),
                        (240.0, Some(0.1), None),
                    ],
                ),
                curve(
                    "frontier-1 (Inspect)",
                    "cybersecurity",
                    &[(2.0, Some(0.7), None), (60.0, None, Some(0.3))],
                ),
                curve("other", "reasoning", &[(2.0, Some(0.2), None)]),
            ],
            ..HorizonsDoc::default()
        }
    }

    #[test]
    fn curves_follow_selected_model_only() {
        let doc = two_domain_doc();
        let mut selection = Selection::for_document(&doc);
        selection.model = Some("frontier-1 (Inspect)".to_string());
        let view = curves(&doc, &selection);
        assert_eq!(view.model.as_deref(), Some("frontier-1"));
        assert_eq!(view.series.len(), 2);
        // Sorted by domain key.
        assert_eq!(view.series[0].domain, "cybersecurity");
        assert_eq!(view.series[1].domain, "reasoning");
    }

    #[test]
    fn series_prefer_smoothed_rates_and_mark_the_hour() {
        let doc = two_domain_doc();
        let mut selection = Selection::for_document(&doc);
        selection.model = Some("frontier-1 (Inspect)".to_string());
        let view = curves(&doc, &selection);
        let reasoning = &view.series[1];
        assert_eq!(reasoning.points[1], (60.0, 0.45));
        assert_eq!(reasoning.hour_mark, Some((60.0, 0.45)));
    }

    #[test]
    fn domain_average_merges_models_at_equal_durations() {
        let doc = HorizonsDoc {
            curves: vec![
                curve("a", "reasoning", &[(10.0, Some(0.2), None)]),
                curve("b", "reasoning", &[(10.0, Some(0.6), None)]),
            ],
            ..HorizonsDoc::default()
        };
        let view = curves(&doc, &Selection::for_document(&doc));
        assert_eq!(view.domain_averages.len(), 1);
        assert_eq!(view.domain_averages[0].points, vec![(10.0, 0.4)]);
    }

    #[test]
    fn domain_average_uses_raw_rates_first() {
        let doc = two_domain_doc();
        let view = curves(&doc, &Selection::for_document(&doc));
        let reasoning = view
            .domain_averages
            .iter()
            .find(|s| s.domain == "reasoning")
            .unwrap();
        // At 2 minutes: frontier-1 raw 0.9 and other raw 0.2 average to 0.55.
        assert_eq!(reasoning.points[0], (2.0, 0.55));
        // At 60 minutes only frontier-1 has a point; the raw 0.5 wins over
        // the smoothed 0.45.
        assert_eq!(reasoning.points[1], (60.0, 0.5));
        assert_eq!(reasoning.hour_mark, Some((60.0, 0.5)));

        let cyber = view
            .domain_averages
            .iter()
            .find(|s| s.domain == "cybersecurity")
            .unwrap();
        // No raw rate at 60 minutes; the smoothed 0.3 stands in.
        assert_eq!(cyber.points[1], (60.0, 0.3));
    }

    #[test]
    fn domain_filter_narrows_series_and_averages() {
        let doc = two_domain_doc();
        let mut selection = Selection::for_document(&doc);
        selection.model = Some("frontier-1 (Inspect)".to_string());
        selection.domains.remove("cybersecurity");
        let view = curves(&doc, &selection);
        assert_eq!(view.series.len(), 1);
        assert_eq!(view.domain_averages.len(), 1);
        assert_eq!(view.domain_averages[0].domain, "reasoning");
    }

    #[test]
    fn missing_model_still_averages_domains() {
        let doc = two_domain_doc();
        let mut selection = Selection::for_document(&doc);
        selection.model = None;
        let view = curves(&doc, &selection);
        assert_eq!(view.model, None);
        assert!(view.series.is_empty());
        assert_eq!(view.domain_averages.len(), 2);
    }

    #[test]
    fn empty_document_yields_empty_view() {
        let doc = HorizonsDoc::default();
        let view = curves(&doc, &Selection::for_document(&doc));
        assert!(view.series.is_empty());
        assert!(view.domain_averages.is_empty());
    }
}
