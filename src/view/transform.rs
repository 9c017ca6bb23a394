//! Presentation transform primitives.
//!
//! Everything here is pure: document slices in, plain numbers out. The
//! rendering layers (TUI, report, export) never re-derive these rules, so any
//! change to a lookup or aggregation happens in exactly one place.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::domain::{CurvePoint, DAYS_PER_MONTH};

/// Success value used when plotting a curve point: the smoothed series when
/// present, the raw rate otherwise.
pub fn plot_success(point: &CurvePoint) -> Option<f64> {
    match point.success_smoothed {
        Some(v) if v.is_finite() => Some(v),
        _ => point.success.filter(|v| v.is_finite()),
    }
}

/// Success value used when averaging curves: the raw rate first, then the
/// smoothed series, else zero. A point that exists always contributes.
pub fn average_success(point: &CurvePoint) -> f64 {
    match point.success {
        Some(v) if v.is_finite() => v,
        _ => match point.success_smoothed {
            Some(v) if v.is_finite() => v,
            _ => 0.0,
        },
    }
}

/// Plot-ready `(minutes, success)` pairs for one curve.
///
/// Non-positive or non-finite durations are dropped, as are points without a
/// usable success value.
pub fn plot_points(points: &[CurvePoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|p| p.minutes.is_finite() && p.minutes > 0.0)
        .filter_map(|p| plot_success(p).map(|s| (p.minutes, s)))
        .collect()
}

/// The point closest to `target` by absolute distance on the x axis.
///
/// Ties resolve to the first point in scan order.
pub fn nearest_point(points: &[(f64, f64)], target: f64) -> Option<(f64, f64)> {
    let mut best: Option<(f64, (f64, f64))> = None;
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        let dist = (x - target).abs();
        match best {
            Some((best_dist, _)) if dist >= best_dist => {}
            _ => best = Some((dist, (x, y))),
        }
    }
    best.map(|(_, point)| point)
}

/// Average several curves at identical durations.
///
/// Points are grouped by exact x equality (the upstream grids share the same
/// duration knots, so no bucketing is wanted), each group reduces to its
/// arithmetic mean, and the result is sorted ascending. Non-positive or
/// non-finite durations are discarded.
pub fn average_curve(points: impl IntoIterator<Item = (f64, f64)>) -> Vec<(f64, f64)> {
    let mut rows: Vec<(f64, f64)> = points
        .into_iter()
        .filter(|(x, y)| x.is_finite() && *x > 0.0 && y.is_finite())
        .collect();
    rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut out = Vec::new();
    let mut i = 0;
    while i < rows.len() {
        let x = rows[i].0;
        let mut sum = 0.0;
        let mut n = 0usize;
        while i < rows.len() && rows[i].0 == x {
            sum += rows[i].1;
            n += 1;
            i += 1;
        }
        out.push((x, sum / n as f64));
    }
    out
}

/// Indices of the cost frontier over `(tokens, usd)` rows.
///
/// Rows with non-positive or non-finite coordinates never qualify. The rest
/// are scanned in ascending token order (stable, so equal-token rows keep
/// their document order) keeping a running minimum of `usd`; a row joins the
/// frontier iff its `usd` does not exceed that minimum. The result is a
/// monotone non-increasing staircase in `usd`.
pub fn pareto_frontier(rows: &[(f64, f64)]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len())
        .filter(|&i| {
            let (tokens, usd) = rows[i];
            tokens.is_finite() && tokens > 0.0 && usd.is_finite() && usd > 0.0
        })
        .collect();
    order.sort_by(|&a, &b| rows[a].0.partial_cmp(&rows[b].0).unwrap_or(Ordering::Equal));

    let mut frontier = Vec::new();
    let mut best_usd = f64::INFINITY;
    for i in order {
        let usd = rows[i].1;
        if usd <= best_usd {
            frontier.push(i);
            best_usd = usd;
        }
    }
    frontier
}

/// Months for a horizon to double its way up to `target`.
///
/// The baseline is floored at a tiny epsilon so degenerate documents produce
/// large-but-finite projections; a horizon already past the target projects
/// zero months.
pub fn months_to_target(horizon_minutes: f64, target_minutes: f64, doubling_months: f64) -> f64 {
    let h = horizon_minutes.max(1e-6);
    if h >= target_minutes {
        return 0.0;
    }
    (target_minutes / h).log2() * doubling_months
}

/// Calendar date `months` after `from`, at the upstream pipeline's average
/// month length.
pub fn project_date(from: NaiveDate, months: f64) -> Option<NaiveDate> {
    if !months.is_finite() || months < 0.0 {
        return None;
    }
    let days = (months * DAYS_PER_MONTH).round();
    if days > (i64::MAX / 2) as f64 {
        return None;
    }
    from.checked_add_signed(chrono::Duration::days(days as i64))
}

/// Stable top-N selection: indices of the `n` items with the smallest (or
/// largest) finite key, ties keeping their original relative order.
pub fn top_n_by<T, F>(items: &[T], n: usize, descending: bool, key: F) -> Vec<usize>
where
    F: Fn(&T) -> f64,
{
    let mut order: Vec<usize> = (0..items.len())
        .filter(|&i| key(&items[i]).is_finite())
        .collect();
    order.sort_by(|&a, &b| {
        let ord = key(&items[a])
            .partial_cmp(&key(&items[b]))
            .unwrap_or(Ordering::Equal);
        if descending { ord.reverse() } else { ord }
    });
    order.truncate(n);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(minutes: f64, success: Option<f64>, smoothed: Option<f64>) -> CurvePoint {
        CurvePoint {
            minutes,
            success,
            success_smoothed: smoothed,
        }
    }

    #[test]
    fn nearest_point_returns_input_element() {
        let points = vec![(2.0, 0.9), (16.0, 0.5), (64.0, 0.2)];
        let hit = nearest_point(&points, 60.0).unwrap();
        assert_eq!(hit, (64.0, 0.2));
        assert!(points.contains(&hit));
    }

    #[test]
    fn nearest_point_tie_takes_first() {
        // 30 and 90 are both 30 minutes away from 60.
        let points = vec![(30.0, 0.4), (90.0, 0.8)];
        assert_eq!(nearest_point(&points, 60.0), Some((30.0, 0.4)));
    }

    #[test]
    fn nearest_point_empty_is_none() {
        assert_eq!(nearest_point(&[], 60.0), None);
    }

    #[test]
    fn plot_success_prefers_smoothed() {
        assert_eq!(plot_success(&pt(8.0, Some(0.7), Some(0.6))), Some(0.6));
        assert_eq!(plot_success(&pt(8.0, Some(0.7), None)), Some(0.7));
        assert_eq!(plot_success(&pt(8.0, None, None)), None);
    }

    #[test]
    fn average_success_prefers_raw_then_smoothed_then_zero() {
        assert_eq!(average_success(&pt(8.0, Some(0.7), Some(0.6))), 0.7);
        assert_eq!(average_success(&pt(8.0, None, Some(0.6))), 0.6);
        assert_eq!(average_success(&pt(8.0, None, None)), 0.0);
    }

    #[test]
    fn average_curve_merges_equal_durations() {
        // Two models measured at the same duration average to one point.
        let merged = average_curve(vec![(10.0, 0.2), (10.0, 0.6)]);
        assert_eq!(merged, vec![(10.0, 0.4)]);
    }

    #[test]
    fn average_curve_sorts_and_drops_bad_durations() {
        let merged = average_curve(vec![
            (40.0, 0.1),
            (0.0, 0.9),
            (-5.0, 0.9),
            (10.0, 0.5),
            (f64::NAN, 0.9),
        ]);
        assert_eq!(merged, vec![(10.0, 0.5), (40.0, 0.1)]);
    }

    #[test]
    fn pareto_frontier_keeps_running_minimum() {
        let rows = vec![(10.0, 5.0), (20.0, 3.0), (30.0, 4.0)];
        let frontier = pareto_frontier(&rows);
        assert_eq!(frontier, vec![0, 1]);

        // The surviving staircase never rises.
        let mut last = f64::INFINITY;
        for &i in &frontier {
            assert!(rows[i].1 <= last);
            last = rows[i].1;
        }
    }

    #[test]
    fn pareto_frontier_keeps_equal_token_rows_in_input_order() {
        // Two rows at the same token cost both join when each beats the
        // running minimum, in the order the document listed them.
        let rows = vec![(10.0, 5.0), (10.0, 4.0), (20.0, 6.0)];
        assert_eq!(pareto_frontier(&rows), vec![0, 1]);
    }

    #[test]
    fn pareto_frontier_ignores_degenerate_rows() {
        let rows = vec![
            (10.0, 5.0),
            (f64::NAN, 1.0),
            (15.0, f64::INFINITY),
            (0.0, 1.0),
            (20.0, 3.0),
        ];
        assert_eq!(pareto_frontier(&rows), vec![0, 4]);
    }

    #[test]
    fn months_to_target_doubles_as_expected() {
        // One doubling from 30 minutes to one hour at a 6-month cadence.
        let months = months_to_target(30.0, 60.0, 6.0);
        assert!((months - 6.0).abs() < 1e-12);

        // Already past the target.
        assert_eq!(months_to_target(90.0, 60.0, 6.0), 0.0);
        assert_eq!(months_to_target(60.0, 60.0, 6.0), 0.0);
    }

    #[test]
    fn months_to_target_floors_degenerate_horizon() {
        let months = months_to_target(0.0, 60.0, 6.0);
        assert!(months.is_finite());
        assert!(months > 0.0);
    }

    #[test]
    fn project_date_uses_average_month_length() {
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        // 6 months -> round(6 * 30.4375) = 183 days.
        let projected = project_date(from, 6.0).unwrap();
        assert_eq!(projected, from + chrono::Duration::days(183));
        assert_eq!(project_date(from, f64::NAN), None);
        assert_eq!(project_date(from, -1.0), None);
    }

    #[test]
    fn top_n_by_is_stable_for_equal_keys() {
        let items = vec![("a", 5.0), ("b", 3.0), ("c", 5.0), ("d", 1.0)];
        let top = top_n_by(&items, 3, true, |x| x.1);
        // a and c share a key; a entered the list first and stays first.
        assert_eq!(top, vec![0, 2, 1]);

        let bottom = top_n_by(&items, 2, false, |x| x.1);
        assert_eq!(bottom, vec![3, 1]);
    }

    #[test]
    fn top_n_by_skips_non_finite_keys() {
        let items = vec![("a", f64::NAN), ("b", 2.0), ("c", f64::INFINITY)];
        assert_eq!(top_n_by(&items, 3, true, |x| x.1), vec![1]);
    }

    #[test]
    fn plot_points_filters_and_maps() {
        let points = vec![
            pt(0.0, Some(0.9), None),
            pt(2.0, Some(0.8), Some(0.75)),
            pt(4.0, None, None),
            pt(8.0, Some(0.5), None),
        ];
        assert_eq!(plot_points(&points), vec![(2.0, 0.75), (8.0, 0.5)]);
    }
}
