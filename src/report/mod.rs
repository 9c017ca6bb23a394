//! Plain-text report over every view.

pub mod format;

pub use format::*;

use crate::domain::{self, HorizonsDoc, Selection};
use crate::story::build_story;
use crate::view::Views;

/// Render the full multi-section report for one document and selection.
pub fn render_report(doc: &HorizonsDoc, selection: &Selection) -> String {
    let views = Views::build(doc, selection);
    let story = build_story(&views);

    let mut out = String::new();
    out.push_str("=== hz - Time Horizons ===\n");
    if let Some(stamp) = doc.generated_at.as_deref() {
        out.push_str(&format!("Generated: {stamp}\n"));
    }
    out.push_str(&format!(
        "Models: {} | Domains: {} | Records: {}\n",
        doc.model_names().len(),
        doc.domain_keys().len(),
        doc.table_rows.len(),
    ));
    let model = selection
        .model
        .as_deref()
        .map(domain::display_model)
        .unwrap_or("none");
    out.push_str(&format!(
        "Selected model: {model} | Split: {} | Doubling: {:.1} mo\n",
        selection.split.as_deref().unwrap_or("none"),
        selection.doubling_months,
    ));

    out.push('\n');
    out.push_str(&format::format_domain_bars(&views.domain_bars));
    let bars = crate::plot::ascii::render_bars(&views.domain_bars, 40);
    if !bars.is_empty() {
        out.push('\n');
        out.push_str(&bars);
    }
    out.push('\n');
    out.push_str(&format::format_heatmap(&views.heatmap));
    out.push('\n');
    out.push_str(&format::format_ranking(&views.ranking));
    out.push('\n');
    out.push_str(&format::format_curves(&views.curves));
    out.push_str(&crate::plot::ascii::render_curves_plot(&views.curves, 72, 16));
    out.push('\n');
    out.push_str(&format::format_economics(&views.economics));
    out.push('\n');
    out.push_str(&format::format_forecast(&views.forecast));
    out.push('\n');
    out.push_str(&format::format_story(&story));
    out
}

/// Render only the task records table.
pub fn render_table(doc: &HorizonsDoc, selection: &Selection) -> String {
    let views = Views::build(doc, selection);
    format::format_table(&views.table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_document;

    #[test]
    fn report_covers_every_section() {
        let doc = sample_document().unwrap();
        let selection = Selection::for_document(&doc);
        let report = render_report(&doc, &selection);
        for needle in [
            "=== hz - Time Horizons ===",
            "Domain horizons",
            "Horizon grid",
            "Model ranking",
            "Success curves",
            "Agent economics",
            "Forecast: doubling every",
            "Walkthrough:",
        ] {
            assert!(report.contains(needle), "missing section: {needle}");
        }
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn report_reflects_the_selection() {
        let doc = sample_document().unwrap();
        let mut selection = Selection::for_document(&doc);
        selection.doubling_months = 8.5;
        let report = render_report(&doc, &selection);
        assert!(report.contains("doubling every 8.5 months"));
    }

    #[test]
    fn table_report_caps_rows() {
        let doc = sample_document().unwrap();
        let selection = Selection::for_document(&doc);
        let table = render_table(&doc, &selection);
        assert!(table.contains("of 180 rows"));
    }
}
