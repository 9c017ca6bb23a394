//! The task records table.

use serde::Serialize;

use crate::domain::{self, HorizonsDoc, TABLE_ROW_LIMIT};

#[derive(Debug, Clone, Serialize)]
pub struct TableRowView {
    pub benchmark: String,
    pub domain: String,
    pub domain_label: String,
    pub model: String,
    pub release_date: Option<String>,
    pub human_minutes: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRowView>,
    /// Row count of the document before the cap.
    pub total_rows: usize,
}

/// The first [`TABLE_ROW_LIMIT`] document rows, order preserved. The cap
/// applies to the raw document slice; rows inside the cap with a non-finite
/// duration or score are then dropped rather than backfilled. Domain chips do
/// not narrow this view.
pub fn table(doc: &HorizonsDoc) -> TableView {
    let rows = doc
        .table_rows
        .iter()
        .take(TABLE_ROW_LIMIT)
        .filter(|row| row.human_minutes.is_finite() && row.score.is_finite())
        .map(|row| TableRowView {
            benchmark: row.benchmark.clone(),
            domain: row.domain.clone(),
            domain_label: domain::domain_label(&row.domain).to_string(),
            model: domain::display_model(&row.model).to_string(),
            release_date: row.release_date.clone(),
            human_minutes: row.human_minutes,
            score: row.score,
        })
        .collect();
    TableView {
        rows,
        total_rows: doc.table_rows.len(),
    }
}
