//! Export derived views to CSV and JSON.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream
//! scripts, so each tabular view gets its own flat CSV and the whole view
//! bundle lands in one JSON file.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::{HorizonsDoc, Selection};
use crate::error::AppError;
use crate::view::{EconomicsView, ForecastView, RankingView, TableView, Views};

/// Write every export into `dir`, creating it if needed. Returns the written
/// paths in write order.
pub fn export_all(
    dir: &Path,
    doc: &HorizonsDoc,
    selection: &Selection,
) -> Result<Vec<PathBuf>, AppError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| AppError::new(2, format!("Failed to create export dir '{}': {e}", dir.display())))?;

    let views = Views::build(doc, selection);
    let mut written = Vec::new();

    let path = dir.join("records.csv");
    write_table_csv(&path, &views.table)?;
    written.push(path);

    let path = dir.join("ranking.csv");
    write_ranking_csv(&path, &views.ranking)?;
    written.push(path);

    let path = dir.join("economics.csv");
    write_economics_csv(&path, &views.economics)?;
    written.push(path);

    let path = dir.join("forecast.csv");
    write_forecast_csv(&path, &views.forecast)?;
    written.push(path);

    let path = dir.join("views.json");
    write_views_json(&path, &views)?;
    written.push(path);

    Ok(written)
}

/// Task records, capped the same way the table view is.
pub fn write_table_csv(path: &Path, view: &TableView) -> Result<(), AppError> {
    let mut w = csv_writer(path)?;
    w.write_record(["benchmark", "domain", "model", "release_date", "human_minutes", "score"])
        .map_err(|e| csv_error(path, e))?;
    for row in &view.rows {
        w.write_record([
            row.benchmark.clone(),
            row.domain.clone(),
            row.model.clone(),
            row.release_date.clone().unwrap_or_default(),
            format!("{:.2}", row.human_minutes),
            format!("{:.3}", row.score),
        ])
        .map_err(|e| csv_error(path, e))?;
    }
    w.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush CSV '{}': {e}", path.display())))
}

pub fn write_ranking_csv(path: &Path, view: &RankingView) -> Result<(), AppError> {
    let mut w = csv_writer(path)?;
    w.write_record(["model", "best_domain", "horizon_minutes", "release_date"])
        .map_err(|e| csv_error(path, e))?;
    for row in &view.rows {
        w.write_record([
            row.model.clone(),
            row.domain.clone(),
            format!("{:.4}", row.horizon_minutes),
            row.release_date.clone().unwrap_or_default(),
        ])
        .map_err(|e| csv_error(path, e))?;
    }
    w.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush CSV '{}': {e}", path.display())))
}

pub fn write_economics_csv(path: &Path, view: &EconomicsView) -> Result<(), AppError> {
    let mut w = csv_writer(path)?;
    w.write_record([
        "model",
        "tokens_per_success_hour",
        "usd_per_hour",
        "runs_total",
        "runs_success",
        "success_rate",
        "on_frontier",
    ])
    .map_err(|e| csv_error(path, e))?;
    for point in &view.points {
        w.write_record([
            point.model.clone(),
            format!("{:.1}", point.tokens_per_success_hour),
            format!("{:.4}", point.usd_per_hour),
            point.runs_total.to_string(),
            point.runs_success.to_string(),
            format!("{:.4}", point.success_rate),
            point.on_frontier.to_string(),
        ])
        .map_err(|e| csv_error(path, e))?;
    }
    w.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush CSV '{}': {e}", path.display())))
}

/// One row per domain, months and projected date per target.
pub fn write_forecast_csv(path: &Path, view: &ForecastView) -> Result<(), AppError> {
    let mut w = csv_writer(path)?;
    let mut header = vec!["domain".to_string(), "horizon_minutes".to_string()];
    for target in &view.targets {
        header.push(format!("months_to_{}", target.label));
        header.push(format!("date_at_{}", target.label));
    }
    w.write_record(&header).map_err(|e| csv_error(path, e))?;

    for row in &view.rows {
        let mut record = vec![row.domain.clone(), format!("{:.4}", row.horizon_minutes)];
        for cell in &row.cells {
            record.push(format!("{:.2}", cell.months));
            record.push(cell.date.map(|d| d.to_string()).unwrap_or_default());
        }
        w.write_record(&record).map_err(|e| csv_error(path, e))?;
    }
    w.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush CSV '{}': {e}", path.display())))
}

/// The whole view bundle as pretty JSON.
pub fn write_views_json(path: &Path, views: &Views) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create views JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, views)
        .map_err(|e| AppError::new(2, format!("Failed to write views JSON: {e}")))?;
    Ok(())
}

fn csv_writer(path: &Path) -> Result<csv::Writer<File>, AppError> {
    csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))
}

fn csv_error(path: &Path, e: csv::Error) -> AppError {
    AppError::new(2, format!("Failed to write export CSV '{}': {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_document;
    use crate::domain::TABLE_ROW_LIMIT;

    #[test]
    fn export_all_writes_every_artifact() {
        let dir = std::env::temp_dir().join("hz-export-test");
        std::fs::remove_dir_all(&dir).ok();

        let doc = sample_document().unwrap();
        let selection = Selection::for_document(&doc);
        let written = export_all(&dir, &doc, &selection).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "records.csv",
                "ranking.csv",
                "economics.csv",
                "forecast.csv",
                "views.json"
            ]
        );

        let records = std::fs::read_to_string(&written[0]).unwrap();
        // Header plus the capped row count.
        assert_eq!(records.lines().count(), TABLE_ROW_LIMIT + 1);
        assert!(records.starts_with("benchmark,domain,model,release_date,human_minutes,score"));

        let views: serde_json::Value =
            serde_json::from_reader(File::open(&written[4]).unwrap()).unwrap();
        for key in [
            "domain_bars",
            "heatmap",
            "ranking",
            "curves",
            "economics",
            "forecast",
            "table",
        ] {
            assert!(views.get(key).is_some(), "missing view key: {key}");
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn forecast_csv_carries_target_columns() {
        let dir = std::env::temp_dir().join("hz-forecast-csv-test");
        std::fs::remove_dir_all(&dir).ok();
        std::fs::create_dir_all(&dir).unwrap();

        let doc = sample_document().unwrap();
        let selection = Selection::for_document(&doc);
        let views = Views::build(&doc, &selection);
        let path = dir.join("forecast.csv");
        write_forecast_csv(&path, &views.forecast).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let header = body.lines().next().unwrap();
        assert!(header.contains("months_to_1h"));
        assert!(header.contains("months_to_8h"));
        assert!(header.contains("date_at_1d"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
