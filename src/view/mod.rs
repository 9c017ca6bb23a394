//! Derived, render-ready views over a horizons document.
//!
//! Views are computed once per document/selection pair and shared by every
//! surface: the TUI draws them, the report prints them, the exporters write
//! them. They carry plain data only, no terminal types.

pub mod curves;
pub mod economics;
pub mod horizons;
pub mod records;
pub mod transform;

pub use curves::*;
pub use economics::*;
pub use horizons::*;
pub use records::*;
pub use transform::*;

use serde::Serialize;

use crate::domain::{HorizonsDoc, Selection};

/// Every derived view, built in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct Views {
    pub domain_bars: DomainBarsView,
    pub heatmap: HeatmapView,
    pub ranking: RankingView,
    pub curves: CurvesView,
    pub economics: EconomicsView,
    pub forecast: ForecastView,
    pub table: TableView,
}

impl Views {
    pub fn build(doc: &HorizonsDoc, selection: &Selection) -> Self {
        Self {
            domain_bars: horizons::domain_bars(doc, selection),
            heatmap: horizons::heatmap(doc, selection),
            ranking: horizons::ranking(doc, selection),
            curves: curves::curves(doc, selection),
            economics: economics::economics(doc, selection),
            forecast: horizons::forecast(doc, selection),
            table: records::table(doc),
        }
    }
}
