//! Rotina Core Library
//!
//! Deterministic insight and statistics engine for the Rotina habit and
//! mood tracker:
//! - Report statistics over routine sessions and daily anxiety check-ins
//! - Streak detection over calendar days with a completed session
//! - Templated, rule-based insights (no AI, no statistical inference)
//! - Chart-ready time series and checklist bar-chart data
//! - Report summary envelope consumed by the JSON endpoint, PDF renderer,
//!   and public share view
//! - Ingestion-boundary validation of record invariants
//!
//! The engine is pure and synchronous: it reads two already-filtered record
//! collections and an injected reference date, owns no state, and performs
//! no I/O. Identical inputs always produce identical outputs.

pub mod charts;
pub mod error;
pub mod format;
pub mod insights;
pub mod models;
pub mod report;
pub mod stats;
pub mod validate;

#[cfg(test)]
pub mod test_fixtures;

pub use charts::{build_chart_series, ChartData, ChecklistSeries, DataPoint};
pub use error::{Error, Result};
pub use insights::{
    generate_insights, Analyzer, Insight, InsightEngine, InsightKind, ReportContext, Severity,
};
pub use models::{ChecklistItem, MoodRecord, RoutineRecord};
pub use report::{generate_summary, ReportPeriod, ReportSummary};
pub use stats::{compute_statistics, ReportStatistics};
pub use validate::{validate_collections, validate_mood, validate_routine};
