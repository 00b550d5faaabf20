//! Chart-ready series for the report UI and PDF renderer

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ChecklistItem, MoodRecord, RoutineRecord};
use crate::stats::checklist_rate;

/// One point of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Parallel label/value arrays for the checklist bar chart, in the fixed
/// item order {shower, dressed, breakfast, meds}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// All chart series for one report period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub anxiety_over_time: Vec<DataPoint>,
    pub duration_over_time: Vec<DataPoint>,
    pub checklist_completion: ChecklistSeries,
}

/// Build all chart series from the raw period collections.
///
/// Input order is preserved (the store supplies date-ascending collections).
/// Checklist rates are recomputed here so the builder can run without the
/// aggregator's output.
pub fn build_chart_series(routines: &[RoutineRecord], moods: &[MoodRecord]) -> ChartData {
    let anxiety_over_time = moods
        .iter()
        .map(|m| DataPoint {
            date: m.date.and_time(NaiveTime::MIN).and_utc(),
            value: m.anxiety_score as f64,
        })
        .collect();

    let duration_over_time = routines
        .iter()
        .filter(|r| r.timed())
        .filter_map(|r| {
            r.duration_seconds.map(|seconds| DataPoint {
                date: r.started_at,
                value: seconds as f64 / 60.0,
            })
        })
        .collect();

    let completed: Vec<&RoutineRecord> = routines.iter().filter(|r| r.completed).collect();
    let checklist_completion = ChecklistSeries {
        labels: ChecklistItem::ALL
            .iter()
            .map(|item| item.label().to_string())
            .collect(),
        values: ChecklistItem::ALL
            .iter()
            .map(|&item| checklist_rate(&completed, item))
            .collect(),
    };

    ChartData {
        anxiety_over_time,
        duration_over_time,
        checklist_completion,
    }
}
