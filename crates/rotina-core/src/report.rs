//! Report summary assembly
//!
//! Composes the three engine stages into the `{statistics, insights, charts}`
//! envelope the report endpoint, PDF renderer, and public share view all
//! consume. Pure: the caller resolves the user and fetches the period
//! collections first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::charts::{build_chart_series, ChartData};
use crate::insights::{generate_insights, Insight};
use crate::models::{MoodRecord, RoutineRecord};
use crate::stats::{compute_statistics, ReportStatistics};

/// Inclusive date bounds of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Everything a rendered report needs for one user and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub user_id: String,
    pub user_name: String,
    pub period: ReportPeriod,
    pub statistics: ReportStatistics,
    pub insights: Vec<Insight>,
    pub charts: ChartData,
}

/// Run the full pipeline over already-fetched period collections.
///
/// `today` is the reference date for streak computation, injected for
/// determinism.
pub fn generate_summary(
    user_id: impl Into<String>,
    user_name: impl Into<String>,
    period: ReportPeriod,
    routines: &[RoutineRecord],
    moods: &[MoodRecord],
    today: NaiveDate,
) -> ReportSummary {
    let statistics = compute_statistics(routines, moods, today);
    let insights = generate_insights(routines, moods, &statistics, today);
    let charts = build_chart_series(routines, moods);

    tracing::debug!(
        routines = routines.len(),
        moods = moods.len(),
        insights = insights.len(),
        "Report summary assembled"
    );

    ReportSummary {
        user_id: user_id.into(),
        user_name: user_name.into(),
        period,
        statistics,
        insights,
        charts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{day, mood_on, routine_on};

    fn period() -> ReportPeriod {
        ReportPeriod {
            from: day(1),
            to: day(20),
        }
    }

    #[test]
    fn test_envelope_carries_all_three_outputs() {
        let today = day(10);
        let routines: Vec<_> = (4..=10).map(|d| routine_on(d, Some(600), true)).collect();
        let moods: Vec<_> = (4..=10).map(|d| mood_on(d, 4)).collect();

        let summary = generate_summary("u1", "Ana", period(), &routines, &moods, today);

        assert_eq!(summary.user_name, "Ana");
        assert_eq!(summary.statistics.total_routines, 7);
        assert_eq!(summary.statistics.current_streak, 7);
        assert!(!summary.insights.is_empty());
        assert_eq!(summary.charts.anxiety_over_time.len(), 7);
    }

    #[test]
    fn test_two_moods_and_no_routines() {
        // Two check-ins, nothing else: no high-anxiety pattern (needs three
        // days) and no completion feedback (no sessions to rate).
        let moods = vec![mood_on(9, 8), mood_on(10, 2)];
        let summary = generate_summary("u1", "Ana", period(), &[], &moods, day(10));

        assert!(summary.insights.is_empty());
        assert_eq!(summary.statistics.completion_rate, 0.0);
        assert_eq!(summary.statistics.average_anxiety, 5.0);
        assert_eq!(summary.charts.anxiety_over_time.len(), 2);
    }

    #[test]
    fn test_summary_is_deterministic() {
        let today = day(10);
        let routines: Vec<_> = (1..=10).map(|d| routine_on(d, Some(500 + d * 10), true)).collect();
        let moods: Vec<_> = (1..=10).map(|d| mood_on(d, (d % 10) as u8)).collect();

        let first = generate_summary("u1", "Ana", period(), &routines, &moods, today);
        let second = generate_summary("u1", "Ana", period(), &routines, &moods, today);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_json_envelope_shape() {
        let summary = generate_summary("u1", "Ana", period(), &[], &[], day(10));
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json["statistics"]["completion_rate"].is_number());
        assert!(json["insights"].as_array().unwrap().is_empty());
        assert_eq!(
            json["charts"]["checklist_completion"]["labels"][0],
            "Banho"
        );
        assert_eq!(json["period"]["from"], "2026-03-01");
    }
}
