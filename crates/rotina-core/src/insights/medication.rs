//! Medication impact on anxiety
//!
//! Compares mean anxiety on days the session included medication against
//! days it did not. Both groups need enough samples before the comparison
//! is worth reporting.

use super::engine::{mean, Analyzer, ReportContext};
use super::types::{Insight, InsightKind, Severity};

/// Minimum completed sessions before the comparison runs.
const MIN_COMPLETED_SESSIONS: usize = 5;

/// Minimum matched mood samples per medication group.
const MIN_GROUP_SAMPLES: usize = 3;

/// Mean anxiety gap that must be exceeded for the insight to fire.
const MIN_SCORE_GAP: f64 = 1.0;

pub struct MedicationImpactAnalyzer;

impl MedicationImpactAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MedicationImpactAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for MedicationImpactAnalyzer {
    fn name(&self) -> &'static str {
        "medication_impact"
    }

    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight> {
        let completed: Vec<_> = ctx.completed_routines().collect();
        if completed.len() < MIN_COMPLETED_SESSIONS {
            return None;
        }

        let anxiety_by_day = ctx.anxiety_by_day();

        let mut with_meds = Vec::new();
        let mut without_meds = Vec::new();

        for routine in &completed {
            let Some(&score) = anxiety_by_day.get(&routine.day()) else {
                continue;
            };
            if routine.took_meds {
                with_meds.push(score as f64);
            } else {
                without_meds.push(score as f64);
            }
        }

        if with_meds.len() < MIN_GROUP_SAMPLES || without_meds.len() < MIN_GROUP_SAMPLES {
            return None;
        }

        let avg_with = mean(&with_meds);
        let avg_without = mean(&without_meds);
        let diff = avg_without - avg_with;
        if diff.abs() <= MIN_SCORE_GAP {
            return None;
        }

        // Higher anxiety without meds reads as the medication helping
        let severity = if diff > 0.0 {
            Severity::Info
        } else {
            Severity::Warning
        };

        Some(Insight::new(
            InsightKind::Pattern,
            "Impacto dos Remédios",
            format!(
                "Sua ansiedade média nos dias com remédios foi {:.1}, enquanto nos \
                 dias sem remédios foi {:.1}.",
                avg_with, avg_without
            ),
            severity,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoodRecord, RoutineRecord};
    use crate::stats::compute_statistics;
    use crate::test_fixtures::{day, mood_on, routine_on};

    fn meds_routine(d: u32, took_meds: bool) -> RoutineRecord {
        let mut r = routine_on(d, Some(600), true);
        r.took_meds = took_meds;
        r
    }

    fn analyze(routines: &[RoutineRecord], moods: &[MoodRecord]) -> Option<Insight> {
        let stats = compute_statistics(routines, moods, day(20));
        let ctx = ReportContext::new(routines, moods, &stats, day(20));
        MedicationImpactAnalyzer::new().analyze(&ctx)
    }

    #[test]
    fn test_requires_five_completed_sessions() {
        let routines: Vec<_> = (1..=4).map(|d| meds_routine(d, d % 2 == 0)).collect();
        let moods: Vec<_> = (1..=4).map(|d| mood_on(d, 5)).collect();
        assert!(analyze(&routines, &moods).is_none());
    }

    #[test]
    fn test_requires_three_samples_per_group() {
        // Six sessions but only two without meds
        let routines = vec![
            meds_routine(1, true),
            meds_routine(2, true),
            meds_routine(3, true),
            meds_routine(4, true),
            meds_routine(5, false),
            meds_routine(6, false),
        ];
        let moods: Vec<_> = (1..=6).map(|d| mood_on(d, if d > 4 { 9 } else { 2 })).collect();
        assert!(analyze(&routines, &moods).is_none());
    }

    #[test]
    fn test_fires_info_when_meds_days_are_calmer() {
        let routines = vec![
            meds_routine(1, true),
            meds_routine(2, true),
            meds_routine(3, true),
            meds_routine(4, false),
            meds_routine(5, false),
            meds_routine(6, false),
        ];
        let moods = vec![
            mood_on(1, 2),
            mood_on(2, 3),
            mood_on(3, 2),
            mood_on(4, 7),
            mood_on(5, 8),
            mood_on(6, 6),
        ];

        let insight = analyze(&routines, &moods).unwrap();
        assert_eq!(insight.kind, InsightKind::Pattern);
        assert_eq!(insight.severity, Severity::Info);
        // with meds: (2+3+2)/3 = 2.3, without: (7+8+6)/3 = 7.0
        assert!(insight.description.contains("2.3"));
        assert!(insight.description.contains("7.0"));
    }

    #[test]
    fn test_fires_warning_when_meds_days_are_worse() {
        let routines = vec![
            meds_routine(1, true),
            meds_routine(2, true),
            meds_routine(3, true),
            meds_routine(4, false),
            meds_routine(5, false),
            meds_routine(6, false),
        ];
        let moods = vec![
            mood_on(1, 8),
            mood_on(2, 7),
            mood_on(3, 9),
            mood_on(4, 3),
            mood_on(5, 2),
            mood_on(6, 4),
        ];

        let insight = analyze(&routines, &moods).unwrap();
        assert_eq!(insight.severity, Severity::Warning);
    }

    #[test]
    fn test_small_gap_stays_silent() {
        let routines = vec![
            meds_routine(1, true),
            meds_routine(2, true),
            meds_routine(3, true),
            meds_routine(4, false),
            meds_routine(5, false),
            meds_routine(6, false),
        ];
        // Gap of exactly 1.0 does not exceed the threshold
        let moods = vec![
            mood_on(1, 4),
            mood_on(2, 4),
            mood_on(3, 4),
            mood_on(4, 5),
            mood_on(5, 5),
            mood_on(6, 5),
        ];
        assert!(analyze(&routines, &moods).is_none());
    }
}
