//! Insight engine - runs the insight analyzers in presentation order

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{MoodRecord, RoutineRecord};
use crate::stats::ReportStatistics;

use super::anxiety::HighAnxietyAnalyzer;
use super::checklist::NeglectedItemAnalyzer;
use super::consistency::{BestTimeAnalyzer, CompletionRateAnalyzer, StreakAnalyzer};
use super::correlation::AnxietyDurationAnalyzer;
use super::medication::MedicationImpactAnalyzer;
use super::types::Insight;

/// Context provided to insight analyzers.
///
/// Bundles the raw period collections, the precomputed statistics, and the
/// injected reference date. Analyzers only read from it.
pub struct ReportContext<'a> {
    pub routines: &'a [RoutineRecord],
    pub moods: &'a [MoodRecord],
    pub stats: &'a ReportStatistics,
    /// Reference date for "today"; injected rather than read from the clock.
    pub today: NaiveDate,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        routines: &'a [RoutineRecord],
        moods: &'a [MoodRecord],
        stats: &'a ReportStatistics,
        today: NaiveDate,
    ) -> Self {
        Self {
            routines,
            moods,
            stats,
            today,
        }
    }

    /// Completed sessions, in input order.
    pub fn completed_routines(&self) -> impl Iterator<Item = &'a RoutineRecord> {
        self.routines.iter().filter(|r| r.completed)
    }

    /// Anxiety score per civil day. One record per day is an input invariant.
    pub fn anxiety_by_day(&self) -> HashMap<NaiveDate, u8> {
        self.moods
            .iter()
            .map(|m| (m.date, m.anxiety_score))
            .collect()
    }
}

/// Trait for insight analyzers
///
/// Each analyzer is one independent check over the period data and emits at
/// most one insight. Absence of data skips the check, never errors.
pub trait Analyzer: Send + Sync {
    /// Stable identifier, used in log events
    fn name(&self) -> &'static str;

    /// Run the check against the period data
    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight>;
}

/// The main insight engine that runs all analyzers
pub struct InsightEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in analyzers.
    ///
    /// Registration order is the order insights are presented to the user,
    /// so it is part of the contract.
    pub fn new() -> Self {
        let mut engine = Self { analyzers: vec![] };

        engine.register(Box::new(AnxietyDurationAnalyzer::new()));
        engine.register(Box::new(CompletionRateAnalyzer::new()));
        engine.register(Box::new(MedicationImpactAnalyzer::new()));
        engine.register(Box::new(BestTimeAnalyzer::new()));
        engine.register(Box::new(StreakAnalyzer::new()));
        engine.register(Box::new(HighAnxietyAnalyzer::new()));
        engine.register(Box::new(NeglectedItemAnalyzer::new()));

        engine
    }

    /// Register an insight analyzer
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    /// Run all analyzers and collect their insights in registration order
    pub fn analyze_all(&self, ctx: &ReportContext<'_>) -> Vec<Insight> {
        let mut insights = vec![];

        for analyzer in &self.analyzers {
            let insight = analyzer.analyze(ctx);
            tracing::debug!(
                analyzer = analyzer.name(),
                fired = insight.is_some(),
                "Insight check complete"
            );
            insights.extend(insight);
        }

        insights
    }

    /// Names of the registered analyzers, in run order
    pub fn analyzer_names(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }
}

/// Run the built-in analyzers over one report period.
pub fn generate_insights(
    routines: &[RoutineRecord],
    moods: &[MoodRecord],
    stats: &ReportStatistics,
    today: NaiveDate,
) -> Vec<Insight> {
    let engine = InsightEngine::new();
    let ctx = ReportContext::new(routines, moods, stats, today);
    engine.analyze_all(&ctx)
}

/// Arithmetic mean; callers guarantee a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::{InsightKind, Severity};
    use crate::stats::compute_statistics;
    use crate::test_fixtures::{day, mood_on, routine_on};

    #[test]
    fn test_engine_registers_checks_in_presentation_order() {
        let engine = InsightEngine::new();
        assert_eq!(
            engine.analyzer_names(),
            vec![
                "anxiety_duration_correlation",
                "completion_rate",
                "medication_impact",
                "best_time",
                "streak",
                "high_anxiety_pattern",
                "neglected_checklist_item",
            ]
        );
    }

    #[test]
    fn test_empty_inputs_generate_no_insights() {
        let stats = compute_statistics(&[], &[], day(20));
        let insights = generate_insights(&[], &[], &stats, day(20));
        assert!(insights.is_empty());
    }

    #[test]
    fn test_insights_preserve_presentation_order() {
        // Seven consecutive completed days ending today, strong completion
        // rate, one mood record: completion rate, best time, and streak all
        // fire, in that order.
        let today = day(10);
        let routines: Vec<_> = (4..=10).map(|d| routine_on(d, Some(600), true)).collect();
        let moods = vec![mood_on(10, 3)];

        let stats = compute_statistics(&routines, &moods, today);
        let insights = generate_insights(&routines, &moods, &stats, today);

        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0].kind, InsightKind::Achievement);
        assert_eq!(insights[0].title, "Excelente consistência!");
        assert_eq!(insights[1].title, "Seu melhor tempo");
        assert_eq!(insights[2].title, "Sequência incrível!");
        assert!(insights.iter().all(|i| i.severity == Severity::Success));
    }

    #[test]
    fn test_identical_inputs_yield_identical_insights() {
        let today = day(10);
        let routines: Vec<_> = (4..=10).map(|d| routine_on(d, Some(600), true)).collect();
        let moods: Vec<_> = (4..=10).map(|d| mood_on(d, 8)).collect();

        let stats = compute_statistics(&routines, &moods, today);
        let first = generate_insights(&routines, &moods, &stats, today);
        let second = generate_insights(&routines, &moods, &stats, today);
        assert_eq!(first, second);
    }
}
