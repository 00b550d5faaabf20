//! Consistency feedback
//!
//! Three checks over the aggregated statistics: completion-rate feedback,
//! the best-time record, and the current-streak celebration.

use crate::format::{format_date, format_duration};

use super::engine::{Analyzer, ReportContext};
use super::types::{Insight, InsightKind, Severity};

/// Completion rate at or above this earns the congratulatory insight.
const GOOD_COMPLETION_RATE: f64 = 80.0;

/// Completion rate below this triggers the improvement recommendation.
const LOW_COMPLETION_RATE: f64 = 50.0;

/// Days of consecutive completion worth celebrating.
const STREAK_CELEBRATION_DAYS: u32 = 7;

/// Completion-rate feedback. An empty routine collection is "no data", not
/// low performance, so neither band fires without sessions.
pub struct CompletionRateAnalyzer;

impl CompletionRateAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompletionRateAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for CompletionRateAnalyzer {
    fn name(&self) -> &'static str {
        "completion_rate"
    }

    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight> {
        if ctx.stats.total_routines == 0 {
            return None;
        }

        let rate = ctx.stats.completion_rate;
        if rate >= GOOD_COMPLETION_RATE {
            Some(Insight::new(
                InsightKind::Achievement,
                "Excelente consistência!",
                format!(
                    "Você completou {:.1}% das rotinas neste período. Continue assim!",
                    rate
                ),
                Severity::Success,
            ))
        } else if rate < LOW_COMPLETION_RATE {
            Some(Insight::new(
                InsightKind::Recommendation,
                "Oportunidade de melhoria",
                format!(
                    "Sua taxa de conclusão está em {:.1}%. Tente definir um horário \
                     fixo para a rotina da manhã.",
                    rate
                ),
                Severity::Warning,
            ))
        } else {
            None
        }
    }
}

/// Celebrates the fastest completed session of the period.
pub struct BestTimeAnalyzer;

impl BestTimeAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BestTimeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for BestTimeAnalyzer {
    fn name(&self) -> &'static str {
        "best_time"
    }

    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight> {
        let best = ctx.stats.best_time?;
        let date = ctx.stats.best_time_date?;

        Some(Insight::new(
            InsightKind::Achievement,
            "Seu melhor tempo",
            format!(
                "Seu recorde foi de {} no dia {}.",
                format_duration(best),
                format_date(date.date_naive())
            ),
            Severity::Success,
        ))
    }
}

/// Celebrates a live streak of at least a week.
pub struct StreakAnalyzer;

impl StreakAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StreakAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StreakAnalyzer {
    fn name(&self) -> &'static str {
        "streak"
    }

    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight> {
        let streak = ctx.stats.current_streak;
        if streak < STREAK_CELEBRATION_DAYS {
            return None;
        }

        Some(Insight::new(
            InsightKind::Achievement,
            "Sequência incrível!",
            format!(
                "Você está há {} dias consecutivos completando sua rotina! 🔥",
                streak
            ),
            Severity::Success,
        ))
    }
}
