//! High-anxiety pattern detection

use super::engine::{Analyzer, ReportContext};
use super::types::{Insight, InsightKind, Severity};

/// Score at or above which a day counts toward the pattern.
const HIGH_ANXIETY_SCORE: u8 = 7;

/// Days of high anxiety needed before the pattern is reported.
const MIN_HIGH_ANXIETY_DAYS: usize = 3;

pub struct HighAnxietyAnalyzer;

impl HighAnxietyAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighAnxietyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for HighAnxietyAnalyzer {
    fn name(&self) -> &'static str {
        "high_anxiety_pattern"
    }

    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight> {
        let high_days = ctx
            .moods
            .iter()
            .filter(|m| m.anxiety_score >= HIGH_ANXIETY_SCORE)
            .count();
        if high_days < MIN_HIGH_ANXIETY_DAYS {
            return None;
        }

        let percentage = (high_days as f64 / ctx.moods.len() as f64) * 100.0;

        Some(Insight::new(
            InsightKind::Pattern,
            "Padrão de Ansiedade Alta",
            format!(
                "Você registrou ansiedade alta (≥7) em {} dias ({:.1}% do período). \
                 Considere conversar com seu terapeuta sobre estratégias adicionais.",
                high_days, percentage
            ),
            Severity::Warning,
        ))
    }
}
