//! Anxiety × duration correlation
//!
//! Compares mean session duration on high-anxiety days (score > 6) against
//! low-anxiety days (score <= 6). Fires when the gap exceeds one minute.

use crate::format::format_duration;

use super::engine::{mean, Analyzer, ReportContext};
use super::types::{Insight, InsightKind, Severity};

/// Minimum completed, duration-known sessions before the comparison runs.
const MIN_TIMED_SESSIONS: usize = 3;

/// Mean gap, in seconds, that must be exceeded for the insight to fire.
const MIN_GAP_SECONDS: f64 = 60.0;

/// Score above which a day counts as high-anxiety.
const HIGH_ANXIETY_SCORE: u8 = 6;

pub struct AnxietyDurationAnalyzer;

impl AnxietyDurationAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnxietyDurationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for AnxietyDurationAnalyzer {
    fn name(&self) -> &'static str {
        "anxiety_duration_correlation"
    }

    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight> {
        let timed: Vec<_> = ctx.routines.iter().filter(|r| r.timed()).collect();
        if timed.len() < MIN_TIMED_SESSIONS {
            return None;
        }

        let anxiety_by_day = ctx.anxiety_by_day();

        let mut high_anxiety = Vec::new();
        let mut low_anxiety = Vec::new();

        for routine in &timed {
            let Some(&score) = anxiety_by_day.get(&routine.day()) else {
                continue;
            };
            let Some(duration) = routine.duration_seconds else {
                continue;
            };

            if score > HIGH_ANXIETY_SCORE {
                high_anxiety.push(duration as f64);
            } else {
                low_anxiety.push(duration as f64);
            }
        }

        if high_anxiety.is_empty() || low_anxiety.is_empty() {
            return None;
        }

        let diff = mean(&high_anxiety) - mean(&low_anxiety);
        if diff.abs() <= MIN_GAP_SECONDS {
            return None;
        }

        let gap = format_duration(diff.abs().round() as u32);
        let direction = if diff > 0.0 { "a mais" } else { "a menos" };
        let severity = if diff > 0.0 {
            Severity::Info
        } else {
            Severity::Success
        };

        Some(Insight::new(
            InsightKind::Correlation,
            "Correlação: Ansiedade × Duração",
            format!(
                "Nos dias com ansiedade alta (>6), sua rotina leva em média {} {} \
                 que nos dias com ansiedade baixa.",
                gap, direction
            ),
            severity,
        ))
    }
}
