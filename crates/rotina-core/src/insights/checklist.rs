//! Most-neglected checklist item

use std::cmp::Ordering;

use crate::models::ChecklistItem;

use super::engine::{Analyzer, ReportContext};
use super::types::{Insight, InsightKind, Severity};

/// Completion rate below which the weakest item gets a reminder nudge.
const NEGLECTED_RATE: f64 = 70.0;

pub struct NeglectedItemAnalyzer;

impl NeglectedItemAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NeglectedItemAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for NeglectedItemAnalyzer {
    fn name(&self) -> &'static str {
        "neglected_checklist_item"
    }

    fn analyze(&self, ctx: &ReportContext<'_>) -> Option<Insight> {
        // Rates are all trivially 0 without completed sessions; that is
        // missing data, not neglect.
        if ctx.stats.completed_routines == 0 {
            return None;
        }

        let (item, rate) = ChecklistItem::ALL
            .iter()
            .map(|&item| (item, ctx.stats.checklist_rate(item)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))?;

        if rate >= NEGLECTED_RATE {
            return None;
        }

        Some(Insight::new(
            InsightKind::Recommendation,
            "Item mais negligenciado",
            format!(
                "Você marcou \"{}\" em apenas {:.1}% das vezes. Tente criar um \
                 lembrete para este item.",
                item.task_name(),
                rate
            ),
            Severity::Info,
        ))
    }
}
