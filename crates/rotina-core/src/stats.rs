//! Report statistics aggregation
//!
//! Pure aggregation over the two input collections. Empty inputs yield
//! zeroed rates and absent extremes; the computation never fails.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ChecklistItem, MoodRecord, RoutineRecord};

/// Aggregate statistics for one report period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStatistics {
    // Morning routine
    pub total_routines: usize,
    pub completed_routines: usize,
    /// Percentage in [0, 100].
    pub completion_rate: f64,
    /// Mean duration of completed sessions, in seconds. 0 when none.
    pub average_duration: f64,
    /// Fastest completed session, in seconds.
    pub best_time: Option<u32>,
    pub best_time_date: Option<DateTime<Utc>>,
    /// Slowest completed session, in seconds.
    pub worst_time: Option<u32>,
    pub worst_time_date: Option<DateTime<Utc>>,

    // Anxiety
    pub average_anxiety: f64,
    pub lowest_anxiety: Option<u8>,
    pub lowest_anxiety_date: Option<NaiveDate>,
    pub highest_anxiety: Option<u8>,
    pub highest_anxiety_date: Option<NaiveDate>,

    // Checklist, over completed sessions only
    pub shower_completion_rate: f64,
    pub dressed_completion_rate: f64,
    pub breakfast_completion_rate: f64,
    pub meds_completion_rate: f64,

    // Streaks of consecutive days with a completed session
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl ReportStatistics {
    /// Checklist completion rate for one item.
    pub fn checklist_rate(&self, item: ChecklistItem) -> f64 {
        match item {
            ChecklistItem::Shower => self.shower_completion_rate,
            ChecklistItem::Dressed => self.dressed_completion_rate,
            ChecklistItem::Breakfast => self.breakfast_completion_rate,
            ChecklistItem::Meds => self.meds_completion_rate,
        }
    }
}

/// Compute all report statistics for a period.
///
/// `today` is the reference date used by the streak computation; injecting it
/// keeps the function deterministic and testable. Ties for best/worst
/// duration and lowest/highest anxiety go to the first matching record in
/// input order (collections arrive date-ascending from the store).
pub fn compute_statistics(
    routines: &[RoutineRecord],
    moods: &[MoodRecord],
    today: NaiveDate,
) -> ReportStatistics {
    let completed: Vec<&RoutineRecord> = routines.iter().filter(|r| r.completed).collect();
    let durations: Vec<u32> = completed.iter().filter_map(|r| r.duration_seconds).collect();

    let total_routines = routines.len();
    let completed_routines = completed.len();
    let completion_rate = if total_routines > 0 {
        (completed_routines as f64 / total_routines as f64) * 100.0
    } else {
        0.0
    };

    let average_duration = if durations.is_empty() {
        0.0
    } else {
        durations.iter().map(|&d| d as f64).sum::<f64>() / durations.len() as f64
    };

    let best_time = durations.iter().min().copied();
    let worst_time = durations.iter().max().copied();
    let best_time_date = best_time
        .and_then(|best| completed.iter().find(|r| r.duration_seconds == Some(best)))
        .map(|r| r.started_at);
    let worst_time_date = worst_time
        .and_then(|worst| completed.iter().find(|r| r.duration_seconds == Some(worst)))
        .map(|r| r.started_at);

    let average_anxiety = if moods.is_empty() {
        0.0
    } else {
        moods.iter().map(|m| m.anxiety_score as f64).sum::<f64>() / moods.len() as f64
    };

    let lowest = moods
        .iter()
        .map(|m| m.anxiety_score)
        .min()
        .and_then(|score| moods.iter().find(|m| m.anxiety_score == score));
    let highest = moods
        .iter()
        .map(|m| m.anxiety_score)
        .max()
        .and_then(|score| moods.iter().find(|m| m.anxiety_score == score));

    let (current_streak, longest_streak) = calculate_streaks(routines, today);

    ReportStatistics {
        total_routines,
        completed_routines,
        completion_rate,
        average_duration,
        best_time,
        best_time_date,
        worst_time,
        worst_time_date,
        average_anxiety,
        lowest_anxiety: lowest.map(|m| m.anxiety_score),
        lowest_anxiety_date: lowest.map(|m| m.date),
        highest_anxiety: highest.map(|m| m.anxiety_score),
        highest_anxiety_date: highest.map(|m| m.date),
        shower_completion_rate: checklist_rate(&completed, ChecklistItem::Shower),
        dressed_completion_rate: checklist_rate(&completed, ChecklistItem::Dressed),
        breakfast_completion_rate: checklist_rate(&completed, ChecklistItem::Breakfast),
        meds_completion_rate: checklist_rate(&completed, ChecklistItem::Meds),
        current_streak,
        longest_streak,
    }
}

/// Share of completed sessions with the given item checked, as a percentage.
pub(crate) fn checklist_rate(completed: &[&RoutineRecord], item: ChecklistItem) -> f64 {
    if completed.is_empty() {
        return 0.0;
    }
    let checked = completed.iter().filter(|r| item.checked(r)).count();
    (checked as f64 / completed.len() as f64) * 100.0
}

/// Current and longest streak of consecutive days with a completed session.
///
/// A run extends when the next distinct day is exactly one day later. The
/// current streak is the run ending today or yesterday; a routine not yet
/// logged today keeps yesterday's streak alive, two missed days zero it.
fn calculate_streaks(routines: &[RoutineRecord], today: NaiveDate) -> (u32, u32) {
    let mut days: Vec<NaiveDate> = routines
        .iter()
        .filter(|r| r.completed)
        .map(|r| r.day())
        .collect();
    days.sort_unstable();
    days.dedup();

    let mut longest = 0u32;
    let mut current = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for day in days {
        run = match prev {
            Some(p) if day - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        if day == today || today - day == Duration::days(1) {
            current = run;
        }
        prev = Some(day);
    }

    (current, longest)
}
