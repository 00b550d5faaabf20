//! Domain models for Rotina
//!
//! The engine consumes two record collections supplied by the persistence
//! layer, already filtered to a user and date range and ordered by date
//! ascending. Records are plain values; the engine never mutates them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One timed occurrence of the user's morning checklist.
///
/// A session is "completed" once its end event has been recorded; completed
/// sessions carry `ended_at` and `duration_seconds`, with the duration equal
/// to `ended_at - started_at` in whole seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineRecord {
    pub id: String,
    pub user_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<u32>,
    pub took_shower: bool,
    pub got_dressed: bool,
    pub had_breakfast: bool,
    pub took_meds: bool,
    pub completed: bool,
}

impl RoutineRecord {
    /// Civil day the session belongs to, derived from its start time.
    pub fn day(&self) -> NaiveDate {
        self.started_at.date_naive()
    }

    /// Completed with a known duration; only these sessions contribute to
    /// duration statistics and correlations.
    pub fn timed(&self) -> bool {
        self.completed && self.duration_seconds.is_some()
    }
}

/// One anxiety check-in per calendar day.
///
/// Uniqueness per (user, date) is enforced upstream; the engine assumes no
/// duplicate dates within a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    /// 0 (calm) to 10 (severe), validated at ingestion.
    pub anxiety_score: u8,
    pub notes: Option<String>,
}

/// The four morning checklist items, in the fixed order used by charts and
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    Shower,
    Dressed,
    Breakfast,
    Meds,
}

impl ChecklistItem {
    /// All items in presentation order.
    pub const ALL: [ChecklistItem; 4] = [
        ChecklistItem::Shower,
        ChecklistItem::Dressed,
        ChecklistItem::Breakfast,
        ChecklistItem::Meds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shower => "shower",
            Self::Dressed => "dressed",
            Self::Breakfast => "breakfast",
            Self::Meds => "meds",
        }
    }

    /// Short chart label (pt-BR, matching the app UI).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shower => "Banho",
            Self::Dressed => "Vestir",
            Self::Breakfast => "Café",
            Self::Meds => "Remédios",
        }
    }

    /// Task name as spoken in insight text (pt-BR).
    pub fn task_name(&self) -> &'static str {
        match self {
            Self::Shower => "tomar banho",
            Self::Dressed => "se vestir",
            Self::Breakfast => "tomar café",
            Self::Meds => "tomar remédios",
        }
    }

    /// Whether the item was checked off in the given session.
    pub fn checked(&self, routine: &RoutineRecord) -> bool {
        match self {
            Self::Shower => routine.took_shower,
            Self::Dressed => routine.got_dressed,
            Self::Breakfast => routine.had_breakfast,
            Self::Meds => routine.took_meds,
        }
    }
}

impl std::str::FromStr for ChecklistItem {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "shower" => Ok(Self::Shower),
            "dressed" => Ok(Self::Dressed),
            "breakfast" => Ok(Self::Breakfast),
            "meds" => Ok(Self::Meds),
            _ => Err(format!("Unknown checklist item: {}", s)),
        }
    }
}

impl std::fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn routine() -> RoutineRecord {
        RoutineRecord {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            started_at: "2026-03-10T07:30:00Z".parse().unwrap(),
            ended_at: Some("2026-03-10T07:45:00Z".parse().unwrap()),
            duration_seconds: Some(900),
            took_shower: true,
            got_dressed: true,
            had_breakfast: false,
            took_meds: true,
            completed: true,
        }
    }

    #[test]
    fn test_routine_day_ignores_time_of_day() {
        let r = routine();
        assert_eq!(r.day(), NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
    }

    #[test]
    fn test_timed_requires_completion_and_duration() {
        let mut r = routine();
        assert!(r.timed());

        r.duration_seconds = None;
        assert!(!r.timed());

        r.duration_seconds = Some(900);
        r.completed = false;
        assert!(!r.timed());
    }

    #[test]
    fn test_checklist_item_accessors() {
        let r = routine();
        assert!(ChecklistItem::Shower.checked(&r));
        assert!(!ChecklistItem::Breakfast.checked(&r));
        assert_eq!(ChecklistItem::Meds.label(), "Remédios");
        assert_eq!(
            ChecklistItem::from_str("dressed").unwrap(),
            ChecklistItem::Dressed
        );
        assert!(ChecklistItem::from_str("laundry").is_err());
    }
}
