//! Shared fixtures for unit tests

use chrono::{Duration, NaiveDate};

use crate::models::{MoodRecord, RoutineRecord};

/// A day in March 2026; tests pass day-of-month numbers around it.
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

/// A 7:30 session on the given day with every checklist item marked.
pub fn routine_on(d: u32, duration: Option<u32>, completed: bool) -> RoutineRecord {
    let started_at = day(d).and_hms_opt(7, 30, 0).unwrap().and_utc();
    RoutineRecord {
        id: format!("r{}-{}", d, duration.unwrap_or(0)),
        user_id: "u1".to_string(),
        started_at,
        ended_at: duration.map(|s| started_at + Duration::seconds(s as i64)),
        duration_seconds: duration,
        took_shower: true,
        got_dressed: true,
        had_breakfast: true,
        took_meds: true,
        completed,
    }
}

/// A mood check-in for the given day.
pub fn mood_on(d: u32, score: u8) -> MoodRecord {
    MoodRecord {
        id: format!("m{}", d),
        user_id: "u1".to_string(),
        date: day(d),
        anxiety_score: score,
        notes: None,
    }
}
