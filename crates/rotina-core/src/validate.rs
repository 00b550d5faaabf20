//! Ingestion-boundary validation
//!
//! The engine is total over well-formed inputs and never re-checks them;
//! producing collaborators call these validators when records enter the
//! system, so contract violations surface at ingestion rather than as
//! silently wrong statistics.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{MoodRecord, RoutineRecord};

/// Maximum anxiety score on the check-in scale.
const MAX_ANXIETY_SCORE: u8 = 10;

/// Validate a single routine session.
///
/// Completed sessions must carry an end time and a duration equal to the
/// start/end interval in whole seconds; an end time never precedes the start.
pub fn validate_routine(routine: &RoutineRecord) -> Result<()> {
    if let Some(ended_at) = routine.ended_at {
        if ended_at < routine.started_at {
            return Err(Error::InvalidData(format!(
                "session {} ends before it starts",
                routine.id
            )));
        }
    }

    if !routine.completed {
        return Ok(());
    }

    let ended_at = routine.ended_at.ok_or_else(|| {
        Error::InvalidData(format!("completed session {} has no end time", routine.id))
    })?;
    let duration = routine.duration_seconds.ok_or_else(|| {
        Error::InvalidData(format!("completed session {} has no duration", routine.id))
    })?;

    let elapsed = (ended_at - routine.started_at).num_seconds();
    if elapsed != duration as i64 {
        return Err(Error::InvalidData(format!(
            "session {}: duration {}s does not match the {}s interval",
            routine.id, duration, elapsed
        )));
    }

    Ok(())
}

/// Validate a single mood check-in.
pub fn validate_mood(mood: &MoodRecord) -> Result<()> {
    if mood.anxiety_score > MAX_ANXIETY_SCORE {
        return Err(Error::AnxietyScoreOutOfRange {
            date: mood.date,
            score: mood.anxiety_score,
        });
    }
    Ok(())
}

/// Validate whole collections as supplied to the engine, including the
/// one-check-in-per-day uniqueness invariant.
pub fn validate_collections(routines: &[RoutineRecord], moods: &[MoodRecord]) -> Result<()> {
    for routine in routines {
        validate_routine(routine)?;
    }

    let mut seen = HashSet::new();
    for mood in moods {
        validate_mood(mood)?;
        if !seen.insert(mood.date) {
            return Err(Error::DuplicateMoodDate(mood.date));
        }
    }

    Ok(())
}
