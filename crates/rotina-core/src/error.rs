//! Error types for Rotina
//!
//! The engine itself is total over well-formed inputs; these errors are
//! raised only by the ingestion-boundary validators in [`crate::validate`].

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Anxiety score {score} for {date} is outside the 0-10 range")]
    AnxietyScoreOutOfRange { date: NaiveDate, score: u8 },

    #[error("Duplicate mood record for {0}; one check-in per day is expected")]
    DuplicateMoodDate(NaiveDate),
}

pub type Result<T> = std::result::Result<T, Error>;
