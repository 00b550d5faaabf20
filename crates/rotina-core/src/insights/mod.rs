//! Insight Engine - deterministic report observations
//!
//! Derives short, templated observations from the period data without any
//! predictive model: plain thresholds and two-group mean comparisons. Each
//! analyzer is an independent check; together they run in a fixed
//! presentation order and silently skip when their data is absent.
//!
//! ## Built-in checks, in order
//!
//! - **Anxiety × duration correlation** - compares session length on high-
//!   vs low-anxiety days
//! - **Completion rate** - praise above 80%, a nudge below 50%
//! - **Medication impact** - mean anxiety with vs without medication
//! - **Best time** - fastest session of the period
//! - **Streak** - celebrates seven or more consecutive days
//! - **High-anxiety pattern** - three or more days scoring >= 7
//! - **Neglected checklist item** - weakest item under 70%
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rotina_core::insights::{InsightEngine, ReportContext};
//!
//! let stats = rotina_core::compute_statistics(&routines, &moods, today);
//! let engine = InsightEngine::new();
//! let ctx = ReportContext::new(&routines, &moods, &stats, today);
//! let insights = engine.analyze_all(&ctx);
//! ```

pub mod anxiety;
pub mod checklist;
pub mod consistency;
pub mod correlation;
pub mod engine;
pub mod medication;
pub mod types;

pub use anxiety::HighAnxietyAnalyzer;
pub use checklist::NeglectedItemAnalyzer;
pub use consistency::{BestTimeAnalyzer, CompletionRateAnalyzer, StreakAnalyzer};
pub use correlation::AnxietyDurationAnalyzer;
pub use engine::{generate_insights, Analyzer, InsightEngine, ReportContext};
pub use medication::MedicationImpactAnalyzer;
pub use types::{Insight, InsightKind, Severity};
