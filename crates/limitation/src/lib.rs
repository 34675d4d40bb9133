//! Limitation-period engine for Indian procedural remedies.
//!
//! Given a judgment (case type, originating court, judgment type, date),
//! the engine enumerates every procedural remedy available -- appeal,
//! review, revision, SLP, execution, curative -- with its statutory
//! deadline adjusted for the certified-copy exclusion and court
//! holidays. Every computation step is recorded in an append-only audit
//! log; the log is a side channel and is never consumed by control flow.
//!
//! The engine is deterministic and side-effect-free: const rule tables,
//! no I/O, no shared mutable state. "Now" is captured once per
//! top-level call.

pub mod calendar;
pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

pub use calendar::HolidayCalendar;
pub use engine::{calculate_limitation, calculate_limitation_at, results_summary};
pub use error::LimitationError;
pub use rules::{find_applicable_rules, LimitationRule, LIMITATION_RULES};
pub use types::{
    AuditEntry, CalculationResult, CaseInput, CaseType, CertifiedCopyDates, ConfidenceLevel,
    CourtLevel, DateCalculation, JudgmentType, LegalAction, LegalOption, ResultsSummary,
};
