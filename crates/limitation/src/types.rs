//! Boundary records and enums for the limitation engine.
//!
//! Everything here is plain data: serde-serializable records with
//! camelCase wire names, matching the JSON contract the presentation
//! layer consumes. Dates cross the boundary as ISO-8601 calendar dates
//! (`YYYY-MM-DD`, no time component).

use serde::{Deserialize, Serialize};
use time::Date;

// ──────────────────────────────────────────────
// Case classification enums
// ──────────────────────────────────────────────

/// Nature of the underlying case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    Civil,
    Criminal,
    Writ,
}

/// Court hierarchy levels. Rules are only defined for a subset; the
/// matcher returns an empty set for the others (e.g. writ petitions are
/// not filed in district courts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtLevel {
    CivilJudgeJunior,
    CivilJudgeSenior,
    DistrictCourt,
    Jmfc,
    Cjm,
    SessionsCourt,
    FamilyCourt,
    CommercialCourt,
    ConsumerDistrict,
    ConsumerState,
    HighCourt,
    SupremeCourt,
}

impl CourtLevel {
    /// Human-readable forum name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CourtLevel::CivilJudgeJunior => "Civil Judge (Junior Division)",
            CourtLevel::CivilJudgeSenior => "Civil Judge (Senior Division)",
            CourtLevel::DistrictCourt => "District Court",
            CourtLevel::Jmfc => "Judicial Magistrate First Class",
            CourtLevel::Cjm => "Chief Judicial Magistrate",
            CourtLevel::SessionsCourt => "Sessions Court",
            CourtLevel::FamilyCourt => "Family Court",
            CourtLevel::CommercialCourt => "Commercial Court",
            CourtLevel::ConsumerDistrict => "District Consumer Commission",
            CourtLevel::ConsumerState => "State Consumer Disputes Redressal Commission",
            CourtLevel::HighCourt => "High Court",
            CourtLevel::SupremeCourt => "Supreme Court of India",
        }
    }
}

/// Whether the judgment finally disposes of the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentType {
    Final,
    Interim,
}

/// Procedural remedy against a judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalAction {
    Appeal,
    Review,
    Revision,
    Slp,
    Execution,
    Curative,
}

impl LegalAction {
    /// Wire token, used to prefix merged audit-log steps.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalAction::Appeal => "appeal",
            LegalAction::Review => "review",
            LegalAction::Revision => "revision",
            LegalAction::Slp => "slp",
            LegalAction::Execution => "execution",
            LegalAction::Curative => "curative",
        }
    }

    /// Human-readable action name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LegalAction::Appeal => "Appeal",
            LegalAction::Review => "Review Petition",
            LegalAction::Revision => "Revision Petition",
            LegalAction::Slp => "Special Leave Petition (SLP)",
            LegalAction::Execution => "Execution Petition",
            LegalAction::Curative => "Curative Petition",
        }
    }
}

/// How statutorily certain a limitation rule is. Rates the rule, not
/// the date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Sort rank: high sorts before medium before low.
    pub fn rank(&self) -> u8 {
        match self {
            ConfidenceLevel::High => 0,
            ConfidenceLevel::Medium => 1,
            ConfidenceLevel::Low => 2,
        }
    }

    /// Fixed explanation shown alongside each option.
    pub fn explanation(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Statutory provision with clear timeline. High certainty.",
            ConfidenceLevel::Medium => {
                "Based on court rules or judicial precedent. May vary by jurisdiction."
            }
            ConfidenceLevel::Low => "Discretionary or rarely exercised remedy. Seek legal advice.",
        }
    }
}

// ──────────────────────────────────────────────
// Input records
// ──────────────────────────────────────────────

/// Dates of the certified-copy application cycle. All optional; the
/// exclusion only applies when both applied and received are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertifiedCopyDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<Date>,
}

/// A validated judgment to enumerate remedies for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInput {
    pub judgment_date: Date,
    pub case_type: CaseType,
    pub court_level: CourtLevel,
    pub judgment_type: JudgmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certified_copy: Option<CertifiedCopyDates>,
}

// ──────────────────────────────────────────────
// Computation records
// ──────────────────────────────────────────────

/// One option's computed timeline. `last_date` is never a court
/// holiday; when the raw date was one, `original_last_date` holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCalculation {
    pub start_date: Date,
    pub limitation_days: i64,
    pub excluded_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_period_description: Option<String>,
    pub last_date: Date,
    pub is_holiday_adjusted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_last_date: Option<Date>,
}

/// Append-only audit record for one computation step. Diagnostic only;
/// never consumed by control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub step: String,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
    pub timestamp: String,
}

// ──────────────────────────────────────────────
// Output records
// ──────────────────────────────────────────────

/// A fully rendered remedy option. Computed fresh relative to "now" on
/// every invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalOption {
    pub action: LegalAction,
    pub action_name: String,
    pub description: String,
    pub forum: String,
    pub forum_court: CourtLevel,
    pub limitation_period: String,
    pub limitation_days: i64,
    pub excluded_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_period_description: Option<String>,
    pub last_date: Date,
    pub formatted_last_date: String,
    /// Whole days until the deadline, clamped to 0 for expired options.
    pub days_remaining: i64,
    pub law_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub confidence_level: ConfidenceLevel,
    pub confidence_explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub is_expired: bool,
    pub calculation: DateCalculation,
}

/// The complete result of one limitation calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub input: CaseInput,
    pub options: Vec<LegalOption>,
    pub calculated_at: String,
    pub disclaimer: String,
    pub audit_log: Vec<AuditEntry>,
}

/// Counts of options by status, plus the most time-critical active one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub total_options: usize,
    pub active_options: usize,
    pub expired_options: usize,
    pub urgent_options: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_urgent: Option<LegalOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn case_input_deserializes_from_wire_json() {
        let input: CaseInput = serde_json::from_str(
            r#"{
                "judgmentDate": "2024-01-01",
                "caseType": "civil",
                "courtLevel": "district_court",
                "judgmentType": "final",
                "certifiedCopy": { "appliedDate": "2024-01-05", "receivedDate": "2024-01-10" }
            }"#,
        )
        .unwrap();
        assert_eq!(input.judgment_date, date!(2024 - 01 - 01));
        assert_eq!(input.case_type, CaseType::Civil);
        assert_eq!(input.court_level, CourtLevel::DistrictCourt);
        let copy = input.certified_copy.unwrap();
        assert_eq!(copy.applied_date, Some(date!(2024 - 01 - 05)));
        assert_eq!(copy.ready_date, None);
    }

    #[test]
    fn dates_serialize_as_iso_calendar_dates() {
        let copy = CertifiedCopyDates {
            applied_date: Some(date!(2024 - 01 - 05)),
            ready_date: None,
            received_date: Some(date!(2024 - 01 - 10)),
        };
        let json = serde_json::to_value(&copy).unwrap();
        assert_eq!(json["appliedDate"], "2024-01-05");
        assert_eq!(json["receivedDate"], "2024-01-10");
        assert!(json.get("readyDate").is_none());
    }

    #[test]
    fn consumer_forums_use_their_statutory_titles() {
        assert_eq!(
            CourtLevel::ConsumerDistrict.display_name(),
            "District Consumer Commission"
        );
        assert_eq!(
            CourtLevel::ConsumerState.display_name(),
            "State Consumer Disputes Redressal Commission"
        );
    }

    #[test]
    fn confidence_rank_orders_high_first() {
        assert!(ConfidenceLevel::High.rank() < ConfidenceLevel::Medium.rank());
        assert!(ConfidenceLevel::Medium.rank() < ConfidenceLevel::Low.rank());
    }
}
