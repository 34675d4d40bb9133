//! Limitation calculation orchestrator.
//!
//! Validates the case input, matches rules, computes each deadline via
//! the calendar, assembles rendered options, sorts them so the most
//! time-critical and most certain option surfaces first, and bundles
//! the merged audit log.

use serde_json::json;
use time::OffsetDateTime;

use crate::calendar::{self, HolidayCalendar};
use crate::error::LimitationError;
use crate::rules::{find_applicable_rules, LimitationRule};
use crate::types::{
    AuditEntry, CalculationResult, CaseInput, CourtLevel, LegalAction, LegalOption, ResultsSummary,
};

const DISCLAIMER: &str = "IMPORTANT DISCLAIMER:\n\
This tool provides indicative timelines based on general provisions of law.\n\
It is NOT legal advice. Actual limitation periods may vary based on:\n\
- Specific court rules and practice directions\n\
- Judicial interpretation and discretion\n\
- State-specific variations\n\
- Individual case circumstances\n\
\n\
Please consult a qualified legal professional before taking any action.\n\
The creators of this tool are not liable for any decisions made based on this information.";

/// Enumerate every available remedy for a judgment, with deadlines.
///
/// Captures "now" once at entry and uses the national holiday calendar.
/// Returns a validation error for inconsistent dates; an empty option
/// list (no error) when no rule matches.
pub fn calculate_limitation(input: &CaseInput) -> Result<CalculationResult, LimitationError> {
    calculate_limitation_at(&HolidayCalendar::national(), input, OffsetDateTime::now_utc())
}

/// Deterministic core of [`calculate_limitation`]: calendar and clock
/// are supplied by the caller.
pub fn calculate_limitation_at(
    calendar: &HolidayCalendar,
    input: &CaseInput,
    now: OffsetDateTime,
) -> Result<CalculationResult, LimitationError> {
    let today = now.date();
    let timestamp = calendar::rfc3339(now);
    let mut master_log = Vec::new();

    validate_input(input, today)?;
    master_log.push(AuditEntry {
        step: "Input validation".to_string(),
        input: json!({ "caseInput": input }),
        output: json!({ "isValid": true }),
        timestamp: timestamp.clone(),
    });

    let applicable_rules =
        find_applicable_rules(input.case_type, input.court_level, input.judgment_type);
    master_log.push(AuditEntry {
        step: "Find applicable rules".to_string(),
        input: json!({
            "caseType": input.case_type,
            "courtLevel": input.court_level,
            "judgmentType": input.judgment_type,
        }),
        output: json!({
            "rulesFound": applicable_rules.len(),
            "ruleIds": applicable_rules.iter().map(|r| r.id).collect::<Vec<_>>(),
        }),
        timestamp: timestamp.clone(),
    });

    let mut options = Vec::with_capacity(applicable_rules.len());
    for rule in applicable_rules {
        options.push(build_option(calendar, input, rule, &mut master_log, now)?);
    }

    // Not-expired before expired, then ascending days remaining, then
    // confidence rank. Expired options all clamp to zero days, so the
    // confidence tie-break orders them.
    options.sort_by_key(|option| {
        (
            option.is_expired,
            option.days_remaining,
            option.confidence_level.rank(),
        )
    });

    Ok(CalculationResult {
        input: input.clone(),
        options,
        calculated_at: timestamp,
        disclaimer: DISCLAIMER.to_string(),
        audit_log: master_log,
    })
}

/// Counts by status plus the most time-critical active option (first
/// active option post-sort).
pub fn results_summary(result: &CalculationResult) -> ResultsSummary {
    let active: Vec<_> = result.options.iter().filter(|o| !o.is_expired).collect();
    let expired_options = result.options.len() - active.len();
    let urgent_options = active.iter().filter(|o| o.days_remaining <= 7).count();

    ResultsSummary {
        total_options: result.options.len(),
        active_options: active.len(),
        expired_options,
        urgent_options,
        most_urgent: active.first().map(|o| (*o).clone()),
    }
}

// ──────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────

/// Fail fast on the first violated date invariant.
fn validate_input(input: &CaseInput, today: time::Date) -> Result<(), LimitationError> {
    if input.judgment_date > today {
        return Err(LimitationError::JudgmentDateInFuture(input.judgment_date));
    }

    let Some(copy) = &input.certified_copy else {
        return Ok(());
    };

    if let Some(applied) = copy.applied_date {
        if applied < input.judgment_date {
            return Err(LimitationError::CopyAppliedBeforeJudgment {
                applied,
                judgment: input.judgment_date,
            });
        }
        if applied > today {
            return Err(LimitationError::CopyAppliedInFuture(applied));
        }
        if let Some(ready) = copy.ready_date {
            if ready < applied {
                return Err(LimitationError::CopyReadyBeforeApplied { ready, applied });
            }
        }
        if let Some(received) = copy.received_date {
            if received < applied {
                return Err(LimitationError::CopyReceivedBeforeApplied { received, applied });
            }
            if received > today {
                return Err(LimitationError::CopyReceivedInFuture(received));
            }
        }
    } else if copy.received_date.is_some() {
        return Err(LimitationError::CopyReceivedWithoutApplied);
    }

    Ok(())
}

// ──────────────────────────────────────────────
// Option assembly
// ──────────────────────────────────────────────

fn build_option(
    calendar: &HolidayCalendar,
    input: &CaseInput,
    rule: &LimitationRule,
    master_log: &mut Vec<AuditEntry>,
    now: OffsetDateTime,
) -> Result<LegalOption, LimitationError> {
    let today = now.date();
    let (calculation, audit_log) = calendar.compute_deadline(
        input.judgment_date,
        rule.limitation_days,
        input.certified_copy.as_ref(),
        rule.copy_exclusion_allowed,
        now,
    )?;

    master_log.push(AuditEntry {
        step: format!("Calculate {} limitation", rule.action.as_str()),
        input: json!({ "rule": rule.id, "limitationDays": rule.limitation_days }),
        output: json!({
            "lastDate": calculation.last_date.to_string(),
            "excludedDays": calculation.excluded_days,
        }),
        timestamp: calendar::rfc3339(now),
    });
    // Per-rule entries are merged into the master log with the action
    // prefixed so interleaved steps stay traceable.
    for entry in audit_log {
        master_log.push(AuditEntry {
            step: format!("[{}] {}", rule.action.as_str(), entry.step),
            ..entry
        });
    }

    let days_remaining = calendar::days_remaining(calculation.last_date, today);
    let is_expired = calendar::is_expired(calculation.last_date, today);

    Ok(LegalOption {
        action: rule.action,
        action_name: rule.action.display_name().to_string(),
        description: action_description(rule),
        forum: rule.to_court.display_name().to_string(),
        forum_court: rule.to_court,
        limitation_period: format_limitation_period(rule.limitation_days),
        limitation_days: rule.limitation_days,
        excluded_days: calculation.excluded_days,
        excluded_period_description: calculation.excluded_period_description.clone(),
        last_date: calculation.last_date,
        formatted_last_date: calendar::format_display_date(calculation.last_date),
        days_remaining: days_remaining.max(0),
        law_reference: rule.law_reference.to_string(),
        section: (!rule.section.is_empty()).then(|| rule.section.to_string()),
        confidence_level: rule.confidence_level,
        confidence_explanation: rule.confidence_level.explanation().to_string(),
        additional_notes: (!rule.additional_notes.is_empty())
            .then(|| rule.additional_notes.to_string()),
        is_expired,
        calculation,
    })
}

/// Templated description, one per action type, referencing the
/// destination court.
fn action_description(rule: &LimitationRule) -> String {
    let to_court = rule.to_court.display_name();
    match rule.action {
        LegalAction::Appeal => {
            let against = if rule.from_court == CourtLevel::DistrictCourt {
                "decree"
            } else {
                "judgment/order"
            };
            format!("File an appeal against the {} in the {}.", against, to_court)
        }
        LegalAction::Review => format!(
            "File a review petition in the same court ({}) if there is an error apparent on the face of the record.",
            rule.from_court.display_name()
        ),
        LegalAction::Revision => format!(
            "File a revision petition in the {} to examine the legality or propriety of the order.",
            to_court
        ),
        LegalAction::Slp => {
            "File a Special Leave Petition in the Supreme Court under Article 136 of the Constitution."
                .to_string()
        }
        LegalAction::Execution => format!(
            "File an execution petition to enforce the decree in the {}.",
            to_court
        ),
        LegalAction::Curative => {
            "File a curative petition in the Supreme Court as a last resort after review is dismissed."
                .to_string()
        }
    }
}

/// "90 days", "1 year 30 days", "12 years".
fn format_limitation_period(days: i64) -> String {
    if days < 365 {
        return format!("{} days", days);
    }
    let years = days / 365;
    let remaining = days % 365;
    let plural = if years > 1 { "s" } else { "" };
    if remaining == 0 {
        format!("{} year{}", years, plural)
    } else {
        format!("{} year{} {} days", years, plural, remaining)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
