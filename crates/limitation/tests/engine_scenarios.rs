//! End-to-end limitation scenarios.
//!
//! Exercises the full pipeline (validation, rule matching, calendar
//! arithmetic, option rendering, sorting, audit log) against a pinned
//! clock. Organized by category:
//!   A. Certified-copy exclusion end to end
//!   B. Criminal and writ matrices
//!   C. Sorting and summary
//!   D. Wire shape
//!   E. Determinism
//!
//! All scenarios evaluate at 2024-06-01 12:00 UTC against the national
//! holiday calendar, so every expected date is checkable by hand.

use adalat_limitation::{
    calculate_limitation_at, results_summary, CaseInput, CaseType, CertifiedCopyDates,
    CourtLevel, HolidayCalendar, JudgmentType, LegalAction,
};
use time::macros::{date, datetime};
use time::OffsetDateTime;

// ──────────────────────────────────────────────
// Test helpers
// ──────────────────────────────────────────────

fn now() -> OffsetDateTime {
    datetime!(2024-06-01 12:00:00 UTC)
}

fn run(input: &CaseInput) -> adalat_limitation::CalculationResult {
    calculate_limitation_at(&HolidayCalendar::national(), input, now())
        .expect("scenario input is valid")
}

fn case(
    judgment_date: time::Date,
    case_type: CaseType,
    court_level: CourtLevel,
    judgment_type: JudgmentType,
) -> CaseInput {
    CaseInput {
        judgment_date,
        case_type,
        court_level,
        judgment_type,
        certified_copy: None,
    }
}

// ──────────────────────────────────────────────
// A. Certified-copy exclusion end to end
// ──────────────────────────────────────────────

#[test]
fn copy_exclusion_shifts_every_copy_eligible_option() {
    // Civil District Court decree of 2024-01-01; copy applied Jan 5,
    // received Jan 15: 11 days excluded.
    let mut input = case(
        date!(2024 - 01 - 01),
        CaseType::Civil,
        CourtLevel::DistrictCourt,
        JudgmentType::Final,
    );
    input.certified_copy = Some(CertifiedCopyDates {
        applied_date: Some(date!(2024 - 01 - 05)),
        ready_date: None,
        received_date: Some(date!(2024 - 01 - 15)),
    });
    let result = run(&input);

    // Appeal: 90 + 11 days from Jan 2 lands on Idul Fitr (Thursday
    // 2024-04-11), so the deadline rolls to Friday 2024-04-12.
    let appeal = result
        .options
        .iter()
        .find(|o| o.action == LegalAction::Appeal)
        .unwrap();
    assert_eq!(appeal.excluded_days, 11);
    assert_eq!(appeal.calculation.original_last_date, Some(date!(2024 - 04 - 11)));
    assert_eq!(appeal.last_date, date!(2024 - 04 - 12));
    assert!(appeal.is_expired);
    assert_eq!(appeal.days_remaining, 0);
    assert!(appeal
        .excluded_period_description
        .as_deref()
        .unwrap()
        .contains("11 days excluded"));

    // Execution disallows the copy exclusion: 12 years straight.
    let execution = result
        .options
        .iter()
        .find(|o| o.action == LegalAction::Execution)
        .unwrap();
    assert_eq!(execution.excluded_days, 0);
    assert!(!execution.is_expired);

    // The audit log carries the per-rule exclusion step, prefixed.
    assert!(result
        .audit_log
        .iter()
        .any(|e| e.step == "[appeal] Apply certified copy exclusion (Section 12(2))"));
}

#[test]
fn copy_dates_must_be_consistent() {
    let mut input = case(
        date!(2024 - 01 - 01),
        CaseType::Civil,
        CourtLevel::DistrictCourt,
        JudgmentType::Final,
    );
    input.certified_copy = Some(CertifiedCopyDates {
        applied_date: Some(date!(2024 - 01 - 15)),
        ready_date: None,
        received_date: Some(date!(2024 - 01 - 05)),
    });
    assert!(calculate_limitation_at(&HolidayCalendar::national(), &input, now()).is_err());
}

// ──────────────────────────────────────────────
// B. Criminal and writ matrices
// ──────────────────────────────────────────────

#[test]
fn criminal_sessions_conviction_has_sixty_day_appeal() {
    // Conviction 2024-05-01: 60 days is Sunday 2024-06-30, rolling to
    // Monday 2024-07-01; revision runs 90 days to Tuesday 2024-07-30.
    let result = run(&case(
        date!(2024 - 05 - 01),
        CaseType::Criminal,
        CourtLevel::SessionsCourt,
        JudgmentType::Final,
    ));
    assert_eq!(result.options.len(), 2);

    let appeal = &result.options[0];
    assert_eq!(appeal.action, LegalAction::Appeal);
    assert_eq!(appeal.limitation_days, 60);
    assert_eq!(appeal.last_date, date!(2024 - 07 - 01));
    assert!(appeal.calculation.is_holiday_adjusted);
    assert_eq!(appeal.days_remaining, 30);
    assert_eq!(appeal.forum, "High Court");

    let revision = &result.options[1];
    assert_eq!(revision.action, LegalAction::Revision);
    assert_eq!(revision.last_date, date!(2024 - 07 - 30));
    assert_eq!(revision.days_remaining, 59);
}

#[test]
fn family_court_decree_has_thirty_day_appeal_to_hc() {
    // Family Court decree of 2024-05-15. Section 19(3) shortens the
    // appeal to 30 days: Friday 2024-06-14, 13 days out. Review shares
    // the deadline and sorts after the appeal on confidence.
    let result = run(&case(
        date!(2024 - 05 - 15),
        CaseType::Civil,
        CourtLevel::FamilyCourt,
        JudgmentType::Final,
    ));
    let actions: Vec<_> = result.options.iter().map(|o| o.action).collect();
    assert_eq!(
        actions,
        vec![
            LegalAction::Appeal,
            LegalAction::Review,
            LegalAction::Execution
        ]
    );

    let appeal = &result.options[0];
    assert_eq!(appeal.limitation_period, "30 days");
    assert_eq!(appeal.last_date, date!(2024 - 06 - 14));
    assert_eq!(appeal.days_remaining, 13);
    assert_eq!(appeal.forum, "High Court");
    assert!(appeal.law_reference.contains("Family Courts Act"));
}

#[test]
fn magistrate_conviction_appeals_to_sessions_court() {
    // JMFC conviction 2024-05-15: 30-day appeal to Sessions Court,
    // Friday 2024-06-14, under the renumbered BNSS citation.
    let result = run(&case(
        date!(2024 - 05 - 15),
        CaseType::Criminal,
        CourtLevel::Jmfc,
        JudgmentType::Final,
    ));
    let appeal = result
        .options
        .iter()
        .find(|o| o.action == LegalAction::Appeal)
        .unwrap();
    assert_eq!(appeal.forum, "Sessions Court");
    assert_eq!(appeal.last_date, date!(2024 - 06 - 14));
    assert!(appeal.law_reference.contains("Section 417, BNSS 2023"));
}

#[test]
fn interim_writ_order_only_allows_slp() {
    let result = run(&case(
        date!(2024 - 05 - 01),
        CaseType::Writ,
        CourtLevel::HighCourt,
        JudgmentType::Interim,
    ));
    let actions: Vec<_> = result.options.iter().map(|o| o.action).collect();
    assert_eq!(actions, vec![LegalAction::Slp]);
    assert_eq!(result.options[0].last_date, date!(2024 - 07 - 30));
}

#[test]
fn supreme_court_judgment_offers_review_then_curative() {
    // Both run 30 days from 2024-05-20 to Wednesday 2024-06-19; equal
    // deadlines order by confidence (review is the settled remedy).
    let result = run(&case(
        date!(2024 - 05 - 20),
        CaseType::Civil,
        CourtLevel::SupremeCourt,
        JudgmentType::Final,
    ));
    let actions: Vec<_> = result.options.iter().map(|o| o.action).collect();
    assert_eq!(actions, vec![LegalAction::Review, LegalAction::Curative]);
    assert_eq!(result.options[0].last_date, date!(2024 - 06 - 19));
    assert_eq!(result.options[1].last_date, date!(2024 - 06 - 19));
}

// ──────────────────────────────────────────────
// C. Sorting and summary
// ──────────────────────────────────────────────

#[test]
fn expired_options_sort_last_and_clamp_to_zero() {
    // Old decree: every 90-day remedy is long expired, execution alone
    // survives and must sort first.
    let result = run(&case(
        date!(2024 - 01 - 01),
        CaseType::Civil,
        CourtLevel::DistrictCourt,
        JudgmentType::Final,
    ));
    let actions: Vec<_> = result.options.iter().map(|o| o.action).collect();
    assert_eq!(
        actions,
        vec![
            LegalAction::Execution,
            LegalAction::Appeal,
            LegalAction::Review,
            LegalAction::Revision
        ]
    );
    for expired in &result.options[1..] {
        assert!(expired.is_expired);
        assert_eq!(expired.days_remaining, 0);
    }

    let summary = results_summary(&result);
    assert_eq!(summary.total_options, 4);
    assert_eq!(summary.active_options, 1);
    assert_eq!(summary.expired_options, 3);
    assert_eq!(summary.most_urgent.unwrap().action, LegalAction::Execution);
}

#[test]
fn urgent_window_is_seven_days() {
    // Review of a 2024-05-06 HC judgment runs to Wednesday 2024-06-05:
    // four days out, so it is both urgent and most urgent.
    let result = run(&case(
        date!(2024 - 05 - 06),
        CaseType::Civil,
        CourtLevel::HighCourt,
        JudgmentType::Final,
    ));
    let summary = results_summary(&result);
    assert_eq!(summary.urgent_options, 1);
    let most_urgent = summary.most_urgent.unwrap();
    assert_eq!(most_urgent.action, LegalAction::Review);
    assert_eq!(most_urgent.days_remaining, 4);
}

// ──────────────────────────────────────────────
// D. Wire shape
// ──────────────────────────────────────────────

#[test]
fn result_serializes_with_camel_case_wire_names() {
    let result = run(&case(
        date!(2024 - 05 - 01),
        CaseType::Criminal,
        CourtLevel::SessionsCourt,
        JudgmentType::Final,
    ));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["input"]["caseType"], "criminal");
    assert_eq!(json["input"]["courtLevel"], "sessions_court");
    assert_eq!(json["calculatedAt"], "2024-06-01T12:00:00Z");
    assert!(json["disclaimer"]
        .as_str()
        .unwrap()
        .starts_with("IMPORTANT DISCLAIMER:"));

    let appeal = &json["options"][0];
    assert_eq!(appeal["action"], "appeal");
    assert_eq!(appeal["lastDate"], "2024-07-01");
    assert_eq!(appeal["formattedLastDate"], "01 July 2024 (Monday)");
    assert_eq!(appeal["daysRemaining"], 30);
    assert_eq!(appeal["isExpired"], false);
    assert_eq!(appeal["calculation"]["originalLastDate"], "2024-06-30");

    assert!(json["auditLog"].as_array().unwrap().len() >= 2);
}

#[test]
fn result_round_trips_through_json() {
    let result = run(&case(
        date!(2024 - 05 - 01),
        CaseType::Writ,
        CourtLevel::HighCourt,
        JudgmentType::Final,
    ));
    let text = serde_json::to_string(&result).unwrap();
    let back: adalat_limitation::CalculationResult = serde_json::from_str(&text).unwrap();
    assert_eq!(back, result);
}

// ──────────────────────────────────────────────
// E. Determinism
// ──────────────────────────────────────────────

#[test]
fn same_inputs_and_clock_give_identical_results() {
    let input = case(
        date!(2024 - 05 - 01),
        CaseType::Civil,
        CourtLevel::HighCourt,
        JudgmentType::Final,
    );
    let first = run(&input);
    let second = run(&input);
    assert_eq!(first, second);
}
