//! Calendar arithmetic for limitation periods.
//!
//! Rules applied (Limitation Act, 1963):
//! 1. The day of judgment is excluded from the count (Section 12(1)).
//! 2. Time taken to obtain a certified copy is excluded (Section 12(2)).
//! 3. If the last day falls on a court holiday, the next working day
//!    becomes the last date (Section 4).
//!
//! The holiday calendar is injected data, not a computed property: many
//! Indian holidays follow the lunar calendar and the gazetted list must
//! be extended by hand each year.

use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::macros::{date, format_description};
use time::{Date, Duration, OffsetDateTime, Weekday};

use crate::error::LimitationError;
use crate::types::{AuditEntry, CertifiedCopyDates, DateCalculation};

// ──────────────────────────────────────────────
// National holiday lists (gazetted, year-keyed)
// ──────────────────────────────────────────────

const NATIONAL_HOLIDAYS_2024: &[Date] = &[
    date!(2024 - 01 - 26), // Republic Day
    date!(2024 - 03 - 08), // Maha Shivaratri
    date!(2024 - 03 - 25), // Holi
    date!(2024 - 03 - 29), // Good Friday
    date!(2024 - 04 - 11), // Idul Fitr
    date!(2024 - 04 - 14), // Ambedkar Jayanti
    date!(2024 - 04 - 17), // Ram Navami
    date!(2024 - 04 - 21), // Mahavir Jayanti
    date!(2024 - 05 - 23), // Buddha Purnima
    date!(2024 - 06 - 17), // Eid ul-Adha
    date!(2024 - 07 - 17), // Muharram
    date!(2024 - 08 - 15), // Independence Day
    date!(2024 - 08 - 26), // Janmashtami
    date!(2024 - 09 - 16), // Milad-un-Nabi
    date!(2024 - 10 - 02), // Gandhi Jayanti
    date!(2024 - 10 - 12), // Dussehra
    date!(2024 - 10 - 31), // Sardar Patel Jayanti
    date!(2024 - 11 - 01), // Diwali
    date!(2024 - 11 - 15), // Guru Nanak Jayanti
    date!(2024 - 12 - 25), // Christmas
];

const NATIONAL_HOLIDAYS_2025: &[Date] = &[
    date!(2025 - 01 - 26), // Republic Day
    date!(2025 - 02 - 26), // Maha Shivaratri
    date!(2025 - 03 - 14), // Holi
    date!(2025 - 03 - 30), // Idul Fitr
    date!(2025 - 04 - 06), // Ram Navami
    date!(2025 - 04 - 10), // Mahavir Jayanti
    date!(2025 - 04 - 14), // Ambedkar Jayanti
    date!(2025 - 04 - 18), // Good Friday
    date!(2025 - 05 - 12), // Buddha Purnima
    date!(2025 - 06 - 07), // Eid ul-Adha
    date!(2025 - 07 - 06), // Muharram
    date!(2025 - 08 - 15), // Independence Day
    date!(2025 - 08 - 16), // Janmashtami
    date!(2025 - 09 - 05), // Milad-un-Nabi
    date!(2025 - 10 - 02), // Gandhi Jayanti / Dussehra
    date!(2025 - 10 - 20), // Diwali
    date!(2025 - 11 - 05), // Guru Nanak Jayanti
    date!(2025 - 12 - 25), // Christmas
];

// ──────────────────────────────────────────────
// Holiday calendar
// ──────────────────────────────────────────────

/// Court holiday calendar: weekly closures plus a list of gazetted
/// national holidays.
///
/// Saturday policy: every Saturday is treated as closed. Most courts
/// observe only second Saturdays, some all; the conservative reading
/// never produces a deadline earlier than the true one.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: Vec<Date>,
}

impl HolidayCalendar {
    /// Calendar with the gazetted national holiday lists for 2024-2025.
    /// The lists require yearly extension.
    pub fn national() -> Self {
        let mut holidays = Vec::with_capacity(
            NATIONAL_HOLIDAYS_2024.len() + NATIONAL_HOLIDAYS_2025.len(),
        );
        holidays.extend_from_slice(NATIONAL_HOLIDAYS_2024);
        holidays.extend_from_slice(NATIONAL_HOLIDAYS_2025);
        HolidayCalendar { holidays }
    }

    /// Calendar with a caller-supplied holiday list (per-jurisdiction
    /// or future-year lists).
    pub fn with_holidays(holidays: Vec<Date>) -> Self {
        HolidayCalendar { holidays }
    }

    /// True if the court is closed on `date`: Sunday, Saturday, or a
    /// listed national holiday.
    pub fn is_court_holiday(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
            || self.holidays.contains(&date)
    }

    /// First non-holiday date at or after `date`. Terminates within a
    /// week past the listed holidays since weekends are the only
    /// recurring closures.
    pub fn next_working_day(&self, date: Date) -> Date {
        let mut current = date;
        while self.is_court_holiday(current) {
            current += Duration::days(1);
        }
        current
    }

    /// Compute the limitation deadline for one rule.
    ///
    /// `now` is only used to stamp audit entries; the caller captures
    /// it once per top-level calculation.
    pub fn compute_deadline(
        &self,
        judgment_date: Date,
        limitation_days: i64,
        certified_copy: Option<&CertifiedCopyDates>,
        copy_exclusion_allowed: bool,
        now: OffsetDateTime,
    ) -> Result<(DateCalculation, Vec<AuditEntry>), LimitationError> {
        let mut audit_log = Vec::new();
        let timestamp = rfc3339(now);

        // Section 12(1): the day from which the period runs is excluded.
        let computation_start = judgment_date + Duration::days(1);
        audit_log.push(AuditEntry {
            step: "Exclude judgment date (Section 12(1))".to_string(),
            input: json!({ "judgmentDate": judgment_date.to_string() }),
            output: json!({ "computationStart": computation_start.to_string() }),
            timestamp: timestamp.clone(),
        });

        // Section 12(2): certified-copy period, when the rule allows it
        // and both dates are present.
        let mut excluded_days = 0;
        let mut excluded_period_description = None;
        if copy_exclusion_allowed {
            if let Some(copy) = certified_copy {
                if copy.applied_date.is_some() && copy.received_date.is_some() {
                    let (days, description) = copy_exclusion_days(copy)?;
                    excluded_days = days;
                    audit_log.push(AuditEntry {
                        step: "Apply certified copy exclusion (Section 12(2))".to_string(),
                        input: json!({
                            "appliedDate": copy.applied_date.map(|d| d.to_string()),
                            "receivedDate": copy.received_date.map(|d| d.to_string()),
                        }),
                        output: json!({ "excludedDays": days, "description": description }),
                        timestamp: timestamp.clone(),
                    });
                    excluded_period_description = Some(description);
                }
            }
        }

        // Minus one because the count already starts on the day after
        // judgment.
        let total_days = limitation_days + excluded_days - 1;
        let raw_last_date = computation_start + Duration::days(total_days);
        audit_log.push(AuditEntry {
            step: "Compute raw last date".to_string(),
            input: json!({
                "limitationDays": limitation_days,
                "excludedDays": excluded_days,
                "computationStart": computation_start.to_string(),
            }),
            output: json!({
                "rawLastDate": raw_last_date.to_string(),
                "totalDays": total_days,
            }),
            timestamp: timestamp.clone(),
        });

        // Section 4: a deadline falling on a holiday moves to the next
        // working day.
        let is_holiday_adjusted = self.is_court_holiday(raw_last_date);
        let last_date = if is_holiday_adjusted {
            self.next_working_day(raw_last_date)
        } else {
            raw_last_date
        };
        if is_holiday_adjusted {
            audit_log.push(AuditEntry {
                step: "Adjust for court holiday (Section 4)".to_string(),
                input: json!({ "rawLastDate": raw_last_date.to_string(), "isHoliday": true }),
                output: json!({ "adjustedLastDate": last_date.to_string() }),
                timestamp,
            });
        }

        let calculation = DateCalculation {
            start_date: judgment_date,
            limitation_days,
            excluded_days,
            excluded_period_description,
            last_date,
            is_holiday_adjusted,
            original_last_date: is_holiday_adjusted.then_some(raw_last_date),
        };
        Ok((calculation, audit_log))
    }
}

// ──────────────────────────────────────────────
// Free calendar functions
// ──────────────────────────────────────────────

/// Inclusive day count of the certified-copy period, with a display
/// description. `(0, "...")` when either date is absent.
pub fn copy_exclusion_days(copy: &CertifiedCopyDates) -> Result<(i64, String), LimitationError> {
    let (applied, received) = match (copy.applied_date, copy.received_date) {
        (Some(a), Some(r)) => (a, r),
        _ => return Ok((0, "No certified copy exclusion applied".to_string())),
    };

    if applied > received {
        return Err(LimitationError::InvalidRange { applied, received });
    }

    // Both end days count toward the exclusion.
    let excluded_days = (received - applied).whole_days() + 1;
    let description = format!(
        "{} days excluded ({} to {}) for obtaining certified copy",
        excluded_days, applied, received
    );
    Ok((excluded_days, description))
}

/// Whole days from `today` until `last_date`. Negative once expired;
/// callers clamp for display.
pub fn days_remaining(last_date: Date, today: Date) -> i64 {
    (last_date - today).whole_days()
}

/// True once `last_date` is strictly before `today`.
pub fn is_expired(last_date: Date, today: Date) -> bool {
    last_date < today
}

/// Long display form: "01 January 2024 (Monday)".
pub fn format_display_date(date: Date) -> String {
    let fmt = format_description!("[day] [month repr:long] [year] ([weekday repr:long])");
    date.format(&fmt).unwrap_or_else(|_| date.to_string())
}

/// RFC 3339 timestamp for audit entries.
pub fn rfc3339(now: OffsetDateTime) -> String {
    now.format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
