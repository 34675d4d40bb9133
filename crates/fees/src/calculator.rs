//! Fee dispatcher.
//!
//! Validates the caller's inputs, collapses them to one effective
//! value, then matches exhaustively on the suit type's fee method.
//! Every branch appends to the breakdown; the breakdown is part of the
//! output contract.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::{format_rupees, group_indian};
use crate::error::FeeError;
use crate::slabs::{ceil_rupees, compute_ad_valorem_fee};
use crate::suit_types::suit_type_by_id;
use crate::types::{
    BreakdownStep, Comparison, FeeInput, FeeMethod, FeeResult, FixedFeeTier, SlabApplication,
    SuitTypeDefinition,
};

const MAX_VALUE: f64 = 1_000_00_00_000.0;

/// Compute the court fee for any suit type in the table.
pub fn calculate_court_fee(input: &FeeInput) -> Result<FeeResult, FeeError> {
    let suit_type = suit_type_by_id(&input.suit_type_id).ok_or_else(|| {
        FeeError::UnknownSuitType {
            id: input.suit_type_id.clone(),
        }
    })?;

    validate_inputs(input, suit_type)?;
    let effective_value = resolve_value(input, suit_type)?;

    let mut breakdown = vec![
        BreakdownStep::new("Suit Type", suit_type.label),
        BreakdownStep::new("Section", suit_type.section),
    ];

    match suit_type.fee_method {
        FeeMethod::Exempt => {
            breakdown.push(BreakdownStep::new("Fee", "Exempt - No court fee payable"));
            Ok(result(suit_type, 0, 0, breakdown, None, true))
        }

        FeeMethod::Fixed => {
            let fee = suit_type.fixed_amount.unwrap_or(0);
            breakdown.push(BreakdownStep::new("Fee Type", "Fixed fee"));
            breakdown.push(BreakdownStep::new("Court Fee", format_rupees(fee)));
            Ok(result(suit_type, fee, 0, breakdown, None, false))
        }

        FeeMethod::FixedTiered => {
            breakdown.push(BreakdownStep::new(
                "Value Entered",
                format_rupees(effective_value),
            ));
            let (fee, tier_description) =
                lookup_fixed_tiered_fee(effective_value, suit_type.fixed_tiers);
            breakdown.push(BreakdownStep::new("Applicable Tier", tier_description));
            breakdown.push(BreakdownStep::new("Court Fee", format_rupees(fee)));
            Ok(result(suit_type, fee, effective_value, breakdown, None, false))
        }

        FeeMethod::Probate => {
            breakdown.push(BreakdownStep::new(
                "Estate Value",
                format_rupees(effective_value),
            ));
            if suit_type.is_extended_probate {
                breakdown.push(BreakdownStep::new(
                    "Certificate Type",
                    "Extended (1.5x multiplier)",
                ));
            }
            let (fee, tier_description) =
                compute_probate_fee(effective_value, suit_type.is_extended_probate)?;
            breakdown.push(BreakdownStep::new("Computation", tier_description));
            breakdown.push(BreakdownStep::new("Court Fee", format_rupees(fee)));
            Ok(result(suit_type, fee, effective_value, breakdown, None, false))
        }

        FeeMethod::DifferenceAdValorem => {
            let awarded = round_rupees(to_decimal(field(input, "awardedAmount"))?)?;
            let claimed = round_rupees(to_decimal(field(input, "claimedAmount"))?)?;
            let difference = (claimed - awarded).abs();
            breakdown.push(BreakdownStep::new("Amount Awarded", format_rupees(awarded)));
            breakdown.push(BreakdownStep::new("Amount Claimed", format_rupees(claimed)));
            breakdown.push(BreakdownStep::new("Difference", format_rupees(difference)));

            if difference <= 0 {
                breakdown.push(BreakdownStep::new("Court Fee", format_rupees(0)));
                return Ok(result(suit_type, 0, 0, breakdown, None, false));
            }

            let computed = compute_ad_valorem_fee(difference)?;
            breakdown.push(BreakdownStep::new(
                "Slab Applied",
                slab_summary(&computed.slab),
            ));
            breakdown.push(BreakdownStep::new("Court Fee", format_rupees(computed.fee)));
            Ok(result(
                suit_type,
                computed.fee,
                difference,
                breakdown,
                Some(computed.slab),
                false,
            ))
        }

        FeeMethod::FractionOfFee => {
            breakdown.push(BreakdownStep::new(
                "Original Suit Value",
                format_rupees(effective_value),
            ));

            let computed = compute_ad_valorem_fee(effective_value)?;
            breakdown.push(BreakdownStep::new(
                "Full Ad Valorem Fee",
                format_rupees(computed.fee),
            ));

            let (multiplier, fraction_label) = match suit_type.fraction {
                Some(f) => (f.as_decimal(), f.to_string()),
                None => (Decimal::ONE, "1".to_string()),
            };
            breakdown.push(BreakdownStep::new("Fraction Applied", fraction_label));

            let fee = ceil_rupees(Decimal::from(computed.fee) * multiplier)?;
            breakdown.push(BreakdownStep::new("Court Fee", format_rupees(fee)));
            Ok(result(
                suit_type,
                fee,
                effective_value,
                breakdown,
                Some(computed.slab),
                false,
            ))
        }

        FeeMethod::AdValorem | FeeMethod::AdValoremFraction => {
            breakdown.push(BreakdownStep::new(
                "Value Entered",
                format_rupees(effective_value),
            ));

            let mut value_for_computation = effective_value;
            if suit_type.fee_method == FeeMethod::AdValoremFraction {
                if let Some(fraction) = suit_type.fraction {
                    value_for_computation =
                        round_rupees(Decimal::from(effective_value) * fraction.as_decimal())?;
                    breakdown.push(BreakdownStep::new(
                        "Fraction Applied",
                        format!(
                            "{} of {} = {}",
                            fraction,
                            format_rupees(effective_value),
                            format_rupees(value_for_computation)
                        ),
                    ));
                }
            }

            if let Some(minimum) = suit_type.minimum_value {
                if value_for_computation < minimum {
                    breakdown.push(BreakdownStep::new(
                        "Minimum Threshold",
                        format!(
                            "Value raised from {} to minimum {}",
                            format_rupees(value_for_computation),
                            format_rupees(minimum)
                        ),
                    ));
                    value_for_computation = minimum;
                }
            }

            let computed = compute_ad_valorem_fee(value_for_computation)?;
            breakdown.push(BreakdownStep::new(
                "Slab Applied",
                slab_summary(&computed.slab),
            ));

            let mut fee = computed.fee;
            if let Some(cap) = suit_type.fee_cap {
                if fee > cap {
                    breakdown.push(BreakdownStep::new(
                        "Fee Cap",
                        format!(
                            "Capped from {} to maximum {}",
                            format_rupees(fee),
                            format_rupees(cap)
                        ),
                    ));
                    fee = cap;
                }
            }

            breakdown.push(BreakdownStep::new("Court Fee", format_rupees(fee)));
            Ok(result(
                suit_type,
                fee,
                value_for_computation,
                breakdown,
                Some(computed.slab),
                false,
            ))
        }
    }
}

// ──────────────────────────────────────────────
// Value resolution
// ──────────────────────────────────────────────

/// Collapse the named inputs to one effective rupee value.
///
/// Zero inputs yield zero; one input is rounded as-is; two or more
/// combine per the suit type's comparison rule. Two suit types carry
/// statutory formulas of their own (Sec 32(d) redemption, Sec 39
/// attachment) and are matched by id.
pub fn resolve_value(input: &FeeInput, suit_type: &SuitTypeDefinition) -> Result<i64, FeeError> {
    if input.values.is_empty() {
        return Ok(0);
    }
    if input.values.len() == 1 {
        let only = input.values.values().copied().next().unwrap_or(0.0);
        return round_rupees(to_decimal(only)?);
    }

    match suit_type.id {
        "mortgage_redemption" => {
            let amount_due = to_decimal(field(input, "amountDue"))?;
            let quarter_principal = to_decimal(field(input, "principal"))? / Decimal::from(4);
            round_rupees(amount_due.max(quarter_principal))
        }
        "set_aside_attachment" => {
            let quarter_mv = to_decimal(field(input, "marketValue"))? / Decimal::from(4);
            let attachment = to_decimal(field(input, "attachmentAmount"))?;
            round_rupees(quarter_mv.min(attachment))
        }
        _ => {
            let mut amounts = Vec::with_capacity(input.values.len());
            for value in input.values.values() {
                amounts.push(to_decimal(*value)?);
            }
            let combined = match suit_type.comparison {
                Comparison::Higher => amounts.iter().copied().max().unwrap_or(Decimal::ZERO),
                Comparison::Lower => amounts.iter().copied().min().unwrap_or(Decimal::ZERO),
                Comparison::Sum => amounts.iter().copied().sum(),
                Comparison::None => amounts.first().copied().unwrap_or(Decimal::ZERO),
            };
            round_rupees(combined)
        }
    }
}

fn field(input: &FeeInput, id: &str) -> f64 {
    input.values.get(id).copied().unwrap_or(0.0)
}

fn validate_inputs(input: &FeeInput, suit_type: &SuitTypeDefinition) -> Result<(), FeeError> {
    for required in suit_type.input_fields {
        let value = match input.values.get(required.id) {
            Some(v) => *v,
            None => {
                return Err(FeeError::MissingField {
                    field: required.label.to_string(),
                })
            }
        };

        if !value.is_finite() {
            return Err(FeeError::InvalidValue {
                field: required.label.to_string(),
                message: "Value must be a finite number".to_string(),
            });
        }
        if value <= 0.0 {
            return Err(FeeError::InvalidValue {
                field: required.label.to_string(),
                message: "Value must be greater than zero".to_string(),
            });
        }
        if value > MAX_VALUE {
            return Err(FeeError::InvalidValue {
                field: required.label.to_string(),
                message: "Value cannot exceed Rs. 1,000 crore".to_string(),
            });
        }
    }
    Ok(())
}

// ──────────────────────────────────────────────
// Arithmetic helpers
// ──────────────────────────────────────────────

fn to_decimal(value: f64) -> Result<Decimal, FeeError> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| FeeError::Overflow(format!("{} is not representable", value)))
}

fn round_rupees(amount: impl Into<Decimal>) -> Result<i64, FeeError> {
    let amount = amount.into();
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| FeeError::Overflow(format!("amount {} does not fit whole rupees", amount)))
}

fn slab_summary(slab: &SlabApplication) -> String {
    format!("Slab {} ({})", slab.slab_label, slab.rate_percent)
}

fn result(
    suit_type: &SuitTypeDefinition,
    fee: i64,
    effective_value: i64,
    breakdown: Vec<BreakdownStep>,
    slab_applied: Option<SlabApplication>,
    is_exempt: bool,
) -> FeeResult {
    FeeResult {
        fee,
        section: suit_type.section.to_string(),
        suit_label: suit_type.label.to_string(),
        value_basis: suit_type.value_basis.to_string(),
        effective_value,
        breakdown,
        slab_applied,
        is_exempt,
    }
}

// ──────────────────────────────────────────────
// Fixed tier and probate tables
// ──────────────────────────────────────────────

/// Find the flat fee for a value in a tier table. Values past the last
/// bounded tier fall through to the final unbounded row.
fn lookup_fixed_tiered_fee(value: i64, tiers: &[FixedFeeTier]) -> (i64, String) {
    for tier in tiers {
        if value >= tier.min && tier.max.map_or(true, |max| value <= max) {
            let max_label = match tier.max {
                Some(max) => format!("up to Rs. {}", group_indian(max)),
                None => "above".to_string(),
            };
            let description = format!(
                "Rs. {} - {}: Rs. {}",
                group_indian(tier.min),
                max_label,
                tier.fee
            );
            return (tier.fee, description);
        }
    }

    match tiers.last() {
        Some(last) => (
            last.fee,
            format!("Above Rs. {}: Rs. {}", group_indian(last.min), last.fee),
        ),
        None => (0, "No tiers defined".to_string()),
    }
}

/// Probate / succession certificate fee, Art. 6: nil up to Rs 1,000,
/// 3% on the excess up to Rs 3,00,000, otherwise 5% capped at
/// Rs 30,000. Extended certificates pay 1.5x, rounded up.
fn compute_probate_fee(value: i64, is_extended: bool) -> Result<(i64, String), FeeError> {
    let (mut fee, mut tier_description) = if value <= 1_000 {
        (0, "Up to Rs. 1,000: Nil".to_string())
    } else if value <= 3_00_000 {
        let fee = ceil_rupees(Decimal::from(value - 1_000) * Decimal::new(3, 2))?;
        (
            fee,
            format!(
                "Rs. 1,001 to Rs. 3,00,000: 3% on amount exceeding Rs. 1,000 = {}",
                format_rupees(fee)
            ),
        )
    } else {
        let five_percent = ceil_rupees(Decimal::from(value) * Decimal::new(5, 2))?;
        let fee = five_percent.min(30_000);
        (
            fee,
            format!(
                "Above Rs. 3,00,000: 5% = {}, capped at Rs. 30,000 -> {}",
                format_rupees(five_percent),
                format_rupees(fee)
            ),
        )
    };

    if is_extended {
        fee = ceil_rupees(Decimal::from(fee) * Decimal::new(15, 1))?;
        tier_description.push_str(&format!(
            " (Extended certificate: 1.5x = {})",
            format_rupees(fee)
        ));
    }

    Ok((fee, tier_description))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn input(suit_type_id: &str, values: &[(&str, f64)]) -> FeeInput {
        FeeInput {
            suit_type_id: suit_type_id.to_string(),
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn money_suit_fifty_thousand() {
        let result = calculate_court_fee(&input("money_suit", &[("amount", 50_000.0)])).unwrap();
        assert_eq!(result.fee, 3_000);
        assert_eq!(result.effective_value, 50_000);
        assert_eq!(result.slab_applied.unwrap().slab_label, "ii");
        assert!(!result.is_exempt);
        assert_eq!(result.breakdown.last().unwrap().value, "Rs. 3,000");
    }

    #[test]
    fn unknown_suit_type_is_an_error() {
        let err = calculate_court_fee(&input("no_such_suit", &[])).unwrap_err();
        assert!(matches!(err, FeeError::UnknownSuitType { .. }));
    }

    #[test]
    fn missing_field_is_reported_by_label() {
        let err = calculate_court_fee(&input("money_suit", &[])).unwrap_err();
        assert_eq!(err.to_string(), "Amount Claimed (Rs.) is required");
    }

    #[test]
    fn non_positive_and_oversized_values_are_rejected() {
        let err = calculate_court_fee(&input("money_suit", &[("amount", -5.0)])).unwrap_err();
        assert!(matches!(err, FeeError::InvalidValue { .. }));

        let err =
            calculate_court_fee(&input("money_suit", &[("amount", 2_000_00_00_000.0)]))
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Amount Claimed (Rs.): Value cannot exceed Rs. 1,000 crore"
        );
    }

    #[test]
    fn habeas_corpus_is_exempt() {
        let result = calculate_court_fee(&input("habeas_corpus", &[])).unwrap();
        assert_eq!(result.fee, 0);
        assert!(result.is_exempt);
    }

    #[test]
    fn writ_petition_pays_fixed_hundred() {
        let result = calculate_court_fee(&input("writ_petition", &[])).unwrap();
        assert_eq!(result.fee, 100);
        assert!(!result.is_exempt);
    }

    #[test]
    fn partition_joint_possession_uses_tier_table() {
        let result = calculate_court_fee(&input(
            "partition_joint_possession",
            &[("shareValue", 4_000.0)],
        ))
        .unwrap();
        assert_eq!(result.fee, 30);

        let result = calculate_court_fee(&input(
            "partition_joint_possession",
            &[("shareValue", 50_000.0)],
        ))
        .unwrap();
        assert_eq!(result.fee, 200);
    }

    #[test]
    fn mortgage_redemption_takes_higher_of_due_and_quarter_principal() {
        // max(20,000, 200,000 / 4) = 50,000 -> slab ii -> 3,000
        let result = calculate_court_fee(&input(
            "mortgage_redemption",
            &[("amountDue", 20_000.0), ("principal", 200_000.0)],
        ))
        .unwrap();
        assert_eq!(result.effective_value, 50_000);
        assert_eq!(result.fee, 3_000);
    }

    #[test]
    fn set_aside_attachment_quarters_twice() {
        // Resolver: min(200,000 / 4, 30,000) = 30,000.
        // Method then takes 1/4 of that: 7,500 -> ceil(0.025 x 7,500) = 188.
        let result = calculate_court_fee(&input(
            "set_aside_attachment",
            &[("marketValue", 200_000.0), ("attachmentAmount", 30_000.0)],
        ))
        .unwrap();
        assert_eq!(result.effective_value, 7_500);
        assert_eq!(result.fee, 188);
    }

    #[test]
    fn mortgage_foreclosure_sums_principal_and_interest() {
        let result = calculate_court_fee(&input(
            "mortgage_foreclosure",
            &[("principal", 40_000.0), ("interest", 10_000.0)],
        ))
        .unwrap();
        assert_eq!(result.effective_value, 50_000);
        assert_eq!(result.fee, 3_000);
    }

    #[test]
    fn declaration_minimum_value_floor() {
        let result = calculate_court_fee(&input(
            "declaration_with_possession",
            &[("marketValue", 500.0)],
        ))
        .unwrap();
        assert_eq!(result.effective_value, 1_000);
        assert_eq!(result.fee, 25);
        assert!(result
            .breakdown
            .iter()
            .any(|step| step.label == "Minimum Threshold"));
    }

    #[test]
    fn trust_property_fee_is_capped() {
        // 1/5 of 1,00,000 = 20,000 -> ad valorem 750, capped at 200.
        let result =
            calculate_court_fee(&input("trust_property", &[("marketValue", 100_000.0)])).unwrap();
        assert_eq!(result.fee, 200);
        assert!(result.breakdown.iter().any(|step| step.label == "Fee Cap"));
    }

    #[test]
    fn probate_three_percent_band() {
        // 3% of (2,00,000 - 1,000) = 5,970
        let result =
            calculate_court_fee(&input("probate_standard", &[("amount", 200_000.0)])).unwrap();
        assert_eq!(result.fee, 5_970);
    }

    #[test]
    fn probate_cap_and_extended_multiplier() {
        let result =
            calculate_court_fee(&input("probate_standard", &[("amount", 1_000_000.0)])).unwrap();
        assert_eq!(result.fee, 30_000);

        let result =
            calculate_court_fee(&input("probate_extended_cert", &[("amount", 1_000_000.0)]))
                .unwrap();
        assert_eq!(result.fee, 45_000);
    }

    #[test]
    fn probate_small_estate_is_nil() {
        let result =
            calculate_court_fee(&input("probate_standard", &[("amount", 900.0)])).unwrap();
        assert_eq!(result.fee, 0);
    }

    #[test]
    fn compensation_appeal_charges_on_the_difference() {
        let result = calculate_court_fee(&input(
            "appeal_compensation",
            &[("awardedAmount", 100_000.0), ("claimedAmount", 150_000.0)],
        ))
        .unwrap();
        assert_eq!(result.effective_value, 50_000);
        assert_eq!(result.fee, 3_000);

        let result = calculate_court_fee(&input(
            "appeal_compensation",
            &[("awardedAmount", 100_000.0), ("claimedAmount", 100_000.0)],
        ))
        .unwrap();
        assert_eq!(result.fee, 0);
    }

    #[test]
    fn review_within_ninety_days_pays_half() {
        let result =
            calculate_court_fee(&input("review_within_90d", &[("amount", 50_000.0)])).unwrap();
        assert_eq!(result.fee, 1_500);
        assert!(result
            .breakdown
            .iter()
            .any(|step| step.label == "Full Ad Valorem Fee" && step.value == "Rs. 3,000"));
    }

    #[test]
    fn resolver_rounds_single_values() {
        let suit = suit_type_by_id("money_suit").unwrap();
        let value = resolve_value(&input("money_suit", &[("amount", 49_999.6)]), suit).unwrap();
        assert_eq!(value, 50_000);
    }

    #[test]
    fn resolver_with_no_values_is_zero() {
        let suit = suit_type_by_id("habeas_corpus").unwrap();
        assert_eq!(resolve_value(&input("habeas_corpus", &[]), suit).unwrap(), 0);
    }
}
