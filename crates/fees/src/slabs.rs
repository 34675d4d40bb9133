//! Ad valorem fee table and slab algorithm.
//!
//! Schedule I, Article 1 -- Karnataka Court Fees and Suits Valuation
//! Act, 1958 (substituted by Act 2 of 1993 w.e.f. 29.1.1993).
//!
//! Formula per the Act: `fee = base_fee + rate x (value - threshold)`,
//! rounded up to whole rupees. The base fees and thresholds are the
//! figures stated in the Act's text, kept verbatim so the table can be
//! audited against the statute (the Act's own figures carry small
//! discontinuities at two upper boundaries).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::FeeError;
use crate::types::{SlabApplication, SlabDefinition};

/// The 16-row ad valorem table covering [1, unbounded).
pub const AD_VALOREM_SLABS: &[SlabDefinition] = &[
    SlabDefinition { number: 1,  label: "i",    min: 1,          max: Some(15_000),     threshold: 0,          rate_permille: 25, base_fee: 0 },
    SlabDefinition { number: 2,  label: "ii",   min: 15_001,     max: Some(75_000),     threshold: 15_000,     rate_permille: 75, base_fee: 375 },
    SlabDefinition { number: 3,  label: "iii",  min: 75_001,     max: Some(2_50_000),   threshold: 75_000,     rate_permille: 70, base_fee: 4_875 },
    SlabDefinition { number: 4,  label: "iv",   min: 2_50_001,   max: Some(5_00_000),   threshold: 2_50_000,   rate_permille: 65, base_fee: 17_125 },
    SlabDefinition { number: 5,  label: "v",    min: 5_00_001,   max: Some(7_50_000),   threshold: 5_00_000,   rate_permille: 60, base_fee: 33_375 },
    SlabDefinition { number: 6,  label: "vi",   min: 7_50_001,   max: Some(10_00_000),  threshold: 7_50_000,   rate_permille: 55, base_fee: 48_375 },
    SlabDefinition { number: 7,  label: "vii",  min: 10_00_001,  max: Some(15_00_000),  threshold: 10_00_000,  rate_permille: 50, base_fee: 62_125 },
    SlabDefinition { number: 8,  label: "viii", min: 15_00_001,  max: Some(20_00_000),  threshold: 15_00_000,  rate_permille: 45, base_fee: 87_125 },
    SlabDefinition { number: 9,  label: "ix",   min: 20_00_001,  max: Some(25_00_000),  threshold: 20_00_000,  rate_permille: 40, base_fee: 1_09_625 },
    SlabDefinition { number: 10, label: "x",    min: 25_00_001,  max: Some(30_00_000),  threshold: 25_00_000,  rate_permille: 35, base_fee: 1_29_625 },
    SlabDefinition { number: 11, label: "xi",   min: 30_00_001,  max: Some(40_00_000),  threshold: 30_00_000,  rate_permille: 30, base_fee: 1_47_125 },
    SlabDefinition { number: 12, label: "xii",  min: 40_00_001,  max: Some(50_00_000),  threshold: 40_00_000,  rate_permille: 20, base_fee: 1_77_125 },
    SlabDefinition { number: 13, label: "xiii", min: 50_00_001,  max: Some(60_00_000),  threshold: 50_00_000,  rate_permille: 20, base_fee: 2_02_125 },
    SlabDefinition { number: 14, label: "xiv",  min: 60_00_001,  max: Some(70_00_000),  threshold: 60_00_000,  rate_permille: 10, base_fee: 2_22_125 },
    SlabDefinition { number: 15, label: "xv",   min: 70_00_001,  max: Some(80_00_000),  threshold: 70_00_000,  rate_permille: 10, base_fee: 2_37_125 },
    SlabDefinition { number: 16, label: "xvi",  min: 80_00_001,  max: None,             threshold: 80_00_000,  rate_permille: 10, base_fee: 2_47_125 },
];

/// A computed ad valorem fee together with the slab that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdValoremFee {
    pub fee: i64,
    pub slab: SlabApplication,
}

/// Round a rupee amount up to the next whole rupee.
pub(crate) fn ceil_rupees(amount: Decimal) -> Result<i64, FeeError> {
    amount
        .ceil()
        .to_i64()
        .ok_or_else(|| FeeError::Overflow(format!("amount {} does not fit whole rupees", amount)))
}

/// Compute the ad valorem court fee for a whole-rupee value.
///
/// A value of zero or less yields a zero fee with a sentinel slab. If
/// no slab matches (cannot happen while the last slab stays unbounded)
/// the fee is extrapolated from the last slab with the same formula.
pub fn compute_ad_valorem_fee(value: i64) -> Result<AdValoremFee, FeeError> {
    if value <= 0 {
        return Ok(AdValoremFee {
            fee: 0,
            slab: SlabApplication {
                slab_number: 0,
                slab_label: "N/A".to_string(),
                range_min: 0,
                range_max: Some(0),
                rate_percent: "0.0%".to_string(),
                base_fee: 0,
                amount_in_slab: 0,
                fee_in_slab: 0,
            },
        });
    }

    let slab = AD_VALOREM_SLABS
        .iter()
        .find(|s| value >= s.min && s.max.map_or(true, |max| value <= max))
        .unwrap_or(&AD_VALOREM_SLABS[AD_VALOREM_SLABS.len() - 1]);

    apply_slab(slab, value)
}

fn apply_slab(slab: &SlabDefinition, value: i64) -> Result<AdValoremFee, FeeError> {
    let amount_in_slab = value - slab.threshold;
    let fee_in_slab = Decimal::from(amount_in_slab) * slab.rate();
    let fee = ceil_rupees(Decimal::from(slab.base_fee) + fee_in_slab)?;

    Ok(AdValoremFee {
        fee,
        slab: SlabApplication {
            slab_number: slab.number,
            slab_label: slab.label.to_string(),
            range_min: slab.min,
            range_max: slab.max,
            rate_percent: slab.rate_percent(),
            base_fee: slab.base_fee,
            amount_in_slab,
            fee_in_slab: ceil_rupees(fee_in_slab)?,
        },
    })
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(value: i64) -> i64 {
        compute_ad_valorem_fee(value).unwrap().fee
    }

    #[test]
    fn slabs_are_contiguous_and_cover_from_one() {
        assert_eq!(AD_VALOREM_SLABS[0].min, 1);
        for pair in AD_VALOREM_SLABS.windows(2) {
            assert_eq!(pair[0].max, Some(pair[1].min - 1));
            // Threshold of slab n equals min of slab n, minus one for
            // the marginal formula's exclusive base.
            assert_eq!(pair[1].threshold, pair[1].min - 1);
        }
        assert_eq!(AD_VALOREM_SLABS.last().unwrap().max, None);
    }

    #[test]
    fn fifty_thousand_lands_in_slab_ii() {
        // ceil(375 + 0.075 x (50,000 - 15,000)) = 3,000
        let result = compute_ad_valorem_fee(50_000).unwrap();
        assert_eq!(result.fee, 3_000);
        assert_eq!(result.slab.slab_label, "ii");
        assert_eq!(result.slab.rate_percent, "7.5%");
        assert_eq!(result.slab.amount_in_slab, 35_000);
    }

    #[test]
    fn zero_and_negative_values_are_free() {
        assert_eq!(fee(0), 0);
        assert_eq!(fee(-5), 0);
        let result = compute_ad_valorem_fee(0).unwrap();
        assert_eq!(result.slab.slab_number, 0);
    }

    #[test]
    fn fees_round_up_to_whole_rupees() {
        // 0.025 x 3 = 0.075 -> Rs 1
        assert_eq!(fee(3), 1);
        // 0.025 x 15,000 = 375 exactly
        assert_eq!(fee(15_000), 375);
    }

    #[test]
    fn lower_slab_boundaries_are_continuous() {
        // Through slab xii the Act's stated base fees continue the
        // previous slab's fee exactly; the fee one rupee past a
        // boundary exceeds the boundary fee by at most one rounded-up
        // marginal step.
        for pair in AD_VALOREM_SLABS.windows(2).take(11) {
            let top = pair[0].max.unwrap();
            assert_eq!(fee(top), pair[1].base_fee, "at boundary {}", top);
            assert_eq!(fee(top + 1), pair[1].base_fee + 1);
        }
    }

    #[test]
    fn fee_is_monotonic_in_value() {
        let mut previous = 0;
        let mut value = 1;
        while value < 1_00_00_000 {
            let current = fee(value);
            assert!(
                current >= previous,
                "fee decreased at value {}: {} < {}",
                value,
                current,
                previous
            );
            previous = current;
            value += 9_973;
        }
    }

    #[test]
    fn unbounded_last_slab_handles_large_values() {
        // 10 crore: 2,47,125 + 0.01 x (10,00,00,000 - 80,00,000)
        let result = compute_ad_valorem_fee(10_00_00_000).unwrap();
        assert_eq!(result.slab.slab_label, "xvi");
        assert_eq!(result.fee, 2_47_125 + 9_20_000);
    }
}
