//! Suit-type and fee records for the court-fee engine.
//!
//! Table-resident definitions (`SuitTypeDefinition`, `SlabDefinition`,
//! `FixedFeeTier`) are const-friendly `&'static` data; boundary records
//! carry camelCase wire names matching the original JSON contract.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Suit classification
// ──────────────────────────────────────────────

/// Statutory suit grouping, A through I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitGroup {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl SuitGroup {
    pub fn label(&self) -> &'static str {
        match self {
            SuitGroup::A => "Money & Recovery",
            SuitGroup::B => "Property & Possession",
            SuitGroup::C => "Partition",
            SuitGroup::D => "Specific Performance",
            SuitGroup::E => "Special / Fixed Fee",
            SuitGroup::F => "Residuary",
            SuitGroup::G => "Appeals & Reviews",
            SuitGroup::H => "Probate & Succession",
            SuitGroup::I => "Writ Petitions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SuitGroup::A => "Money suits, mortgage claims, accounts, mesne profits",
            SuitGroup::B => "Declarations, injunctions, possession, pre-emption, easements",
            SuitGroup::C => "Partition suits and joint possession recovery",
            SuitGroup::D => "Sale, mortgage, lease, exchange contracts",
            SuitGroup::E => "Adoption, trust, cancellation, partnership, landlord-tenant",
            SuitGroup::F => "Revenue courts and civil courts residuary suits",
            SuitGroup::G => "Appeals, review petitions, insolvency, succession appeals",
            SuitGroup::H => "Probate, letters of administration, succession certificates",
            SuitGroup::I => "Writ petitions under Art. 226/227, habeas corpus",
        }
    }
}

/// How the fee for a suit type is computed. One variant per statutory
/// method; the dispatcher matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeMethod {
    /// Full ad valorem on the effective value.
    AdValorem,
    /// Ad valorem on a fraction of the value (1/2, 1/4, 1/5).
    AdValoremFraction,
    /// Flat amount.
    Fixed,
    /// Flat amount chosen from value tiers.
    FixedTiered,
    /// No fee payable.
    Exempt,
    /// Probate tier system (nil / 3% / 5% capped).
    Probate,
    /// Fraction of the full ad valorem fee (review = 1/2 of plaint fee).
    FractionOfFee,
    /// Ad valorem on the difference of two amounts.
    DifferenceAdValorem,
}

/// How multiple named inputs combine into one effective value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Higher,
    Lower,
    Sum,
    None,
}

/// Exact fraction, kept as a numerator/denominator pair so fee
/// arithmetic never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A named numeric input the caller must supply for a suit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub id: &'static str,
    pub label: &'static str,
}

/// One row of a fixed-fee tier table. `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedFeeTier {
    pub min: i64,
    pub max: Option<i64>,
    pub fee: i64,
}

/// A suit type's fee definition. Table-resident; defined once, never
/// mutated. `input_fields` is empty iff the method is fixed or exempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitTypeDefinition {
    pub id: &'static str,
    pub group: SuitGroup,
    pub label: &'static str,
    pub section: &'static str,
    pub fee_method: FeeMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction: Option<Fraction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_amount: Option<i64>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub fixed_tiers: &'static [FixedFeeTier],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_cap: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<i64>,
    pub is_extended_probate: bool,
    pub input_fields: &'static [InputField],
    pub comparison: Comparison,
    pub value_basis: &'static str,
}

// ──────────────────────────────────────────────
// Slab table rows
// ──────────────────────────────────────────────

/// One row of the 16-row ad valorem table (Schedule I, Article 1).
///
/// `threshold` is the "amount exceeding Rs X" base the marginal rate
/// applies to; `rate_permille` is the marginal rate in parts per
/// thousand (2.5% = 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabDefinition {
    pub number: u32,
    pub label: &'static str,
    pub min: i64,
    pub max: Option<i64>,
    pub threshold: i64,
    pub rate_permille: i64,
    pub base_fee: i64,
}

impl SlabDefinition {
    /// Marginal rate as a decimal fraction (25 permille -> 0.025).
    pub fn rate(&self) -> Decimal {
        Decimal::new(self.rate_permille, 3)
    }

    /// Marginal rate for display: "2.5%", "7.0%".
    pub fn rate_percent(&self) -> String {
        format!("{}.{}%", self.rate_permille / 10, self.rate_permille % 10)
    }
}

/// Which slab a computation used, for the result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabApplication {
    pub slab_number: u32,
    pub slab_label: String,
    pub range_min: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_max: Option<i64>,
    pub rate_percent: String,
    pub base_fee: i64,
    pub amount_in_slab: i64,
    pub fee_in_slab: i64,
}

// ──────────────────────────────────────────────
// Calculator input/output
// ──────────────────────────────────────────────

/// Caller-supplied fee computation request. Values are rupee amounts
/// keyed by the suit type's input-field ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeInput {
    pub suit_type_id: String,
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
}

/// One human-readable computation step. Required output: the caller
/// displays the breakdown verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownStep {
    pub label: String,
    pub value: String,
}

impl BreakdownStep {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        BreakdownStep {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Output of one fee computation. `fee` is whole rupees, rounded up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeResult {
    pub fee: i64,
    pub section: String,
    pub suit_label: String,
    pub value_basis: String,
    pub effective_value: i64,
    pub breakdown: Vec<BreakdownStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slab_applied: Option<SlabApplication>,
    pub is_exempt: bool,
}

// ──────────────────────────────────────────────
// Refund
// ──────────────────────────────────────────────

/// Statutory refund scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundScenario {
    AdrSettlement,
    AppealBeforeHearing,
    PlaintRejected,
    RemandOrder,
    MistakenPayment,
}

impl RefundScenario {
    pub fn label(&self) -> &'static str {
        match self {
            RefundScenario::AdrSettlement => "ADR Settlement (Lok Adalat, Mediation, etc.)",
            RefundScenario::AppealBeforeHearing => "Appeal Disposed Before Hearing",
            RefundScenario::PlaintRejected => "Plaint Rejected (Delay / Unpaid Deficiency)",
            RefundScenario::RemandOrder => "Remand Order (Appeal)",
            RefundScenario::MistakenPayment => "Mistaken / Erroneous Payment",
        }
    }
}

/// Caller-supplied refund estimate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundInput {
    pub scenario: RefundScenario,
    pub fees_paid: f64,
}

/// Output of the refund estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundResult {
    pub refund_percentage: u32,
    pub refund_amount: i64,
    pub description: String,
    pub legal_basis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_display_and_decimal() {
        let half = Fraction::new(1, 2);
        assert_eq!(half.to_string(), "1/2");
        assert_eq!(half.as_decimal(), Decimal::new(5, 1));
    }

    #[test]
    fn rate_percent_formatting() {
        let slab = SlabDefinition {
            number: 2,
            label: "ii",
            min: 15_001,
            max: Some(75_000),
            threshold: 15_000,
            rate_permille: 75,
            base_fee: 375,
        };
        assert_eq!(slab.rate_percent(), "7.5%");
        assert_eq!(slab.rate(), Decimal::new(75, 3));
    }

    #[test]
    fn fee_input_deserializes_from_wire_json() {
        let input: FeeInput = serde_json::from_str(
            r#"{ "suitTypeId": "money_suit", "values": { "amount": 50000 } }"#,
        )
        .unwrap();
        assert_eq!(input.suit_type_id, "money_suit");
        assert_eq!(input.values["amount"], 50_000.0);
    }
}
