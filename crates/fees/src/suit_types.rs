//! Suit-type definition table.
//!
//! One const record per suit type under the Karnataka Court Fees and
//! Suits Valuation Act, 1958, grouped A through I. The table is plain
//! data so it can be audited against the Act independently of the
//! dispatcher.

use crate::types::{
    Comparison, FeeMethod, FixedFeeTier, Fraction, InputField, SuitGroup, SuitTypeDefinition,
};

pub const SUIT_GROUPS: &[SuitGroup] = &[
    SuitGroup::A,
    SuitGroup::B,
    SuitGroup::C,
    SuitGroup::D,
    SuitGroup::E,
    SuitGroup::F,
    SuitGroup::G,
    SuitGroup::H,
    SuitGroup::I,
];

const HALF: Fraction = Fraction::new(1, 2);
const QUARTER: Fraction = Fraction::new(1, 4);
const FIFTH: Fraction = Fraction::new(1, 5);

// Shared input fields.
const AMOUNT: InputField = InputField { id: "amount", label: "Amount Claimed (Rs.)" };
const MARKET_VALUE: InputField =
    InputField { id: "marketValue", label: "Market Value of Property (Rs.)" };
const SHARE_VALUE: InputField =
    InputField { id: "shareValue", label: "Value of Plaintiff's Share (Rs.)" };
const PLAINT_VALUE: InputField =
    InputField { id: "plaintValue", label: "Amount Valued in Plaint (Rs.)" };
const PROPERTY_VALUE: InputField =
    InputField { id: "propertyValue", label: "Value of Property (Rs.)" };

// Section 47 fixed tiers, shared by several residuary-style suits.
const SEC_47_TIERS: &[FixedFeeTier] = &[
    FixedFeeTier { min: 0, max: Some(5_000), fee: 20 },
    FixedFeeTier { min: 5_001, max: Some(10_000), fee: 100 },
    FixedFeeTier { min: 10_001, max: None, fee: 200 },
];

// Defaults; every entry overrides the identifying fields.
const BASE: SuitTypeDefinition = SuitTypeDefinition {
    id: "",
    group: SuitGroup::A,
    label: "",
    section: "",
    fee_method: FeeMethod::AdValorem,
    fraction: None,
    fixed_amount: None,
    fixed_tiers: &[],
    fee_cap: None,
    minimum_value: None,
    is_extended_probate: false,
    input_fields: &[],
    comparison: Comparison::None,
    value_basis: "",
};

/// The full suit-type table.
pub const SUIT_TYPES: &[SuitTypeDefinition] = &[
    // ─── Group A: Money & Recovery ───────────────────────
    SuitTypeDefinition {
        id: "money_suit",
        group: SuitGroup::A,
        label: "Money Suit / Recovery of Debt",
        section: "Art. 1",
        input_fields: &[AMOUNT],
        value_basis: "Amount claimed",
        ..BASE
    },
    SuitTypeDefinition {
        id: "mortgage_money_recovery",
        group: SuitGroup::A,
        label: "Mortgage - Money Recovery",
        section: "Sec 32(a)",
        input_fields: &[InputField { id: "amount", label: "Amount Claimed on Mortgage (Rs.)" }],
        value_basis: "Amount claimed on mortgage",
        ..BASE
    },
    SuitTypeDefinition {
        id: "mortgage_co_mortgagee",
        group: SuitGroup::A,
        label: "Mortgage - Co-mortgagee Suit",
        section: "Sec 32(b)",
        input_fields: &[InputField { id: "amount", label: "Entire Mortgage Amount (Rs.)" }],
        value_basis: "Entire mortgage amount",
        ..BASE
    },
    SuitTypeDefinition {
        id: "mortgage_sub_mortgage",
        group: SuitGroup::A,
        label: "Mortgage - Sub-mortgage",
        section: "Sec 32(c)",
        input_fields: &[InputField { id: "amount", label: "Amount Claimed on Sub-mortgage (Rs.)" }],
        value_basis: "Amount claimed on sub-mortgage",
        ..BASE
    },
    SuitTypeDefinition {
        id: "mortgage_redemption",
        group: SuitGroup::A,
        label: "Mortgage - Redemption",
        section: "Sec 32(d)",
        comparison: Comparison::Higher,
        input_fields: &[
            InputField { id: "amountDue", label: "Amount Due (Rs.)" },
            InputField { id: "principal", label: "Principal Amount (Rs.)" },
        ],
        value_basis: "Higher of: amount due OR 1/4 of principal",
        ..BASE
    },
    SuitTypeDefinition {
        id: "mortgage_foreclosure",
        group: SuitGroup::A,
        label: "Mortgage - Foreclosure",
        section: "Sec 32(e)",
        comparison: Comparison::Sum,
        input_fields: &[
            InputField { id: "principal", label: "Principal Amount (Rs.)" },
            InputField { id: "interest", label: "Interest Amount (Rs.)" },
        ],
        value_basis: "Principal + Interest",
        ..BASE
    },
    SuitTypeDefinition {
        id: "accounts",
        group: SuitGroup::A,
        label: "Suit for Accounts",
        section: "Sec 33",
        input_fields: &[InputField {
            id: "amount",
            label: "Amount Sued For (as estimated in plaint) (Rs.)",
        }],
        value_basis: "Amount sued for as estimated in plaint",
        ..BASE
    },
    SuitTypeDefinition {
        id: "mesne_profits",
        group: SuitGroup::A,
        label: "Mesne Profits",
        section: "Sec 42",
        input_fields: &[InputField { id: "amount", label: "Amount Estimated in Plaint (Rs.)" }],
        value_basis: "Amount estimated in plaint",
        ..BASE
    },
    // ─── Group B: Property & Possession ──────────────────
    SuitTypeDefinition {
        id: "declaration_with_possession",
        group: SuitGroup::B,
        label: "Declaration + Possession",
        section: "Sec 24(a)",
        minimum_value: Some(1_000),
        input_fields: &[MARKET_VALUE],
        value_basis: "Market value of property (min Rs. 1,000)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "declaration_with_injunction_immovable",
        group: SuitGroup::B,
        label: "Declaration + Consequential Injunction (Immovable)",
        section: "Sec 24(b)",
        fee_method: FeeMethod::AdValoremFraction,
        fraction: Some(HALF),
        minimum_value: Some(1_000),
        input_fields: &[MARKET_VALUE],
        value_basis: "1/2 of market value (min Rs. 1,000)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "declaration_other",
        group: SuitGroup::B,
        label: "Declaration (Other Cases)",
        section: "Sec 24(d)",
        minimum_value: Some(1_000),
        input_fields: &[PLAINT_VALUE],
        value_basis: "Amount valued in plaint (min Rs. 1,000)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "injunction_title_denied",
        group: SuitGroup::B,
        label: "Injunction (Title Denied, Immovable)",
        section: "Sec 26(a)",
        fee_method: FeeMethod::AdValoremFraction,
        fraction: Some(HALF),
        minimum_value: Some(1_000),
        input_fields: &[MARKET_VALUE],
        value_basis: "1/2 of market value (min Rs. 1,000)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "injunction_other",
        group: SuitGroup::B,
        label: "Injunction (Other Cases)",
        section: "Sec 26(b)/(c)",
        minimum_value: Some(1_000),
        input_fields: &[PLAINT_VALUE],
        value_basis: "Amount valued in plaint (min Rs. 1,000)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "possession_specific_relief",
        group: SuitGroup::B,
        label: "Possession (Specific Relief Act)",
        section: "Sec 28",
        fee_method: FeeMethod::AdValoremFraction,
        fraction: Some(HALF),
        minimum_value: Some(1_000),
        input_fields: &[MARKET_VALUE],
        value_basis: "1/2 of market value (min Rs. 1,000)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "possession_other",
        group: SuitGroup::B,
        label: "Possession (Other)",
        section: "Sec 29",
        minimum_value: Some(1_000),
        input_fields: &[MARKET_VALUE],
        value_basis: "Market value (min Rs. 1,000)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "pre_emption",
        group: SuitGroup::B,
        label: "Pre-emption",
        section: "Sec 31",
        comparison: Comparison::Lower,
        input_fields: &[
            InputField { id: "saleConsideration", label: "Sale Consideration (Rs.)" },
            MARKET_VALUE,
        ],
        value_basis: "Lower of: sale consideration OR market value",
        ..BASE
    },
    SuitTypeDefinition {
        id: "easements",
        group: SuitGroup::B,
        label: "Easements",
        section: "Sec 30",
        minimum_value: Some(1_000),
        input_fields: &[PLAINT_VALUE],
        value_basis: "Amount valued in plaint (min Rs. 1,000)",
        ..BASE
    },
    // ─── Group C: Partition ──────────────────────────────
    SuitTypeDefinition {
        id: "partition_title_denied",
        group: SuitGroup::C,
        label: "Partition (Title Denied / Excluded from Possession)",
        section: "Sec 35(1)",
        input_fields: &[InputField {
            id: "shareValue",
            label: "Market Value of Plaintiff's Share (Rs.)",
        }],
        value_basis: "Market value of plaintiff's share",
        ..BASE
    },
    SuitTypeDefinition {
        id: "partition_joint_possession",
        group: SuitGroup::C,
        label: "Partition (Joint Possession)",
        section: "Sec 35(2)",
        fee_method: FeeMethod::FixedTiered,
        fixed_tiers: &[
            FixedFeeTier { min: 0, max: Some(3_000), fee: 15 },
            FixedFeeTier { min: 3_001, max: Some(5_000), fee: 30 },
            FixedFeeTier { min: 5_001, max: Some(10_000), fee: 100 },
            FixedFeeTier { min: 10_001, max: None, fee: 200 },
        ],
        input_fields: &[SHARE_VALUE],
        value_basis: "Value of plaintiff's share (fixed fee table)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "joint_possession_recovery",
        group: SuitGroup::C,
        label: "Joint Possession Recovery",
        section: "Sec 36",
        input_fields: &[InputField {
            id: "shareValue",
            label: "Market Value of Plaintiff's Share (Rs.)",
        }],
        value_basis: "Market value of plaintiff's share",
        ..BASE
    },
    // ─── Group D: Specific Performance ───────────────────
    SuitTypeDefinition {
        id: "specific_perf_sale",
        group: SuitGroup::D,
        label: "Specific Performance - Sale",
        section: "Sec 40(a)",
        input_fields: &[InputField { id: "amount", label: "Amount of Consideration (Rs.)" }],
        value_basis: "Amount of consideration",
        ..BASE
    },
    SuitTypeDefinition {
        id: "specific_perf_mortgage",
        group: SuitGroup::D,
        label: "Specific Performance - Mortgage",
        section: "Sec 40(b)",
        input_fields: &[InputField {
            id: "amount",
            label: "Amount to be Secured by Mortgage (Rs.)",
        }],
        value_basis: "Amount to be secured by mortgage",
        ..BASE
    },
    SuitTypeDefinition {
        id: "specific_perf_lease",
        group: SuitGroup::D,
        label: "Specific Performance - Lease",
        section: "Sec 40(c)",
        comparison: Comparison::Sum,
        input_fields: &[
            InputField { id: "finePremium", label: "Fine / Premium (Rs.)" },
            InputField { id: "avgAnnualRent", label: "Average Annual Rent (Rs.)" },
        ],
        value_basis: "Fine/premium + average annual rent",
        ..BASE
    },
    SuitTypeDefinition {
        id: "specific_perf_exchange",
        group: SuitGroup::D,
        label: "Specific Performance - Exchange",
        section: "Sec 40(d)",
        input_fields: &[InputField {
            id: "amount",
            label: "Consideration / Market Value of Property Sought (Rs.)",
        }],
        value_basis: "Consideration or market value of property sought",
        ..BASE
    },
    SuitTypeDefinition {
        id: "specific_perf_other",
        group: SuitGroup::D,
        label: "Specific Performance - Other",
        section: "Sec 40(e)",
        input_fields: &[InputField { id: "amount", label: "Market Value of Consideration (Rs.)" }],
        value_basis: "Market value of consideration",
        ..BASE
    },
    // ─── Group E: Special / Fixed Fee ────────────────────
    SuitTypeDefinition {
        id: "adoption",
        group: SuitGroup::E,
        label: "Adoption",
        section: "Sec 25",
        fee_method: FeeMethod::FixedTiered,
        fixed_tiers: &[
            FixedFeeTier { min: 0, max: Some(5_000), fee: 25 },
            FixedFeeTier { min: 5_001, max: Some(15_000), fee: 100 },
            FixedFeeTier { min: 15_001, max: None, fee: 250 },
        ],
        input_fields: &[PROPERTY_VALUE],
        value_basis: "Value of property (fixed fee table)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "trust_property",
        group: SuitGroup::E,
        label: "Trust Property",
        section: "Sec 27",
        fee_method: FeeMethod::AdValoremFraction,
        fraction: Some(FIFTH),
        fee_cap: Some(200),
        input_fields: &[MARKET_VALUE],
        value_basis: "Ad valorem on 1/5 of market value (max Rs. 200)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "set_aside_attachment",
        group: SuitGroup::E,
        label: "Set Aside Attachment",
        section: "Sec 39",
        fee_method: FeeMethod::AdValoremFraction,
        fraction: Some(QUARTER),
        comparison: Comparison::Lower,
        input_fields: &[
            MARKET_VALUE,
            InputField { id: "attachmentAmount", label: "Attachment Amount (Rs.)" },
        ],
        value_basis: "Ad valorem on 1/4 of market value OR attachment amount (lower)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "cancellation",
        group: SuitGroup::E,
        label: "Cancellation of Decree/Document",
        section: "Sec 38",
        input_fields: &[InputField { id: "amount", label: "Value of Subject Matter (Rs.)" }],
        value_basis: "Value of subject matter",
        ..BASE
    },
    SuitTypeDefinition {
        id: "revenue_register",
        group: SuitGroup::E,
        label: "Revenue Register Entry",
        section: "Sec 43",
        fee_method: FeeMethod::Fixed,
        fixed_amount: Some(50),
        value_basis: "Fixed fee - Rs. 50",
        ..BASE
    },
    SuitTypeDefinition {
        id: "public_matter",
        group: SuitGroup::E,
        label: "Public Matter (Religious Endowment, CPC 91-92)",
        section: "Sec 44",
        fee_method: FeeMethod::Fixed,
        fixed_amount: Some(50),
        value_basis: "Fixed fee - Rs. 50",
        ..BASE
    },
    SuitTypeDefinition {
        id: "dissolution_partnership",
        group: SuitGroup::E,
        label: "Dissolution of Partnership",
        section: "Sec 34",
        input_fields: &[InputField { id: "amount", label: "Plaintiff's Share Value (Rs.)" }],
        value_basis: "Ad valorem on plaintiff's share value",
        ..BASE
    },
    SuitTypeDefinition {
        id: "landlord_tenant",
        group: SuitGroup::E,
        label: "Landlord-Tenant Disputes",
        section: "Sec 41",
        input_fields: &[InputField { id: "amount", label: "Annual Rent (Rs.)" }],
        value_basis: "Ad valorem on annual rent",
        ..BASE
    },
    SuitTypeDefinition {
        id: "administration",
        group: SuitGroup::E,
        label: "Administration Suit",
        section: "Sec 37",
        fee_method: FeeMethod::FixedTiered,
        fixed_tiers: SEC_47_TIERS,
        input_fields: &[InputField { id: "amount", label: "Value of Estate (Rs.)" }],
        value_basis: "Sec 47 rates based on estate value",
        ..BASE
    },
    SuitTypeDefinition {
        id: "interpleader",
        group: SuitGroup::E,
        label: "Interpleader Suit",
        section: "Sec 45",
        fee_method: FeeMethod::FixedTiered,
        fixed_tiers: SEC_47_TIERS,
        input_fields: &[InputField { id: "amount", label: "Amount in Dispute (Rs.)" }],
        value_basis: "Sec 47 rates based on dispute value",
        ..BASE
    },
    // ─── Group F: Residuary ──────────────────────────────
    SuitTypeDefinition {
        id: "residuary_revenue",
        group: SuitGroup::F,
        label: "Residuary Suit (Revenue Court)",
        section: "Sec 47",
        fee_method: FeeMethod::Fixed,
        fixed_amount: Some(50),
        value_basis: "Fixed fee - Rs. 50",
        ..BASE
    },
    SuitTypeDefinition {
        id: "residuary_civil",
        group: SuitGroup::F,
        label: "Residuary Suit (Civil Court)",
        section: "Sec 47",
        fee_method: FeeMethod::FixedTiered,
        fixed_tiers: SEC_47_TIERS,
        input_fields: &[InputField { id: "amount", label: "Value of Subject Matter (Rs.)" }],
        value_basis: "Sec 47 rates based on subject matter value",
        ..BASE
    },
    // ─── Group G: Appeals & Reviews ──────────────────────
    SuitTypeDefinition {
        id: "appeal_general",
        group: SuitGroup::G,
        label: "Memorandum of Appeal (General)",
        section: "Sec 49 / Art. 1",
        input_fields: &[InputField {
            id: "amount",
            label: "Value of Subject Matter in Appeal (Rs.)",
        }],
        value_basis: "Same fee as court of first instance",
        ..BASE
    },
    SuitTypeDefinition {
        id: "appeal_compensation",
        group: SuitGroup::G,
        label: "Appeal on Compensation (Land Acquisition etc.)",
        section: "Sec 48",
        fee_method: FeeMethod::DifferenceAdValorem,
        input_fields: &[
            InputField { id: "awardedAmount", label: "Amount Awarded (Rs.)" },
            InputField { id: "claimedAmount", label: "Amount Claimed (Rs.)" },
        ],
        value_basis: "Ad valorem on difference between awarded and claimed amounts",
        ..BASE
    },
    SuitTypeDefinition {
        id: "review_within_90d",
        group: SuitGroup::G,
        label: "Review Application (Within 90 Days)",
        section: "Art. 5",
        fee_method: FeeMethod::FractionOfFee,
        fraction: Some(HALF),
        input_fields: &[InputField { id: "amount", label: "Original Suit Value (Rs.)" }],
        value_basis: "Half the plaint fee",
        ..BASE
    },
    SuitTypeDefinition {
        id: "review_after_90d",
        group: SuitGroup::G,
        label: "Review Application (After 90 Days)",
        section: "Art. 5A",
        input_fields: &[InputField { id: "amount", label: "Original Suit Value (Rs.)" }],
        value_basis: "Full plaint fee",
        ..BASE
    },
    SuitTypeDefinition {
        id: "kat_review",
        group: SuitGroup::G,
        label: "Review of KAT Order",
        section: "Art. 5AA",
        fee_method: FeeMethod::Fixed,
        fixed_amount: Some(20),
        value_basis: "Fixed fee - Rs. 20",
        ..BASE
    },
    SuitTypeDefinition {
        id: "insolvency_petition",
        group: SuitGroup::G,
        label: "Insolvency Petition",
        section: "Art. 2(a)",
        fee_method: FeeMethod::FractionOfFee,
        fraction: Some(HALF),
        input_fields: &[InputField { id: "amount", label: "Value of Subject Matter (Rs.)" }],
        value_basis: "Half of Art. 1 scale",
        ..BASE
    },
    SuitTypeDefinition {
        id: "succession_appeal",
        group: SuitGroup::G,
        label: "Indian Succession Act Appeal",
        section: "Art. 4",
        fee_method: FeeMethod::FractionOfFee,
        fraction: Some(HALF),
        input_fields: &[InputField { id: "amount", label: "Value of Subject Matter (Rs.)" }],
        value_basis: "Half of Art. 1 scale",
        ..BASE
    },
    // ─── Group H: Probate & Succession ───────────────────
    SuitTypeDefinition {
        id: "probate_standard",
        group: SuitGroup::H,
        label: "Probate / Letters of Administration",
        section: "Art. 6",
        fee_method: FeeMethod::Probate,
        input_fields: &[InputField { id: "amount", label: "Value of Estate (Rs.)" }],
        value_basis: "Probate fee tiers (nil / 3% / 5% with Rs. 30,000 cap)",
        ..BASE
    },
    SuitTypeDefinition {
        id: "probate_extended_cert",
        group: SuitGroup::H,
        label: "Extended Succession Certificate",
        section: "Art. 6",
        fee_method: FeeMethod::Probate,
        is_extended_probate: true,
        input_fields: &[InputField { id: "amount", label: "Value of Estate (Rs.)" }],
        value_basis: "Probate fee tiers at 1.5x rate",
        ..BASE
    },
    // ─── Group I: Writ Petitions ─────────────────────────
    SuitTypeDefinition {
        id: "writ_petition",
        group: SuitGroup::I,
        label: "Writ Petition (Art. 226/227)",
        section: "Art. 226/227",
        fee_method: FeeMethod::Fixed,
        fixed_amount: Some(100),
        value_basis: "Fixed fee - Rs. 100",
        ..BASE
    },
    SuitTypeDefinition {
        id: "habeas_corpus",
        group: SuitGroup::I,
        label: "Habeas Corpus",
        section: "Art. 226",
        fee_method: FeeMethod::Exempt,
        value_basis: "Exempt - no fee payable",
        ..BASE
    },
];

/// Look up a suit type by its identifier.
pub fn suit_type_by_id(id: &str) -> Option<&'static SuitTypeDefinition> {
    SUIT_TYPES.iter().find(|st| st.id == id)
}

/// All suit types in a group, in table order.
pub fn suit_types_by_group(group: SuitGroup) -> Vec<&'static SuitTypeDefinition> {
    SUIT_TYPES.iter().filter(|st| st.group == group).collect()
}
