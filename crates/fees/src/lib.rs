//! Court-fee engine for the Karnataka Court Fees and Suits Valuation
//! Act, 1958.
//!
//! Computes the ad valorem or fixed court fee payable for ~50 suit
//! types via a slab-based statute, plus a refund estimator. The engine
//! resolves a single effective value from the suit type's named inputs,
//! dispatches on the fee method (a tagged union, exhaustively matched),
//! and emits a human-readable breakdown of every computation step --
//! the breakdown is part of the output contract, not a debug aid.
//!
//! All money arithmetic uses `rust_decimal::Decimal`; every rounding
//! step rounds up to whole rupees (court-fee practice never underpays
//! on fractions).

pub mod calculator;
pub mod currency;
pub mod error;
pub mod refund;
pub mod slabs;
pub mod suit_types;
pub mod types;

pub use calculator::{calculate_court_fee, resolve_value};
pub use error::FeeError;
pub use refund::{calculate_refund, RefundRule, REFUND_RULES};
pub use slabs::{compute_ad_valorem_fee, AD_VALOREM_SLABS};
pub use suit_types::{suit_type_by_id, suit_types_by_group, SUIT_GROUPS, SUIT_TYPES};
pub use types::{
    BreakdownStep, Comparison, FeeInput, FeeMethod, FeeResult, FixedFeeTier, Fraction, InputField,
    RefundInput, RefundResult, RefundScenario, SlabApplication, SlabDefinition, SuitGroup,
    SuitTypeDefinition,
};
