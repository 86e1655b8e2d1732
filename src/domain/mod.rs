//! Domain types for the rarity table and the efficiency calculator.

pub mod calculator;
pub mod entities;

pub use calculator::{
    derive, parse_number, repair_divisor, update_field, DerivedResult, EfficiencyTier, FieldPath,
    InputFields, InputIssue, Rejected, Slot, SlotCosts, EXCHANGE_RATE,
};
pub use entities::{ClothRow, CLOTH_TABLE};
