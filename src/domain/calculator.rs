//! Gear efficiency calculator.
//!
//! - Holds the raw text of every form field so that "empty" and "zero" stay distinct.
//! - Derives costs, the efficiency percentage and a single prioritized issue from that text.
//!
//! Everything here is synchronous and side-effect free; the page calls [`derive`] on every
//! render and [`update_field`] on every input event.

use std::fmt;

use thiserror::Error;

/// UHT paid out per GHT when converting repair costs.
pub const EXCHANGE_RATE: f64 = 3.06088;

/// Repair divisor granularity: energy is rounded up to a multiple of this.
const ENERGY_STEP: f64 = 5.0;

const GOOD_THRESHOLD: f64 = 80.0;
const WARNING_THRESHOLD: f64 = 70.0;

/// Equipment slot that carries its own cleaning and repair cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
}

impl Slot {
    /// Display order of the slots.
    pub const ALL: [Slot; 3] = [Slot::Top, Slot::Bottom, Slot::Shoes];

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Top => "TOP",
            Slot::Bottom => "BOTTOM",
            Slot::Shoes => "SHOES",
        }
    }
}

/// Raw per-slot cost text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotCosts {
    pub top: String,
    pub bottom: String,
    pub shoes: String,
}

impl SlotCosts {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Top => &self.top,
            Slot::Bottom => &self.bottom,
            Slot::Shoes => &self.shoes,
        }
    }

    fn get_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::Top => &mut self.top,
            Slot::Bottom => &mut self.bottom,
            Slot::Shoes => &mut self.shoes,
        }
    }

    /// Sum of all slots, blank or unparsable entries counting as zero.
    pub fn total(&self) -> f64 {
        Slot::ALL
            .iter()
            .map(|slot| parse_number(self.get(*slot)).unwrap_or(0.0))
            .sum()
    }
}

/// Address of a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldPath {
    AcquiredValue,
    EnergySpent,
    Cleaning(Slot),
    Repair(Slot),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::AcquiredValue => write!(f, "acquired value"),
            FieldPath::EnergySpent => write!(f, "energy spent"),
            FieldPath::Cleaning(slot) => write!(f, "cleaning cost ({})", slot.label()),
            FieldPath::Repair(slot) => write!(f, "repair cost ({})", slot.label()),
        }
    }
}

/// A mutation that would break the "empty or non-negative number" invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("rejected {value:?} for {field}")]
pub struct Rejected {
    pub field: FieldPath,
    pub value: String,
}

/// Raw calculator inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFields {
    /// UHT earned by the activity.
    pub acquired_value: String,
    pub energy_spent: String,
    /// Cleaning costs, in UHT.
    pub cleaning: SlotCosts,
    /// Repair costs, in GHT.
    pub repair: SlotCosts,
}

impl InputFields {
    pub fn get(&self, path: FieldPath) -> &str {
        match path {
            FieldPath::AcquiredValue => &self.acquired_value,
            FieldPath::EnergySpent => &self.energy_spent,
            FieldPath::Cleaning(slot) => self.cleaning.get(slot),
            FieldPath::Repair(slot) => self.repair.get(slot),
        }
    }

    fn get_mut(&mut self, path: FieldPath) -> &mut String {
        match path {
            FieldPath::AcquiredValue => &mut self.acquired_value,
            FieldPath::EnergySpent => &mut self.energy_spent,
            FieldPath::Cleaning(slot) => self.cleaning.get_mut(slot),
            FieldPath::Repair(slot) => self.repair.get_mut(slot),
        }
    }

    /// Returns a copy with `path` set to `value`, or the rejection.
    pub fn with_field(
        &self,
        path: FieldPath,
        value: impl Into<String>,
    ) -> Result<Self, Rejected> {
        let mut next = self.clone();
        update_field(&mut next, path, value)?;
        Ok(next)
    }

    /// Clears every field back to the empty initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parses a decimal field. Blank, malformed and non-finite text yield `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Whether `value` may be stored in a numeric field.
pub fn is_acceptable(value: &str) -> bool {
    value.is_empty() || parse_number(value).is_some_and(|number| number >= 0.0)
}

/// Stores `value` at `path` if it is empty or a non-negative number.
///
/// On rejection the field keeps its previous text.
pub fn update_field(
    fields: &mut InputFields,
    path: FieldPath,
    value: impl Into<String>,
) -> Result<(), Rejected> {
    let value = value.into();
    if !is_acceptable(&value) {
        return Err(Rejected { field: path, value });
    }
    *fields.get_mut(path) = value;
    Ok(())
}

/// Energy rounded up to the next multiple of five, never below five.
pub fn repair_divisor(energy: f64) -> f64 {
    ((energy / ENERGY_STEP).ceil() * ENERGY_STEP).max(ENERGY_STEP)
}

/// Color band of an efficiency percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EfficiencyTier {
    Good,
    Warning,
    Poor,
}

impl EfficiencyTier {
    pub fn classify(raw_efficiency: f64) -> Self {
        if raw_efficiency >= GOOD_THRESHOLD {
            EfficiencyTier::Good
        } else if raw_efficiency >= WARNING_THRESHOLD {
            EfficiencyTier::Warning
        } else {
            EfficiencyTier::Poor
        }
    }
}

/// The one message shown in place of the result. Ordered by priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InputIssue {
    #[error("acquired value required")]
    AcquiredValueRequired,
    #[error("energy spent required")]
    EnergySpentRequired,
    #[error("cost exceeds acquired value")]
    CostExceedsAcquired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DerivedResult {
    pub total_cleaning: f64,
    /// Repair costs before conversion, in GHT.
    pub total_repair_ght: f64,
    pub repair_divisor: f64,
    /// Repair costs after conversion, in UHT.
    pub total_repair_cost: f64,
    pub total_cost: f64,
    pub raw_efficiency: f64,
    /// `raw_efficiency` rounded to two decimals.
    pub display_efficiency: f64,
    pub tier: EfficiencyTier,
    pub displayable: bool,
    pub issue: Option<InputIssue>,
    /// Acquired value is blank or zero.
    pub acquired_missing: bool,
    /// Energy is blank or zero.
    pub energy_missing: bool,
}

/// Recomputes every derived value from the raw inputs.
pub fn derive(fields: &InputFields) -> DerivedResult {
    let acquired = parse_number(&fields.acquired_value).unwrap_or(0.0);
    let energy = parse_number(&fields.energy_spent).unwrap_or(0.0);

    let total_cleaning = fields.cleaning.total();
    let total_repair_ght = fields.repair.total();

    let divisor = repair_divisor(energy);
    let total_repair_cost = if energy > 0.0 {
        total_repair_ght * energy / divisor * EXCHANGE_RATE
    } else {
        0.0
    };

    let total_cost = total_cleaning + total_repair_cost;
    let raw_efficiency = if acquired > 0.0 {
        (1.0 - total_cost / acquired) * 100.0
    } else {
        0.0
    };
    let display_efficiency = round_to_cents(raw_efficiency);

    let displayable = acquired >= 0.0
        && energy > 0.0
        && raw_efficiency >= 0.0
        && raw_efficiency <= 100.0;

    let issue = if fields.acquired_value.is_empty() {
        Some(InputIssue::AcquiredValueRequired)
    } else if fields.energy_spent.is_empty() || energy == 0.0 {
        Some(InputIssue::EnergySpentRequired)
    } else if raw_efficiency < 0.0 {
        Some(InputIssue::CostExceedsAcquired)
    } else {
        None
    };

    DerivedResult {
        total_cleaning,
        total_repair_ght,
        repair_divisor: divisor,
        total_repair_cost,
        total_cost,
        raw_efficiency,
        display_efficiency,
        tier: EfficiencyTier::classify(raw_efficiency),
        displayable,
        issue,
        acquired_missing: fields.acquired_value.is_empty() || acquired == 0.0,
        energy_missing: fields.energy_spent.is_empty() || energy == 0.0,
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
