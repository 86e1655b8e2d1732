//! Shared class strings so both pages look alike.

use crate::domain::EfficiencyTier;

// ============================================
// TEXT
// ============================================

pub fn tier_text(tier: EfficiencyTier) -> &'static str {
    match tier {
        EfficiencyTier::Good => "tier-good text-green-600",
        EfficiencyTier::Warning => "tier-warning text-yellow-600",
        EfficiencyTier::Poor => "tier-poor text-red-600",
    }
}

pub const TABLE_TITLE: &str = "text-2xl font-bold mb-4";
pub const PAGE_TITLE: &str = "text-4xl font-bold text-center text-blue-700 mb-8";
pub const SECTION_TITLE: &str = "text-lg font-semibold text-gray-700 border-b pb-2";
pub const FIELD_LABEL: &str = "text-lg font-semibold text-gray-700";
pub const SLOT_LABEL: &str = "w-24 text-gray-600";
pub const UNIT: &str = "text-sm text-gray-500";
pub const ERROR_TEXT: &str = "text-sm text-red-600";

// ============================================
// INPUTS
// ============================================

pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "flex-1 rounded-md border border-gray-300 px-3 py-2 text-sm ring-1 ring-red-500 field-invalid"
    } else {
        "flex-1 rounded-md border border-gray-300 px-3 py-2 text-sm focus:border-blue-500 focus:outline-none"
    }
}

// ============================================
// CONTAINERS
// ============================================

pub const CARD: &str = "rounded-2xl border border-gray-200 bg-white p-6 shadow-sm";
pub const RESULT_CARD: &str = "rounded-2xl border bg-white p-6 text-center shadow-md space-y-4";
pub const TABLE: &str = "cloth-table table-auto border-collapse w-full text-sm";
pub const TABLE_HEAD: &str = "bg-gray-100";
pub const TABLE_CELL: &str = "border px-4 py-2";

// ============================================
// BUTTONS
// ============================================

pub const BTN_OUTLINE: &str = "mt-2 w-full sm:w-auto rounded-md border border-gray-300 bg-white px-4 py-2 text-sm font-medium text-gray-700 hover:bg-gray-50";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "rounded-lg border border-blue-500/60 bg-blue-50 px-4 py-2 text-sm font-semibold text-blue-700"
    } else {
        "rounded-lg border border-transparent px-4 py-2 text-sm text-gray-500 transition hover:border-gray-300 hover:text-gray-800"
    }
}
