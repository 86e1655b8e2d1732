use time::OffsetDateTime;

/// Name of the row-store table holding per-rarity gear stats.
pub const CLOTH_TABLE: &str = "cloth";

/// Gear stats for one rarity, as stored in the `cloth` table.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothRow {
    pub id: i64,
    /// `None` when the store sent a timestamp that is not RFC 3339.
    pub created_at: Option<OffsetDateTime>,
    pub rarity: String,
    pub init_min_ability_value: f64,
    pub init_max_ability_value: f64,
    pub level_up_points: f64,
}
