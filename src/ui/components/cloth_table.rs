use dioxus::prelude::*;

use crate::domain::ClothRow;
use crate::ui::theme;

#[component]
pub fn ClothTable(rows: Vec<ClothRow>) -> Element {
    rsx! {
        table {
            class: "{theme::TABLE}",
            thead {
                class: "{theme::TABLE_HEAD}",
                tr {
                    th { class: "{theme::TABLE_CELL}", "Rarity" }
                    th { class: "{theme::TABLE_CELL}", "Initial ability (min)" }
                    th { class: "{theme::TABLE_CELL}", "Initial ability (max)" }
                    th { class: "{theme::TABLE_CELL}", "Level-up points" }
                }
            }
            tbody {
                for row in rows {
                    ClothRowView { key: "{row.id}", row }
                }
            }
        }
    }
}

#[component]
fn ClothRowView(row: ClothRow) -> Element {
    rsx! {
        tr {
            td { class: "{theme::TABLE_CELL}", "{row.rarity}" }
            td { class: "{theme::TABLE_CELL}", "{row.init_min_ability_value}" }
            td { class: "{theme::TABLE_CELL}", "{row.init_max_ability_value}" }
            td { class: "{theme::TABLE_CELL}", "{row.level_up_points}" }
        }
    }
}
