use dioxus::prelude::*;

use crate::domain::DerivedResult;
use crate::ui::{format::format_amount, theme};

#[component]
pub fn ResultCard(result: DerivedResult) -> Element {
    let total_cost = format_amount(result.total_cost);
    let efficiency = format_amount(result.display_efficiency);
    let tier_class = theme::tier_text(result.tier);
    let message = result
        .issue
        .map(|issue| issue.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "{theme::RESULT_CARD}",
            p {
                class: "text-lg text-gray-700",
                "Total cost: "
                span { class: "font-semibold", "{total_cost} UHT" }
            }
            if result.displayable {
                p { class: "text-lg text-gray-700", "Efficiency" }
                p { class: "text-5xl font-extrabold {tier_class}", "{efficiency}%" }
            } else {
                p { class: "text-sm font-medium text-red-600", "{message}" }
            }
        }
    }
}
