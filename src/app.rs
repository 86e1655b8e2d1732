use dioxus::prelude::*;

use crate::{
    ui::{
        pages::{EfficiencyPage, RarityPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Rarity {},
    #[route("/efficiencyCalculator")]
    Efficiency {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Style { "{assets::main_css()}" }
        if let Some(tailwind) = assets::tailwind_css() {
            document::Style { "{tailwind}" }
        }
        Router::<Route> {}
    }
}

#[component]
pub fn Rarity() -> Element {
    rsx! { Shell { RarityPage {} } }
}

#[component]
pub fn Efficiency() -> Element {
    rsx! { Shell { EfficiencyPage {} } }
}
