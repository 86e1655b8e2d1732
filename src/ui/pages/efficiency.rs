use dioxus::prelude::*;
use tracing::debug;

use crate::{
    domain::{derive, update_field, FieldPath, InputFields, Slot, EXCHANGE_RATE},
    ui::{
        components::{NumberField, RequiredField, ResultCard},
        format::format_rate,
        theme,
    },
};

#[component]
pub fn EfficiencyPage() -> Element {
    let mut fields = use_signal(InputFields::default);

    let snapshot = fields();
    let result = derive(&snapshot);
    let rate = format_rate(EXCHANGE_RATE);
    let acquired_missing = result.acquired_missing;
    let energy_missing = result.energy_missing;

    rsx! {
        div {
            class: "w-full sm:max-w-2xl mx-auto p-4 sm:p-6 space-y-6",
            h1 { class: "{theme::PAGE_TITLE}", "Efficiency Calculator" }
            p { class: "text-center text-sm text-gray-700", "1 GHT = {rate} UHT" }

            RequiredField {
                id: "uht",
                label: "Acquired UHT",
                value: snapshot.acquired_value.clone(),
                unit: "UHT",
                step: "0.1",
                missing: acquired_missing,
                on_input: move |text| apply_input(fields, FieldPath::AcquiredValue, text),
            }

            RequiredField {
                id: "energy",
                label: "Energy spent",
                value: snapshot.energy_spent.clone(),
                unit: "Energy",
                step: "1",
                missing: energy_missing,
                on_input: move |text| apply_input(fields, FieldPath::EnergySpent, text),
            }

            section {
                class: "{theme::CARD} space-y-4",
                h2 { class: "{theme::SECTION_TITLE}", "Cleaning costs" }
                for slot in Slot::ALL {
                    div {
                        key: "cleaning-{slot.label()}",
                        class: "flex items-center gap-2 sm:gap-4",
                        label { class: "{theme::SLOT_LABEL}", "{slot.label()}" }
                        NumberField {
                            id: format!("cleaning-{}", slot.label().to_lowercase()),
                            value: snapshot.cleaning.get(slot).to_string(),
                            unit: "UHT",
                            step: "0.1",
                            invalid: false,
                            on_input: move |text| apply_input(fields, FieldPath::Cleaning(slot), text),
                        }
                    }
                }
            }

            section {
                class: "{theme::CARD} space-y-4",
                h2 { class: "{theme::SECTION_TITLE}", "Repair costs" }
                for slot in Slot::ALL {
                    div {
                        key: "repair-{slot.label()}",
                        class: "flex items-center gap-2 sm:gap-4",
                        label { class: "{theme::SLOT_LABEL}", "{slot.label()}" }
                        NumberField {
                            id: format!("repair-{}", slot.label().to_lowercase()),
                            value: snapshot.repair.get(slot).to_string(),
                            unit: "GHT",
                            step: "0.1",
                            invalid: false,
                            on_input: move |text| apply_input(fields, FieldPath::Repair(slot), text),
                        }
                    }
                }
            }

            ResultCard { result }

            div {
                class: "text-center",
                button {
                    class: "{theme::BTN_OUTLINE}",
                    onclick: move |_| fields.with_mut(|state| state.reset()),
                    "Reset"
                }
            }
        }
    }
}

fn apply_input(mut fields: Signal<InputFields>, path: FieldPath, text: String) {
    fields.with_mut(|state| {
        if let Err(rejected) = update_field(state, path, text) {
            debug!(%rejected, "input ignored");
        }
    });
}
