use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-50 text-gray-800 font-sans",
            header {
                class: "border-b border-gray-200 bg-white/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-4xl items-center justify-between gap-4",
                    h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Rarity {}),
                            onclick: move |_| { nav.push(Route::Rarity {}); },
                            label: "Rarity table",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Efficiency {}),
                            onclick: move |_| { nav.push(Route::Efficiency {}); },
                            label: "Efficiency",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-4xl px-6 py-10",
                {children}
            }
            footer { class: "py-6 text-center text-xs text-gray-400", "{APP_NAME} {version}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
