use crate::localization::{initial_text, use_localized_page};
use crate::AccentText;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct Player {
    pub name: &'static str,
    pub role: &'static str,
    pub attacker: u32,
    pub defender: u32,
    pub playstyle: &'static str,
}

pub const ROSTER: [Player; 5] = [
    Player { name: "Vortex", role: "IGL", attacker: 87, defender: 91, playstyle: "Anchor" },
    Player { name: "Kairo", role: "Entry", attacker: 94, defender: 78, playstyle: "Aggressive" },
    Player { name: "Nyx", role: "Support", attacker: 81, defender: 89, playstyle: "Utility" },
    Player { name: "Blitz", role: "Flex", attacker: 88, defender: 85, playstyle: "Adaptive" },
    Player { name: "Sable", role: "Sniper", attacker: 90, defender: 84, playstyle: "Patient" },
];

#[component]
pub fn Team() -> Element {
    let mut selected = use_signal(|| None::<Player>);

    rsx! {
        section { id: "team", class: "section team",
            h2 { class: "section-title", "data-i18n": "team.title", AccentText { i18n_key: "team.title" } }
            div { class: "team-grid",
                for player in ROSTER {
                    button {
                        class: "team-card",
                        r#type: "button",
                        onclick: move |_| selected.set(Some(player)),
                        span { class: "team-name", "{player.name}" }
                        span { class: "team-role", "{player.role}" }
                    }
                }
            }
            if let Some(player) = selected() {
                PlayerCompare { player, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn PlayerCompare(player: Player, on_close: EventHandler<()>) -> Element {
    // Mounted after the last locale change, so its labels need a pass.
    use_localized_page();

    rsx! {
        div {
            id: "player-compare",
            class: "compare-modal active",
            tabindex: "0",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div { class: "compare-content", onclick: move |evt| evt.stop_propagation(),
                button {
                    id: "player-compare-close",
                    class: "compare-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h3 { "{player.name}" }
                dl { class: "compare-stats",
                    dt { "data-i18n": "modal.attacker", {initial_text("modal.attacker")} }
                    dd { "{player.attacker}" }
                    dt { "data-i18n": "modal.defender", {initial_text("modal.defender")} }
                    dd { "{player.defender}" }
                    dt { "data-i18n": "modal.playstyle", {initial_text("modal.playstyle")} }
                    dd { "{player.playstyle}" }
                }
            }
        }
    }
}
