use crate::localization::{initial_text, t, use_lang};
use crate::AccentText;
use dioxus::prelude::*;

const GAMES: [&str; 5] = ["Valorant", "Counter-Strike 2", "League of Legends", "Rocket League", "Fortnite"];

const EXPERIENCE: [(&str, &str); 4] = [
    ("beginner", "apply.option.beginner"),
    ("intermediate", "apply.option.intermediate"),
    ("advanced", "apply.option.advanced"),
    ("pro", "apply.option.pro"),
];

#[component]
pub fn ApplyForm() -> Element {
    let mut submitted = use_signal(|| false);
    let lang = use_lang();

    rsx! {
        section { id: "apply", class: "section apply",
            h2 { class: "section-title", "data-i18n": "apply.title", AccentText { i18n_key: "apply.title" } }
            p { class: "section-subtitle", "data-i18n": "apply.subtitle",
                {initial_text("apply.subtitle")}
            }
            form {
                id: "apply-form",
                class: "apply-form",
                hidden: submitted(),
                onsubmit: move |evt| {
                    evt.prevent_default();
                    tracing::debug!("apply.submitted");
                    submitted.set(true);
                },
                fieldset {
                    legend { "data-i18n": "apply.legend.personal", {initial_text("apply.legend.personal")} }
                    TextField { id: "name", label: "apply.label.name", placeholder: "apply.placeholder.name", required: true }
                    TextField { id: "age", label: "apply.label.age", placeholder: "apply.placeholder.age", input_type: "number", required: true }
                    TextField { id: "discord", label: "apply.label.discord", placeholder: "apply.placeholder.discord", required: true }
                }
                fieldset {
                    legend { "data-i18n": "apply.legend.gaming", {initial_text("apply.legend.gaming")} }
                    div { class: "form-field",
                        label { r#for: "game", "data-i18n": "apply.label.game", {initial_text("apply.label.game")} }
                        select { id: "game", name: "game", required: true,
                            option { value: "", "data-i18n": "apply.option.selectgame",
                                {initial_text("apply.option.selectgame")}
                            }
                            for game in GAMES {
                                option { value: game, "{game}" }
                            }
                            option { value: "other", "data-i18n": "apply.option.other",
                                {initial_text("apply.option.other")}
                            }
                        }
                    }
                    TextField { id: "rank", label: "apply.label.rank", placeholder: "apply.placeholder.rank" }
                    TextField { id: "role", label: "apply.label.role", placeholder: "apply.placeholder.role" }
                    div { class: "form-field",
                        label { r#for: "experience", "data-i18n": "apply.label.experience",
                            {initial_text("apply.label.experience")}
                        }
                        select { id: "experience", name: "experience", required: true,
                            option { value: "", "data-i18n": "apply.option.howmuch",
                                {initial_text("apply.option.howmuch")}
                            }
                            for (value, key) in EXPERIENCE {
                                option { value, "data-i18n": key, {initial_text(key)} }
                            }
                        }
                    }
                }
                fieldset {
                    legend { "data-i18n": "apply.legend.motivation", {initial_text("apply.legend.motivation")} }
                    div { class: "form-field",
                        label { r#for: "motivation", "data-i18n": "apply.label.motivation",
                            {initial_text("apply.label.motivation")}
                        }
                        textarea {
                            id: "motivation",
                            name: "motivation",
                            rows: "5",
                            required: true,
                            placeholder: initial_text("apply.placeholder.motivation"),
                            "data-i18n-placeholder": "apply.placeholder.motivation",
                        }
                    }
                    TextField { id: "availability", label: "apply.label.availability", placeholder: "apply.placeholder.availability" }
                }
                button { class: "btn btn-primary", r#type: "submit", "data-i18n": "apply.btn.submit",
                    {initial_text("apply.btn.submit")}
                }
            }
            if submitted() {
                div { id: "apply-success", class: "apply-success",
                    h3 { {t(lang(), "apply.success.title")} }
                    p { {t(lang(), "apply.success.text")} }
                    a { class: "btn btn-primary", href: "/", {t(lang(), "apply.success.btn")} }
                }
            }
        }
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { r#for: id, "data-i18n": label, {initial_text(label)} }
            input {
                id,
                name: id,
                r#type: input_type,
                required,
                placeholder: initial_text(placeholder),
                "data-i18n-placeholder": placeholder,
            }
        }
    }
}
