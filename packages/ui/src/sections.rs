use crate::localization::initial_text;
use crate::AccentText;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section-title", "data-i18n": "about.title", AccentText { i18n_key: "about.title" } }
            div { class: "about-content",
                p { "data-i18n": "about.text1", {initial_text("about.text1")} }
                p { "data-i18n": "about.text2", {initial_text("about.text2")} }
            }
            div { class: "about-stats",
                Stat { value: "5", i18n_key: "about.stat.players" }
                Stat { value: "12", i18n_key: "about.stat.tournaments" }
                Stat { value: "2023", i18n_key: "about.stat.founded" }
            }
        }
    }
}

#[component]
fn Stat(value: &'static str, i18n_key: &'static str) -> Element {
    rsx! {
        div { class: "stat",
            span { class: "stat-number", "{value}" }
            span { class: "stat-label", "data-i18n": i18n_key, {initial_text(i18n_key)} }
        }
    }
}

const SOCIALS: [(&str, &str); 4] = [
    ("Twitch", "https://twitch.tv/teamapex"),
    ("YouTube", "https://youtube.com/@teamapex"),
    ("X", "https://x.com/teamapex"),
    ("Discord", "https://discord.gg/teamapex"),
];

#[component]
pub fn Socials() -> Element {
    rsx! {
        section { id: "socials", class: "section socials",
            h2 { class: "section-title", "data-i18n": "socials.title", AccentText { i18n_key: "socials.title" } }
            p { class: "section-subtitle", "data-i18n": "socials.subtitle",
                {initial_text("socials.subtitle")}
            }
            div { class: "socials-grid",
                for (name, href) in SOCIALS {
                    a { class: "social-card", href, target: "_blank", rel: "noopener", "{name}" }
                }
            }
        }
    }
}

#[component]
pub fn CallToAction() -> Element {
    rsx! {
        section { id: "cta", class: "section cta",
            h2 { class: "section-title", "data-i18n": "cta.title", AccentText { i18n_key: "cta.title" } }
            p { "data-i18n": "cta.text", {initial_text("cta.text")} }
            a { class: "btn btn-primary", href: "/apply", "data-i18n": "cta.btn",
                {initial_text("cta.btn")}
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-links",
                a { href: "/#about", "data-i18n": "footer.about", {initial_text("footer.about")} }
                a { href: "/apply", "data-i18n": "footer.apply", {initial_text("footer.apply")} }
                a {
                    id: "footer-imprint",
                    href: "/legal/de/imprint.html",
                    "data-i18n": "footer.imprint",
                    {initial_text("footer.imprint")}
                }
            }
            p { class: "footer-copy", "data-i18n": "footer.copy", {initial_text("footer.copy")} }
        }
    }
}
