use crate::localization::initial_text;
use crate::LangToggle;
use dioxus::prelude::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/#about", "nav.about"),
    ("/#team", "nav.team"),
    ("/#events", "nav.events"),
    ("/#socials", "nav.socials"),
    ("/apply", "nav.apply"),
];

#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);
    let open_class = if menu_open() { " active" } else { "" };

    rsx! {
        nav { id: "navbar", class: "navbar",
            div { class: "nav-container",
                a { class: "nav-logo", href: "/", "TEAM APEX" }
                button {
                    id: "nav-toggle",
                    class: "nav-toggle{open_class}",
                    r#type: "button",
                    onclick: move |_| menu_open.toggle(),
                    span {}
                    span {}
                    span {}
                }
                ul { id: "nav-menu", class: "nav-menu{open_class}",
                    for (href, key) in NAV_LINKS {
                        li {
                            a {
                                class: "nav-link",
                                href,
                                "data-i18n": key,
                                onclick: move |_| menu_open.set(false),
                                {initial_text(key)}
                            }
                        }
                    }
                    li {
                        a {
                            id: "nav-rules",
                            class: "nav-link",
                            href: "/docs/de/rules.html",
                            "data-i18n": "nav.rules",
                            {initial_text("nav.rules")}
                        }
                    }
                    li { LangToggle {} }
                }
            }
        }
    }
}
