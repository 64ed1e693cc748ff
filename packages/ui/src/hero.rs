use crate::localization::initial_text;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "TEAM APEX" }
                p { class: "hero-subtitle", "data-i18n": "hero.subtitle",
                    {initial_text("hero.subtitle")}
                }
                div { class: "hero-buttons",
                    a { class: "btn btn-primary", href: "/#about", "data-i18n": "hero.btn.more",
                        {initial_text("hero.btn.more")}
                    }
                    a { class: "btn btn-outline", href: "/apply", "data-i18n": "hero.btn.apply",
                        {initial_text("hero.btn.apply")}
                    }
                }
            }
        }
    }
}
