use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const EVENTS_CSS: Asset = asset!("/assets/styling/events.css");

/// Site-wide stylesheets.
#[component]
pub fn ApexTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: EVENTS_CSS }
    }
}
