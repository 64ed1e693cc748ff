use dioxus::prelude::*;
use ui::{About, CallToAction, EventsTimeline, Hero, Socials, Team};

#[component]
pub fn Home() -> Element {
    ui::use_localized_page();

    rsx! {
        Hero {}
        About {}
        Team {}
        EventsTimeline {}
        Socials {}
        CallToAction {}
    }
}
