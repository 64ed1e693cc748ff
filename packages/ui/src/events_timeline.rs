use crate::localization::{initial_text, use_localization};
use crate::AccentText;
use dioxus::prelude::*;
use i18n::events::{ACTIVE_CONTAINER, PAST_CONTAINER, PAST_TOGGLE};
use i18n::{EventsRenderer, TranslationStore};
use std::rc::Rc;

/// The events section. Cards are written by an `EventsRenderer` subscribed
/// to the page's controller, so they follow every locale change.
#[component]
pub fn EventsTimeline() -> Element {
    let localization = use_localization();
    let renderer = use_hook(|| {
        let renderer = Rc::new(EventsRenderer::new(TranslationStore::builtin()));
        localization.subscribe(&renderer);
        renderer
    });
    let feed = use_resource(api::load_events);

    let loader = localization.clone();
    let loaded_into = renderer.clone();
    use_effect(move || match &*feed.read() {
        Some(Ok(feed)) => {
            tracing::debug!(
                "events.loaded: active={} past={}",
                feed.active.len(),
                feed.past.len()
            );
            loader.load_events(&loaded_into, feed.clone());
        }
        Some(Err(err)) => tracing::warn!("events.fetch: {err}"),
        None => {}
    });

    rsx! {
        section { id: "events", class: "section events",
            h2 { class: "section-title", "data-i18n": "events.title", AccentText { i18n_key: "events.title" } }
            p { class: "section-subtitle", "data-i18n": "events.subtitle",
                {initial_text("events.subtitle")}
            }
            div { id: ACTIVE_CONTAINER, class: "events-timeline" }
            div { id: PAST_CONTAINER, class: "events-timeline events-past" }
            button {
                id: PAST_TOGGLE,
                class: "btn btn-outline events-toggle",
                r#type: "button",
                hidden: true,
                onclick: move |_| localization.toggle_past_events(&renderer),
            }
        }
    }
}
