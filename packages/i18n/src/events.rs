//! Events timeline: feed types and the locale-aware card renderer.

use crate::controller::RenderSubscriber;
use crate::document::{Document, Fragment};
use crate::error::RenderError;
use crate::store::TranslationStore;
use crate::Locale;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

pub const ACTIVE_CONTAINER: &str = "events-active";
pub const PAST_CONTAINER: &str = "events-past";
pub const PAST_TOGGLE: &str = "events-toggle";
/// Class marking the past-events container as expanded.
pub const EXPANDED_CLASS: &str = "active";

const MONTH_KEYS: [&str; 12] = [
    "events.month.jan",
    "events.month.feb",
    "events.month.mar",
    "events.month.apr",
    "events.month.may",
    "events.month.jun",
    "events.month.jul",
    "events.month.aug",
    "events.month.sep",
    "events.month.oct",
    "events.month.nov",
    "events.month.dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Live,
    Upcoming,
    Past,
}

impl EventStatus {
    pub fn card_class(self) -> &'static str {
        match self {
            EventStatus::Live => "event-live",
            EventStatus::Upcoming => "event-upcoming",
            EventStatus::Past => "event-past",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            EventStatus::Live => "event-badge-live",
            EventStatus::Upcoming => "",
            EventStatus::Past => "event-badge-past",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            EventStatus::Live => "events.status.live",
            EventStatus::Upcoming => "events.status.upcoming",
            EventStatus::Past => "events.status.past",
        }
    }
}

/// Per-language text keyed by locale code. Missing or empty entries fall
/// back to the German text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new<'a>(entries: impl IntoIterator<Item = (Locale, &'a str)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(locale, text)| (locale.code().to_string(), text.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, locale: Locale) -> &str {
        self.0
            .get(locale.code())
            .filter(|text| !text.is_empty())
            .or_else(|| self.0.get(Locale::FALLBACK.code()))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Calendar date, `YYYY-MM-DD` (month and day may be unpadded),
    /// optionally followed by `T` or a space and a time.
    pub date: String,
    pub name: String,
    #[serde(default)]
    pub duration: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEvent {
    #[serde(flatten)]
    pub event: EventRecord,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventFeed {
    pub active: Vec<ActiveEvent>,
    pub past: Vec<EventRecord>,
}

impl EventFeed {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.past.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl CardDate {
    fn from_record(store: &TranslationStore, locale: Locale, raw: &str) -> Self {
        let day_part = raw.trim().split(['T', ' ']).next().unwrap_or_default();
        match NaiveDate::parse_from_str(day_part, "%Y-%m-%d") {
            Ok(date) => Self {
                day: format!("{:02}", date.day()),
                month: store.text(locale, MONTH_KEYS[date.month0() as usize]),
                year: date.year().to_string(),
            },
            Err(err) => {
                warn!("events.render: unparseable date {raw:?}: {err}");
                Self {
                    day: raw.to_string(),
                    month: String::new(),
                    year: String::new(),
                }
            }
        }
    }
}

/// Builds one display card. Every field is inserted as text.
pub fn build_card(
    store: &TranslationStore,
    locale: Locale,
    event: &EventRecord,
    status: EventStatus,
) -> Fragment {
    let date = CardDate::from_record(store, locale, &event.date);

    Fragment::new("div")
        .class("event-card")
        .class(status.card_class())
        .child(
            Fragment::new("div")
                .class("event-status-badge")
                .class(status.badge_class())
                .text(store.text(locale, status.label_key())),
        )
        .child(
            Fragment::new("div")
                .class("event-date")
                .child(Fragment::new("span").class("event-day").text(date.day))
                .child(Fragment::new("span").class("event-month").text(date.month))
                .child(Fragment::new("span").class("event-year").text(date.year)),
        )
        .child(
            Fragment::new("div")
                .class("event-details")
                .child(Fragment::new("h3").class("event-name").text(event.name.as_str()))
                .child(
                    Fragment::new("span")
                        .class("event-duration")
                        .text(event.duration.get(locale)),
                )
                .child(
                    Fragment::new("p")
                        .class("event-description")
                        .text(event.description.get(locale)),
                ),
        )
}

/// Renders the events timeline and re-renders it on every locale change.
///
/// Active events keep the status the data source supplied. Everything in the
/// past bucket is shown as past.
#[derive(Debug)]
pub struct EventsRenderer {
    store: Arc<TranslationStore>,
    feed: RefCell<EventFeed>,
}

impl EventsRenderer {
    pub fn new(store: Arc<TranslationStore>) -> Self {
        Self {
            store,
            feed: RefCell::new(EventFeed::default()),
        }
    }

    pub fn feed(&self) -> EventFeed {
        self.feed.borrow().clone()
    }

    /// Stores a freshly loaded feed and renders it.
    pub fn load<D: Document>(
        &self,
        document: &mut D,
        locale: Locale,
        feed: EventFeed,
    ) -> Result<(), RenderError> {
        *self.feed.borrow_mut() = feed;
        self.rerender(document, locale)
    }

    /// Renders the last loaded feed.
    pub fn rerender<D: Document>(&self, document: &mut D, locale: Locale) -> Result<(), RenderError> {
        let feed = self.feed.borrow();
        self.render(document, locale, &feed.active, &feed.past)
    }

    pub fn cards(
        &self,
        locale: Locale,
        active: &[ActiveEvent],
        past: &[EventRecord],
    ) -> (Vec<Fragment>, Vec<Fragment>) {
        let active_cards = active
            .iter()
            .map(|item| build_card(&self.store, locale, &item.event, item.status))
            .collect();
        let past_cards = past
            .iter()
            .map(|event| build_card(&self.store, locale, event, EventStatus::Past))
            .collect();
        (active_cards, past_cards)
    }

    pub fn render<D: Document>(
        &self,
        document: &mut D,
        locale: Locale,
        active: &[ActiveEvent],
        past: &[EventRecord],
    ) -> Result<(), RenderError> {
        for id in [ACTIVE_CONTAINER, PAST_CONTAINER, PAST_TOGGLE] {
            if !document.contains_id(id) {
                return Err(RenderError::MissingContainer(id.to_string()));
            }
        }

        let (active_cards, past_cards) = self.cards(locale, active, past);
        document.replace_children(ACTIVE_CONTAINER, &active_cards);
        document.replace_children(PAST_CONTAINER, &past_cards);

        if past.is_empty() {
            document.set_hidden_by_id(PAST_TOGGLE, true);
        } else {
            let expanded = document.has_class_by_id(PAST_CONTAINER, EXPANDED_CLASS);
            document.set_text_by_id(PAST_TOGGLE, &self.toggle_label(locale, expanded));
            document.set_hidden_by_id(PAST_TOGGLE, false);
        }
        Ok(())
    }

    /// Expands or collapses the past events. Returns whether they are now
    /// expanded.
    pub fn toggle_past<D: Document>(&self, document: &mut D, locale: Locale) -> Result<bool, RenderError> {
        let expanded = document
            .toggle_class_by_id(PAST_CONTAINER, EXPANDED_CLASS)
            .ok_or_else(|| RenderError::MissingContainer(PAST_CONTAINER.to_string()))?;
        document.set_text_by_id(PAST_TOGGLE, &self.toggle_label(locale, expanded));
        Ok(expanded)
    }

    fn toggle_label(&self, locale: Locale, expanded: bool) -> String {
        let key = if expanded {
            "events.toggle.hide"
        } else {
            "events.toggle.show"
        };
        self.store.text(locale, key)
    }
}

impl<D: Document> RenderSubscriber<D> for EventsRenderer {
    fn on_locale_changed(&self, locale: Locale, document: &mut D) -> Result<(), RenderError> {
        self.rerender(document, locale)
    }
}
