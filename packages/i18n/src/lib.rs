//! Localization engine for the Team Apex site.
//!
//! A [`TranslationStore`] holds one immutable dictionary per [`Locale`]. The
//! [`LocalizationController`] owns the current locale: it applies a locale to
//! a [`Document`] by rewriting every `data-i18n` / `data-i18n-placeholder`
//! binding, persists the choice in a [`LocaleSlot`], refreshes locale links
//! and then notifies every registered [`RenderSubscriber`] (for example the
//! [`EventsRenderer`]).
//!
//! Nothing here touches a browser. The web front end supplies DOM and
//! localStorage implementations of the two seams; tests use
//! [`MemoryDocument`] and [`MemorySlot`].

mod config;
mod controller;
mod document;
mod error;
pub mod events;
mod locale;
mod memory;
mod storage;
mod store;
mod value;

pub use config::{I18nConfig, LocaleLink};
pub use controller::{ApplyReport, ControllerState, LocalizationController, RenderSubscriber};
pub use document::{Binding, BindingKind, Document, Fragment, CONTENT_ATTR, PLACEHOLDER_ATTR};
pub use error::{I18nError, RenderError, StorageError};
pub use events::{ActiveEvent, EventFeed, EventRecord, EventStatus, EventsRenderer, LocalizedText};
pub use locale::Locale;
pub use memory::{Element, MemoryDocument, NodeId};
pub use storage::{LocaleSlot, MemorySlot};
pub use store::{CoverageReport, TranslationStore, RICH_KEYS};
pub use value::{escape_html, RichText, Segment, TranslationValue, ACCENT_CLASS};
