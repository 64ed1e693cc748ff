//! This crate contains all shared UI for the workspace.

mod localization;
pub use localization::{
    initial_text, t, use_lang, use_localization, use_localized_page, I18nProvider, Localization,
    PageController, PageDocument, PageSlot,
};

#[cfg(target_arch = "wasm32")]
mod dom;

mod accent;
pub use accent::AccentText;

mod lang_toggle;
pub use lang_toggle::LangToggle;

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod sections;
pub use sections::{About, CallToAction, Footer, Socials};

mod team;
pub use team::{Player, Team, ROSTER};

mod events_timeline;
pub use events_timeline::EventsTimeline;

mod apply;
pub use apply::ApplyForm;

mod theme;
pub use theme::ApexTheme;
