use crate::localization::use_localization;
use dioxus::prelude::*;
use i18n::Locale;

/// Button labelled with the locale a click switches to. The controller
/// rewrites the label on every change.
#[component]
pub fn LangToggle() -> Element {
    let localization = use_localization();

    rsx! {
        button {
            id: "lang-toggle",
            class: "lang-toggle",
            r#type: "button",
            onclick: move |_| {
                let report = localization.toggle();
                tracing::debug!(
                    "lang.toggle: locale={} applied={}",
                    report.locale,
                    report.content_applied
                );
            },
            {Locale::FALLBACK.other().label()}
        }
    }
}
