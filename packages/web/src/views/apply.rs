use dioxus::prelude::*;
use ui::ApplyForm;

#[component]
pub fn Apply() -> Element {
    ui::use_localized_page();

    rsx! { ApplyForm {} }
}
