//! Language switcher buttons.

use citadel_core::Language;
use dioxus::prelude::*;

/// One button per language; the active one is highlighted and pressed.
#[component]
pub fn LanguageToggle(current: Language, on_select: EventHandler<Language>) -> Element {
    rsx! {
        div { class: "language-toggle",
            for lang in Language::all() {
                button {
                    key: "{lang}",
                    class: if lang == current { "lang-btn active" } else { "lang-btn" },
                    "aria-pressed": lang == current,
                    onclick: move |_| on_select.call(lang),
                    "{lang.toggle_label()}"
                }
            }
        }
    }
}
