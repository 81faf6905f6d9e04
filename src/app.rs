use citadel_core::Language;
use dioxus::prelude::*;

use crate::components::{CharacterGallery, LanguageToggle};
use crate::context::{get_config, provide_client};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the language selection and provides global styles and the GraphQL
/// client.
#[component]
pub fn App() -> Element {
    let config = get_config();
    provide_client(&config);

    let mut language: Signal<Language> = use_signal(|| config.language());
    let t = language().messages();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "{t.title}" }
                LanguageToggle {
                    current: language(),
                    on_select: move |lang| language.set(lang),
                }
            }
            CharacterGallery { language: language() }
        }
    }
}
