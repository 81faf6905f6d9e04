//! Character Card Component
//!
//! One character: portrait, name, and status/species/gender/origin rows.

use citadel_core::{Character, Language};
use dioxus::prelude::*;

use crate::theme::colors::status_color;

/// Character card.
///
/// Missing fields render as the localized "Unknown"/"Unnamed" placeholders.
/// The portrait is dropped if the image fails to load.
///
/// # Example
///
/// ```rust
/// rsx! {
///     CharacterCard {
///         character: rick.clone(),
///         language: Language::En,
///         index: 0,
///     }
/// }
/// ```
#[component]
pub fn CharacterCard(
    character: Character,
    language: Language,
    /// Index for staggered animation
    #[props(default = 0)]
    index: usize,
) -> Element {
    let t = language.messages();
    let mut image_failed = use_signal(|| false);

    let name = t.or_unnamed(character.name.as_deref()).to_string();
    let status = t.or_unknown(character.status.as_deref());
    let species = t.or_unknown(character.species.as_deref());
    let gender = t.or_unknown(character.gender.as_deref());
    let origin = t.or_unknown(character.origin_name());
    let tone = character.status_kind();

    rsx! {
        div {
            class: "character-card",
            style: "--index: {index % 24}",

            if let Some(url) = character.image.clone().filter(|_| !image_failed()) {
                img {
                    class: "character-card__portrait",
                    src: "{url}",
                    alt: "{name}",
                    onerror: move |_| image_failed.set(true),
                }
            }

            div { class: "character-card__body",
                h5 { class: "character-card__name", "{name}" }
                p { class: "character-card__row",
                    strong { "{t.label_status}: " }
                    span {
                        class: "status status--{tone.tone()}",
                        style: "color: {status_color(tone)}",
                        "{status}"
                    }
                }
                p { class: "character-card__row",
                    strong { "{t.label_species}: " }
                    "{species}"
                }
                p { class: "character-card__row",
                    strong { "{t.label_gender}: " }
                    "{gender}"
                }
                p { class: "character-card__row",
                    strong { "{t.label_origin}: " }
                    "{origin}"
                }
            }
        }
    }
}
