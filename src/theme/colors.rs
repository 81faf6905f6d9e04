//! Status colors.
//!
//! The rest of the palette lives as CSS custom properties in `styles.rs`.

use citadel_core::CharacterStatus;

// === STATUS ===
pub const ALIVE: &str = "#55cc44";
pub const DEAD: &str = "#d63d2e";
pub const NEUTRAL: &str = "#9e9e9e";

/// Tint for a status label
pub fn status_color(status: CharacterStatus) -> &'static str {
    match status {
        CharacterStatus::Alive => ALIVE,
        CharacterStatus::Dead => DEAD,
        CharacterStatus::Unknown => NEUTRAL,
    }
}
