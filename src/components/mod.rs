//! UI Components for Citadel.

mod character_card;
mod character_gallery;
mod filter_bar;
mod language_toggle;

pub use character_card::CharacterCard;
pub use character_gallery::CharacterGallery;
pub use filter_bar::FilterBar;
pub use language_toggle::LanguageToggle;
