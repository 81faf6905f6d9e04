//! Filter/sort pipeline.
//!
//! [`derive`] turns the accumulated list into the list that is displayed.
//! It never mutates its input and depends on nothing but its arguments.

use std::str::FromStr;

use crate::collation::locale_cmp;
use crate::error::GalleryError;
use crate::types::Character;

/// Sort key chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Origin,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Origin => "origin",
        }
    }

    pub fn all() -> [SortKey; 2] {
        [SortKey::Name, SortKey::Origin]
    }

    fn key_of<'a>(&self, character: &'a Character) -> &'a str {
        match self {
            SortKey::Name => character.name.as_deref().unwrap_or(""),
            SortKey::Origin => character.origin_name().unwrap_or(""),
        }
    }
}

impl FromStr for SortKey {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "origin" => Ok(SortKey::Origin),
            _ => Err(GalleryError::InvalidArgument(format!(
                "sort key '{}' (expected name or origin)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-selected filter and sort settings.
///
/// Empty strings mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Exact status to keep, compared case-insensitively
    pub status: String,
    /// Substring the species must contain, compared case-insensitively
    pub species: String,
    pub sort_by: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn sorted_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Whether a character passes both filters
    pub fn matches(&self, character: &Character) -> bool {
        self.status_matches(character) && self.species_matches(character)
    }

    fn status_matches(&self, character: &Character) -> bool {
        if self.status.is_empty() {
            return true;
        }
        character
            .status
            .as_deref()
            .is_some_and(|s| s.to_lowercase() == self.status.to_lowercase())
    }

    fn species_matches(&self, character: &Character) -> bool {
        if self.species.is_empty() {
            return true;
        }
        let needle = self.species.to_lowercase();
        character
            .species
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(&needle))
    }
}

/// Compute the displayed list: filter by status and species, then stable-sort
/// by the selected key. Entries with equal keys keep their accumulation order.
pub fn derive(list: &[Character], filter: &FilterState) -> Vec<Character> {
    let mut derived: Vec<Character> = list
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();

    let key = filter.sort_by;
    derived.sort_by(|a, b| locale_cmp(key.key_of(a), key.key_of(b)));
    derived
}
