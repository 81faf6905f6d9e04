//! Core types for Citadel

use serde::{Deserialize, Serialize};

/// A character record as returned by the API.
///
/// Every field except `id` may be missing or null on the wire; display code
/// substitutes placeholders rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Server-assigned opaque identifier
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw status string (`Alive`, `Dead`, `unknown`, or anything else)
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub origin: Option<Origin>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
}

impl Character {
    /// Create a character with only an id (all other fields missing)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            status: None,
            species: None,
            gender: None,
            origin: None,
            image: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(Origin {
            name: Some(origin.into()),
        });
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Name of the origin location, if present
    pub fn origin_name(&self) -> Option<&str> {
        self.origin.as_ref().and_then(|o| o.name.as_deref())
    }

    /// Parsed status
    pub fn status_kind(&self) -> CharacterStatus {
        CharacterStatus::parse(self.status.as_deref())
    }
}

/// Origin location of a character
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Origin {
    #[serde(default)]
    pub name: Option<String>,
}

/// Life status of a character.
///
/// Parsing is case-insensitive; anything unrecognized (including a missing
/// value) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("alive") => CharacterStatus::Alive,
            Some("dead") => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        }
    }

    /// Value the API uses for this status (also the filter value)
    pub fn wire_value(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }

    /// CSS class suffix used to tint the status on a card
    pub fn tone(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "alive",
            CharacterStatus::Dead => "dead",
            CharacterStatus::Unknown => "neutral",
        }
    }
}

/// Cursor bookkeeping for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters on the server
    #[serde(default)]
    pub count: u32,
    /// Total number of pages
    #[serde(default)]
    pub pages: u32,
    /// Next page number, `None` on the last page
    #[serde(default)]
    pub next: Option<u32>,
    /// Previous page number, `None` on the first page
    #[serde(default)]
    pub prev: Option<u32>,
}

impl PageInfo {
    /// More pages exist exactly when `next` is present (any value, including 0)
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// One page of the `characters` query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: PageInfo,
    /// `None` when the server omitted or nulled the list
    #[serde(default)]
    pub results: Option<Vec<Character>>,
}

impl CharacterPage {
    pub fn new(info: PageInfo, results: Vec<Character>) -> Self {
        Self {
            info,
            results: Some(results),
        }
    }

    /// True when the page carries no characters at all
    pub fn is_degenerate(&self) -> bool {
        self.results.as_ref().map_or(true, Vec::is_empty)
    }
}
