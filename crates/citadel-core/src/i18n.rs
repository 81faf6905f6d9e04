//! English and German UI strings.

use std::str::FromStr;

use crate::error::GalleryError;
use crate::types::CharacterStatus;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Label shown on the language toggle button (always in English)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "German",
        }
    }

    /// Toggle order used by the language switcher
    pub fn all() -> [Language; 2] {
        [Language::De, Language::En]
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::En => &EN,
            Language::De => &DE,
        }
    }
}

impl FromStr for Language {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(GalleryError::InvalidArgument(format!(
                "language '{}' (expected en or de)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed string table for one language
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub loading_initial: &'static str,
    pub loading_more: &'static str,
    error_loading_prefix: &'static str,
    unknown_error: &'static str,
    pub error_fetching_more: &'static str,
    pub no_characters_found: &'static str,
    pub end_message: &'static str,
    pub filter_status: &'static str,
    pub filter_species: &'static str,
    pub filter_sort_by: &'static str,
    pub option_all: &'static str,
    pub option_alive: &'static str,
    pub option_dead: &'static str,
    pub option_unknown: &'static str,
    pub option_name: &'static str,
    pub option_origin: &'static str,
    pub placeholder_species: &'static str,
    pub label_status: &'static str,
    pub label_species: &'static str,
    pub label_gender: &'static str,
    pub label_origin: &'static str,
    pub value_unknown: &'static str,
    pub value_unnamed: &'static str,
}

impl Messages {
    /// Initial-load error text with the underlying message, if any
    pub fn error_loading(&self, detail: Option<&str>) -> String {
        let detail = detail.filter(|d| !d.is_empty()).unwrap_or(self.unknown_error);
        format!("{}: {}", self.error_loading_prefix, detail)
    }

    /// Option label for a status filter value
    pub fn status_option(&self, status: CharacterStatus) -> &'static str {
        match status {
            CharacterStatus::Alive => self.option_alive,
            CharacterStatus::Dead => self.option_dead,
            CharacterStatus::Unknown => self.option_unknown,
        }
    }

    /// Field value or the "unknown" placeholder
    pub fn or_unknown<'a>(&self, value: Option<&'a str>) -> &'a str {
        value.filter(|v| !v.is_empty()).unwrap_or(self.value_unknown)
    }

    /// Character name or the "unnamed" placeholder
    pub fn or_unnamed<'a>(&self, value: Option<&'a str>) -> &'a str {
        value.filter(|v| !v.is_empty()).unwrap_or(self.value_unnamed)
    }
}

static EN: Messages = Messages {
    title: "Rick and Morty Characters",
    loading_initial: "Loading initial characters...",
    loading_more: "Loading more characters...",
    error_loading_prefix: "Error loading data",
    unknown_error: "Unknown error",
    error_fetching_more: "Failed to load more characters.",
    no_characters_found: "No characters found matching criteria.",
    end_message: "Yay! You have seen it all",
    filter_status: "Status:",
    filter_species: "Species:",
    filter_sort_by: "Sort By:",
    option_all: "All",
    option_alive: "Alive",
    option_dead: "Dead",
    option_unknown: "Unknown",
    option_name: "Name",
    option_origin: "Origin",
    placeholder_species: "e.g., Human, Alien",
    label_status: "Status",
    label_species: "Species",
    label_gender: "Gender",
    label_origin: "Origin",
    value_unknown: "Unknown",
    value_unnamed: "Unnamed",
};

static DE: Messages = Messages {
    title: "Rick und Morty Charaktere",
    loading_initial: "Lade initiale Charaktere...",
    loading_more: "Lädt mehr Charaktere...",
    error_loading_prefix: "Fehler beim Laden der Daten",
    unknown_error: "Unbekannter Fehler",
    error_fetching_more: "Fehler beim Laden weiterer Charaktere.",
    no_characters_found: "Keine Charaktere entsprechen den Kriterien.",
    end_message: "Yay! Du hast alles gesehen",
    filter_status: "Status:",
    filter_species: "Spezies:",
    filter_sort_by: "Sortieren nach:",
    option_all: "Alle",
    option_alive: "Lebendig",
    option_dead: "Tot",
    option_unknown: "Unbekannt",
    option_name: "Name",
    option_origin: "Herkunft",
    placeholder_species: "z.B. Mensch, Alien",
    label_status: "Status",
    label_species: "Spezies",
    label_gender: "Geschlecht",
    label_origin: "Herkunft",
    value_unknown: "Unbekannt",
    value_unnamed: "Unbenannt",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("DE".parse::<Language>().unwrap(), Language::De);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_error_loading_with_and_without_detail() {
        let en = Language::En.messages();
        assert_eq!(en.error_loading(Some("timeout")), "Error loading data: timeout");
        assert_eq!(en.error_loading(None), "Error loading data: Unknown error");

        let de = Language::De.messages();
        assert_eq!(
            de.error_loading(Some("")),
            "Fehler beim Laden der Daten: Unbekannter Fehler"
        );
    }

    #[test]
    fn test_placeholders() {
        let de = Language::De.messages();
        assert_eq!(de.or_unknown(None), "Unbekannt");
        assert_eq!(de.or_unknown(Some("Human")), "Human");
        assert_eq!(de.or_unnamed(Some("")), "Unbenannt");
    }

    #[test]
    fn test_tables_differ_where_translated() {
        let (en, de) = (Language::En.messages(), Language::De.messages());
        assert_ne!(en.title, de.title);
        assert_ne!(en.error_fetching_more, de.error_fetching_more);
        assert_ne!(en.no_characters_found, de.no_characters_found);
        assert_eq!(de.status_option(CharacterStatus::Dead), "Tot");
    }
}
