use serde::{Deserialize, Serialize};
use std::fmt;

/// Habitat reported when the species upstream has none.
pub const UNKNOWN_HABITAT: &str = "unknown";

/// Species payload as returned by the species upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub is_legendary: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub language: Option<NamedResource>,
}

impl FlavorTextEntry {
    pub fn language_tag(&self) -> Option<&str> {
        self.language.as_ref().map(|l| l.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Normalized creature returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPokemon {
    pub name: String,
    pub description: String,
    pub habitat: String,
    pub is_legendary: bool,
}

/// Voice the rewording upstream renders a description in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Yoda,
    Shakespeare,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Yoda, Style::Shakespeare];

    /// Tag used as the upstream path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Yoda => "yoda",
            Style::Shakespeare => "shakespeare",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
