use crate::domain::model::{CanonicalPokemon, FlavorTextEntry, SpeciesRecord, UNKNOWN_HABITAT};
use crate::utils::error::{PokedexError, Result};
use regex::Regex;
use std::sync::OnceLock;

const ENGLISH: &str = "en";

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Picks the first English entry and collapses its whitespace runs.
/// Entries whose text is null are skipped.
pub fn select(entries: &[FlavorTextEntry]) -> Result<String> {
    let raw = entries
        .iter()
        .filter(|e| e.language_tag() == Some(ENGLISH))
        .find_map(|e| e.flavor_text.as_deref())
        .ok_or(PokedexError::NoEnglishText)?;

    let text = clean(raw);
    if text.is_empty() {
        return Err(PokedexError::NoEnglishText);
    }
    Ok(text)
}

pub fn clean(text: &str) -> String {
    whitespace_run().replace_all(text, " ").trim().to_string()
}

/// Builds the canonical record out of a raw species payload.
pub fn normalize(record: SpeciesRecord) -> Result<CanonicalPokemon> {
    let description = select(&record.flavor_text_entries)?;
    let habitat = record
        .habitat
        .map(|h| h.name)
        .unwrap_or_else(|| UNKNOWN_HABITAT.to_string());

    Ok(CanonicalPokemon {
        name: record.name,
        description,
        habitat,
        is_legendary: record.is_legendary,
    })
}
