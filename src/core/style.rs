use crate::domain::model::Style;
use crate::domain::ports::TranslationApi;
use crate::utils::error::{PokedexError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// A condition in the selector's priority table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleRule {
    Legendary,
    /// Matches the habitat name, ignoring ASCII case.
    Habitat(String),
}

impl StyleRule {
    fn matches(&self, habitat: Option<&str>, is_legendary: bool) -> bool {
        match self {
            StyleRule::Legendary => is_legendary,
            StyleRule::Habitat(name) => habitat.is_some_and(|h| h.eq_ignore_ascii_case(name)),
        }
    }
}

/// Maps habitat and legendary status to a style. First matching rule wins.
#[derive(Debug, Clone)]
pub struct StyleSelector {
    rules: Vec<(StyleRule, Style)>,
    fallback: Style,
}

impl StyleSelector {
    pub fn new(fallback: Style) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    pub fn with_rule(mut self, rule: StyleRule, style: Style) -> Self {
        self.rules.push((rule, style));
        self
    }

    pub fn select(&self, habitat: Option<&str>, is_legendary: bool) -> Style {
        self.rules
            .iter()
            .find(|(rule, _)| rule.matches(habitat, is_legendary))
            .map(|(_, style)| *style)
            .unwrap_or(self.fallback)
    }
}

impl Default for StyleSelector {
    fn default() -> Self {
        Self::new(Style::Shakespeare)
            .with_rule(StyleRule::Legendary, Style::Yoda)
            .with_rule(StyleRule::Habitat("cave".to_string()), Style::Yoda)
    }
}

/// Style to translator wiring, resolved once at startup.
#[derive(Clone, Default)]
pub struct TranslatorRegistry {
    translators: HashMap<Style, Arc<dyn TranslationApi>>,
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the same backend for every known style.
    pub fn for_all_styles(translator: Arc<dyn TranslationApi>) -> Self {
        Style::ALL
            .iter()
            .fold(Self::new(), |registry, style| {
                registry.register(*style, translator.clone())
            })
    }

    pub fn register(mut self, style: Style, translator: Arc<dyn TranslationApi>) -> Self {
        self.translators.insert(style, translator);
        self
    }

    pub fn resolve(&self, style: Style) -> Result<&Arc<dyn TranslationApi>> {
        self.translators
            .get(&style)
            .ok_or_else(|| PokedexError::UnknownStyle {
                style: style.to_string(),
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.translators.len()
    }
}
