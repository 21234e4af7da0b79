// src/i18n/catalog.rs - CATEGORY SET + CATALOG LOADING
use crate::core::error::Result;
use crate::i18n::error::TranslationError;
use crate::i18n::{langs, Language};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The six message groups of the Haven app. Every catalog key is
/// namespaced by exactly one of these; anything else fails loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Auth,
    Network,
    Validation,
    Journal,
    Appointment,
    Community,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Auth => "auth",
            Category::Network => "network",
            Category::Validation => "validation",
            Category::Journal => "journal",
            Category::Appointment => "appointment",
            Category::Community => "community",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Auth,
            Category::Network,
            Category::Validation,
            Category::Journal,
            Category::Appointment,
            Category::Community,
        ]
    }

    pub fn parse(input: &str) -> Option<Category> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(input.trim()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One language's complete message set, keyed `<category>.<key>`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Load and validate the embedded catalog for one language.
    pub fn load(language: Language) -> Result<Self> {
        let filename = format!("{}.json", language.code());
        let content = langs::language_file(language.code())
            .ok_or_else(|| TranslationError::LoadError(format!("File not found: {}", filename)))?;

        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| TranslationError::LoadError(format!("{}: {}", filename, e)))?;

        // Every key must sit inside the closed category set
        for key in entries.keys() {
            let prefix = key.split('.').next().unwrap_or("");
            if Category::parse(prefix).is_none() {
                return Err(TranslationError::LoadError(format!(
                    "{}: unknown category in key '{}'",
                    filename, key
                ))
                .into());
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, category: Category, key: &str) -> Option<&str> {
        self.entries.get(&full_key(category, key)).map(String::as_str)
    }

    pub fn contains(&self, full_key: &str) -> bool {
        self.entries.contains_key(full_key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn full_key(category: Category, key: &str) -> String {
    format!("{}.{}", category.as_str(), key)
}
