// src/i18n/error.rs

#[derive(Debug)]
pub enum TranslationError {
    InvalidLanguage(String),
    LoadError(String),
    MissingEntry(String),
    CatalogMismatch(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLanguage(lang) => write!(f, "Invalid language: {}", lang),
            Self::LoadError(msg) => write!(f, "Load error: {}", msg),
            Self::MissingEntry(key) => write!(f, "Missing entry: {}", key),
            Self::CatalogMismatch(msg) => write!(f, "Catalog mismatch: {}", msg),
        }
    }
}
