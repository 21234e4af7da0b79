// src/i18n/mod.rs - LANGUAGE STATE + TRANSLATION
use crate::core::error::{AppError, Result};
use crate::prefs::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod catalog;
pub mod error;
pub mod langs;

pub use catalog::{Catalog, Category};
pub use error::TranslationError;

pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Supported application languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
        }
    }

    /// Display name in the language itself
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Es => "Español",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Hi, Language::Es]
    }

    pub fn parse(code: &str) -> Option<Language> {
        Language::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Receiver for the ambient display-locale indicator (a root-surface
/// attribute read by assistive tooling, not by this crate itself).
/// Notified synchronously at startup and after every language change.
pub trait LocaleSink {
    fn locale_changed(&mut self, code: &str);
}

/// Immutable message catalogs for all supported languages.
pub struct Translator {
    catalogs: HashMap<Language, Catalog>,
}

impl Translator {
    /// Load every embedded catalog and audit it against the English
    /// reference. Missing or orphan keys in any language are a load error,
    /// so a catalog that passes construction can answer every valid lookup
    /// in every language.
    pub fn load() -> Result<Self> {
        let mut catalogs = HashMap::new();
        for &language in Language::all() {
            catalogs.insert(language, Catalog::load(language)?);
        }
        Self::check_parity(&catalogs)?;
        Ok(Self { catalogs })
    }

    fn check_parity(catalogs: &HashMap<Language, Catalog>) -> Result<()> {
        let reference = &catalogs[&DEFAULT_LANGUAGE];

        for &language in Language::all() {
            if language == DEFAULT_LANGUAGE {
                continue;
            }
            let catalog = &catalogs[&language];

            for key in reference.keys() {
                if !catalog.contains(key) {
                    return Err(AppError::Translation(TranslationError::CatalogMismatch(
                        format!("{}.json is missing '{}'", language.code(), key),
                    )));
                }
            }
            for key in catalog.keys() {
                if !reference.contains(key) {
                    return Err(AppError::Translation(TranslationError::CatalogMismatch(
                        format!("{}.json has orphan key '{}'", language.code(), key),
                    )));
                }
            }
        }
        Ok(())
    }

    fn catalog(&self, language: Language) -> &Catalog {
        // load() inserts one catalog per supported language
        &self.catalogs[&language]
    }

    /// Strict lookup; an absent pair is a caller bug and fails loudly.
    pub fn try_translate(
        &self,
        language: Language,
        category: Category,
        key: &str,
    ) -> Result<&str> {
        self.catalog(language).get(category, key).ok_or_else(|| {
            AppError::Translation(TranslationError::MissingEntry(catalog::full_key(
                category, key,
            )))
        })
    }

    /// Lenient lookup for rendering paths: an absent pair is logged and
    /// degrades to a marked literal instead of breaking the screen.
    pub fn translate(&self, language: Language, category: Category, key: &str) -> String {
        match self.catalog(language).get(category, key) {
            Some(text) => text.to_string(),
            None => {
                log::warn!(
                    "Missing translation: {}.{} ({})",
                    category,
                    key,
                    language.code()
                );
                format!("Missing: {}.{}", category, key)
            }
        }
    }
}

/// Language state + catalogs as one explicit, injected object.
///
/// One instance per application. Consumers get a reference instead of
/// reaching into a global service; every mutation runs to completion
/// before it returns, so reads after `set_language` always see the new
/// language within the same update cycle.
pub struct Localizer {
    translator: Translator,
    language: Language,
    store: Box<dyn PreferenceStore>,
    sink: Option<Box<dyn LocaleSink>>,
    revision: u64,
}

impl Localizer {
    pub fn new(store: Box<dyn PreferenceStore>) -> Result<Self> {
        Self::build(store, None)
    }

    pub fn with_sink(store: Box<dyn PreferenceStore>, sink: Box<dyn LocaleSink>) -> Result<Self> {
        Self::build(store, Some(sink))
    }

    fn build(store: Box<dyn PreferenceStore>, sink: Option<Box<dyn LocaleSink>>) -> Result<Self> {
        let translator = Translator::load()?;

        // The slot is read exactly once, here
        let language = match store.load() {
            Some(code) => match Language::parse(&code) {
                Some(language) => language,
                None => {
                    log::warn!(
                        "Stored language '{}' is not supported, keeping {}",
                        code,
                        DEFAULT_LANGUAGE.code().to_uppercase()
                    );
                    DEFAULT_LANGUAGE
                }
            },
            None => DEFAULT_LANGUAGE,
        };

        let mut localizer = Self {
            translator,
            language,
            store,
            sink,
            revision: 0,
        };
        localizer.notify_sink();
        Ok(localizer)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn language_code(&self) -> &'static str {
        self.language.code()
    }

    /// Monotonic change tick: strictly increases on every successful
    /// language change, never on a rejected one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switch the active language: memory state, durable slot and locale
    /// sink are all updated before this returns.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;

        // The in-memory switch stands even if the write fails
        if let Err(e) = self.store.save(language.code()) {
            log::error!("Failed to save language preference: {}", e);
        }

        self.revision += 1;
        self.notify_sink();
        log::debug!("Language changed to {}", language.code().to_uppercase());
    }

    /// String boundary for UI layers. Unsupported codes are rejected and
    /// leave language, slot, sink and revision untouched.
    pub fn set_language_code(&mut self, code: &str) -> Result<()> {
        match Language::parse(code) {
            Some(language) => {
                self.set_language(language);
                Ok(())
            }
            None => Err(AppError::Translation(TranslationError::InvalidLanguage(
                code.to_string(),
            ))),
        }
    }

    pub fn translate(&self, category: Category, key: &str) -> String {
        self.translator.translate(self.language, category, key)
    }

    pub fn try_translate(&self, category: Category, key: &str) -> Result<&str> {
        self.translator.try_translate(self.language, category, key)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    fn notify_sink(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.locale_changed(self.language.code());
        }
    }
}
