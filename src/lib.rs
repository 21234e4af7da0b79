#[macro_export]
macro_rules! impl_default {
    ($type:ty, $body:expr) => {
        impl Default for $type {
            fn default() -> Self {
                $body
            }
        }
    };
}

// Module definitions
pub mod core;
pub mod i18n;
pub mod prefs;
pub mod report;

// Essential re-exports
pub use crate::core::error::{AppError, Result};
pub use i18n::{
    Category, Language, LocaleSink, Localizer, TranslationError, Translator, DEFAULT_LANGUAGE,
};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use report::{ActiveError, ErrorState};

// Convenience constructors
pub fn create_localizer() -> Result<Localizer> {
    Localizer::new(Box::new(FilePreferenceStore::discover()))
}

pub fn create_localizer_with_sink(sink: Box<dyn LocaleSink>) -> Result<Localizer> {
    Localizer::with_sink(Box::new(FilePreferenceStore::discover()), sink)
}
