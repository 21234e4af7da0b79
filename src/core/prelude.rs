// src/core/prelude.rs

// Core essentials - needed everywhere
pub use crate::core::error::{AppError, Result};

// i18n essentials
pub use crate::i18n::{Category, Language, TranslationError};
