// src/report/mod.rs - PER-SCREEN ERROR STATE
use crate::core::prelude::*;
use crate::i18n::Localizer;

/// The error one screen is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveError {
    pub category: Category,
    pub key: String,
    pub details: Option<String>,
}

/// Caller-driven error container owned by a single scope.
///
/// Idle or error-active, nothing else: no queueing, no timers, no
/// automatic clearing. A second `show_error` replaces the previous error
/// wholesale, details included.
#[derive(Debug, Clone)]
pub struct ErrorState {
    current: Option<ActiveError>,
}

crate::impl_default!(ErrorState, Self::new());

impl ErrorState {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Record an error. Last write wins.
    pub fn show_error(
        &mut self,
        category: Category,
        key: impl Into<String>,
        details: Option<String>,
    ) {
        self.current = Some(ActiveError {
            category,
            key: key.into(),
            details,
        });
    }

    /// Back to idle. Calling this while already idle is a no-op.
    pub fn clear_error(&mut self) {
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn active(&self) -> Option<&ActiveError> {
        self.current.as_ref()
    }

    /// Localized message for the active error, `""` when idle. Details are
    /// never part of the message; they stay on `active()` for the caller.
    pub fn message(&self, localizer: &Localizer) -> String {
        match &self.current {
            Some(error) => localizer.translate(error.category, &error.key),
            None => String::new(),
        }
    }
}
