// src/prefs/mod.rs - DURABLE PREFERENCE SLOT
use crate::core::constants::{CONFIG_DIR, PREFERENCE_KEY};
use crate::core::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// The single durable slot remembering the user's language choice.
///
/// Read once at startup, written on every successful language change.
/// The stored value is the bare language code, nothing else.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, code: &str) -> Result<()>;
}

/// File-backed slot: `.haven/preferred-language` next to the executable.
pub struct FilePreferenceStore {
    paths: Vec<PathBuf>,
}

impl FilePreferenceStore {
    /// Slot at an explicit location (host apps, tests).
    pub fn at(path: PathBuf) -> Self {
        Self { paths: vec![path] }
    }

    /// Standard candidate paths; on load the first existing one wins.
    pub fn discover() -> Self {
        Self {
            paths: Self::candidate_paths(),
        }
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(base_dir) = exe_path.parent() {
                paths.push(base_dir.join(CONFIG_DIR).join(PREFERENCE_KEY));
                paths.push(base_dir.join(PREFERENCE_KEY));
            }
        }
        #[cfg(debug_assertions)]
        {
            paths.push(PathBuf::from(CONFIG_DIR).join(PREFERENCE_KEY));
        }
        paths
    }
}

crate::impl_default!(FilePreferenceStore, Self::discover());

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        for path in &self.paths {
            if path.exists() {
                match std::fs::read_to_string(path) {
                    Ok(content) => {
                        let code = content.trim().to_string();
                        if code.is_empty() {
                            return None;
                        }
                        return Some(code);
                    }
                    Err(e) => {
                        log::debug!("Could not read {}: {}", path.display(), e);
                    }
                }
            }
        }
        None
    }

    fn save(&mut self, code: &str) -> Result<()> {
        // Write back to the slot that exists, create the primary one otherwise
        let target = self
            .paths
            .iter()
            .find(|p| p.exists())
            .or_else(|| self.paths.first())
            .ok_or_else(|| AppError::Validation("No preference path available".into()))?;

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(AppError::Io)?;
        }

        std::fs::write(target, code).map_err(AppError::Io)?;
        log::debug!(
            "Language '{}' saved to {}",
            code.to_uppercase(),
            target.display()
        );
        Ok(())
    }
}

/// In-memory slot with a shared handle, for tests and ephemeral hosts.
#[derive(Clone, Default)]
pub struct MemoryPreferenceStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(code: &str) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(code.to_string());
        store
    }

    /// Clone sharing the same slot; lets the owner observe writes after
    /// handing the store to a `Localizer`.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    pub fn stored(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&mut self, code: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}
