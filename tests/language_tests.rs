// =====================================================
// FILE: tests/language_tests.rs - LANGUAGE SELECTION
// =====================================================

use haven_i18n::{
    FilePreferenceStore, Language, LocaleSink, Localizer, MemoryPreferenceStore,
};
use std::cell::RefCell;
use std::rc::Rc;

fn localizer_with(store: MemoryPreferenceStore) -> Localizer {
    Localizer::new(Box::new(store)).expect("Localizer should build")
}

#[test]
fn test_default_language_is_english() {
    let localizer = localizer_with(MemoryPreferenceStore::new());
    assert_eq!(localizer.language(), Language::En);
    assert_eq!(localizer.language_code(), "en");
}

#[test]
fn test_language_round_trip() {
    let mut localizer = localizer_with(MemoryPreferenceStore::new());
    localizer.set_language(Language::Hi);
    assert_eq!(localizer.language(), Language::Hi);
}

#[test]
fn test_unsupported_code_is_rejected() {
    let mut localizer = localizer_with(MemoryPreferenceStore::new());
    let before = localizer.revision();

    let result = localizer.set_language_code("fr");
    assert!(result.is_err(), "Unsupported language should be rejected");
    assert_eq!(
        localizer.language(),
        Language::En,
        "Language should be unchanged"
    );
    assert_eq!(
        localizer.revision(),
        before,
        "Rejected calls should not tick the revision"
    );
}

#[test]
fn test_change_writes_through_to_slot() {
    let store = MemoryPreferenceStore::new();
    let handle = store.handle();

    let mut localizer = localizer_with(store);
    localizer.set_language_code("es").expect("es is supported");

    assert_eq!(
        handle.stored().as_deref(),
        Some("es"),
        "Slot should hold the new code"
    );
}

#[test]
fn test_seeded_slot_is_adopted_on_startup() {
    let localizer = localizer_with(MemoryPreferenceStore::seeded("es"));
    assert_eq!(localizer.language(), Language::Es);
}

#[test]
fn test_stored_code_is_case_insensitive() {
    let localizer = localizer_with(MemoryPreferenceStore::seeded("HI"));
    assert_eq!(localizer.language(), Language::Hi);
}

#[test]
fn test_invalid_slot_keeps_default() {
    let localizer = localizer_with(MemoryPreferenceStore::seeded("klingon"));
    assert_eq!(localizer.language(), Language::En);
}

#[test]
fn test_revision_ticks_on_every_change() {
    let mut localizer = localizer_with(MemoryPreferenceStore::new());
    let start = localizer.revision();

    localizer.set_language(Language::Hi);
    localizer.set_language(Language::Es);

    assert_eq!(
        localizer.revision(),
        start + 2,
        "Each successful change should tick the revision"
    );
}

struct RecordingSink {
    codes: Rc<RefCell<Vec<String>>>,
}

impl LocaleSink for RecordingSink {
    fn locale_changed(&mut self, code: &str) {
        self.codes.borrow_mut().push(code.to_string());
    }
}

#[test]
fn test_sink_sees_initial_and_changed_locale() {
    let codes = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink {
        codes: Rc::clone(&codes),
    };

    let mut localizer = Localizer::with_sink(
        Box::new(MemoryPreferenceStore::new()),
        Box::new(sink),
    )
    .expect("Localizer should build");

    localizer.set_language(Language::Hi);

    assert_eq!(
        *codes.borrow(),
        vec!["en".to_string(), "hi".to_string()],
        "Sink should see the startup locale and every change"
    );
}

#[test]
fn test_restart_restores_persisted_language() {
    let dir = tempfile::tempdir().expect("Temp dir should be available");
    let slot = dir.path().join("preferred-language");

    // First run: user switches to Hindi
    {
        let mut localizer = Localizer::new(Box::new(FilePreferenceStore::at(slot.clone())))
            .expect("Localizer should build");
        localizer.set_language(Language::Hi);
    }

    // Simulated restart over the same slot
    let restarted = Localizer::new(Box::new(FilePreferenceStore::at(slot)))
        .expect("Localizer should build");
    assert_eq!(
        restarted.language(),
        Language::Hi,
        "Restart should restore the stored language"
    );

    println!("✅ Language persistence verified!");
}

#[test]
fn test_externally_seeded_slot_file() {
    let dir = tempfile::tempdir().expect("Temp dir should be available");
    let slot = dir.path().join("preferred-language");
    std::fs::write(&slot, "es\n").expect("Seeding the slot should work");

    let localizer = Localizer::new(Box::new(FilePreferenceStore::at(slot)))
        .expect("Localizer should build");
    assert_eq!(
        localizer.language(),
        Language::Es,
        "A bare code with trailing whitespace should be adopted"
    );
}
