// =====================================================
// FILE: tests/integration_tests.rs - END TO END
// =====================================================

use haven_i18n::{Category, ErrorState, Language, Localizer, MemoryPreferenceStore};

#[test]
fn test_error_reporting_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut localizer =
        Localizer::new(Box::new(MemoryPreferenceStore::new())).expect("Localizer should build");
    let mut state = ErrorState::new();

    // Fresh app: default language, nothing to show
    assert_eq!(localizer.language(), Language::En);
    assert_eq!(state.message(&localizer), "");

    // A screen reports an expired session
    state.show_error(Category::Auth, "session_expired", None);
    assert_eq!(state.message(&localizer), "Your session has expired");

    // User switches to Spanish; the same error re-renders localized
    localizer.set_language_code("es").expect("es is supported");
    assert_eq!(state.message(&localizer), "Tu sesión ha expirado");

    // And back again
    localizer.set_language(Language::En);
    assert_eq!(state.message(&localizer), "Your session has expired");

    // Dismissing returns the screen to idle
    state.clear_error();
    assert_eq!(state.message(&localizer), "");

    println!("✅ End-to-end error reporting verified!");
}

#[test]
fn test_active_error_renders_in_every_language() {
    let mut localizer =
        Localizer::new(Box::new(MemoryPreferenceStore::new())).expect("Localizer should build");
    let mut state = ErrorState::new();
    state.show_error(Category::Appointment, "slot_taken", None);

    for &language in Language::all() {
        localizer.set_language(language);
        let message = state.message(&localizer);

        assert!(!message.is_empty(), "{} should render", language.code());
        assert!(
            !message.starts_with("Missing:"),
            "Entry should resolve for {}",
            language.code()
        );
    }
}

#[test]
fn test_convenience_constructor_builds() {
    let localizer = haven_i18n::create_localizer().expect("Default localizer should build");
    assert!(
        Language::all().contains(&localizer.language()),
        "Startup language should be a supported one"
    );
}
