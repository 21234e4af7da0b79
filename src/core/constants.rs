pub const APP_TITLE: &str = "HAVEN";
pub const CONFIG_DIR: &str = ".haven";
pub const PREFERENCE_KEY: &str = "preferred-language";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
