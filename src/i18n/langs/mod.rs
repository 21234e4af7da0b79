// src/i18n/langs/mod.rs

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

pub fn language_file(code: &str) -> Option<String> {
    let filename = format!("{}.json", code.to_lowercase());
    let file = Langs::get(&filename)?;
    String::from_utf8(file.data.into_owned()).ok()
}

pub fn available_languages() -> Vec<String> {
    Langs::iter()
        .filter_map(|f| {
            let filename = f.as_ref();
            filename.strip_suffix(".json").map(|s| s.to_uppercase())
        })
        .collect()
}
