//! Localization
//!
//! A `Messages` value pairs the effective locale with a catalog of
//! message id -> text. Unknown ids render as the id itself.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub type Catalog = HashMap<String, String>;

/// Locales shipped inside the binary
pub const BUILTIN_LOCALES: &[&str] = &["en-US", "zh-CN"];

fn builtin_source(locale: &str) -> Option<&'static str> {
    match locale {
        "en-US" => Some(include_str!("../locales/en-US.json")),
        "zh-CN" => Some(include_str!("../locales/zh-CN.json")),
        _ => None,
    }
}

/// Built-in catalog for `locale`, matching on the language subtag when the
/// exact tag is not shipped. Falls back to English.
pub fn builtin_catalog(locale: &str) -> Catalog {
    let language = locale.split(|c: char| c == '-' || c == '_').next().unwrap_or_default();

    let source = builtin_source(locale)
        .or_else(|| {
            BUILTIN_LOCALES
                .iter()
                .find(|l| l.split('-').next() == Some(language))
                .and_then(|l| builtin_source(l))
        })
        .unwrap_or(include_str!("../locales/en-US.json"));

    // Shipped catalogs are checked by tests
    serde_json::from_str(source).unwrap_or_default()
}

/// Read a catalog file (a flat JSON object of strings)
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read messages from {:?}", path))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse messages from {:?}", path))
}

/// Catalog for `locale`: `<messages_dir>/<locale>.json` when present,
/// otherwise the built-in one.
pub fn resolve_catalog(locale: &str, messages_dir: Option<&Path>) -> Result<Catalog> {
    if let Some(dir) = messages_dir {
        let path = dir.join(format!("{}.json", locale));
        if path.exists() {
            return load_catalog(&path);
        }
        tracing::debug!(path = %path.display(), "no catalog in messages dir, using built-in");
    }
    Ok(builtin_catalog(locale))
}

/// Locale + catalog used to resolve all user-facing text
#[derive(Debug, Clone, Default)]
pub struct Messages {
    locale: String,
    catalog: Catalog,
}

impl Messages {
    pub fn new(locale: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Text for `id`, or the id itself when the catalog lacks it
    pub fn get<'a>(&'a self, id: &'a str) -> &'a str {
        self.catalog.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Text for `id` with `{name}` style placeholders substituted
    pub fn format(&self, id: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(id).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB_KEYS: [&str; 5] = [
        "home.title",
        "server.title",
        "tool.title",
        "mods.title",
        "settings.title",
    ];

    #[test]
    fn test_builtin_catalogs_parse() {
        for locale in BUILTIN_LOCALES {
            let source = builtin_source(locale).unwrap();
            let catalog: Catalog = serde_json::from_str(source).unwrap();
            for key in TAB_KEYS {
                assert!(catalog.contains_key(key), "{} missing {}", locale, key);
            }
        }
    }

    #[test]
    fn test_builtin_catalogs_share_keys() {
        let keys = |locale: &str| {
            let mut keys: Vec<String> = builtin_catalog(locale).into_keys().collect();
            keys.sort();
            keys
        };
        assert_eq!(keys("en-US"), keys("zh-CN"));
        assert!(keys("en-US").iter().all(|k| !k.starts_with("tab.")));
    }

    #[test]
    fn test_builtin_catalog_fallbacks() {
        assert_eq!(builtin_catalog("zh-TW")["home.title"], "主页");
        assert_eq!(builtin_catalog("en-GB")["home.title"], "Home");
        assert_eq!(builtin_catalog("fr-FR")["home.title"], "Home");
    }

    #[test]
    fn test_missing_id_renders_id() {
        let messages = Messages::new("en-US", Catalog::new());
        assert_eq!(messages.get("home.title"), "home.title");
    }

    #[test]
    fn test_format_placeholders() {
        let messages = Messages::new("en-US", builtin_catalog("en-US"));
        assert_eq!(
            messages.format("home.greeting", &[("name", "Alex")]),
            "Welcome back, Alex"
        );
    }

    #[test]
    fn test_resolve_catalog_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("de-DE.json"), r#"{"home.title": "Start"}"#).unwrap();

        let catalog = resolve_catalog("de-DE", Some(dir.path())).unwrap();
        assert_eq!(catalog["home.title"], "Start");

        let fallback = resolve_catalog("zh-CN", Some(dir.path())).unwrap();
        assert_eq!(fallback["home.title"], "主页");
    }

    #[test]
    fn test_load_catalog_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(load_catalog(&path).is_err());
    }
}
