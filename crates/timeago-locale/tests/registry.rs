//! Tests for the locale registry

use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;
use timeago_core::LocaleData;
use timeago_locale::{LocaleError, LocaleRegistry};

// ── fixtures ─────────────────────────────────────────────────────────────────

fn dataset(tag: &str, day_ago: &str) -> String {
    format!(
        r#"{{ "locale": "{}", "long": {{ "day": {{ "past": "{}", "future": "in {{0}} d" }} }} }}"#,
        tag, day_ago
    )
}

fn day_template(registry: &LocaleRegistry, tag: &str) -> String {
    let data = registry.get(tag).unwrap();
    let day = data.flavour("long").unwrap().get("day").unwrap();
    timeago_core::resolve(day, -1.0, data.plural_rule(), false).to_string()
}

// ── add / get ────────────────────────────────────────────────────────────────

#[test]
fn test_add_and_get() -> Result<()> {
    let registry = LocaleRegistry::new();
    let tag = registry.add_locale_json(&dataset("xx", "{0} d ago"))?;

    assert_eq!(tag, "xx");
    assert!(registry.has("xx"));
    assert_eq!(day_template(&registry, "xx"), "{0} d ago");
    Ok(())
}

#[test]
fn test_get_unknown_returns_none() {
    let registry = LocaleRegistry::new();
    assert!(registry.get("xx").is_none());
}

#[test]
fn test_lookup_is_case_insensitive() -> Result<()> {
    let registry = LocaleRegistry::new();
    registry.add_locale_json(&dataset("pt-BR", "há {0} d"))?;

    assert_eq!(registry.lookup("PT-br"), Some("pt-BR".to_string()));
    assert!(registry.get("pt-br").is_some());
    Ok(())
}

// ── last registration wins ───────────────────────────────────────────────────

#[test]
fn test_reregistration_replaces_data() -> Result<()> {
    let registry = LocaleRegistry::new();
    registry.add_locale_json(&dataset("xx", "old {0}"))?;
    let before = registry.generation();
    registry.add_locale_json(&dataset("xx", "new {0}"))?;

    assert_eq!(day_template(&registry, "xx"), "new {0}");
    assert_eq!(registry.locales(), vec!["xx"]);
    assert!(registry.generation() > before);
    Ok(())
}

#[test]
fn test_invalid_tag_is_rejected() {
    let registry = LocaleRegistry::new();
    let data = LocaleData::from_json(&dataset("not a tag", "{0}")).unwrap();
    assert!(matches!(registry.add_locale(data), Err(LocaleError::InvalidTag(_))));
}

#[test]
fn test_malformed_json_is_rejected() {
    let registry = LocaleRegistry::new();
    assert!(matches!(registry.add_locale_json("{"), Err(LocaleError::Data(_))));
    assert!(registry.locales().is_empty());
}

// ── negotiation ──────────────────────────────────────────────────────────────

#[test]
fn test_choose_locale_with_subtag_fallback() {
    let registry = LocaleRegistry::with_bundled();
    assert_eq!(registry.choose_locale(&["de-CH", "en"]), "de");
    assert_eq!(registry.choose_locale(&["ru_RU.UTF-8"]), "ru");
}

#[test]
fn test_choose_locale_falls_back_to_default() -> Result<()> {
    let registry = LocaleRegistry::with_bundled();
    assert_eq!(registry.choose_locale(&["ja-JP"]), "en");

    registry.set_default_locale("ru")?;
    assert_eq!(registry.choose_locale::<&str>(&[]), "ru");
    Ok(())
}

// ── load_dir ─────────────────────────────────────────────────────────────────

#[test]
fn test_load_dir_reads_json_files_only() -> Result<()> {
    let tmp = TempDir::new()?;
    std::fs::write(tmp.path().join("aa.json"), dataset("aa", "{0} aa"))?;
    std::fs::write(tmp.path().join("bb.json"), dataset("bb", "{0} bb"))?;
    std::fs::write(tmp.path().join("README.txt"), "not a locale")?;

    let registry = LocaleRegistry::new();
    assert_eq!(registry.load_dir(tmp.path())?, 2);
    assert_eq!(registry.locales(), vec!["aa", "bb"]);
    Ok(())
}

#[test]
fn test_load_dir_reports_broken_file() -> Result<()> {
    let tmp = TempDir::new()?;
    std::fs::write(tmp.path().join("broken.json"), r#"{ "locale": "zz", "long": { "day": { "one": "x" } } }"#)?;

    let registry = LocaleRegistry::new();
    let err = registry.load_dir(tmp.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));
    Ok(())
}

#[test]
fn test_load_dir_missing_directory() {
    let registry = LocaleRegistry::new();
    assert!(registry.load_dir("/nonexistent/timeago/locales").is_err());
}

// ── concurrency ──────────────────────────────────────────────────────────────

#[test]
fn test_concurrent_registration_and_reads() {
    let registry = Arc::new(LocaleRegistry::with_bundled());

    let handles: Vec<_> = ["qa", "qb", "qc", "qd"]
        .into_iter()
        .map(|tag| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry.add_locale_json(&dataset(tag, "{0}")).unwrap();
                for _ in 0..100 {
                    assert!(registry.get("en").is_some());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.locales().len(), 7);
}
