//! Process-wide locale registry

use crate::bundled;
use crate::error::LocaleError;
use crate::negotiate::{self, normalize_tag};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use timeago_core::LocaleData;

/// Locale used when negotiation finds nothing
pub const DEFAULT_LOCALE: &str = "en";

struct Inner {
    /// Registered data (key: canonical tag)
    locales: HashMap<String, Arc<LocaleData>>,

    /// Availability index used by negotiation (key: lower-cased tag)
    index: HashMap<String, String>,

    default_locale: String,
}

/// Registry of locale message data.
///
/// Grows by registration only; registering a tag again replaces its data.
/// Reads and writes may come from any thread.
pub struct LocaleRegistry {
    inner: RwLock<Inner>,

    /// Bumped on every registration so caches can detect stale entries
    generation: AtomicU64,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                locales: HashMap::new(),
                index: HashMap::new(),
                default_locale: DEFAULT_LOCALE.to_string(),
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Creates a registry pre-filled with the bundled locales
    pub fn with_bundled() -> Self {
        let registry = Self::new();
        match bundled::load() {
            Ok(locales) => {
                for data in locales {
                    if let Err(e) = registry.add_locale(data) {
                        log::error!("Failed to register bundled locale: {}", e);
                    }
                }
            }
            Err(e) => log::error!("Failed to parse bundled locale data: {}", e),
        }
        registry
    }

    /// The shared process-wide registry (bundled locales pre-registered)
    pub fn global() -> Arc<LocaleRegistry> {
        static GLOBAL: OnceLock<Arc<LocaleRegistry>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Arc::new(LocaleRegistry::with_bundled()))
            .clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers locale data; the last registration for a tag wins
    pub fn add_locale(&self, data: LocaleData) -> Result<(), LocaleError> {
        let tag = normalize_tag(data.locale())
            .ok_or_else(|| LocaleError::InvalidTag(data.locale().to_string()))?;

        let mut inner = self.write();
        let previous = inner.index.insert(tag.to_ascii_lowercase(), tag.clone());
        if let Some(old_tag) = previous.filter(|old| *old != tag) {
            inner.locales.remove(&old_tag);
        }
        if inner.locales.insert(tag.clone(), Arc::new(data)).is_some() {
            log::info!("Replacing locale data for {}", tag);
        } else {
            log::debug!("Registered locale {}", tag);
        }
        self.generation.fetch_add(1, Ordering::Release);
        Ok(())
    }

    /// Parses and registers a JSON dataset, returning its tag
    pub fn add_locale_json(&self, json: &str) -> Result<String, LocaleError> {
        let data = LocaleData::from_json(json)?;
        let tag = data.locale().to_string();
        self.add_locale(data)?;
        Ok(tag)
    }

    /// Registers every `*.json` dataset in a directory, in file name order.
    /// Returns the number of locales loaded.
    pub fn load_dir<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut files: Vec<_> = std::fs::read_dir(path)
            .with_context(|| format!("Failed to read locale directory {:?}", path))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        for file in &files {
            let json = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read locale file {:?}", file))?;
            let tag = self
                .add_locale_json(&json)
                .with_context(|| format!("Failed to load locale file {:?}", file))?;
            log::info!("Loaded locale {} from {:?}", tag, file);
        }

        Ok(files.len())
    }

    /// Data for a tag (case-insensitive)
    pub fn get(&self, tag: &str) -> Option<Arc<LocaleData>> {
        let inner = self.read();
        let canonical = inner.index.get(&tag.to_ascii_lowercase())?;
        inner.locales.get(canonical).cloned()
    }

    /// Canonical tag of registered data for `tag` (case-insensitive)
    pub fn lookup(&self, tag: &str) -> Option<String> {
        self.read().index.get(&tag.to_ascii_lowercase()).cloned()
    }

    pub fn has(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// Registered tags, sorted
    pub fn locales(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.read().locales.keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn default_locale(&self) -> String {
        self.read().default_locale.clone()
    }

    pub fn set_default_locale(&self, tag: &str) -> Result<(), LocaleError> {
        let tag = normalize_tag(tag).ok_or_else(|| LocaleError::InvalidTag(tag.to_string()))?;
        self.write().default_locale = tag;
        Ok(())
    }

    /// Best registered match for the preference list, else the default locale
    pub fn choose_locale<S: AsRef<str>>(&self, preferred: &[S]) -> String {
        negotiate::choose_locale(preferred, |tag| self.lookup(tag))
            .unwrap_or_else(|| self.default_locale())
    }

    /// Number of registrations so far
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
