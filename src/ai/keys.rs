// ── API key store ────────────────────────────────────────────────────────────

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ai::provider::Provider;

/// File-backed store for provider API keys with an in-memory cache.
///
/// Keys live in `<config dir>/hackdeck/keys.toml`, one line per provider:
/// `grok_api_key = "..."`. Reads go through the cache and fall back to the
/// file; writes update both. An empty or whitespace-only stored value
/// counts as not configured.
#[derive(Clone, Debug, Default)]
pub struct KeyStore {
    path: Option<PathBuf>,
    cache: HashMap<Provider, String>,
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hackdeck").join("keys.toml"))
}

impl KeyStore {
    /// Store rooted at the platform config directory. On platforms without
    /// one the store is memory-only; set/get still work for the session.
    pub fn open_default() -> Self {
        KeyStore { path: default_path(), cache: HashMap::new() }
    }

    pub fn with_path(path: PathBuf) -> Self {
        KeyStore { path: Some(path), cache: HashMap::new() }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Store a key for `provider`, replacing any previous value. Lines for
    /// other providers (and anything else in the file) are kept as-is.
    pub fn set_key(&mut self, provider: Provider, secret: &str) -> Result<()> {
        self.cache.insert(provider, secret.to_string());
        let Some(path) = self.path.clone() else { return Ok(()) };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let existing = std::fs::read_to_string(&path).unwrap_or_default();
        let prefix = format!("{} = \"", provider.storage_key());
        let mut lines: Vec<String> = existing
            .lines()
            .filter(|line| !line.starts_with(&prefix))
            .map(|line| line.to_string())
            .collect();
        lines.push(format!(
            "{} = \"{}\"",
            provider.storage_key(),
            secret.replace('"', "\\\"")
        ));
        std::fs::write(&path, lines.join("\n") + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Look up the key for `provider`: cache first, then the file. Returns
    /// `None` when nothing usable is stored; read errors read as absent.
    pub fn get_key(&mut self, provider: Provider) -> Option<String> {
        if let Some(cached) = self.cache.get(&provider) {
            return non_empty(cached);
        }
        let stored = self.read_from_file(provider)?;
        self.cache.insert(provider, stored.clone());
        non_empty(&stored)
    }

    pub fn has_key(&mut self, provider: Provider) -> bool {
        self.get_key(provider).is_some()
    }

    fn read_from_file(&self, provider: Provider) -> Option<String> {
        let path = self.path.as_ref()?;
        let content = std::fs::read_to_string(path).ok()?;
        let prefix = format!("{} = \"", provider.storage_key());
        for line in content.lines() {
            if let Some(rest) = line.strip_prefix(&prefix) {
                let val = rest.trim_end_matches('"');
                return Some(val.replace("\\\"", "\""));
            }
        }
        None
    }
}

fn non_empty(secret: &str) -> Option<String> {
    if secret.trim().is_empty() {
        None
    } else {
        Some(secret.to_string())
    }
}
