//! Localized message catalog and command-alias collection.
//!
//! The host environment keys user-facing text by language code and message
//! key, and lets server operators override any of it with per-language JSON
//! files. [`LangCatalog`] models that: it is seeded with the English defaults,
//! accepts registered or JSON-merged overrides, formats `{0}`-style
//! positional templates, and collects the per-language command aliases the
//! host should register so the command works under its localized name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Message key for the localized command name itself.
pub const KEY_COMMAND: &str = "CommandPrefab";
/// Message key for the saved-confirmation message (`{0}` = file token).
pub const KEY_RESULTS_SAVED: &str = "ResultsSaved";
/// Message key for the usage message (`{0}` = invoked command).
pub const KEY_USAGE: &str = "UsagePrefab";
/// Message key for the permission-denied message.
pub const KEY_NOT_ALLOWED: &str = "NotAllowed";

/// The language every catalog carries and every lookup falls back to.
pub const DEFAULT_LANGUAGE: &str = "en";

// ---------------------------------------------------------------------------
// LangCatalog
// ---------------------------------------------------------------------------

/// Language -> message-key -> template map.
///
/// Lookups fall back to [`DEFAULT_LANGUAGE`] and then to the key itself, so a
/// missing translation degrades to readable text instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangCatalog {
    messages: BTreeMap<String, BTreeMap<String, String>>,
}

impl LangCatalog {
    /// Catalog seeded with the English defaults.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::default();
        catalog.register(
            DEFAULT_LANGUAGE,
            [
                (KEY_COMMAND, "prefab"),
                (KEY_RESULTS_SAVED, "Prefab results saved to logs/{0}.txt"),
                (KEY_USAGE, "Usage: {0} prefab <all|header>"),
                (KEY_NOT_ALLOWED, "You are not allowed to use this command"),
            ],
        );
        catalog
    }

    /// Register (or override) messages for one language.
    pub fn register<'a, I>(&mut self, language: &str, messages: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entry = self.messages.entry(language.to_owned()).or_default();
        for (key, template) in messages {
            entry.insert(key.to_owned(), template.to_owned());
        }
    }

    /// Merge a host-supplied JSON override file (`{"Key": "template", ...}`)
    /// into one language.
    pub fn merge_json(&mut self, language: &str, json: &str) -> serde_json::Result<()> {
        let overrides: BTreeMap<String, String> = serde_json::from_str(json)?;
        self.messages
            .entry(language.to_owned())
            .or_default()
            .extend(overrides);
        Ok(())
    }

    /// Registered language codes, in deterministic (sorted) order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Raw template for `key`, falling back to the default language and then
    /// to the key itself.
    pub fn template<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        self.messages
            .get(language)
            .and_then(|messages| messages.get(key))
            .or_else(|| {
                self.messages
                    .get(DEFAULT_LANGUAGE)
                    .and_then(|messages| messages.get(key))
            })
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Format a template with `{0}`-style positional arguments.
    pub fn format(&self, language: &str, key: &str, args: &[&str]) -> String {
        let mut text = self.template(language, key).to_owned();
        for (index, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{index}}}"), arg);
        }
        text
    }

    /// The localized command aliases to register, one per language that
    /// defines a non-empty [`KEY_COMMAND`] message, deduplicated, language
    /// order.
    pub fn command_aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = Vec::new();
        for messages in self.messages.values() {
            if let Some(alias) = messages.get(KEY_COMMAND) {
                if !alias.is_empty() && !aliases.iter().any(|known| known == alias) {
                    aliases.push(alias.clone());
                }
            }
        }
        aliases
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
