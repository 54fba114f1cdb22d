//! Capture-once snapshot of the host's asset manifest.
//!
//! The game host exposes an ordered list of `(name, hash)` pairs once at
//! startup. [`ManifestSnapshot::capture`] freezes that list: the snapshot is
//! immutable for the rest of the process, every dump invocation reads from it,
//! and nothing in this crate ever refreshes it. Threading the snapshot through
//! the builder and renderers as an explicit value (rather than ambient global
//! state) is what keeps the core testable without a live host.
//!
//! [`ManifestSnapshot::digest`] provides a BLAKE3 hex digest over the entry
//! sequence so callers can confirm that two dump invocations observed the
//! same manifest.

use serde::{Deserialize, Serialize};

/// The fixed suffix identifying tree-terminal asset names.
///
/// Entries whose name ends with this suffix participate in namespace-tree
/// construction; all other entries appear only in the flat dump.
pub const PREFAB_SUFFIX: &str = ".prefab";

// ---------------------------------------------------------------------------
// AssetEntry
// ---------------------------------------------------------------------------

/// One `(name, hash)` pair from the host manifest.
///
/// `name` is a `/`-separated asset path (e.g. `"weapons/rifle/ak47.prefab"`);
/// `hash` is the 32-bit token the host pairs with it. Entries are immutable
/// once captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// The asset path as the host reported it.
    pub name: String,
    /// The host-assigned hash token for this asset.
    pub hash: u32,
}

impl AssetEntry {
    /// Whether this entry's name carries the [`PREFAB_SUFFIX`] and is
    /// therefore eligible for namespace-tree construction.
    pub fn is_prefab(&self) -> bool {
        self.name.ends_with(PREFAB_SUFFIX)
    }
}

// ---------------------------------------------------------------------------
// ManifestSnapshot
// ---------------------------------------------------------------------------

/// The immutable manifest captured at process startup.
///
/// Entry order is the host's order and is preserved exactly; every downstream
/// guarantee about deterministic forest shape and output depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSnapshot {
    entries: Vec<AssetEntry>,
}

impl ManifestSnapshot {
    /// Capture a snapshot from an ordered sequence of `(name, hash)` pairs.
    pub fn capture<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let entries: Vec<AssetEntry> = pairs
            .into_iter()
            .map(|(name, hash)| AssetEntry { name, hash })
            .collect();

        tracing::debug!(entries = entries.len(), "asset manifest captured");

        Self { entries }
    }

    /// All entries in capture order.
    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the manifest is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over the tree-eligible entries, in capture order.
    pub fn prefab_entries(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter().filter(|entry| entry.is_prefab())
    }

    /// BLAKE3 hex digest over the full entry sequence.
    ///
    /// Two snapshots with the same entries in the same order produce the same
    /// digest. Names are domain-separated from hashes with a NUL byte so that
    /// boundary-shifted sequences cannot collide.
    pub fn digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for entry in &self.entries {
            hasher.update(entry.name.as_bytes());
            hasher.update(&[0]);
            hasher.update(&entry.hash.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
