//! Prefab Manifest -- namespace-tree dumping of a captured asset manifest.
//!
//! This crate is the core of the prefab dumper: it models the asset manifest
//! a game host exposes at startup as an immutable [`ManifestSnapshot`], builds
//! a namespace forest from the `/`-separated prefab paths in it, and renders
//! the result as deterministic text lines -- either a C++-header-shaped
//! hierarchy of scopes and constants, or a flat one-line-per-asset dump.
//!
//! # Modules
//!
//! - [`snapshot`]: capture-once manifest snapshot with a BLAKE3 content digest.
//! - [`tree`]: recursive search-or-insert construction of the namespace forest.
//! - [`render`]: identifier sanitization and the two output renderers.
//!
//! The crate performs no IO and has no failure modes: malformed input (empty
//! segments, duplicate paths, empty manifests) falls back to deterministic
//! behavior rather than errors. Writing the produced lines anywhere is the
//! host shell's job (see the `prefab-host` crate).
//!
//! # Example
//!
//! ```
//! use prefab_manifest::{build_forest, render_header, ManifestSnapshot};
//!
//! let snapshot = ManifestSnapshot::capture([
//!     ("weapons/rifle/ak47.prefab".to_owned(), 111u32),
//!     ("weapons/rifle/m4.prefab".to_owned(), 222),
//! ]);
//!
//! let forest = build_forest(&snapshot);
//! let lines = render_header(&forest);
//! assert!(lines.iter().any(|line| line.contains("ak47_p = 111")));
//! ```

#![deny(unsafe_code)]

pub mod render;
pub mod snapshot;
pub mod tree;

pub use render::{render_flat, render_header, sanitize_constant_name, sanitize_scope_name};
pub use snapshot::{AssetEntry, ManifestSnapshot, PREFAB_SUFFIX};
pub use tree::{build_forest, LeafEntry, NamespaceNode};
