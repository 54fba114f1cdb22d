//! Prefab Host -- the command shell around the core dumper.
//!
//! This crate is the glue between a game host environment and the pure
//! transforms in `prefab-manifest`: the `prefab <all|header>` command with its
//! permission gate, localized user messages, localized command-alias
//! registration, and the dated per-plugin log files the dump lines are
//! written to.
//!
//! The host environment itself (player objects, chat delivery, the manifest
//! feed) stays behind two narrow seams: the [`Caller`] trait and the
//! `(name, hash)` sequence handed to
//! [`ManifestSnapshot::capture`](prefab_manifest::ManifestSnapshot::capture)
//! at startup. Everything in this crate is testable without a live server.
//!
//! # Example
//!
//! ```no_run
//! use prefab_host::{Caller, DumpConfig, PrefabDumper};
//! use prefab_manifest::ManifestSnapshot;
//!
//! struct Console;
//!
//! impl Caller for Console {
//!     fn id(&self) -> &str {
//!         "console"
//!     }
//!     fn has_permission(&self, _permission: &str) -> bool {
//!         true
//!     }
//! }
//!
//! let snapshot = ManifestSnapshot::capture([("a/b.prefab".to_owned(), 1u32)]);
//! let dumper = PrefabDumper::new(snapshot, DumpConfig::default());
//!
//! let outcome = dumper.dispatch(&Console, &["header"]);
//! println!("{}", dumper.reply_for(&Console, "prefab", &outcome));
//! ```

#![deny(unsafe_code)]

pub mod command;
pub mod lang;
pub mod sink;

/// Re-export the core crate for convenience.
pub use prefab_manifest;

pub use command::{Caller, DumpMode, DumpReceipt, PrefabDumper};
pub use lang::LangCatalog;
pub use sink::{DumpConfig, LogSink};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by the host shell.
///
/// The core transform never fails for well-typed input; every externally
/// visible failure mode lives here, at the boundary. `PermissionDenied` and
/// `Usage` map onto localized user messages via
/// [`PrefabDumper::reply_for`](command::PrefabDumper::reply_for).
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The caller does not hold the dump permission.
    #[error("caller is not allowed to use the dump command")]
    PermissionDenied,

    /// The mode argument was missing or not one of `all` / `header`.
    #[error("expected one argument: `all` or `header`")]
    Usage,

    /// Writing the dump file failed.
    #[error("failed to write dump file: {0}")]
    Io(#[from] std::io::Error),
}
