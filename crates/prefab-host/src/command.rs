//! The dump command: permission gate, mode dispatch, localized replies.
//!
//! [`PrefabDumper`] owns the manifest snapshot captured at startup together
//! with its sink, catalog and config, and exposes the two-step surface the
//! host wires up: [`dispatch`](PrefabDumper::dispatch) runs the gated command
//! and returns a [`DumpReceipt`] or a [`HostError`], and
//! [`reply_for`](PrefabDumper::reply_for) turns either outcome into the
//! localized message the host sends back to the caller. Unauthorized callers
//! and bad arguments never reach the core transform.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use prefab_manifest::{build_forest, render_flat, render_header, ManifestSnapshot};

use crate::lang::{LangCatalog, DEFAULT_LANGUAGE, KEY_NOT_ALLOWED, KEY_RESULTS_SAVED, KEY_USAGE};
use crate::sink::{DumpConfig, LogSink};
use crate::HostError;

// ---------------------------------------------------------------------------
// DumpMode
// ---------------------------------------------------------------------------

/// Output mode selected by the command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DumpMode {
    /// Flat dump of the whole manifest, unfiltered.
    All,
    /// Namespace-tree header of the prefab entries.
    Header,
}

impl DumpMode {
    /// Case-insensitive parse of the single command argument.
    pub fn parse(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "header" => Some(Self::Header),
            _ => None,
        }
    }

    /// Lowercase token used in filenames and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Header => "header",
        }
    }
}

// ---------------------------------------------------------------------------
// Caller
// ---------------------------------------------------------------------------

/// The host-player boundary.
///
/// Whatever object the host hands the command (a player, the server console)
/// only needs to answer these three questions.
pub trait Caller {
    /// Stable identifier for logging.
    fn id(&self) -> &str;

    /// The caller's language code for localized replies.
    fn language(&self) -> &str {
        DEFAULT_LANGUAGE
    }

    /// Whether the caller holds the given permission.
    fn has_permission(&self, permission: &str) -> bool;
}

// ---------------------------------------------------------------------------
// DumpReceipt
// ---------------------------------------------------------------------------

/// Receipt for a completed dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpReceipt {
    /// The mode that ran.
    pub mode: DumpMode,
    /// Full path of the file written.
    pub path: PathBuf,
    /// The `<PluginName>/<pluginname>/<mode>-<date>` token for messages.
    pub display_path: String,
    /// Number of lines written, preamble included.
    pub lines: usize,
    /// BLAKE3 digest of the manifest this dump was rendered from.
    pub manifest_digest: String,
}

// ---------------------------------------------------------------------------
// PrefabDumper
// ---------------------------------------------------------------------------

/// The dump command, bound to one captured manifest snapshot.
pub struct PrefabDumper {
    snapshot: ManifestSnapshot,
    config: DumpConfig,
    sink: LogSink,
    lang: LangCatalog,
}

impl PrefabDumper {
    /// Bind the command to a captured snapshot, with the default English
    /// catalog.
    pub fn new(snapshot: ManifestSnapshot, config: DumpConfig) -> Self {
        let sink = LogSink::new(&config);
        Self {
            snapshot,
            config,
            sink,
            lang: LangCatalog::with_defaults(),
        }
    }

    /// Replace the message catalog (host-loaded overrides).
    pub fn with_catalog(mut self, lang: LangCatalog) -> Self {
        self.lang = lang;
        self
    }

    /// The snapshot this command dumps from.
    pub fn snapshot(&self) -> &ManifestSnapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LangCatalog {
        &self.lang
    }

    /// Localized command aliases the host should register for this command.
    pub fn command_aliases(&self) -> Vec<String> {
        self.lang.command_aliases()
    }

    /// Run the command for a caller.
    ///
    /// The permission gate comes first: denied callers never reach the core.
    /// A missing or unrecognized mode argument is a usage failure. On success
    /// the selected renderer runs over the snapshot and the lines go through
    /// the sink.
    ///
    /// # Errors
    ///
    /// - [`HostError::PermissionDenied`] if the caller lacks the configured
    ///   permission.
    /// - [`HostError::Usage`] if `args` does not select a mode.
    /// - [`HostError::Io`] if the dump file cannot be written.
    pub fn dispatch(&self, caller: &dyn Caller, args: &[&str]) -> Result<DumpReceipt, HostError> {
        if !caller.has_permission(&self.config.permission) {
            tracing::info!(caller = caller.id(), "dump command denied");
            return Err(HostError::PermissionDenied);
        }

        let mode = args
            .first()
            .and_then(|arg| DumpMode::parse(arg))
            .ok_or(HostError::Usage)?;

        let lines = match mode {
            DumpMode::All => render_flat(&self.snapshot),
            DumpMode::Header => render_header(&build_forest(&self.snapshot)),
        };

        let path = self.sink.write(mode.as_str(), &lines)?;

        tracing::info!(
            caller = caller.id(),
            mode = mode.as_str(),
            lines = lines.len(),
            "dump completed"
        );

        Ok(DumpReceipt {
            mode,
            display_path: self.sink.display_path(mode.as_str()),
            lines: lines.len(),
            manifest_digest: self.snapshot.digest(),
            path,
        })
    }

    /// Localized outcome message for a dispatch result.
    ///
    /// `command` is the alias the caller actually invoked, interpolated into
    /// the usage message. IO failures have no localized template and surface
    /// as the error's own text.
    pub fn reply_for(
        &self,
        caller: &dyn Caller,
        command: &str,
        outcome: &Result<DumpReceipt, HostError>,
    ) -> String {
        let language = caller.language();
        match outcome {
            Ok(receipt) => {
                self.lang
                    .format(language, KEY_RESULTS_SAVED, &[&receipt.display_path])
            }
            Err(HostError::PermissionDenied) => self.lang.format(language, KEY_NOT_ALLOWED, &[]),
            Err(HostError::Usage) => self.lang.format(language, KEY_USAGE, &[command]),
            Err(HostError::Io(error)) => error.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
