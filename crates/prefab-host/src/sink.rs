//! Dated per-plugin log files for dump output.
//!
//! The host reserves a log root for plugins; this sink writes one dump per
//! invocation to `<log_root>/<PluginName>/<pluginname>/<mode>-<YYYY-MM-DD>.txt`,
//! creating directories on demand. A repeated dump on the same day replaces
//! the previous file for that mode.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DumpConfig
// ---------------------------------------------------------------------------

/// Configuration for the dump command shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpConfig {
    /// Display name of the plugin; also the first log directory component.
    pub plugin_name: String,

    /// Permission a caller must hold to invoke the dump command.
    pub permission: String,

    /// Root directory the host reserves for plugin log files.
    pub log_root: PathBuf,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            plugin_name: "PrefabDumper".to_owned(),
            permission: "prefabdumper.dump".to_owned(),
            log_root: PathBuf::from("logs"),
        }
    }
}

// ---------------------------------------------------------------------------
// LogSink
// ---------------------------------------------------------------------------

/// Writes dump line sequences to dated files under the plugin's log directory.
#[derive(Debug, Clone)]
pub struct LogSink {
    root: PathBuf,
    plugin_name: String,
}

impl LogSink {
    pub fn new(config: &DumpConfig) -> Self {
        Self {
            root: config.log_root.clone(),
            plugin_name: config.plugin_name.clone(),
        }
    }

    /// The `<PluginName>/<pluginname>/<stem>-<date>` token used for both the
    /// on-disk filename and the saved-confirmation message.
    pub fn display_path(&self, stem: &str) -> String {
        let date = chrono::Local::now().format("%Y-%m-%d");
        format!(
            "{}/{}/{}-{}",
            self.plugin_name,
            self.plugin_name.to_lowercase(),
            stem,
            date
        )
    }

    /// Write one dump: one line per string, trailing newline. Returns the
    /// full path of the file written.
    pub fn write(&self, stem: &str, lines: &[String]) -> io::Result<PathBuf> {
        let path = self.root.join(format!("{}.txt", self.display_path(stem)));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut contents = lines.join("\n");
        contents.push('\n');
        fs::write(&path, contents)?;

        tracing::info!(path = %path.display(), lines = lines.len(), "dump file written");
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
