//! Dump a small synthetic manifest to `./logs` with the default config.
//!
//! Run with: `cargo run -p prefab-host --example dump_to_logs`
//! (set `RUST_LOG=debug` to watch the forest build).

use anyhow::Result;
use prefab_host::{Caller, DumpConfig, PrefabDumper};
use prefab_manifest::ManifestSnapshot;

struct Console;

impl Caller for Console {
    fn id(&self) -> &str {
        "console"
    }

    fn has_permission(&self, _permission: &str) -> bool {
        true
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Stands in for the manifest the game host exposes at startup.
    let snapshot = ManifestSnapshot::capture([
        ("weapons/rifle/ak47.prefab".to_owned(), 111u32),
        ("weapons/rifle/m4.prefab".to_owned(), 222),
        ("weapons/pistol/glock.prefab".to_owned(), 333),
        ("env/oil rig/crane.prefab".to_owned(), 7),
        ("env/static/lamp.prefab".to_owned(), 8),
        ("sound/reload.wav".to_owned(), 42),
    ]);

    let dumper = PrefabDumper::new(snapshot, DumpConfig::default());

    for mode in ["header", "all"] {
        let outcome = dumper.dispatch(&Console, &[mode]);
        println!("{}", dumper.reply_for(&Console, "prefab", &outcome));
        outcome?;
    }

    Ok(())
}
