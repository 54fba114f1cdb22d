//! Deterministic text rendering of the manifest.
//!
//! Two output modes:
//!
//! - [`render_header`]: depth-first walk of a namespace forest, emitting
//!   nested `namespace { ... }` scopes and one `constexpr uint32_t` constant
//!   per leaf, indented with tabs.
//! - [`render_flat`]: the whole manifest, one `<hash> - <name>` line per
//!   entry, no filtering and no tree.
//!
//! Both produce a `Vec<String>` of lines; writing them to a file is the host
//! shell's concern. Rendering is synchronous and single-pass, and repeated
//! calls over the same forest produce byte-identical output.

use crate::snapshot::{ManifestSnapshot, PREFAB_SUFFIX};
use crate::tree::NamespaceNode;

/// Words that would collide with a scope identifier in the emitted header.
/// The guard applies to scope names only; constant names are exempt.
const RESERVED_SCOPE_WORDS: &[&str] = &["static"];

// ---------------------------------------------------------------------------
// Sanitizers
// ---------------------------------------------------------------------------

/// Sanitize a group segment into a scope identifier.
///
/// Spaces, dots and dashes become underscores; a leading digit or a reserved
/// word gets a `_` prefix. Idempotent: sanitizing a sanitized name is a no-op.
pub fn sanitize_scope_name(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| match c {
            ' ' | '.' | '-' => '_',
            other => other,
        })
        .collect();

    let leading_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    if leading_digit || RESERVED_SCOPE_WORDS.contains(&name.as_str()) {
        name.insert(0, '_');
    }
    name
}

/// Sanitize a leaf segment into a constant identifier.
///
/// Strips the prefab suffix, replaces dots and dashes with underscores
/// (spaces are left alone, unlike scope names), and prefixes a leading digit
/// with `_`. The reserved-word guard does not apply here. Idempotent.
pub fn sanitize_constant_name(raw: &str) -> String {
    let mut name: String = raw
        .replace(PREFAB_SUFFIX, "")
        .chars()
        .map(|c| match c {
            '.' | '-' => '_',
            other => other,
        })
        .collect();

    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

// ---------------------------------------------------------------------------
// Header renderer
// ---------------------------------------------------------------------------

/// Render the namespace forest as a C++-header-shaped line sequence.
///
/// An empty forest yields only the preamble. A leaf node renders only its
/// first accumulated entry as the constant; further entries under the same
/// path are dropped from the output (a `debug!` records the loss). A leaf
/// node with no entries at all -- its name was used only as a path prefix --
/// renders nothing. Children of a leaf node are never rendered.
pub fn render_header(forest: &[NamespaceNode]) -> Vec<String> {
    let mut lines = vec![
        "#pragma once".to_owned(),
        "#include <cstdint>".to_owned(),
        "// generated from the captured asset manifest".to_owned(),
    ];

    for node in forest {
        write_namespace(node, 0, &mut lines);
    }
    lines
}

fn write_namespace(node: &NamespaceNode, indent_level: usize, out: &mut Vec<String>) {
    let indent = "\t".repeat(indent_level);

    if node.is_leaf_segment() {
        if let Some(first) = node.leaves.first() {
            if node.leaves.len() > 1 {
                tracing::debug!(
                    path = %first.display_name,
                    dropped = node.leaves.len() - 1,
                    "leaf path has multiple manifest entries; rendering the first"
                );
            }
            let constant = sanitize_constant_name(&node.segment);
            out.push(format!(
                "{indent}constexpr uint32_t {constant}_p = {}; // {}",
                first.hash, first.display_name
            ));
        }
        return;
    }

    let scope = sanitize_scope_name(&node.segment);
    out.push(format!("{indent}namespace {scope}"));
    out.push(format!("{indent}{{"));

    for child in &node.children {
        write_namespace(child, indent_level + 1, out);
    }

    out.push(format!("{indent}}}"));
}

// ---------------------------------------------------------------------------
// Flat dumper
// ---------------------------------------------------------------------------

/// Render the whole manifest, unfiltered, one line per entry.
pub fn render_flat(snapshot: &ManifestSnapshot) -> Vec<String> {
    let mut lines = Vec::with_capacity(snapshot.len() + 1);
    lines.push("// full asset manifest dump".to_owned());

    for entry in snapshot.entries() {
        lines.push(format!("{} - {}", entry.hash, entry.name));
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ManifestSnapshot;
    use crate::tree::build_forest;

    fn snapshot(pairs: &[(&str, u32)]) -> ManifestSnapshot {
        ManifestSnapshot::capture(pairs.iter().map(|(name, hash)| ((*name).to_owned(), *hash)))
    }

    fn header_for(pairs: &[(&str, u32)]) -> Vec<String> {
        render_header(&build_forest(&snapshot(pairs)))
    }

    const PREAMBLE_LEN: usize = 3;

    // -- 1. Empty manifest renders only the preamble -------------------------

    #[test]
    fn empty_manifest_renders_preamble_only() {
        let header = header_for(&[]);
        assert_eq!(header.len(), PREAMBLE_LEN);
        assert_eq!(header[0], "#pragma once");
        assert_eq!(header[1], "#include <cstdint>");

        let flat = render_flat(&snapshot(&[]));
        assert_eq!(flat.len(), 1);
    }

    // -- 2. Round-trip scenario: exact nested output -------------------------

    #[test]
    fn weapons_header_exact_lines() {
        let header = header_for(&[
            ("weapons/rifle/ak47.prefab", 111),
            ("weapons/rifle/m4.prefab", 222),
            ("weapons/pistol/glock.prefab", 333),
        ]);

        let expected = [
            "namespace weapons",
            "{",
            "\tnamespace rifle",
            "\t{",
            "\t\tconstexpr uint32_t ak47_p = 111; // weapons/rifle/ak47.prefab",
            "\t\tconstexpr uint32_t m4_p = 222; // weapons/rifle/m4.prefab",
            "\t}",
            "\tnamespace pistol",
            "\t{",
            "\t\tconstexpr uint32_t glock_p = 333; // weapons/pistol/glock.prefab",
            "\t}",
            "}",
        ];
        assert_eq!(&header[PREAMBLE_LEN..], &expected);
    }

    // -- 3. Digit-leading constant gets an underscore ------------------------

    #[test]
    fn digit_leading_constant_prefixed() {
        let header = header_for(&[("1cool.prefab", 5)]);
        assert_eq!(header[PREAMBLE_LEN], "constexpr uint32_t _1cool_p = 5; // 1cool.prefab");
    }

    // -- 4. Reserved-word guard applies to scopes, not constants -------------

    #[test]
    fn reserved_word_guard_scopes_only() {
        let header = header_for(&[
            ("static/lamp.prefab", 1),
            ("static.prefab", 9),
        ]);

        assert_eq!(header[PREAMBLE_LEN], "namespace _static");
        // The leaf keeps its unguarded identifier.
        assert!(header.contains(&"constexpr uint32_t static_p = 9; // static.prefab".to_owned()));
    }

    // -- 5. Sanitizers are idempotent ----------------------------------------

    #[test]
    fn sanitizers_idempotent() {
        for raw in ["oil rig", "a.b-c", "9mm", "static", "_static", "", "plain"] {
            let once = sanitize_scope_name(raw);
            assert_eq!(sanitize_scope_name(&once), once, "scope: {raw:?}");
        }
        for raw in ["ak47.prefab", "9mm-ammo.prefab", "a b.prefab", "", "done"] {
            let once = sanitize_constant_name(raw);
            assert_eq!(sanitize_constant_name(&once), once, "constant: {raw:?}");
        }
    }

    // -- 6. Scope sanitizer replaces spaces; constant sanitizer does not -----

    #[test]
    fn space_handling_differs_by_node_kind() {
        assert_eq!(sanitize_scope_name("oil rig"), "oil_rig");
        assert_eq!(sanitize_constant_name("oil rig.prefab"), "oil rig");
        assert_eq!(sanitize_scope_name("2fort"), "_2fort");
        assert_eq!(sanitize_constant_name("9mm-ammo.prefab"), "_9mm_ammo");
    }

    // -- 7. Duplicate-path leaf renders only its first entry -----------------

    #[test]
    fn duplicate_path_renders_first_entry_only() {
        let header = header_for(&[
            ("env/rock.prefab", 10),
            ("env/rock.prefab", 20),
        ]);

        let constants: Vec<_> = header
            .iter()
            .filter(|line| line.contains("rock_p"))
            .collect();
        assert_eq!(constants.len(), 1);
        assert!(constants[0].contains("= 10;"));
    }

    // -- 8. Leaf-as-prefix node renders nothing, children skipped ------------

    #[test]
    fn prefix_only_leaf_renders_nothing() {
        let header = header_for(&[("env/rock.prefab/moss.prefab", 2)]);

        // "rock.prefab" has no leaf entries and its children are not rendered,
        // so only the enclosing "env" scope appears.
        assert_eq!(&header[PREAMBLE_LEN..], &["namespace env", "{", "}"]);
    }

    // -- 9. Flat dump: header line plus every entry, unfiltered --------------

    #[test]
    fn flat_dump_is_unfiltered() {
        let flat = render_flat(&snapshot(&[("a.mesh", 1), ("b.prefab", 2)]));
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[1], "1 - a.mesh");
        assert_eq!(flat[2], "2 - b.prefab");
    }

    // -- 10. Rendering is deterministic --------------------------------------

    #[test]
    fn rendering_deterministic() {
        let snap = snapshot(&[
            ("weapons/rifle/ak47.prefab", 111),
            ("env/oil rig/crane.prefab", 7),
            ("b.prefab", 2),
        ]);
        let first = render_header(&build_forest(&snap));
        let second = render_header(&build_forest(&snap));
        assert_eq!(first, second);
        assert_eq!(render_flat(&snap), render_flat(&snap));
    }
}
