//! Namespace forest construction from `/`-separated prefab paths.
//!
//! [`build_forest`] consumes the snapshot filtered to [`PREFAB_SUFFIX`]
//! entries and inserts each path, segment by segment, into a forest of
//! [`NamespaceNode`]s. Sibling lookup is a linear scan with first match wins;
//! new siblings are appended in order of first appearance, so forest shape is
//! fully determined by manifest order. Each render request builds its own
//! forest from the shared snapshot and discards it afterwards -- nothing is
//! cached between invocations.

use crate::snapshot::{AssetEntry, ManifestSnapshot, PREFAB_SUFFIX};

// ---------------------------------------------------------------------------
// LeafEntry
// ---------------------------------------------------------------------------

/// An asset attached to the node for its final path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry {
    /// The full original asset name, kept for the rendered comment.
    pub display_name: String,
    /// The host-assigned hash token.
    pub hash: u32,
}

// ---------------------------------------------------------------------------
// NamespaceNode
// ---------------------------------------------------------------------------

/// One path-segment level of the namespace forest.
///
/// A node is a *group* (segment without the prefab suffix, `leaves` empty) or
/// a *leaf* (segment ending in the suffix, carrying the entries accumulated
/// for that exact full path). A leaf node may still own children when the
/// same string also occurs as a path prefix of a deeper entry; the builder
/// permits that degenerate shape rather than rejecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceNode {
    /// The raw path component, exactly as it appeared in the source name.
    pub segment: String,
    /// Leaf entries accumulated for this exact path, in manifest order.
    pub leaves: Vec<LeafEntry>,
    /// Child nodes, keyed by `segment`, insertion order preserved.
    pub children: Vec<NamespaceNode>,
}

impl NamespaceNode {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_owned(),
            leaves: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether this node's segment is itself a terminal asset name.
    pub fn is_leaf_segment(&self) -> bool {
        self.segment.ends_with(PREFAB_SUFFIX)
    }

    /// Leaf entries in this node and every node below it.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
            + self
                .children
                .iter()
                .map(NamespaceNode::leaf_count)
                .sum::<usize>()
    }
}

/// Total leaf entries across a forest. Every tree-eligible manifest entry
/// lands in exactly one leaf list, so this equals the filtered entry count.
pub fn total_leaf_count(forest: &[NamespaceNode]) -> usize {
    forest.iter().map(NamespaceNode::leaf_count).sum()
}

// ---------------------------------------------------------------------------
// build_forest
// ---------------------------------------------------------------------------

/// Build the namespace forest for one render invocation.
///
/// Entries without the prefab suffix are skipped silently. Empty segments
/// (from doubled or leading separators) are ordinary segment values.
pub fn build_forest(snapshot: &ManifestSnapshot) -> Vec<NamespaceNode> {
    let mut forest = Vec::new();
    let mut inserted = 0usize;

    for entry in snapshot.entries() {
        if !entry.is_prefab() {
            continue;
        }
        let segments: Vec<&str> = entry.name.split('/').collect();
        insert(&mut forest, &segments, entry);
        inserted += 1;
    }

    tracing::debug!(
        entries = snapshot.len(),
        prefabs = inserted,
        roots = forest.len(),
        "namespace forest built"
    );

    forest
}

/// Recursive search-or-insert of one segment list into a sibling list.
fn insert(siblings: &mut Vec<NamespaceNode>, segments: &[&str], entry: &AssetEntry) {
    let Some((&segment, rest)) = segments.split_first() else {
        return;
    };

    match siblings.iter_mut().find(|node| node.segment == segment) {
        Some(node) => {
            if rest.is_empty() {
                node.leaves.push(LeafEntry {
                    display_name: entry.name.clone(),
                    hash: entry.hash,
                });
            } else {
                insert(&mut node.children, rest, entry);
            }
        }
        None => {
            let mut node = NamespaceNode::new(segment);
            if rest.is_empty() {
                node.leaves.push(LeafEntry {
                    display_name: entry.name.clone(),
                    hash: entry.hash,
                });
            } else {
                insert(&mut node.children, rest, entry);
            }
            siblings.push(node);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ManifestSnapshot;

    fn snapshot(pairs: &[(&str, u32)]) -> ManifestSnapshot {
        ManifestSnapshot::capture(pairs.iter().map(|(name, hash)| ((*name).to_owned(), *hash)))
    }

    // -- 1. Round-trip scenario ---------------------------------------------

    #[test]
    fn weapons_forest_shape() {
        let forest = build_forest(&snapshot(&[
            ("weapons/rifle/ak47.prefab", 111),
            ("weapons/rifle/m4.prefab", 222),
            ("weapons/pistol/glock.prefab", 333),
        ]));

        assert_eq!(forest.len(), 1);
        let weapons = &forest[0];
        assert_eq!(weapons.segment, "weapons");
        assert!(!weapons.is_leaf_segment());
        assert!(weapons.leaves.is_empty());
        assert_eq!(weapons.children.len(), 2);

        let rifle = &weapons.children[0];
        assert_eq!(rifle.segment, "rifle");
        assert_eq!(rifle.children.len(), 2);
        assert_eq!(rifle.children[0].segment, "ak47.prefab");
        assert_eq!(rifle.children[0].leaves[0].hash, 111);
        assert_eq!(rifle.children[1].segment, "m4.prefab");
        assert_eq!(rifle.children[1].leaves[0].hash, 222);

        let pistol = &weapons.children[1];
        assert_eq!(pistol.segment, "pistol");
        assert_eq!(pistol.children.len(), 1);
        assert_eq!(pistol.children[0].leaves[0].display_name, "weapons/pistol/glock.prefab");
    }

    // -- 2. Non-prefab entries skipped ---------------------------------------

    #[test]
    fn non_prefab_entries_skipped() {
        let forest = build_forest(&snapshot(&[
            ("sound/reload.wav", 1),
            ("weapons/rifle/ak47.prefab", 2),
            ("materials/steel.mat", 3),
        ]));

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].segment, "weapons");
        assert_eq!(total_leaf_count(&forest), 1);
    }

    // -- 3. Same-path collisions accumulate in manifest order ----------------

    #[test]
    fn duplicate_paths_accumulate_in_order() {
        let forest = build_forest(&snapshot(&[
            ("env/rock.prefab", 10),
            ("env/rock.prefab", 20),
            ("env/rock.prefab", 30),
        ]));

        let rock = &forest[0].children[0];
        assert_eq!(rock.leaves.len(), 3);
        assert_eq!(
            rock.leaves.iter().map(|leaf| leaf.hash).collect::<Vec<_>>(),
            vec![10, 20, 30]
        );
    }

    // -- 4. Empty segments are ordinary values -------------------------------

    #[test]
    fn empty_segments_are_ordinary_values() {
        let forest = build_forest(&snapshot(&[("env//rock.prefab", 7)]));

        assert_eq!(forest[0].segment, "env");
        let blank = &forest[0].children[0];
        assert_eq!(blank.segment, "");
        assert_eq!(blank.children[0].segment, "rock.prefab");
        assert_eq!(blank.children[0].leaves[0].hash, 7);
    }

    // -- 5. Leaf string reused as a path prefix (degenerate, permitted) ------

    #[test]
    fn leaf_segment_may_own_children() {
        let forest = build_forest(&snapshot(&[
            ("env/rock.prefab", 1),
            ("env/rock.prefab/moss.prefab", 2),
        ]));

        let rock = &forest[0].children[0];
        assert!(rock.is_leaf_segment());
        assert_eq!(rock.leaves.len(), 1);
        assert_eq!(rock.children.len(), 1);
        assert_eq!(rock.children[0].segment, "moss.prefab");
        assert_eq!(total_leaf_count(&forest), 2);
    }

    // -- 6. No entries lost during insertion ---------------------------------

    #[test]
    fn leaf_count_matches_filtered_entries() {
        let snap = snapshot(&[
            ("a/b/c.prefab", 1),
            ("a/b/d.prefab", 2),
            ("a/b/c.prefab", 3),
            ("x.prefab", 4),
            ("skip/me.wav", 5),
        ]);
        let forest = build_forest(&snap);
        assert_eq!(total_leaf_count(&forest), snap.prefab_entries().count());
    }

    // -- 7. Single-segment name lands at the root ----------------------------

    #[test]
    fn single_segment_name_is_a_root_leaf() {
        let forest = build_forest(&snapshot(&[("1cool.prefab", 5)]));

        assert_eq!(forest.len(), 1);
        assert!(forest[0].is_leaf_segment());
        assert_eq!(forest[0].leaves[0].hash, 5);
        assert!(forest[0].children.is_empty());
    }

    // -- 8. Empty manifest builds an empty forest ----------------------------

    #[test]
    fn empty_manifest_builds_empty_forest() {
        let forest = build_forest(&ManifestSnapshot::capture(std::iter::empty()));
        assert!(forest.is_empty());
    }
}
