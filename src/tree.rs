//! Tree node model and breadth-first traversal

use std::collections::{HashSet, VecDeque};

use serde::Deserialize;

/// A named node in the input hierarchy.
///
/// `name` is optional so that a malformed node survives deserialization
/// and can be warned about during the walk instead of failing the whole
/// load. `children` accepts `null` or absence as a leaf; unknown fields
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<Node>>,
}

/// Tallies from one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Total nodes dequeued, including duplicates and unnamed nodes.
    pub processed: usize,
    /// Nodes skipped because their name was already seen this walk.
    pub duplicates: usize,
    /// Nodes skipped because they had no `name` field.
    pub unnamed: usize,
}

/// Walk `roots` breadth-first, invoking `on_unique_node` once per distinct
/// node name, in dequeue order.
///
/// Uses an explicit work queue rather than recursion, so traversal order
/// is deterministic and arbitrarily deep trees cannot blow the stack. A
/// node without a name is warned about and its children are dropped; a
/// node whose name was already seen is skipped silently, children
/// included, so whichever occurrence is dequeued first wins. A single
/// root walks as a one-element slice.
pub fn walk<F>(roots: &[Node], mut on_unique_node: F) -> WalkStats
where
    F: FnMut(&str),
{
    let mut queue: VecDeque<&Node> = roots.iter().collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stats = WalkStats::default();

    while let Some(node) = queue.pop_front() {
        stats.processed += 1;

        let Some(name) = node.name.as_deref() else {
            eprintln!("warning: skipping node without a 'name' field");
            stats.unnamed += 1;
            continue;
        };

        if !seen.insert(name) {
            stats.duplicates += 1;
            continue;
        }

        on_unique_node(name);

        if let Some(children) = &node.children {
            queue.extend(children.iter());
        }
    }

    stats
}
