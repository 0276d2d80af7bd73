//! Orchestration: walk the tree and materialize each unique name

use std::io;
use std::path::Path;

use crate::materialize::{Outcome, materialize, target_path};
use crate::output::print_created;
use crate::tree::{Node, walk};

/// Counters for one scaffolding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Total nodes dequeued, including duplicates and unnamed nodes.
    pub processed: usize,
    /// Files written this run.
    pub created: usize,
    /// Names skipped, whether duplicated in the tree or already on disk.
    pub skipped: usize,
    /// Files that could not be written.
    pub failed: usize,
}

/// Walk `roots` and materialize a placeholder file per unique node name.
///
/// A creation notice is printed as each file is written. Materializer
/// failures are counted and already logged; they never abort the run. The
/// `io::Result` covers stdout write failures only.
pub fn scaffold(roots: &[Node], output_dir: &Path, use_color: bool) -> io::Result<Summary> {
    let mut created = 0;
    let mut skipped_existing = 0;
    let mut failed = 0;
    let mut print_error: Option<io::Error> = None;

    let stats = walk(roots, |name| match materialize(name, output_dir) {
        Outcome::Created => {
            created += 1;
            if let Err(e) = print_created(&target_path(name, output_dir), use_color) {
                print_error.get_or_insert(e);
            }
        }
        Outcome::Skipped => skipped_existing += 1,
        Outcome::Failed => failed += 1,
    });

    if let Some(e) = print_error {
        return Err(e);
    }

    Ok(Summary {
        processed: stats.processed,
        created,
        skipped: skipped_existing + stats.duplicates,
        failed,
    })
}
