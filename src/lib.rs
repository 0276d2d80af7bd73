//! Sprout - grow placeholder markdown docs from a JSON component tree

pub mod input;
pub mod materialize;
pub mod output;
pub mod scaffold;
pub mod tree;

pub use input::{InputError, load_tree};
pub use materialize::{Outcome, materialize, target_path};
pub use output::{print_created, print_summary};
pub use scaffold::{Summary, scaffold};
pub use tree::{Node, WalkStats, walk};
