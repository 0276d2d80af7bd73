//! Placeholder file creation

use std::fs;
use std::path::{Path, PathBuf};

/// Result of one materialization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The placeholder file was written.
    Created,
    /// A file by that name already existed; nothing was touched.
    Skipped,
    /// A filesystem error occurred; logged, never fatal.
    Failed,
}

/// Target path for a node name under `output_dir`.
pub fn target_path(name: &str, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{name}.md"))
}

/// The boilerplate written into a newly created description file.
pub fn placeholder(name: &str) -> String {
    format!(
        "# {name}\n\n\
         *(Description needed...)*\n\n\
         ## Overview\n\n\
         ## Usage\n\n\
         ```rust\n\
         // Example Rust code here\n\
         ```\n\n\
         ## See Also\n\n"
    )
}

/// Create `<name>.md` under `output_dir` if it does not already exist.
///
/// The directory (and any missing parents) is created first. An existing
/// file is never truncated or rewritten. Errors are logged to stderr and
/// reported as [`Outcome::Failed`] so the caller can keep going.
pub fn materialize(name: &str, output_dir: &Path) -> Outcome {
    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!(
            "error: cannot create directory '{}': {}",
            output_dir.display(),
            e
        );
        return Outcome::Failed;
    }

    let path = target_path(name, output_dir);
    if path.exists() {
        return Outcome::Skipped;
    }

    match fs::write(&path, placeholder(name)) {
        Ok(()) => Outcome::Created,
        Err(e) => {
            eprintln!("error: cannot create file '{}': {}", path.display(), e);
            Outcome::Failed
        }
    }
}
