//! Locating the workspace and reading the portal's sources from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::layers::Layer;
use crate::{ArchitectureLintError, LintSource};

/// Nearest ancestor of `start` (inclusive) whose `Cargo.toml` opens a
/// `[workspace]` table.
pub fn workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_workspace(&dir.join("Cargo.toml")))
        .map(Path::to_path_buf)
}

/// Workspace root for the running lint.
///
/// Tries `CARGO_WORKSPACE_DIR`, then the working directory, then the lint's
/// own manifest directory.
///
/// # Errors
///
/// Returns [`ArchitectureLintError::WorkspaceNotFound`] when none of them
/// sits inside a workspace.
pub fn locate_workspace() -> Result<PathBuf, ArchitectureLintError> {
    let candidates = [
        std::env::var_os("CARGO_WORKSPACE_DIR").map(PathBuf::from),
        std::env::current_dir().ok(),
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];
    candidates
        .iter()
        .flatten()
        .find_map(|start| workspace_root(start))
        .ok_or(ArchitectureLintError::WorkspaceNotFound)
}

fn declares_workspace(manifest: &Path) -> bool {
    fs::read_to_string(manifest)
        .is_ok_and(|contents| contents.lines().any(|line| line.trim() == "[workspace]"))
}

/// Every `.rs` file under `src_dir` that belongs to a layer, sorted by path.
pub(crate) fn layered_sources(src_dir: &Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let mut pending = vec![src_dir.to_path_buf()];
    let mut sources = Vec::new();
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }
            let Ok(relative) = path.strip_prefix(src_dir) else {
                continue;
            };
            if Layer::of_file(relative).is_none() {
                continue;
            }
            sources.push(LintSource {
                file: relative.to_path_buf(),
                contents: fs::read_to_string(&path)?,
            });
        }
    }
    sources.sort_by(|left, right| left.file.cmp(&right.file));
    Ok(sources)
}
