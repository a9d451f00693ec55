//! Layer boundary lint for the portal crate.
//!
//! Every top-level module of `portal/src` is a layer with a fixed list of
//! layers it may import and crates it may not:
//!
//! | Layer | May use | Banned crates |
//! |---|---|---|
//! | `domain` | nothing | HTTP stack, process setup |
//! | `navigation` | `domain` | HTTP stack, process setup |
//! | `context` | `domain` | HTTP stack, process setup |
//! | `ui` | `domain`, `navigation`, `context` | HTTP stack, process setup |
//! | `outbound` | `domain` | `actix_web`, process setup |
//! | `settings` | `domain` | HTTP clients and servers, `clap`, `color_eyre`, `tracing_subscriber` |
//! | `telemetry` | `settings` | HTTP stack, `clap`, `color_eyre`, `ortho_config` |
//!
//! The HTTP stack is `actix_rt`, `actix_web`, `hyper`, `reqwest` and `url`;
//! process setup is `clap`, `color_eyre`, `ortho_config` and
//! `tracing_subscriber`. `lib.rs` and `main.rs` wire the layers together and
//! are not checked.
//!
//! Run it with `cargo run -p architecture-lint`.

mod dependencies;
mod layers;
mod workspace;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use self::dependencies::{Dependency, dependencies_of};
pub use self::layers::Layer;
pub use self::workspace::{locate_workspace, workspace_root};

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `portal/src`.
    pub file: PathBuf,
    /// Source text.
    pub contents: String,
}

/// One forbidden dependency found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .file.display())]
pub struct Violation {
    /// File path relative to `portal/src`.
    pub file: PathBuf,
    /// Layer the file belongs to.
    pub layer: Layer,
    /// Which rule was broken.
    pub message: String,
}

/// Failure modes returned by the architecture lint.
#[derive(Debug, Error)]
pub enum ArchitectureLintError {
    #[error("reading portal sources failed: {0}")]
    Io(#[from] io::Error),
    #[error("{} does not parse as Rust: {message}", .file.display())]
    Parse { file: PathBuf, message: String },
    #[error("no Cargo.toml with a [workspace] table above the working directory")]
    WorkspaceNotFound,
    #[error("architecture boundary violations:{}", render(.0))]
    Violations(Vec<Violation>),
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("\n- {violation}"))
        .collect()
}

/// Lint `portal/src` of the workspace rooted at `workspace`.
///
/// # Errors
///
/// See [`lint_portal_sources`].
pub fn lint_workspace(workspace: &Path) -> Result<(), ArchitectureLintError> {
    lint_portal_sources(&workspace.join("portal"))
}

/// Lint the portal crate sources on disk.
///
/// `portal_dir` is the crate directory holding `src/`.
///
/// # Errors
///
/// Returns [`ArchitectureLintError`] when sources cannot be read or parsed,
/// or when any boundary is crossed.
pub fn lint_portal_sources(portal_dir: &Path) -> Result<(), ArchitectureLintError> {
    let sources = workspace::layered_sources(&portal_dir.join("src"))?;
    lint_sources(&sources)
}

/// Lint in-memory sources. Files outside every layer are skipped.
///
/// # Errors
///
/// Returns [`ArchitectureLintError::Parse`] for unparsable sources and
/// [`ArchitectureLintError::Violations`] listing every broken rule.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();
    for source in sources {
        let Some(layer) = Layer::of_file(&source.file) else {
            continue;
        };
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(check_file(&source.file, layer, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

fn check_file(file: &Path, layer: Layer, parsed: &syn::File) -> Vec<Violation> {
    let rule = layer.rule();
    dependencies_of(parsed)
        .into_iter()
        .filter_map(|dependency| match dependency {
            Dependency::Layer(target) if rule.bans_layer(target) => {
                Some(format!("{layer} must not use crate::{target}"))
            }
            Dependency::Crate(name) if rule.bans_crate(&name) => {
                Some(format!("{layer} must not use external crate `{name}`"))
            }
            _ => None,
        })
        .map(|message| Violation {
            file: file.to_path_buf(),
            layer,
            message,
        })
        .collect()
}

#[cfg(test)]
mod tests;
