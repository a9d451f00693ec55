//! Layer map of `portal/src` and the dependency rules between layers.

use std::fmt;
use std::path::Path;

const HTTP_STACK: &[&str] = &["actix_rt", "actix_web", "hyper", "reqwest", "url"];
const PROCESS_SETUP: &[&str] = &["clap", "color_eyre", "ortho_config", "tracing_subscriber"];

/// A module of `portal/src` that the lint assigns rules to.
///
/// Files outside every layer (the crate root and the binary) are not
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Domain,
    Navigation,
    Context,
    Ui,
    Outbound,
    Settings,
    Telemetry,
}

/// What one layer may reach.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub layer: Layer,
    /// Other layers this one may import.
    pub may_use: &'static [Layer],
    /// External crates this one may not import.
    pub banned_crates: &'static [&'static [&'static str]],
}

impl Rule {
    /// Whether `crate_name` appears in any of the banned crate groups.
    pub fn bans_crate(&self, crate_name: &str) -> bool {
        self.banned_crates
            .iter()
            .any(|group| group.contains(&crate_name))
    }

    /// Whether `target` is a different layer this one may not import.
    pub fn bans_layer(&self, target: Layer) -> bool {
        target != self.layer && !self.may_use.contains(&target)
    }
}

impl Layer {
    /// Every layer, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Domain,
        Self::Navigation,
        Self::Context,
        Self::Ui,
        Self::Outbound,
        Self::Settings,
        Self::Telemetry,
    ];

    /// Module name under `portal/src`.
    pub const fn module(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Navigation => "navigation",
            Self::Context => "context",
            Self::Ui => "ui",
            Self::Outbound => "outbound",
            Self::Settings => "settings",
            Self::Telemetry => "telemetry",
        }
    }

    /// Layer named by a module path segment.
    pub fn from_module(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layer| layer.module() == name)
    }

    /// Layer owning a file, given its path relative to `portal/src`.
    ///
    /// Both `ui/view.rs` and a flat `context.rs` resolve by their first
    /// component.
    pub fn of_file(relative: &Path) -> Option<Self> {
        let first = relative.components().next()?.as_os_str().to_str()?;
        Self::from_module(first.strip_suffix(".rs").unwrap_or(first))
    }

    /// Dependency rule governing this layer.
    pub const fn rule(self) -> Rule {
        let (may_use, banned_crates): (&'static [Layer], &'static [&'static [&'static str]]) =
            match self {
                Self::Domain => (&[], &[HTTP_STACK, PROCESS_SETUP]),
                Self::Navigation | Self::Context => (&[Self::Domain], &[HTTP_STACK, PROCESS_SETUP]),
                Self::Ui => (
                    &[Self::Domain, Self::Navigation, Self::Context],
                    &[HTTP_STACK, PROCESS_SETUP],
                ),
                Self::Outbound => (&[Self::Domain], &[&["actix_web"], PROCESS_SETUP]),
                Self::Settings => (
                    &[Self::Domain],
                    &[
                        &["actix_rt", "actix_web", "hyper", "reqwest"],
                        &["clap", "color_eyre", "tracing_subscriber"],
                    ],
                ),
                Self::Telemetry => (
                    &[Self::Settings],
                    &[HTTP_STACK, &["clap", "color_eyre", "ortho_config"]],
                ),
            };
        Rule {
            layer: self,
            may_use,
            banned_crates,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module())
    }
}
