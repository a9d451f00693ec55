//! Extraction of the layers and crates a parsed file refers to.

use std::collections::BTreeSet;

use syn::visit::{self, Visit};

use crate::layers::Layer;

/// Name the portal crate is imported under from tests and binaries.
const CRATE_NAME: &str = "portal";

/// Something outside the current file that a path points at.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dependency {
    /// A layer of the portal crate, reached through `crate`, `self`,
    /// `super` or the crate name.
    Layer(Layer),
    /// An external crate, named by the first path segment.
    Crate(String),
}

impl Dependency {
    /// Classify a path given as its identifier segments.
    ///
    /// Paths into the portal crate that do not name a layer, such as
    /// `super::ApiClient`, yield nothing.
    fn classify(segments: &[String]) -> Option<Self> {
        let (first, rest) = segments.split_first()?;
        match first.as_str() {
            "crate" | "self" | "super" => {
                let named = rest
                    .iter()
                    .find(|segment| !matches!(segment.as_str(), "self" | "super"))?;
                Layer::from_module(named).map(Self::Layer)
            }
            CRATE_NAME => Layer::from_module(rest.first()?).map(Self::Layer),
            _ => Some(Self::Crate(first.clone())),
        }
    }
}

/// Every dependency referenced by `file`, deduplicated.
///
/// `use` declarations count whatever their length. Other paths count only
/// when qualified, so a bare `Url` after `use url::Url` is not re-reported.
pub fn dependencies_of(file: &syn::File) -> BTreeSet<Dependency> {
    let mut visitor = DependencyVisitor::default();
    visitor.visit_file(file);
    visitor.found
}

#[derive(Default)]
struct DependencyVisitor {
    found: BTreeSet<Dependency>,
}

impl DependencyVisitor {
    fn note(&mut self, segments: &[String]) {
        if let Some(dependency) = Dependency::classify(segments) {
            self.found.insert(dependency);
        }
    }

    fn walk_use(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.walk_use(&path.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Name(syn::UseName { ident })
            | syn::UseTree::Rename(syn::UseRename { ident, .. }) => {
                prefix.push(ident.to_string());
                self.note(prefix);
                prefix.pop();
            }
            syn::UseTree::Glob(_) => self.note(prefix),
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.walk_use(item, prefix);
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for DependencyVisitor {
    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.walk_use(&node.tree, &mut Vec::new());
    }

    fn visit_path(&mut self, node: &'ast syn::Path) {
        if node.segments.len() > 1 {
            let segments = node
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>();
            self.note(&segments);
        }
        visit::visit_path(self, node);
    }
}
