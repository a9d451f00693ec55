//! Declarative view tree rendered to plain text.
//!
//! Pages build a [`View`] and never format output themselves; the
//! [`fmt::Display`] impl is the only renderer.

use std::fmt;

/// A navigation item as rendered inside a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub path: String,
    pub icon: String,
    pub selected: bool,
}

/// Node of a page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Page title.
    Heading(String),
    /// Paragraph of text.
    Text(String),
    /// Labelled link to a route.
    Link { label: String, href: String },
    /// Bulleted list.
    List(Vec<View>),
    /// Table with a header row.
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Titled group whose children render indented.
    Section { title: String, children: Vec<View> },
    /// Navigation menu.
    Nav(Vec<NavItem>),
    /// Children rendered one after another.
    Stack(Vec<View>),
}

impl View {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Section node.
    pub fn section(title: impl Into<String>, children: Vec<View>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }

    /// Link node.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Self::Heading(title) => writeln!(f, "{indent}# {title}"),
            Self::Text(text) => writeln!(f, "{indent}{text}"),
            Self::Link { label, href } => writeln!(f, "{indent}{label} <{href}>"),
            Self::List(items) => {
                for item in items {
                    write!(f, "{indent}- ")?;
                    item.render(f, 0)?;
                }
                Ok(())
            }
            Self::Table { columns, rows } => {
                writeln!(f, "{indent}{}", columns.join(" | "))?;
                for row in rows {
                    writeln!(f, "{indent}{}", row.join(" | "))?;
                }
                Ok(())
            }
            Self::Section { title, children } => {
                writeln!(f, "{indent}## {title}")?;
                children
                    .iter()
                    .try_for_each(|child| child.render(f, depth + 1))
            }
            Self::Nav(items) => items.iter().try_for_each(|item| {
                let marker = if item.selected { "[*]" } else { "[ ]" };
                writeln!(
                    f,
                    "{indent}{marker} {} ({}) {}",
                    item.title, item.path, item.icon
                )
            }),
            Self::Stack(children) => children
                .iter()
                .try_for_each(|child| child.render(f, depth)),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
