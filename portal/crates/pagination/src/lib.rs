//! Pagination envelope primitives shared by Portal resource clients.
//!
//! List endpoints answer with a fixed envelope: one page of records plus
//! metadata describing where that page sits in the full result set.
//!
//! ```json
//! {
//!   "data": [{ "id": 1 }],
//!   "meta": { "total": 1, "page": 1, "pageSize": 20, "totalPages": 1 }
//! }
//! ```
//!
//! The envelope is decoded verbatim. Record order is whatever the server
//! returned and the metadata is never cross-checked on decode; callers that
//! care can ask [`PageMeta::is_consistent`] explicitly.
//!
//! # Example
//!
//! ```
//! use pagination::{PageMeta, Paginated};
//!
//! let page = Paginated::new(vec!["a", "b"], PageMeta::new(5, 1, 2, 3));
//! assert!(page.has_next_page());
//! assert_eq!(page.map(str::len).data(), &[1, 1]);
//! ```

use serde::{Deserialize, Serialize};

/// Metadata describing one page of a server-side result set.
///
/// ## Invariants
/// - `page` is 1-based.
/// - `total_pages == ceil(total / page_size)` is a server contract that is
///   not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of records across every page.
    pub total: u64,
    /// Current 1-based page number.
    pub page: u64,
    /// Maximum number of records per page.
    pub page_size: u64,
    /// Number of pages the server reports for `total`.
    pub total_pages: u64,
}

impl PageMeta {
    /// Build page metadata from its four components.
    #[must_use]
    pub const fn new(total: u64, page: u64, page_size: u64, total_pages: u64) -> Self {
        Self {
            total,
            page,
            page_size,
            total_pages,
        }
    }

    /// Page count implied by `total` and `page_size`.
    ///
    /// A zero page size yields zero pages.
    ///
    /// ```
    /// use pagination::PageMeta;
    ///
    /// assert_eq!(PageMeta::new(41, 1, 20, 3).expected_total_pages(), 3);
    /// assert_eq!(PageMeta::new(0, 1, 20, 0).expected_total_pages(), 0);
    /// ```
    #[must_use]
    pub const fn expected_total_pages(&self) -> u64 {
        if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Whether the reported page count agrees with `total` and `page_size`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.total_pages == self.expected_total_pages()
    }

    /// Whether a page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

/// One page of records together with its [`PageMeta`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    data: Vec<T>,
    meta: PageMeta,
}

impl<T> Paginated<T> {
    /// Wrap a page of records with its metadata.
    #[must_use]
    pub const fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }

    /// Records on this page, in server order.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Metadata for this page.
    #[must_use]
    pub const fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether a page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.meta.has_next_page()
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.meta.has_previous_page()
    }

    /// Transform every record while keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    /// Split the envelope into records and metadata.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageMeta) {
        (self.data, self.meta)
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
