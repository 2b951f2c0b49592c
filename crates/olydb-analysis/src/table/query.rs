//! Search, sort and pagination over derived rows.
//!
//! Row types opt in by implementing [`TableRow`], which names the sortable
//! columns and decides what a search term matches.

use std::cmp::Ordering;

/// Rows per page when a query does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// A row that can be searched and sorted by [`TableQuery`].
pub trait TableRow {
    /// Sortable columns of this row type.
    type Column: Copy;

    /// Whether the row matches `needle`, which is already trimmed and lowercased.
    fn matches(&self, needle: &str) -> bool;

    /// Ascending order of `self` and `other` by `column`.
    fn compare(&self, other: &Self, column: Self::Column) -> Ordering;
}

/// Case-insensitive substring test against a lowercased needle.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<C> {
    pub column: C,
    pub order: SortOrder,
}

/// View state of a table: search text, sort column and current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery<C> {
    pub search: String,
    pub sort: Option<SortSpec<C>>,
    /// Zero-based.
    pub page_index: usize,
    /// `0` puts every row on a single page.
    pub page_size: usize,
}

impl<C> Default for TableQuery<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a filtered, sorted table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage<'a, R> {
    pub rows: Vec<&'a R>,
    pub page_index: usize,
    /// `0` when no row survives the search.
    pub page_count: usize,
    /// Rows matching the search, across all pages.
    pub total_rows: usize,
}

impl<C> TableQuery<C>
where
    C: Copy,
{
    /// Filters, sorts and slices `rows`.
    ///
    /// Sorting is stable, so rows comparing equal keep their input order.
    /// A page index past the end yields an empty page.
    pub fn apply<'a, R>(&self, rows: &'a [R]) -> TablePage<'a, R>
    where
        R: TableRow<Column = C>,
    {
        let needle = self.search.trim().to_lowercase();
        let mut filtered = rows
            .iter()
            .filter(|row| needle.is_empty() || row.matches(&needle))
            .collect::<Vec<_>>();

        if let Some(sort) = self.sort {
            filtered.sort_by(|a, b| {
                let ord = a.compare(b, sort.column);
                match sort.order {
                    SortOrder::Ascending => ord,
                    SortOrder::Descending => ord.reverse(),
                }
            });
        }

        let total_rows = filtered.len();
        if self.page_size == 0 {
            return TablePage {
                rows: filtered,
                page_index: 0,
                page_count: usize::from(total_rows > 0),
                total_rows,
            };
        }

        let page_count = total_rows.div_ceil(self.page_size);
        let start = self.page_index.saturating_mul(self.page_size);
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();
        TablePage {
            rows,
            page_index: self.page_index,
            page_count,
            total_rows,
        }
    }
}
