//! Table body state resolution.
//!
//! [`TableBody`] decides what a table body shows for a given data state,
//! without knowing anything about how rows are drawn. The precedence is
//! strict: loading beats error, error beats empty, and only a settled,
//! non-empty row set produces data rows.
//!
//! # Examples
//!
//! ```
//! use olydb_analysis::table::body::{BodyRow, TableBody};
//!
//! let rows = [("IMO", 2024), ("IMO", 2023), ("EGMO", 2024)];
//! let body = TableBody::new(&rows, 2)
//!     .group_by(|(source, _)| *source)
//!     .render();
//!
//! assert_eq!(body.len(), 4);
//! assert!(matches!(body[2], BodyRow::GroupSeparator { .. }));
//! ```

/// Placeholder rows shown while data is loading.
pub const SKELETON_ROW_COUNT: usize = 5;

pub const DEFAULT_NO_DATA_MESSAGE: &str = "No data available";

/// One rendered line of a table body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyRow<'a, R, S = ()> {
    /// Loading placeholder spanning every column.
    Skeleton { column_count: usize },
    /// Error alert spanning every column; the message is shown verbatim.
    Error {
        message: &'a str,
        column_count: usize,
    },
    /// Empty-state message spanning every column.
    Empty {
        message: &'a str,
        column_count: usize,
    },
    /// Marker between two groups of rows.
    GroupSeparator { column_count: usize },
    Data { row: &'a R, style: Option<S> },
}

type StyleFn<'a, R, S> = Box<dyn Fn(&R) -> Option<S> + 'a>;
type SameGroupFn<'a, R> = Box<dyn Fn(&R, &R) -> bool + 'a>;

/// Builder resolving a row slice and its load state into [`BodyRow`]s.
pub struct TableBody<'a, R, S = ()> {
    rows: &'a [R],
    column_count: usize,
    is_loading: bool,
    error: Option<&'a str>,
    no_data_message: &'a str,
    row_style: Option<StyleFn<'a, R, S>>,
    same_group: Option<SameGroupFn<'a, R>>,
}

impl<'a, R> TableBody<'a, R> {
    #[must_use]
    pub fn new(rows: &'a [R], column_count: usize) -> Self {
        Self {
            rows,
            column_count,
            is_loading: false,
            error: None,
            no_data_message: DEFAULT_NO_DATA_MESSAGE,
            row_style: None,
            same_group: None,
        }
    }
}

impl<'a, R, S> TableBody<'a, R, S> {
    #[must_use]
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    #[must_use]
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn no_data_message(mut self, message: &'a str) -> Self {
        self.no_data_message = message;
        self
    }

    /// Attaches a per-row style; `None` from `style` leaves a row unstyled.
    #[must_use]
    pub fn row_style<T, F>(self, style: F) -> TableBody<'a, R, T>
    where
        F: Fn(&R) -> Option<T> + 'a,
    {
        TableBody {
            rows: self.rows,
            column_count: self.column_count,
            is_loading: self.is_loading,
            error: self.error,
            no_data_message: self.no_data_message,
            row_style: Some(Box::new(style)),
            same_group: self.same_group,
        }
    }

    /// Inserts a separator wherever `key` changes between adjacent rows.
    ///
    /// Rows are not regrouped: input must already be ordered by group.
    #[must_use]
    pub fn group_by<K, F>(mut self, key: F) -> Self
    where
        F: Fn(&R) -> K + 'a,
        K: PartialEq,
    {
        self.same_group = Some(Box::new(move |a, b| key(a) == key(b)));
        self
    }

    #[must_use]
    pub fn render(&self) -> Vec<BodyRow<'a, R, S>> {
        let column_count = self.column_count;

        if self.is_loading {
            return (0..SKELETON_ROW_COUNT)
                .map(|_| BodyRow::Skeleton { column_count })
                .collect();
        }
        if let Some(message) = self.error {
            return vec![BodyRow::Error {
                message,
                column_count,
            }];
        }
        if self.rows.is_empty() {
            return vec![BodyRow::Empty {
                message: self.no_data_message,
                column_count,
            }];
        }

        let mut body = Vec::with_capacity(self.rows.len());
        let mut previous: Option<&R> = None;
        for row in self.rows {
            if let (Some(same_group), Some(previous)) = (&self.same_group, previous) {
                if !same_group(previous, row) {
                    body.push(BodyRow::GroupSeparator { column_count });
                }
            }
            let style = self.row_style.as_ref().and_then(|style| style(row));
            body.push(BodyRow::Data { row, style });
            previous = Some(row);
        }
        body
    }
}
