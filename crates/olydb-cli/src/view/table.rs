//! Plain-text table rendering
//!
//! Draws the rows resolved by [`TableBody`](olydb_analysis::table::body::TableBody)
//! as fixed-width columns.

use std::io::{self, Write};

use olydb_analysis::table::{body::BodyRow, query::TablePage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub(crate) struct Column {
    pub title: String,
    pub align: Align,
}

impl Column {
    pub(crate) fn left(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            align: Align::Left,
        }
    }

    pub(crate) fn right(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            align: Align::Right,
        }
    }
}

/// Row style rendered as a short leading marker
pub(crate) trait RowMarker {
    fn marker(&self) -> &str;
}

impl RowMarker for () {
    fn marker(&self) -> &str {
        ""
    }
}

impl RowMarker for &str {
    fn marker(&self) -> &str {
        self
    }
}

enum Line<'a> {
    Cells { marker: &'a str, cells: Vec<String> },
    Message(String),
    Skeleton,
    Separator,
}

/// Write a table body with a header line
///
/// # Arguments
/// * `out` - Destination writer
/// * `columns` - Column headers and alignment
/// * `body` - Resolved body rows
/// * `cells` - Formats a data row into one string per column
pub(crate) fn write_table<W, R, S, F>(
    out: &mut W,
    columns: &[Column],
    body: &[BodyRow<'_, R, S>],
    cells: F,
) -> io::Result<()>
where
    W: Write,
    S: RowMarker,
    F: Fn(&R) -> Vec<String>,
{
    let lines = body
        .iter()
        .map(|row| match row {
            BodyRow::Data { row, style } => Line::Cells {
                marker: style.as_ref().map_or("", RowMarker::marker),
                cells: cells(row),
            },
            BodyRow::Error { message, .. } => Line::Message(format!("Error: {message}")),
            BodyRow::Empty { message, .. } => Line::Message((*message).to_owned()),
            BodyRow::Skeleton { .. } => Line::Skeleton,
            BodyRow::GroupSeparator { .. } => Line::Separator,
        })
        .collect::<Vec<_>>();

    let marker_width = lines
        .iter()
        .map(|line| match line {
            Line::Cells { marker, .. } => marker.chars().count(),
            _ => 0,
        })
        .max()
        .unwrap_or(0);
    let mut widths = columns
        .iter()
        .map(|c| c.title.chars().count())
        .collect::<Vec<_>>();
    for line in &lines {
        if let Line::Cells { cells, .. } = line {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }
    let total_width = marker_width + widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

    let header = columns.iter().map(|c| c.title.clone()).collect::<Vec<_>>();
    write_cells(out, columns, &widths, "", marker_width, &header)?;
    writeln!(out, "  {}", "-".repeat(total_width))?;

    for line in &lines {
        match line {
            Line::Cells { marker, cells } => {
                write_cells(out, columns, &widths, marker, marker_width, cells)?;
            }
            Line::Message(message) => writeln!(out, "  {message}")?,
            Line::Skeleton => {
                let placeholders = widths.iter().map(|w| "·".repeat(*w)).collect::<Vec<_>>();
                write_cells(out, columns, &widths, "", marker_width, &placeholders)?;
            }
            Line::Separator => writeln!(out, "  {}", "·".repeat(total_width))?,
        }
    }
    Ok(())
}

fn write_cells<W>(
    out: &mut W,
    columns: &[Column],
    widths: &[usize],
    marker: &str,
    marker_width: usize,
    cells: &[String],
) -> io::Result<()>
where
    W: Write,
{
    let mut line = format!("  {marker:<marker_width$}");
    for (i, ((column, width), cell)) in columns.iter().zip(widths).zip(cells).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        match column.align {
            Align::Left => line.push_str(&format!("{cell:<width$}")),
            Align::Right => line.push_str(&format!("{cell:>width$}")),
        }
    }
    writeln!(out, "{}", line.trim_end())
}

/// Write the "page x of y" footer of a paginated table
pub(crate) fn write_page_footer<W, R>(out: &mut W, page: &TablePage<'_, R>) -> io::Result<()>
where
    W: Write,
{
    if page.page_count > 1 {
        writeln!(
            out,
            "  Page {}/{} ({} rows)",
            page.page_index + 1,
            page.page_count,
            page.total_rows
        )?;
    } else {
        writeln!(out, "  ({} rows)", page.total_rows)?;
    }
    Ok(())
}
