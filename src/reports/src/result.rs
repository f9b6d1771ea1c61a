use std::fmt;
use std::io::Write;

use csv::WriterBuilder;

use crate::error::Result;

/// A result set kept as the text the server sent. `None` is SQL NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row with the column names, then one record per row. NULLs are
    /// written as empty fields.
    pub fn write_csv<W: Write>(&self, w: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(w);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|v| v.as_deref().unwrap_or_default()))?;
        }
        wtr.flush()?;

        Ok(())
    }

    /// Right aligned text table of the first `n` rows.
    pub fn head(&self, n: usize) -> Preview<'_> {
        Preview { rs: self, n }
    }
}

pub struct Preview<'a> {
    rs: &'a ResultSet,
    n: usize,
}

const NULL: &str = "NULL";

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    for (i, (cell, &w)) in cells.zip(widths).enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{cell:>w$}")?;
    }
    writeln!(f)
}

impl<'a> fmt::Display for Preview<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = &self.rs.rows[..self.n.min(self.rs.rows.len())];
        if self.rs.columns.is_empty() {
            return write!(f, "Empty result set");
        }

        let mut widths: Vec<usize> = self.rs.columns.iter().map(|c| c.chars().count()).collect();
        for row in rows {
            for (w, v) in widths.iter_mut().zip(row) {
                *w = (*w).max(v.as_deref().unwrap_or(NULL).chars().count());
            }
        }

        write_line(f, &widths, self.rs.columns.iter().map(|c| c.as_str()))?;
        for row in rows {
            write_line(f, &widths, row.iter().map(|v| v.as_deref().unwrap_or(NULL)))?;
        }
        if rows.is_empty() {
            writeln!(f, "(no rows)")?;
        }

        Ok(())
    }
}
