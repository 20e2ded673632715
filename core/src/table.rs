//! The transformed table: renaming, status derivation, CSV and preview.
//!
//! # Design
//! `Table` owns its rows in upstream order and never filters. CSV goes
//! through `csv::Writer` with serde so the header comes from `Row`'s field
//! names; the fixed `COLUMNS` list exists for the console report and is kept
//! in sync by a test.

use std::io::{Read, Write};

use tracing::debug;

use crate::error::ExportError;
use crate::types::{bool_cell, Record, Row};

/// Output column order.
pub const COLUMNS: [&str; 5] = ["todo_id", "user_id", "task", "is_completed", "status"];

/// Aggregate counts over `is_completed`. Reported only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn from_records(records: Vec<Record>) -> Self {
        let rows: Vec<Row> = records.into_iter().map(Row::from).collect();
        debug!(rows = rows.len(), "built table");
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let total = self.rows.len();
        let completed = self.rows.iter().filter(|row| row.is_completed).count();
        Summary {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Write header plus one line per row. The header is written even when
    /// the table is empty.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut w = csv::Writer::from_writer(writer);
        if self.rows.is_empty() {
            w.write_record(COLUMNS)?;
        }
        for row in &self.rows {
            w.serialize(row)?;
        }
        w.flush()?;
        Ok(())
    }

    pub fn read_csv<R: Read>(reader: R) -> Result<Self, ExportError> {
        let mut r = csv::Reader::from_reader(reader);
        let rows = r.deserialize().collect::<Result<Vec<Row>, _>>()?;
        Ok(Self { rows })
    }

    /// Fixed-width rendering of the first `n` rows: every column
    /// right-aligned to its widest cell, header first, no index.
    pub fn preview(&self, n: usize) -> String {
        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .take(n)
            .map(|row| {
                [
                    row.todo_id.to_string(),
                    row.user_id.to_string(),
                    row.task.clone(),
                    bool_cell(row.is_completed).to_string(),
                    row.status.to_string(),
                ]
            })
            .collect();

        let mut widths = COLUMNS.map(|c| c.chars().count());
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |line: [&str; 5]| -> String {
            line.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join("  ")
        };

        let mut out = render(COLUMNS);
        for line in &cells {
            out.push('\n');
            out.push_str(&render(line.each_ref().map(String::as_str)));
        }
        out
    }
}
