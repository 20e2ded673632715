//! Console report written to stdout.
//!
//! Every section takes the writer explicitly so tests can capture it.

use std::io::{self, Write};
use std::path::Path;

use todo_export_core::{HttpRequest, Summary, Table, COLUMNS};

use crate::fetch::FetchError;

const WIDTH: usize = 70;

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out, "  Todo Export - Fetch & Save Todo Data")?;
    writeln!(out, "{}", "=".repeat(WIDTH))
}

pub fn request<W: Write>(out: &mut W, req: &HttpRequest) -> io::Result<()> {
    let params: Vec<String> = req.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    writeln!(out, "\nFetching data from: {}", req.url)?;
    writeln!(out, "    Parameters     : {}\n", params.join(", "))
}

pub fn received<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Success! Received {count} records.")
}

pub fn summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "\nProcessing data...")?;
    writeln!(out, "    Total: {}", summary.total)?;
    writeln!(out, "    Completed: {}", summary.completed)?;
    writeln!(out, "    Pending: {}", summary.pending)
}

pub fn saved<W: Write>(out: &mut W, path: &Path, rows: usize) -> io::Result<()> {
    writeln!(out, "\nData saved to '{}'", path.display())?;
    writeln!(out, "    Rows    : {rows}")?;
    writeln!(out, "    Columns : [{}]", COLUMNS.join(", "))
}

pub fn preview<W: Write>(out: &mut W, table: &Table, n: usize) -> io::Result<()> {
    writeln!(out, "\nPreview (first {n} rows):\n")?;
    writeln!(out, "{}", table.preview(n))?;
    writeln!(out, "\n{}", "-".repeat(WIDTH))
}

pub fn done<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "\nDone! Open '{}' to see your data.", path.display())?;
    writeln!(out, "{}\n", "=".repeat(WIDTH))
}

pub fn fetch_failure<W: Write>(out: &mut W, err: &FetchError) -> io::Result<()> {
    match err {
        FetchError::Connect(_) => writeln!(out, "ERROR: Could not connect. Check your internet connection."),
        FetchError::Timeout(_) => writeln!(out, "ERROR: The request timed out. The server may be slow."),
        FetchError::Status { status, message } => {
            writeln!(out, "HTTP ERROR: {message}")?;
            writeln!(out, "    Status Code: {status}")
        }
        FetchError::Transport(detail) => writeln!(out, "UNEXPECTED ERROR: {detail}"),
    }
}
