//! Fetch a page of todos, export them as CSV, report to the console.
//!
//! # Overview
//! `run` drives the three stages in order: the fetch executes the core's
//! list request over ureq, the core turns the records into a `Table`, and
//! the table is written to `Config::output` before the preview is printed.
//! Nothing is written when the fetch fails.

pub mod config;
pub mod fetch;
pub mod report;

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use thiserror::Error;
use todo_export_core::{Summary, Table, TodoClient};
use tracing::info;

pub use config::Config;
pub use fetch::FetchError;

#[derive(Debug, Error)]
pub enum RunError {
    /// Classified fetch failure: reported by the caller, exit code 1.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Anything after a successful fetch (decode, file write, console).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Fetch(err) => err.exit_code(),
            RunError::Other(_) => 1,
        }
    }
}

pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Summary, RunError> {
    report::banner(out).context("writing report")?;

    let client = TodoClient::new(&config.base_url);
    let req = client.build_list_todos(config.limit);
    report::request(out, &req).context("writing report")?;
    let records = fetch::fetch_todos(config, &client, &req)?;
    report::received(out, records.len()).context("writing report")?;

    let table = Table::from_records(records);
    let summary = table.summary();
    info!(total = summary.total, completed = summary.completed, pending = summary.pending, "table summary");
    report::summary(out, &summary).context("writing report")?;

    write_table(config, &table)?;
    report::saved(out, &config.output, table.len()).context("writing report")?;

    report::preview(out, &table, config.preview_rows).context("writing report")?;
    report::done(out, &config.output).context("writing report")?;
    Ok(summary)
}

fn write_table(config: &Config, table: &Table) -> anyhow::Result<()> {
    let path = &config.output;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    table
        .write_csv(BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = table.len(), "csv written");
    Ok(())
}
