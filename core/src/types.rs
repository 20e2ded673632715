//! Domain DTOs for the todo export.
//!
//! # Design
//! `Record` mirrors the upstream JSON exactly (camelCase `userId`). `Row` is
//! the renamed, enriched shape that lands in the CSV; its field order is the
//! column order. The mock-server defines its own copy of the upstream shape;
//! integration tests catch any schema drift between the two crates.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single todo item as returned by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Human-readable completion state derived from `Row::is_completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    Done,
    Pending,
}

impl Status {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Status::Done
        } else {
            Status::Pending
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Done => "Done",
            Status::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row. Field order here is the CSV column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Row {
    pub todo_id: u64,
    pub user_id: u64,
    pub task: String,
    #[serde(serialize_with = "ser_bool_title", deserialize_with = "de_bool_title")]
    pub is_completed: bool,
    pub status: Status,
}

impl From<Record> for Row {
    fn from(record: Record) -> Self {
        Row {
            todo_id: record.id,
            user_id: record.user_id,
            task: record.title,
            is_completed: record.completed,
            status: Status::from_completed(record.completed),
        }
    }
}

/// Text form of a boolean cell: `True` / `False`.
pub fn bool_cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn ser_bool_title<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(bool_cell(*value))
}

fn de_bool_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected True or False, got {other:?}"
        ))),
    }
}
