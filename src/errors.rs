//! Unified application error type.
//! The application layer (store, validation, cli, config) returns AppError.
//! The accounting engine under `core::calculator` never fails and does not
//! use it.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid week key: {0} (expected YYYY-Www)")]
    InvalidWeek(String),

    #[error("Invalid entry type: {0}")]
    InvalidEntryKind(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Entry sequence error: {0}")]
    Sequence(String),

    #[error("Day {0} is marked as a special day; clock events are not allowed")]
    SpecialDayConflict(String),

    #[error("No entries found for date {0}")]
    NoEntriesForDate(String),

    #[error("Invalid entry index: {0}")]
    InvalidEntryIndex(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
