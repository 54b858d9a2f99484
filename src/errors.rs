//! Unified application error type.
//! All modules (data, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Data file errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot open data file {path}: {source}")]
    DataFile {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    #[error("Invalid timestamp '{value}' at row {row}")]
    InvalidTimestamp { value: String, row: usize },

    #[error("Invalid number '{value}' in column '{column}' at row {row}")]
    InvalidNumber {
        value: String,
        column: String,
        row: usize,
    },

    // ---------------------------
    // Filter parsing errors
    // ---------------------------
    #[error("Invalid city: {0} (expected chicago, new york city or washington)")]
    InvalidCity(String),

    #[error("Invalid month: {0} (expected january..june or all)")]
    InvalidMonth(String),

    #[error("Invalid day of week: {0} (expected monday..sunday or all)")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
