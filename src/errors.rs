//! Unified application error type.
//! All modules (core, io, cli, config) return AppError to keep the error
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

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    // ---------------------------
    // Conversion
    // ---------------------------
    #[error("No converted data to write: no valid attendance lines in input")]
    EmptyOutput,

    #[error("Output cancelled: '{0}' already exists and was not overwritten")]
    OverwriteRefused(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("CSV report error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON report error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
