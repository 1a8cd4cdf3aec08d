//! Unified application error type.
//! All modules (db, core, cli, identity) return AppError to keep the error
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

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Record-level errors
    // ---------------------------
    #[error("No interval found with id {0}")]
    NotFound(i64),

    #[error("Interval {0} is owned by another user")]
    Forbidden(i64),

    #[error("No profile found for user '{0}'")]
    ProfileLookup(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
