use crate::errors::{AppError, AppResult};
use crate::models::interval::WorkInterval;
use std::path::Path;

/// Write the intervals as pretty-printed JSON.
pub fn write_json(path: &Path, intervals: &[WorkInterval]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(intervals)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}
