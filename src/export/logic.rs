use crate::core::context::RequestContext;
use crate::db::pool::DbPool;
use crate::db::queries::list_for_owner;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the caller's intervals.
    ///
    /// - `format`: csv | json
    /// - `file`: path of the output file
    pub fn export(
        pool: &mut DbPool,
        ctx: &RequestContext,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let intervals = list_for_owner(pool, &ctx.caller)?;

        if intervals.is_empty() {
            warning("No intervals found to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, &intervals)?,
            ExportFormat::Json => write_json(path, &intervals)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        Ok(())
    }
}
