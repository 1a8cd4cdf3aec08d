use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// High-level business logic for the `log` command.
pub struct LogLogic;

impl LogLogic {
    /// Print the internal audit log, newest first.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(pool)?;

        if rows.is_empty() {
            println!("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        for (date, operation, message) in rows {
            println!("{} | {:<10} | {}", date, operation, message);
        }

        Ok(())
    }
}
