use crate::core::context::RequestContext;
use crate::db::audit::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries::{get_interval, insert_interval};
use crate::errors::AppResult;
use crate::models::interval::WorkInterval;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct SubmitLogic;

impl SubmitLogic {
    /// Validate and store a new work interval for the caller.
    ///
    /// `days` is computed here, once, as the inclusive range count:
    /// begin == end yields 1. No duplicate or overlap detection is done.
    pub fn apply(
        pool: &mut DbPool,
        ctx: &RequestContext,
        begin: NaiveDate,
        end: NaiveDate,
        location: Option<String>,
        notes: Option<String>,
        status: bool,
    ) -> AppResult<WorkInterval> {
        let iv = WorkInterval::new(&ctx.caller, begin, end, location, notes, status);

        let id = insert_interval(&pool.conn, &iv)?;

        audit_log(
            &pool.conn,
            "submit",
            &id.to_string(),
            &format!(
                "Logged {} day(s) {} → {} for {}",
                iv.days, iv.begin, iv.end, ctx.caller
            ),
        )?;

        // Return the stored record including the assigned id.
        get_interval(&pool.conn, id)
    }
}
