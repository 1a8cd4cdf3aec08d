use crate::core::context::RequestContext;
use crate::core::update::owned_interval;
use crate::db::audit::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries::delete_interval;
use crate::errors::AppResult;
use crate::models::interval::WorkInterval;

/// High-level business logic for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Permanently remove an interval owned by the caller.
    ///
    /// There is no soft delete and no cascading effect; nothing else
    /// references an interval.
    pub fn apply(pool: &mut DbPool, ctx: &RequestContext, id: i64) -> AppResult<WorkInterval> {
        let iv = owned_interval(pool, ctx, id)?;

        delete_interval(&pool.conn, id)?;

        audit_log(
            &pool.conn,
            "delete",
            &id.to_string(),
            &format!(
                "Deleted interval {} {}",
                id,
                iv.notes.as_deref().unwrap_or("")
            ),
        )?;

        Ok(iv)
    }
}
