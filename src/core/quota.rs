use crate::core::context::RequestContext;
use crate::db::pool::DbPool;
use crate::db::queries::sum_valid_days;
use crate::errors::AppResult;

/// Derived aggregate: never persisted, recomputed on demand.
#[derive(Debug, Clone, Copy)]
pub struct QuotaProgress {
    pub days_worked: i64,
    pub days_remaining: i64,
}

/// High-level business logic for the `progress` command.
pub struct QuotaLogic;

impl QuotaLogic {
    /// Sum the caller's valid days and compute the distance to the quota.
    ///
    /// Only status = true intervals contribute. The remainder is not
    /// clamped: exceeding the quota yields a negative value.
    pub fn progress(
        pool: &mut DbPool,
        ctx: &RequestContext,
        quota_days: i64,
    ) -> AppResult<QuotaProgress> {
        let days_worked = sum_valid_days(&pool.conn, &ctx.caller)?;

        Ok(QuotaProgress {
            days_worked,
            days_remaining: quota_days - days_worked,
        })
    }
}
