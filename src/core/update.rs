use crate::core::context::RequestContext;
use crate::db::audit::audit_log;
use crate::db::pool::DbPool;
use crate::db::queries::{get_interval, set_interval_status, update_interval};
use crate::errors::{AppError, AppResult};
use crate::models::interval::{WorkInterval, count_days};
use chrono::NaiveDate;

/// Partial edit of an interval: any subset of the mutable fields.
#[derive(Debug, Default)]
pub struct IntervalPatch {
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: Option<bool>,
}

impl IntervalPatch {
    pub fn is_empty(&self) -> bool {
        self.begin.is_none()
            && self.end.is_none()
            && self.location.is_none()
            && self.notes.is_none()
            && self.status.is_none()
    }
}

/// High-level business logic for the `edit` and `mark` commands.
pub struct UpdateLogic;

impl UpdateLogic {
    /// Apply a partial edit to an interval owned by the caller.
    ///
    /// `days` is recomputed whenever begin or end changes, so the stored
    /// count never goes stale relative to the range.
    pub fn apply(
        pool: &mut DbPool,
        ctx: &RequestContext,
        id: i64,
        patch: IntervalPatch,
    ) -> AppResult<WorkInterval> {
        if patch.is_empty() {
            return Err(AppError::Validation(
                "Nothing to do: specify at least one of --begin, --end, --location, --notes, --valid/--invalid.".into(),
            ));
        }

        let mut iv = owned_interval(pool, ctx, id)?;

        let range_changed = patch.begin.is_some() || patch.end.is_some();

        if let Some(b) = patch.begin {
            iv.begin = b;
        }
        if let Some(e) = patch.end {
            iv.end = e;
        }
        if let Some(loc) = patch.location {
            iv.location = loc;
        }
        if let Some(n) = patch.notes {
            iv.notes = Some(n);
        }
        if let Some(s) = patch.status {
            iv.status = s;
        }

        if range_changed {
            iv.days = count_days(iv.begin, iv.end);
        }

        update_interval(&pool.conn, &iv)?;

        audit_log(
            &pool.conn,
            "update",
            &id.to_string(),
            &format!("Updated interval {} for {}", id, ctx.caller),
        )?;

        get_interval(&pool.conn, id)
    }

    /// Narrow update of the "counts toward quota" flag only.
    pub fn set_status(
        pool: &mut DbPool,
        ctx: &RequestContext,
        id: i64,
        valid: bool,
    ) -> AppResult<WorkInterval> {
        // Ownership is re-checked here as well; the flag is not exempt.
        owned_interval(pool, ctx, id)?;

        set_interval_status(&pool.conn, id, valid)?;

        audit_log(
            &pool.conn,
            "mark",
            &id.to_string(),
            &format!(
                "Marked interval {} as {}",
                id,
                if valid { "valid" } else { "invalid" }
            ),
        )?;

        get_interval(&pool.conn, id)
    }
}

/// Load an interval and verify the caller owns it.
pub fn owned_interval(pool: &DbPool, ctx: &RequestContext, id: i64) -> AppResult<WorkInterval> {
    let iv = get_interval(&pool.conn, id)?;

    if iv.owner_id != ctx.caller {
        return Err(AppError::Forbidden(id));
    }

    Ok(iv)
}
