use crate::core::context::RequestContext;
use crate::db::pool::DbPool;
use crate::db::queries::{list_all, list_for_owner};
use crate::errors::AppResult;
use crate::identity::{IdentityProvider, LocalDirectory, UserProfile};
use crate::models::interval::WorkInterval;

/// An interval paired with its owner's display profile, ready for rendering.
#[derive(Debug, Clone)]
pub struct AnnotatedInterval {
    pub interval: WorkInterval,
    pub owner: UserProfile,
}

/// High-level business logic for the `list` command.
pub struct ListLogic;

impl ListLogic {
    /// Caller-scoped list, creation order, capped at 200 records.
    pub fn for_owner(pool: &mut DbPool, ctx: &RequestContext) -> AppResult<Vec<AnnotatedInterval>> {
        let intervals = list_for_owner(pool, &ctx.caller)?;
        annotate(pool, intervals)
    }

    /// Unfiltered cross-owner feed (gated by the public_feed config flag
    /// at the CLI boundary).
    pub fn feed(pool: &mut DbPool) -> AppResult<Vec<AnnotatedInterval>> {
        let intervals = list_all(pool)?;
        annotate(pool, intervals)
    }
}

/// Attach owner profiles to a batch of intervals.
///
/// A record whose owner has no registered profile fails the whole read
/// with ProfileLookup, surfaced to the caller as an internal error.
fn annotate(pool: &DbPool, intervals: Vec<WorkInterval>) -> AppResult<Vec<AnnotatedInterval>> {
    let directory = LocalDirectory::new(&pool.conn);

    let mut out = Vec::with_capacity(intervals.len());
    for iv in intervals {
        let owner = directory.profile(&iv.owner_id)?;
        out.push(AnnotatedInterval {
            interval: iv,
            owner,
        });
    }
    Ok(out)
}
