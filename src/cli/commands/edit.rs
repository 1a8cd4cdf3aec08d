use crate::cli::parser::{Cli, Commands};
use crate::core::context::RequestContext;
use crate::core::update::{IntervalPatch, UpdateLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Apply a partial edit to an existing interval.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        begin,
        end,
        location,
        notes,
        valid,
        invalid,
    } = cmd
    {
        let begin_parsed = match begin {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let end_parsed = match end {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let status = if *valid {
            Some(true)
        } else if *invalid {
            Some(false)
        } else {
            None
        };

        let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        let patch = IntervalPatch {
            begin: begin_parsed,
            end: end_parsed,
            location: location.clone(),
            notes: notes.clone(),
            status,
        };

        let iv = UpdateLogic::apply(&mut pool, &ctx, *id, patch)?;

        success(format!(
            "Updated interval #{}: {} → {} ({} days).",
            iv.id, iv.begin, iv.end, iv.days
        ));
    }

    Ok(())
}
