use crate::cli::parser::{Cli, Commands};
use crate::core::context::RequestContext;
use crate::core::submit::SubmitLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Log a new worked interval.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        begin,
        end,
        location,
        notes,
        valid,
    } = cmd
    {
        //
        // 1. Parse dates (mandatory)
        //
        let b = date::parse_date(begin).ok_or_else(|| AppError::InvalidDate(begin.to_string()))?;
        let e = date::parse_date(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;

        //
        // 2. Resolve caller identity
        //
        let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;

        //
        // 3. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;

        // Fall back to the configured location sentinel when none is given
        let location = location
            .clone()
            .or_else(|| Some(cfg.default_location.clone()));

        let iv = SubmitLogic::apply(&mut pool, &ctx, b, e, location, notes.clone(), *valid)?;

        success(format!(
            "Logged interval #{}: {} → {} ({} day{}, location {}).",
            iv.id,
            iv.begin,
            iv.end,
            iv.days,
            if iv.days == 1 { "" } else { "s" },
            iv.location
        ));
    }

    Ok(())
}
