use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calendar::CalendarLogic;
use crate::core::context::RequestContext;
use crate::db::pool::DbPool;
use crate::db::queries::list_for_owner;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::Datelike;

/// Render a month grid of the caller's intervals.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (year, m) = match month {
            Some(s) => {
                date::parse_month(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?
            }
            None => {
                let today = date::today();
                (today.year(), today.month())
            }
        };

        let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        let intervals = list_for_owner(&mut pool, &ctx.caller)?;

        print!("{}", CalendarLogic::render_month(&intervals, year, m));
    }

    Ok(())
}
