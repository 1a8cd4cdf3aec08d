use crate::cli::parser::{Cli, Commands};
use crate::core::context::RequestContext;
use crate::core::update::UpdateLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Toggle the "counts toward quota" flag of an interval.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Mark { id, valid, invalid } = cmd {
        let new_status = if *valid {
            true
        } else if *invalid {
            false
        } else {
            return Err(AppError::Validation(
                "Specify either --valid or --invalid.".into(),
            ));
        };

        let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        let iv = UpdateLogic::set_status(&mut pool, &ctx, *id, new_status)?;

        success(format!(
            "Interval #{} marked as {}.",
            iv.id,
            if iv.status { "valid" } else { "invalid" }
        ));
    }

    Ok(())
}
