use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::context::RequestContext;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        ExportLogic::export(&mut pool, &ctx, format, file, *force)?;
    }
    Ok(())
}
