use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::context::RequestContext;
use crate::core::quota::QuotaLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};

/// Show the caller's quota progress panel.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;
    let mut pool = DbPool::new(&cfg.database)?;

    let progress = QuotaLogic::progress(&mut pool, &ctx, cfg.quota_days)?;

    println!();
    println!(
        "{}Days worked:{}    {}{}{}",
        CYAN, RESET, GREEN, progress.days_worked, RESET
    );
    println!(
        "{}Days remaining:{} {}{}{}",
        CYAN, RESET, YELLOW, progress.days_remaining, RESET
    );
    println!("{}Quota:{}          {}", CYAN, RESET, cfg.quota_days);
    println!();

    Ok(())
}
