use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::context::RequestContext;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!("Delete interval #{}? This action is irreversible.", id);

            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        let iv = DeleteLogic::apply(&mut pool, &ctx, *id)?;

        success(format!(
            "Interval #{} ({} → {}) has been deleted.",
            iv.id, iv.begin, iv.end
        ));
    }

    Ok(())
}
