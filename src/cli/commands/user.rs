use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::identity::{LocalDirectory, UserProfile};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

/// Handle the `user` subcommand: manage the local user directory.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        add,
        name,
        avatar,
        list,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let directory = LocalDirectory::new(&pool.conn);

        if let Some(id) = add {
            let username = name.clone().ok_or_else(|| {
                AppError::Validation("Missing --name: a display name is required.".into())
            })?;

            directory.upsert(&UserProfile {
                id: id.clone(),
                username,
                avatar_url: avatar.clone().unwrap_or_default(),
            })?;

            success(format!("User '{}' registered.", id));
        }

        if *list {
            let users = directory.all()?;

            if users.is_empty() {
                println!("No users registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 16),
                Column::new("NAME", 20),
                Column::new("AVATAR", 40),
            ]);

            for u in users {
                table.add_row(vec![u.id, u.username, u.avatar_url]);
            }

            print!("{}", table.render());
        }
    }

    Ok(())
}
