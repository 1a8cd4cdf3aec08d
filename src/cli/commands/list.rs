use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::context::RequestContext;
use crate::core::list::{AnnotatedInterval, ListLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let rows = if *all {
            if !cfg.public_feed {
                return Err(AppError::Validation(
                    "The shared feed is disabled: set public_feed: true in the config file."
                        .into(),
                ));
            }
            ListLogic::feed(&mut pool)?
        } else {
            let ctx = RequestContext::resolve(cli.user.as_ref(), cfg)?;
            ListLogic::for_owner(&mut pool, &ctx)?
        };

        if rows.is_empty() {
            println!("No intervals logged.");
            return Ok(());
        }

        let (valid, other): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|r| r.interval.status);

        if !valid.is_empty() {
            println!("\nWork that counts:");
            print!("{}", render_table(&valid));
        }

        if !other.is_empty() {
            println!("\nOther work:");
            print!("{}", render_table(&other));
        }
    }

    Ok(())
}

fn render_table(rows: &[AnnotatedInterval]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("USER", 14),
        Column::new("FROM", 10),
        Column::new("TO", 10),
        Column::new("DAYS", 5),
        Column::new("LOCATION", 14),
        Column::new("NOTES", 30),
    ]);

    for r in rows {
        table.add_row(vec![
            r.interval.id.to_string(),
            r.owner.username.clone(),
            r.interval.begin_str(),
            r.interval.end_str(),
            r.interval.days.to_string(),
            r.interval.location.clone(),
            r.interval.notes.clone().unwrap_or_default(),
        ]);
    }

    table.render()
}
