use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for workquota
/// CLI application to log worked day ranges toward a fixed quota with SQLite
#[derive(Parser)]
#[command(
    name = "workquota",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work logging CLI: track day ranges worked toward a fixed quota using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured default
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the local user directory
    User {
        #[arg(long = "add", value_name = "ID", help = "Register or update a user")]
        add: Option<String>,

        #[arg(long = "name", help = "Display name (used with --add)")]
        name: Option<String>,

        #[arg(long = "avatar", help = "Avatar URL (used with --add)")]
        avatar: Option<String>,

        #[arg(long = "list", help = "List registered users")]
        list: bool,
    },

    /// Log a new worked interval (inclusive date range)
    Add {
        /// First worked day (YYYY-MM-DD)
        begin: String,

        /// Last worked day (YYYY-MM-DD), inclusive
        end: String,

        #[arg(long = "location", help = "Where the work was done")]
        location: Option<String>,

        #[arg(long = "notes", help = "Free-text notes")]
        notes: Option<String>,

        #[arg(long = "valid", help = "Count this interval toward the quota")]
        valid: bool,
    },

    /// Edit an existing interval (any subset of fields)
    Edit {
        /// Interval id
        id: i64,

        #[arg(long = "begin", help = "New first day (YYYY-MM-DD)")]
        begin: Option<String>,

        #[arg(long = "end", help = "New last day (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "valid", conflicts_with = "invalid")]
        valid: bool,

        #[arg(long = "invalid", conflicts_with = "valid")]
        invalid: bool,
    },

    /// Toggle whether an interval counts toward the quota
    Mark {
        /// Interval id
        id: i64,

        #[arg(long = "valid", conflicts_with = "invalid")]
        valid: bool,

        #[arg(long = "invalid", conflicts_with = "valid")]
        invalid: bool,
    },

    /// Delete an interval by id
    Del {
        /// Interval id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List logged intervals
    List {
        #[arg(
            long = "all",
            help = "Show every user's intervals (requires public_feed in config)"
        )]
        all: bool,
    },

    /// Show days worked and days remaining toward the quota
    Progress,

    /// Render a month calendar of logged intervals
    Calendar {
        /// Month to render (YYYY-MM, default: current month)
        month: Option<String>,
    },

    /// Export logged intervals
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
