use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gearcheck",
    version,
    about = "Track safety-equipment compliance from NFC badge scans",
    long_about = None
)]
pub struct Cli {
    /// Use this database file instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub db: Option<String>,

    /// Suppress decorative output (stable output for scripting)
    #[arg(long, global = true, hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config directory, config file and database
    Init,

    /// Inspect or maintain the configuration file
    Config {
        /// Print the active configuration
        #[arg(long = "print")]
        print_config: bool,

        /// Report configuration keys missing from the file
        #[arg(long)]
        check: bool,

        /// Fill missing configuration keys with defaults
        #[arg(long)]
        migrate: bool,

        /// Open the configuration file in an editor
        #[arg(long = "edit")]
        edit_config: bool,

        /// Editor to use with --edit (defaults to $EDITOR, then vi)
        #[arg(long, value_name = "PROGRAM")]
        editor: Option<String>,
    },

    /// Inspect or maintain the database
    Db {
        /// Apply pending schema migrations
        #[arg(long)]
        migrate: bool,

        /// Run an integrity check
        #[arg(long)]
        check: bool,

        /// Reclaim unused space
        #[arg(long)]
        vacuum: bool,

        /// Print size and row-count summary
        #[arg(long)]
        info: bool,
    },

    /// Show the internal activity log
    Log {
        /// Print all log entries
        #[arg(long)]
        print: bool,
    },

    /// Enroll a worker and their assigned equipment tags
    Enroll {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long = "hat-tag", value_name = "TAG_ID")]
        hat_tag: Option<String>,

        #[arg(long = "shirt-tag", value_name = "TAG_ID")]
        shirt_tag: Option<String>,

        #[arg(long = "boot-tag", value_name = "TAG_ID")]
        boot_tag: Option<String>,

        #[arg(long = "glove-tag", value_name = "TAG_ID")]
        glove_tag: Option<String>,
    },

    /// List enrolled workers
    Workers,

    /// Record a scan event for a worker
    Record {
        /// Worker the badge reported
        worker_id: i64,

        /// Physical tag ID that was read
        #[arg(long, value_name = "TAG_ID")]
        tag: Option<String>,

        /// Equipment label the device asserted (Hat, Shirt, Boot, Glove)
        #[arg(long)]
        label: Option<String>,

        /// Scan time as "YYYY-MM-DD HH:MM[:SS]" local to the configured
        /// offset (defaults to now)
        #[arg(long, value_name = "STAMP")]
        at: Option<String>,
    },

    /// List scan events for a day
    Scans {
        /// Day to list, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show per-worker gear status for a day
    Status {
        /// Day to evaluate, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Matching policy: tag or label (defaults to the configured one)
        #[arg(long)]
        policy: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides PORT and the configured port)
        #[arg(long)]
        port: Option<u16>,
    },
}
