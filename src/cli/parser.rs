use crate::models::Priority;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for punchlist
#[derive(Parser)]
#[command(
    name = "punchlist",
    version = env!("CARGO_PKG_VERSION"),
    about = "A punch-list tracker: record inspection items, cycle their status and export a PDF report",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new punch-list item
    Add {
        #[arg(long, short = 'd', help = "What has to be fixed (required)")]
        description: String,

        #[arg(long, short = 'r', default_value = "", help = "Room or area")]
        room: String,

        #[arg(long, short = 's', default_value = "", help = "Service or trade (HVAC, Electrical, ...)")]
        service: String,

        /// Priority: 1=Critical, 2=Serious, 3=Minor, 4=Design Issue
        #[arg(long, short = 'p', value_enum, default_value = "1")]
        priority: Priority,

        #[arg(long = "assign-to", short = 'a', default_value = "", help = "Person or company in charge")]
        assign_to: String,

        #[arg(long, default_value = "", help = "Due date (free text, e.g. 2025-06-30)")]
        date: String,

        #[arg(long, short = 'c', default_value = "", help = "Additional comments")]
        comments: String,

        /// Tap the status toggle (repeat: -t → Fix, -tt → Closed)
        #[arg(short = 't', long = "toggle", action = ArgAction::Count)]
        toggle: u8,

        /// Photo to attach (repeatable, at most 4 are kept)
        #[arg(long = "image", short = 'i', value_name = "FILE")]
        images: Vec<String>,
    },

    /// List items, optionally filtered (filters combine with AND)
    List {
        #[arg(long, help = "Only items for this service")]
        service: Option<String>,

        #[arg(long, value_enum, help = "Only items with this priority (1-4)")]
        priority: Option<Priority>,

        #[arg(long = "assign", help = "Only items assigned to this person")]
        assign_to: Option<String>,
    },

    /// Show the available filter values
    Filters,

    /// Advance the status of an item (Pending → Fix → Closed → Pending)
    Status {
        /// Item id (see `list`)
        id: i64,
    },

    /// Edit an item
    Edit {
        /// Item id (see `list`)
        id: i64,
    },

    /// Export every item to a PDF report, one page per item
    Export {
        #[arg(long, value_name = "DIR", help = "Output directory (default: export_dir from config)")]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing report without confirmation")]
        force: bool,
    },
}
