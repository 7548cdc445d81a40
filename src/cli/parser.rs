use clap::{Parser, Subcommand};

/// Command-line interface definition for parkwatch
/// CLI application to track parking occupancy with SQLite
#[derive(Parser)]
#[command(
    name = "parkwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track parking-area occupancy per vehicle type using SQLite",
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

    /// Register a new (non-admin) account
    Register {
        /// Account email
        email: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in and start a session
    Login {
        /// Account email
        email: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the account of the current session
    Whoami,

    /// Create an administrator account
    CreateAdmin {
        /// Admin email
        email: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// List all parking areas with their availability
    List,

    /// Show the status of one parking area
    Show {
        /// Parking area id
        area_id: i64,

        /// Print the JSON projection instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search parking areas by name or location (JSON output)
    Search {
        /// Text to look for (case-insensitive); omit to list everything
        q: Option<String>,
    },

    /// Administrative summary of all areas (admin only)
    Dashboard {
        #[arg(long)]
        json: bool,
    },

    /// Manage parking areas (admin only)
    Area {
        #[command(subcommand)]
        action: AreaAction,
    },

    /// Manage per-vehicle-type status records (admin only)
    Status {
        #[command(subcommand)]
        action: StatusAction,
    },

    /// Insert sample parking areas
    Seed,

    /// Delete ALL areas, status records and accounts
    ResetDb {
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AreaAction {
    /// Add a parking area
    Add {
        /// Unique area name
        name: String,
        /// Free-text location
        location: String,
    },

    /// Change name and/or location of an area
    Edit {
        /// Parking area id
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },

    /// Delete an area and all its status records
    Del {
        /// Parking area id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum StatusAction {
    /// Add a vehicle-type status to an area
    Add {
        /// Parking area id
        area_id: i64,
        /// Vehicle type (car, bike, bus, ...)
        vehicle_type: String,
        #[arg(long, allow_negative_numbers = true)]
        capacity: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        occupied: Option<i64>,
    },

    /// Edit a status record
    Edit {
        /// Status record id
        status_id: i64,
        #[arg(long = "type")]
        vehicle_type: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        capacity: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        occupied: Option<i64>,
    },

    /// Delete a status record
    Del {
        /// Status record id
        status_id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Quickly set the occupied count of a status record (JSON output)
    Set {
        /// Status record id
        status_id: i64,
        /// New occupied count
        #[arg(allow_negative_numbers = true)]
        occupied: Option<i64>,
    },
}
