//! Command line definition

use clap::{Args, Parser, Subcommand};
use mesa_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Terminal client for the restaurant reservations API
#[derive(Debug, Parser)]
#[command(name = "mesa", version)]
#[command(about = "Browse restaurants and manage reservations", long_about = None)]
pub struct Cli {
    /// API base URL, including the /api prefix
    #[arg(long, env = "MESA_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "MESA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, env = "MESA_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Restaurant catalogue
    #[command(subcommand)]
    Restaurants(RestaurantCommand),

    /// Reservations
    #[command(subcommand)]
    Reservations(ReservationCommand),
}

#[derive(Debug, Subcommand)]
pub enum RestaurantCommand {
    /// List restaurants, filtered locally
    List {
        /// Text contained in the name or description
        #[arg(short, long, default_value = "")]
        query: String,

        /// First letter of the name
        #[arg(short, long, default_value = "")]
        letter: String,

        /// Text contained in the city
        #[arg(short, long, default_value = "")]
        city: String,
    },

    /// Show one restaurant
    Show { id: i64 },

    /// Filter on the server by letter and city
    Search {
        #[arg(short, long, default_value = "")]
        letter: String,

        #[arg(short, long, default_value = "")]
        city: String,
    },

    /// Create a restaurant
    Create(RestaurantFields),

    /// Replace every field of a restaurant
    Update {
        id: i64,

        #[command(flatten)]
        fields: RestaurantFields,
    },

    /// Delete a restaurant
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct RestaurantFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub photo_url: String,
}

#[derive(Debug, Subcommand)]
pub enum ReservationCommand {
    /// Pending reservations; expired ones are purged first
    List,

    /// Every reservation, any state
    All,

    /// Reservations of one restaurant
    ForRestaurant { id: i64 },

    /// Book a table
    Create {
        /// Restaurant id
        #[arg(long)]
        restaurant: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,

        /// HH:MM, defaults to 12:00
        #[arg(long)]
        time: Option<String>,

        /// 1 to 10, defaults to 1
        #[arg(long)]
        party_size: Option<String>,
    },

    /// Cancel a pending reservation
    Cancel { id: i64 },

    /// Mark a reservation as completed
    Complete { id: i64 },

    /// Delete every completed reservation
    PurgeCompleted,

    /// Mark past reservations as completed
    MarkExpired,
}
