//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `hopshare`.
#[derive(Debug, Parser)]
#[command(name = "hopshare", version, about = "Carpool with the HopShare service")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify credentials and optionally remember them.
    Login {
        /// Account email; prompted for when omitted.
        #[arg(long)]
        email: Option<String>,
        /// Account password; prompted for when omitted.
        #[arg(long)]
        password: Option<String>,
        /// Store the credentials for later commands.
        #[arg(long)]
        remember: bool,
    },
    /// Forget stored credentials.
    Logout,
    /// Browse user accounts.
    Users {
        /// The action to perform.
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Manage offered routes.
    Routes {
        /// The action to perform.
        #[command(subcommand)]
        action: RoutesAction,
    },
    /// Manage ride requests.
    Requests {
        /// The action to perform.
        #[command(subcommand)]
        action: RequestsAction,
    },
    /// Manage your cars.
    Cars {
        /// The action to perform.
        #[command(subcommand)]
        action: CarsAction,
    },
    /// Manage reviews.
    Reviews {
        /// The action to perform.
        #[command(subcommand)]
        action: ReviewsAction,
    },
    /// Browse and file reports.
    Reports {
        /// The action to perform.
        #[command(subcommand)]
        action: ReportsAction,
    },
}

/// Actions on user accounts.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List users, optionally filtered by a name substring.
    List {
        /// Case-insensitive substring filter on display names.
        #[arg(long)]
        name: Option<String>,
    },
    /// Show a single user.
    Show {
        /// User id.
        id: i64,
    },
}

/// Route fields shared by `add` and `update`.
#[derive(Debug, Args)]
pub struct RouteInput {
    /// Departure location.
    #[arg(long)]
    pub start: String,
    /// Destination.
    #[arg(long)]
    pub end: String,
    /// Intermediate stops.
    #[arg(long)]
    pub stops: String,
    /// Departure time: unix seconds or `YYYY-MM-DD HH:MM`.
    #[arg(long)]
    pub date: String,
    /// Seats already taken.
    #[arg(long, default_value_t = 0)]
    pub occupied_seats: i64,
    /// Free-text comment.
    #[arg(long)]
    pub comment: Option<String>,
}

/// Actions on offered routes.
#[derive(Debug, Subcommand)]
pub enum RoutesAction {
    /// List all routes.
    List,
    /// Show a single route.
    Show {
        /// Route id.
        id: i64,
    },
    /// Offer a new route.
    Add {
        /// Route fields.
        #[command(flatten)]
        input: RouteInput,
    },
    /// Replace an existing route.
    Update {
        /// Route id.
        id: i64,
        /// Route fields.
        #[command(flatten)]
        input: RouteInput,
    },
    /// Delete a route.
    Remove {
        /// Route id.
        id: i64,
    },
}

/// Ride request fields shared by `add` and `update`.
#[derive(Debug, Args)]
pub struct RequestInput {
    /// Departure location.
    #[arg(long)]
    pub start: String,
    /// Destination.
    #[arg(long)]
    pub end: String,
    /// Requested time: unix seconds or `YYYY-MM-DD HH:MM`.
    #[arg(long)]
    pub date: String,
    /// Free-text description.
    #[arg(long)]
    pub description: Option<String>,
}

/// Actions on ride requests.
#[derive(Debug, Subcommand)]
pub enum RequestsAction {
    /// List all ride requests.
    List,
    /// Show a single ride request.
    Show {
        /// Request id.
        id: i64,
    },
    /// Post a new ride request.
    Add {
        /// Request fields.
        #[command(flatten)]
        input: RequestInput,
    },
    /// Replace an existing ride request.
    Update {
        /// Request id.
        id: i64,
        /// Request fields.
        #[command(flatten)]
        input: RequestInput,
    },
    /// Delete a ride request.
    Remove {
        /// Request id.
        id: i64,
    },
}

/// Car fields shared by `add` and `update`.
#[derive(Debug, Args)]
pub struct CarInput {
    /// Total passenger seats.
    #[arg(long)]
    pub seats: i64,
    /// Date of last service.
    #[arg(long)]
    pub service_date: String,
    /// Make and model.
    #[arg(long)]
    pub make_model: String,
    /// License plate.
    #[arg(long)]
    pub license_plate: String,
}

/// Actions on the logged-in user's cars.
#[derive(Debug, Subcommand)]
pub enum CarsAction {
    /// List your cars.
    List,
    /// Register a car.
    Add {
        /// Car fields.
        #[command(flatten)]
        input: CarInput,
    },
    /// Replace a registered car.
    Update {
        /// Car id.
        id: i64,
        /// Car fields.
        #[command(flatten)]
        input: CarInput,
    },
    /// Delete a car.
    Remove {
        /// Car id.
        id: i64,
    },
}

/// Actions on reviews.
#[derive(Debug, Subcommand)]
pub enum ReviewsAction {
    /// List reviews you wrote, or reviews about you with `--about`.
    List {
        /// Show reviews written about you instead.
        #[arg(long)]
        about: bool,
    },
    /// Write a review about another user, addressed by username.
    Add {
        /// Star rating, 0 through 5.
        #[arg(long)]
        rating: i64,
        /// Review the user as a passenger (default is as a driver).
        #[arg(long)]
        passenger: bool,
        /// Free-text review body.
        #[arg(long, default_value = "")]
        description: String,
        /// Username of the reviewed user (exact, case-insensitive).
        #[arg(long)]
        user: String,
    },
    /// Update a review you wrote; the reviewed user stays unchanged.
    Update {
        /// Review id.
        id: i64,
        /// Star rating, 0 through 5.
        #[arg(long)]
        rating: i64,
        /// Review the user as a passenger (default is as a driver).
        #[arg(long)]
        passenger: bool,
        /// Free-text review body.
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a review you wrote.
    Remove {
        /// Review id.
        id: i64,
    },
}

/// Actions on reports.
#[derive(Debug, Subcommand)]
pub enum ReportsAction {
    /// List all reports.
    List,
    /// Show a single report.
    Show {
        /// Report id.
        id: i64,
    },
    /// File a report against a user.
    Add {
        /// What happened.
        #[arg(long)]
        description: String,
        /// Id of the reported user.
        #[arg(long)]
        reported_user: i64,
    },
}
