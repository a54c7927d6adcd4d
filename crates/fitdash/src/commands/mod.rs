//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

use fitdash_core::resource;

mod list;

/// fitdash - terminal tables for the team fitness API
#[derive(Parser, Debug)]
#[command(
    name = "fitdash",
    version,
    about = "Terminal tables for the team fitness API",
    long_about = "Fetches one resource collection per invocation and prints it as an aligned table or as JSON"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List teams
    Teams(list::ListArgs),

    /// List users
    Users(list::ListArgs),

    /// List activities
    Activities(list::ListArgs),

    /// Show the leaderboard
    Leaderboard(list::ListArgs),

    /// List workouts
    Workouts(list::ListArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Teams(args) => list::execute(&resource::TEAMS, args),
            Commands::Users(args) => list::execute(&resource::USERS, args),
            Commands::Activities(args) => list::execute(&resource::ACTIVITIES, args),
            Commands::Leaderboard(args) => list::execute(&resource::LEADERBOARD, args),
            Commands::Workouts(args) => list::execute(&resource::WORKOUTS, args),
        }
    }
}
