use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skillboard")]
#[command(about = "Skills-tracking directory over a TOML roster")]
pub struct CliConfig {
    /// Roster file seeding the catalog and user store
    #[arg(long, default_value = "roster.toml")]
    pub roster: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every user with skill counts and areas
    Users {
        /// Also write the table to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show one user's skills grouped by area
    Show { username: String },

    /// Find users holding the requested skills
    Search {
        /// Free-text skill query; unrecognized names are ignored
        #[arg(required = true)]
        query: Vec<String>,

        /// Require every requested skill instead of at least one
        #[arg(long)]
        match_all: bool,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a user for the remainder of the process
    AddUser {
        username: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
    },
}
