#[cfg(feature = "cli")]
pub mod cli;
pub mod roster;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use roster::Roster;
