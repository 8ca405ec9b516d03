pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::adapters::{CachedStore, MemoryStore};
pub use crate::config::Roster;
pub use crate::core::{Directory, MatchPolicy, SearchOutcome, UserProfile};
pub use crate::domain::model::{Area, AreaId, NewUser, Skill, SkillId, User, UserId};
pub use crate::domain::ports::{SkillCatalog, UserStore};
pub use crate::utils::error::{Result, SkillboardError};
