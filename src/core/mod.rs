pub mod directory;
pub mod grouping;
pub mod matching;
pub mod report;
pub mod search;

pub use crate::domain::model::{Area, AreaId, NewUser, Skill, SkillId, User, UserId};
pub use crate::domain::ports::{SkillCatalog, UserStore};
pub use crate::utils::error::Result;

pub use directory::{Directory, SearchOutcome, UserProfile};
pub use grouping::group_by_area;
pub use matching::{match_users, MatchPolicy};
pub use report::{write_csv, UserRow};
pub use search::parse_search_request;
