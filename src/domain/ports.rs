use crate::domain::model::{Area, AreaId, NewUser, Skill, SkillId, User};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only lookup of skills and areas. Lookups by unique key fail with
/// a NotFound error when the record is absent; `resolve_skill_name` is
/// the one tolerant entry point, used when resolving free-text search
/// tokens.
#[async_trait]
pub trait SkillCatalog: Send + Sync {
    async fn area_by_id(&self, id: AreaId) -> Result<Area>;
    async fn area_by_title(&self, title: &str) -> Result<Area>;
    async fn skill_by_id(&self, id: SkillId) -> Result<Skill>;
    async fn skill_by_name(&self, name: &str) -> Result<Skill>;

    /// Case-insensitive lookup that signals a miss with `None` instead of
    /// an error.
    async fn resolve_skill_name(&self, name: &str) -> Result<Option<Skill>>;

    async fn all_areas(&self) -> Result<Vec<Area>>;
    async fn all_skills(&self) -> Result<Vec<Skill>>;
}

/// Read/write access to user records. No ordering guarantee beyond
/// reflecting the most recently committed state visible to the reader.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn user_by_username(&self, username: &str) -> Result<User>;
    async fn all_users(&self) -> Result<Vec<User>>;

    /// Persists a new user. Rejects duplicate usernames and skill ids
    /// unknown to the catalog.
    async fn save_user(&self, user: NewUser) -> Result<User>;
}
