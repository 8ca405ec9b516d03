use crate::domain::model::{Area, AreaId, NewUser, Skill, SkillId, User};
use crate::domain::ports::{SkillCatalog, UserStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Read-through cache over another store, mirroring the original
/// system's three named caches ("user", "skill", "area"). Entries live
/// for the lifetime of the process; there is no eviction. Only positive
/// lookups are cached, so users saved later are still found through the
/// cache.
pub struct CachedStore<S> {
    inner: S,
    users: RwLock<HashMap<String, User>>,
    skills: RwLock<HashMap<String, Skill>>,
    areas: RwLock<HashMap<String, Area>>,
}

impl<S> CachedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            users: RwLock::new(HashMap::new()),
            skills: RwLock::new(HashMap::new()),
            areas: RwLock::new(HashMap::new()),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: SkillCatalog> SkillCatalog for CachedStore<S> {
    async fn area_by_id(&self, id: AreaId) -> Result<Area> {
        self.inner.area_by_id(id).await
    }

    async fn area_by_title(&self, title: &str) -> Result<Area> {
        if let Some(area) = self.areas.read().await.get(title) {
            tracing::debug!(cache = "area", key = title, "cache hit");
            return Ok(area.clone());
        }
        tracing::debug!(cache = "area", key = title, "cache miss");
        let area = self.inner.area_by_title(title).await?;
        self.areas
            .write()
            .await
            .insert(title.to_string(), area.clone());
        Ok(area)
    }

    async fn skill_by_id(&self, id: SkillId) -> Result<Skill> {
        self.inner.skill_by_id(id).await
    }

    async fn skill_by_name(&self, name: &str) -> Result<Skill> {
        // Exact-name lookups share the cache with the tolerant resolver,
        // keyed by lowercased name.
        match self.resolve_skill_name(name).await? {
            Some(skill) if skill.name == name => Ok(skill),
            _ => self.inner.skill_by_name(name).await,
        }
    }

    async fn resolve_skill_name(&self, name: &str) -> Result<Option<Skill>> {
        let key = name.to_lowercase();
        if let Some(skill) = self.skills.read().await.get(&key) {
            tracing::debug!(cache = "skill", key = %key, "cache hit");
            return Ok(Some(skill.clone()));
        }
        tracing::debug!(cache = "skill", key = %key, "cache miss");
        let resolved = self.inner.resolve_skill_name(name).await?;
        if let Some(skill) = &resolved {
            self.skills.write().await.insert(key, skill.clone());
        }
        Ok(resolved)
    }

    async fn all_areas(&self) -> Result<Vec<Area>> {
        self.inner.all_areas().await
    }

    async fn all_skills(&self) -> Result<Vec<Skill>> {
        self.inner.all_skills().await
    }
}

#[async_trait]
impl<S: UserStore> UserStore for CachedStore<S> {
    async fn user_by_username(&self, username: &str) -> Result<User> {
        if let Some(user) = self.users.read().await.get(username) {
            tracing::debug!(cache = "user", key = username, "cache hit");
            return Ok(user.clone());
        }
        tracing::debug!(cache = "user", key = username, "cache miss");
        let user = self.inner.user_by_username(username).await?;
        self.users
            .write()
            .await
            .insert(username.to_string(), user.clone());
        Ok(user)
    }

    async fn all_users(&self) -> Result<Vec<User>> {
        self.inner.all_users().await
    }

    async fn save_user(&self, user: NewUser) -> Result<User> {
        // Writes pass straight through; a cached entry for the same
        // username cannot exist because the inner store would have
        // rejected the earlier save as a duplicate.
        self.inner.save_user(user).await
    }
}
