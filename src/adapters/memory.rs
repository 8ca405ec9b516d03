use crate::config::roster::Roster;
use crate::domain::model::{Area, AreaId, NewUser, Skill, SkillId, User, UserId};
use crate::domain::ports::{SkillCatalog, UserStore};
use crate::utils::error::{Result, SkillboardError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Reference implementation of both ports: fully materialized records
/// behind a single lock, seeded from a roster file. Replaces the
/// original system's database-backed repositories; ids are assigned from
/// a process-local counter.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    areas: HashMap<AreaId, Area>,
    areas_by_title: HashMap<String, AreaId>,
    skills: HashMap<SkillId, Skill>,
    skills_by_name: HashMap<String, SkillId>,
    users: HashMap<UserId, User>,
    users_by_username: HashMap<String, UserId>,
    next_id: u64,
}

impl Tables {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tables::default()),
        }
    }

    /// Validates the roster and materializes it: areas first, then their
    /// skills, then users with skill names resolved to ids.
    pub fn from_roster(roster: &Roster) -> Result<Self> {
        roster.validate()?;

        let mut tables = Tables::default();

        for area_entry in &roster.areas {
            let area_id = AreaId(tables.next_id());
            tables.areas.insert(
                area_id,
                Area {
                    id: area_id,
                    title: area_entry.title.clone(),
                },
            );
            tables
                .areas_by_title
                .insert(area_entry.title.to_lowercase(), area_id);

            for skill_name in &area_entry.skills {
                let skill_id = SkillId(tables.next_id());
                tables.skills.insert(
                    skill_id,
                    Skill {
                        id: skill_id,
                        name: skill_name.clone(),
                        area_id,
                    },
                );
                tables
                    .skills_by_name
                    .insert(skill_name.to_lowercase(), skill_id);
            }
        }

        for user_entry in &roster.users {
            let mut skill_ids = HashSet::new();
            for skill_name in &user_entry.skills {
                let skill_id = tables
                    .skills_by_name
                    .get(&skill_name.to_lowercase())
                    .copied()
                    .ok_or_else(|| SkillboardError::SkillNotFound {
                        key: skill_name.clone(),
                    })?;
                skill_ids.insert(skill_id);
            }

            let user_id = UserId(tables.next_id());
            tables.users.insert(
                user_id,
                User {
                    id: user_id,
                    username: user_entry.username.clone(),
                    display_name: user_entry.display_name.clone(),
                    skill_ids,
                },
            );
            tables
                .users_by_username
                .insert(user_entry.username.clone(), user_id);
        }

        tracing::debug!(
            areas = tables.areas.len(),
            skills = tables.skills.len(),
            users = tables.users.len(),
            "memory store seeded from roster"
        );

        Ok(Self {
            inner: RwLock::new(tables),
        })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SkillCatalog for MemoryStore {
    async fn area_by_id(&self, id: AreaId) -> Result<Area> {
        let tables = self.inner.read().await;
        tables
            .areas
            .get(&id)
            .cloned()
            .ok_or_else(|| SkillboardError::AreaNotFound { key: id.to_string() })
    }

    async fn area_by_title(&self, title: &str) -> Result<Area> {
        let tables = self.inner.read().await;
        tables
            .areas_by_title
            .get(&title.to_lowercase())
            .and_then(|id| tables.areas.get(id))
            .filter(|area| area.title == title)
            .cloned()
            .ok_or_else(|| SkillboardError::AreaNotFound {
                key: title.to_string(),
            })
    }

    async fn skill_by_id(&self, id: SkillId) -> Result<Skill> {
        let tables = self.inner.read().await;
        tables
            .skills
            .get(&id)
            .cloned()
            .ok_or_else(|| SkillboardError::SkillNotFound { key: id.to_string() })
    }

    async fn skill_by_name(&self, name: &str) -> Result<Skill> {
        let tables = self.inner.read().await;
        tables
            .skills_by_name
            .get(&name.to_lowercase())
            .and_then(|id| tables.skills.get(id))
            .filter(|skill| skill.name == name)
            .cloned()
            .ok_or_else(|| SkillboardError::SkillNotFound {
                key: name.to_string(),
            })
    }

    async fn resolve_skill_name(&self, name: &str) -> Result<Option<Skill>> {
        let tables = self.inner.read().await;
        Ok(tables
            .skills_by_name
            .get(&name.to_lowercase())
            .and_then(|id| tables.skills.get(id))
            .cloned())
    }

    async fn all_areas(&self) -> Result<Vec<Area>> {
        let tables = self.inner.read().await;
        Ok(tables.areas.values().cloned().collect())
    }

    async fn all_skills(&self) -> Result<Vec<Skill>> {
        let tables = self.inner.read().await;
        Ok(tables.skills.values().cloned().collect())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn user_by_username(&self, username: &str) -> Result<User> {
        let tables = self.inner.read().await;
        tables
            .users_by_username
            .get(username)
            .and_then(|id| tables.users.get(id))
            .cloned()
            .ok_or_else(|| SkillboardError::UserNotFound {
                username: username.to_string(),
            })
    }

    async fn all_users(&self) -> Result<Vec<User>> {
        let tables = self.inner.read().await;
        Ok(tables.users.values().cloned().collect())
    }

    async fn save_user(&self, user: NewUser) -> Result<User> {
        let mut tables = self.inner.write().await;

        if tables.users_by_username.contains_key(&user.username) {
            return Err(SkillboardError::DuplicateUser {
                username: user.username,
            });
        }
        for skill_id in &user.skill_ids {
            if !tables.skills.contains_key(skill_id) {
                return Err(SkillboardError::SkillNotFound {
                    key: skill_id.to_string(),
                });
            }
        }

        let user_id = UserId(tables.next_id());
        let stored = User {
            id: user_id,
            username: user.username,
            display_name: user.display_name,
            skill_ids: user.skill_ids,
        };
        tables
            .users_by_username
            .insert(stored.username.clone(), user_id);
        tables.users.insert(user_id, stored.clone());

        tracing::info!(username = %stored.username, id = %user_id, "user saved");
        Ok(stored)
    }
}
