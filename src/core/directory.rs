use crate::core::grouping::group_by_area;
use crate::core::matching::{match_users, MatchPolicy};
use crate::core::report::UserRow;
use crate::core::search::parse_search_request;
use crate::domain::model::{AreaId, NewUser, Skill, SkillId, User};
use crate::domain::ports::{SkillCatalog, UserStore};
use crate::utils::error::{Result, SkillboardError};
use std::collections::{BTreeSet, HashMap, HashSet};

/// One user's skills grouped by area, ready for presentation.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub skills_by_area: HashMap<String, Vec<Skill>>,
}

impl UserProfile {
    /// Distinct empty-state signal: the user exists but holds no skills.
    pub fn has_no_skills(&self) -> bool {
        self.skills_by_area.is_empty()
    }
}

/// Result of a free-text skill search. `ignored` carries the tokens that
/// resolved to no known skill; they degrade the query instead of
/// failing it.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub matched: Vec<User>,
    pub requested: Vec<Skill>,
    pub ignored: Vec<String>,
}

/// Facade over the catalog and user store: the operations the excluded
/// presentation layer would call. All reads are pure projections of the
/// store's current state.
pub struct Directory<S> {
    store: S,
}

impl<S: SkillCatalog + UserStore> Directory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Looks up a user by username and groups their skill set by area
    /// title. Fails with `UserNotFound` for an unknown username.
    pub async fn profile(&self, username: &str) -> Result<UserProfile> {
        let user = self.store.user_by_username(username).await?;
        let skills = self.resolve_skills(&user).await?;
        let titles = self.area_titles().await?;

        let skills_by_area = group_by_area(skills, &titles)?;
        Ok(UserProfile {
            user,
            skills_by_area,
        })
    }

    /// Parses free-text search input and resolves it against the
    /// catalog: each comma-separated fragment is tried as a whole name
    /// first (so multi-word skills match), then word by word for loose
    /// word lists. Unrecognized names are collected, not fatal. Returns
    /// the users qualifying under `policy`; an empty or fully
    /// unrecognized query matches nobody.
    pub async fn search(&self, raw: &str, policy: MatchPolicy) -> Result<SearchOutcome> {
        let fragments = parse_search_request(raw);

        let mut requested: Vec<Skill> = Vec::new();
        let mut requested_ids: HashSet<SkillId> = HashSet::new();
        let mut ignored = Vec::new();
        for fragment in fragments {
            match self.store.resolve_skill_name(&fragment).await? {
                Some(skill) => {
                    if requested_ids.insert(skill.id) {
                        requested.push(skill);
                    }
                }
                None => {
                    let words: Vec<&str> = fragment.split_whitespace().collect();
                    if words.len() <= 1 {
                        ignored.push(fragment);
                        continue;
                    }
                    for word in words {
                        match self.store.resolve_skill_name(word).await? {
                            Some(skill) => {
                                if requested_ids.insert(skill.id) {
                                    requested.push(skill);
                                }
                            }
                            None => ignored.push(word.to_string()),
                        }
                    }
                }
            }
        }

        if !ignored.is_empty() {
            tracing::warn!(tokens = ?ignored, "ignoring unrecognized skill names");
        }

        let matched = match_users(self.store.all_users().await?, &requested_ids, policy);

        tracing::debug!(
            requested = requested.len(),
            matched = matched.len(),
            ?policy,
            "skill search complete"
        );

        Ok(SearchOutcome {
            matched,
            requested,
            ignored,
        })
    }

    /// Flat roster listing for the dashboard table, sorted by username.
    pub async fn roster_rows(&self) -> Result<Vec<UserRow>> {
        let titles = self.area_titles().await?;

        let mut rows = Vec::new();
        for user in self.store.all_users().await? {
            let skills = self.resolve_skills(&user).await?;

            let mut areas = BTreeSet::new();
            for skill in &skills {
                let title = titles.get(&skill.area_id).ok_or_else(|| {
                    SkillboardError::AreaNotFound {
                        key: skill.area_id.to_string(),
                    }
                })?;
                areas.insert(title.clone());
            }

            rows.push(UserRow {
                username: user.username.clone(),
                display_name: user.label().to_string(),
                skill_count: skills.len(),
                areas: areas.into_iter().collect::<Vec<_>>().join("; "),
            });
        }

        rows.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(rows)
    }

    /// Administrative creation path. Skill names resolve
    /// case-insensitively but, unlike search, an unknown name fails the
    /// whole request.
    pub async fn add_user(
        &self,
        username: &str,
        display_name: Option<String>,
        skill_names: &[String],
    ) -> Result<User> {
        let mut skill_ids = HashSet::new();
        for name in skill_names {
            let skill = self
                .store
                .resolve_skill_name(name)
                .await?
                .ok_or_else(|| SkillboardError::SkillNotFound { key: name.clone() })?;
            skill_ids.insert(skill.id);
        }

        self.store
            .save_user(NewUser {
                username: username.to_string(),
                display_name,
                skill_ids,
            })
            .await
    }

    async fn resolve_skills(&self, user: &User) -> Result<Vec<Skill>> {
        let mut skills = Vec::with_capacity(user.skill_ids.len());
        for skill_id in &user.skill_ids {
            skills.push(self.store.skill_by_id(*skill_id).await?);
        }
        Ok(skills)
    }

    async fn area_titles(&self) -> Result<HashMap<AreaId, String>> {
        Ok(self
            .store
            .all_areas()
            .await?
            .into_iter()
            .map(|area| (area.id, area.title))
            .collect())
    }
}
