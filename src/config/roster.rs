use crate::utils::error::{Result, SkillboardError};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Declarative roster: areas with the skills they own, and users with
/// the skill names they hold. Loaded once at startup and used to seed
/// the in-memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub areas: Vec<AreaEntry>,
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaEntry {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    pub username: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Roster {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SkillboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR_NAME}` references with the environment value;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for Roster {
    /// Roster loading is strict: every invariant violation is reported
    /// as a validation error naming the offending field. Only free-text
    /// search input gets the tolerant treatment.
    fn validate(&self) -> Result<()> {
        for area in &self.areas {
            validate_non_empty_string("areas.title", &area.title)?;
            for skill in &area.skills {
                validate_non_empty_string("areas.skills", skill)?;
            }
        }
        validate_unique("areas.title", self.areas.iter().map(|a| a.title.as_str()))?;

        // A skill belongs to exactly one area, so names must be unique
        // across the whole catalog, not just within one area.
        validate_unique(
            "areas.skills",
            self.areas
                .iter()
                .flat_map(|a| a.skills.iter().map(|s| s.as_str())),
        )?;

        for user in &self.users {
            validate_non_empty_string("users.username", &user.username)?;
        }
        validate_unique(
            "users.username",
            self.users.iter().map(|u| u.username.as_str()),
        )?;

        let known_skills: HashSet<String> = self
            .areas
            .iter()
            .flat_map(|a| a.skills.iter().map(|s| s.to_lowercase()))
            .collect();

        for user in &self.users {
            for skill in &user.skills {
                if !known_skills.contains(&skill.to_lowercase()) {
                    return Err(SkillboardError::ValidationError {
                        field: "users.skills".to_string(),
                        reason: format!(
                            "user {} references undeclared skill: {}",
                            user.username, skill
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
