use crate::utils::error::{Result, SkillboardError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SkillboardError::ValidationError {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects duplicate values, compared case-insensitively since titles,
/// skill names, and usernames all serve as lookup keys.
pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.to_lowercase()) {
            return Err(SkillboardError::ValidationError {
                field: field_name.to_string(),
                reason: format!("duplicate value: {}", value),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("username", "alice").is_ok());
        assert!(validate_non_empty_string("username", "").is_err());
        assert!(validate_non_empty_string("username", "   ").is_err());
    }

    #[test]
    fn test_validate_unique_is_case_insensitive() {
        assert!(validate_unique("areas.title", ["Backend", "Frontend"]).is_ok());
        assert!(validate_unique("areas.title", ["Backend", "backend"]).is_err());
    }
}
