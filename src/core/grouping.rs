use crate::domain::model::{AreaId, Skill};
use crate::utils::error::{Result, SkillboardError};
use std::collections::HashMap;

/// Partitions one user's resolved skills by the title of the area each
/// belongs to. Every skill lands in exactly one group, a key only
/// appears when at least one skill maps to it, and an empty skill set
/// yields an empty map (the caller's empty-state signal, not an error).
/// Order within a group follows the input and is not guaranteed.
///
/// A skill whose area is missing from `area_titles` breaks the
/// every-skill-has-an-area invariant and surfaces as `AreaNotFound`.
pub fn group_by_area(
    skills: Vec<Skill>,
    area_titles: &HashMap<AreaId, String>,
) -> Result<HashMap<String, Vec<Skill>>> {
    let mut groups: HashMap<String, Vec<Skill>> = HashMap::new();

    for skill in skills {
        let title = area_titles
            .get(&skill.area_id)
            .ok_or_else(|| SkillboardError::AreaNotFound {
                key: skill.area_id.to_string(),
            })?;
        groups.entry(title.clone()).or_default().push(skill);
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SkillId;

    fn skill(id: u64, name: &str, area: u64) -> Skill {
        Skill {
            id: SkillId(id),
            name: name.to_string(),
            area_id: AreaId(area),
        }
    }

    fn titles(entries: &[(u64, &str)]) -> HashMap<AreaId, String> {
        entries
            .iter()
            .map(|(id, title)| (AreaId(*id), title.to_string()))
            .collect()
    }

    #[test]
    fn test_groups_by_area_title() {
        let skills = vec![skill(1, "Go", 100), skill(2, "React", 200)];
        let groups =
            group_by_area(skills, &titles(&[(100, "Backend"), (200, "Frontend")])).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Backend"].len(), 1);
        assert_eq!(groups["Backend"][0].name, "Go");
        assert_eq!(groups["Frontend"][0].name, "React");
    }

    #[test]
    fn test_no_skill_lost_or_duplicated() {
        let skills = vec![
            skill(1, "Go", 100),
            skill(2, "Rust", 100),
            skill(3, "React", 200),
        ];
        let groups =
            group_by_area(skills.clone(), &titles(&[(100, "Backend"), (200, "Frontend")]))
                .unwrap();

        let flattened: usize = groups.values().map(|g| g.len()).sum();
        assert_eq!(flattened, skills.len());
        for group in groups.values() {
            assert!(!group.is_empty());
        }
    }

    #[test]
    fn test_empty_skill_set_yields_empty_map() {
        let groups = group_by_area(Vec::new(), &titles(&[(100, "Backend")])).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_unknown_area_surfaces_as_not_found() {
        let skills = vec![skill(1, "Go", 999)];
        let err = group_by_area(skills, &titles(&[(100, "Backend")])).unwrap_err();
        assert!(err.is_not_found());
    }
}
