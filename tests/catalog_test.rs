use skillboard::{AreaId, MemoryStore, Roster, SkillCatalog, SkillId};

fn store() -> MemoryStore {
    let roster = Roster::from_toml_str(
        r#"
        [[areas]]
        title = "Backend"
        skills = ["Go", "Rust"]

        [[areas]]
        title = "Frontend"
        skills = ["React"]
        "#,
    )
    .unwrap();
    MemoryStore::from_roster(&roster).unwrap()
}

#[tokio::test]
async fn test_lookup_by_unique_key_is_exact() {
    let store = store();

    let area = store.area_by_title("Backend").await.unwrap();
    assert_eq!(area.title, "Backend");
    assert!(store.area_by_title("backend").await.unwrap_err().is_not_found());

    let skill = store.skill_by_name("Go").await.unwrap();
    assert_eq!(skill.area_id, area.id);
    assert!(store.skill_by_name("go").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_resolve_skill_name_is_tolerant() {
    let store = store();

    assert_eq!(
        store.resolve_skill_name("gO").await.unwrap().unwrap().name,
        "Go"
    );
    assert!(store.resolve_skill_name("Cobol").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_by_id_round_trips_and_misses_fail() {
    let store = store();

    let skill = store.skill_by_name("React").await.unwrap();
    assert_eq!(store.skill_by_id(skill.id).await.unwrap(), skill);

    let area = store.area_by_id(skill.area_id).await.unwrap();
    assert_eq!(area.title, "Frontend");

    assert!(store.skill_by_id(SkillId(9999)).await.unwrap_err().is_not_found());
    assert!(store.area_by_id(AreaId(9999)).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_all_skills_and_areas_reflect_the_roster() {
    let store = store();

    assert_eq!(store.all_areas().await.unwrap().len(), 2);
    assert_eq!(store.all_skills().await.unwrap().len(), 3);
}
