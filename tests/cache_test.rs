use async_trait::async_trait;
use skillboard::{
    Area, AreaId, CachedStore, MemoryStore, NewUser, Roster, Skill, SkillCatalog, SkillId, User,
    UserStore,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Wraps the memory store and counts how often the unique-key lookups
/// reach it, so tests can observe read-through behavior.
struct CountingStore {
    inner: MemoryStore,
    user_lookups: Arc<AtomicUsize>,
    skill_lookups: Arc<AtomicUsize>,
    area_lookups: Arc<AtomicUsize>,
}

#[async_trait]
impl SkillCatalog for CountingStore {
    async fn area_by_id(&self, id: AreaId) -> skillboard::Result<Area> {
        self.inner.area_by_id(id).await
    }

    async fn area_by_title(&self, title: &str) -> skillboard::Result<Area> {
        self.area_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.area_by_title(title).await
    }

    async fn skill_by_id(&self, id: SkillId) -> skillboard::Result<Skill> {
        self.inner.skill_by_id(id).await
    }

    async fn skill_by_name(&self, name: &str) -> skillboard::Result<Skill> {
        self.inner.skill_by_name(name).await
    }

    async fn resolve_skill_name(&self, name: &str) -> skillboard::Result<Option<Skill>> {
        self.skill_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve_skill_name(name).await
    }

    async fn all_areas(&self) -> skillboard::Result<Vec<Area>> {
        self.inner.all_areas().await
    }

    async fn all_skills(&self) -> skillboard::Result<Vec<Skill>> {
        self.inner.all_skills().await
    }
}

#[async_trait]
impl UserStore for CountingStore {
    async fn user_by_username(&self, username: &str) -> skillboard::Result<User> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.user_by_username(username).await
    }

    async fn all_users(&self) -> skillboard::Result<Vec<User>> {
        self.inner.all_users().await
    }

    async fn save_user(&self, user: NewUser) -> skillboard::Result<User> {
        self.inner.save_user(user).await
    }
}

fn counting_store() -> (CachedStore<CountingStore>, Arc<AtomicUsize>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let roster = Roster::from_toml_str(
        r#"
        [[areas]]
        title = "Backend"
        skills = ["Go"]

        [[users]]
        username = "alice"
        skills = ["Go"]
        "#,
    )
    .unwrap();

    let user_lookups = Arc::new(AtomicUsize::new(0));
    let skill_lookups = Arc::new(AtomicUsize::new(0));
    let area_lookups = Arc::new(AtomicUsize::new(0));
    let store = CountingStore {
        inner: MemoryStore::from_roster(&roster).unwrap(),
        user_lookups: user_lookups.clone(),
        skill_lookups: skill_lookups.clone(),
        area_lookups: area_lookups.clone(),
    };
    (CachedStore::new(store), user_lookups, skill_lookups, area_lookups)
}

#[tokio::test]
async fn test_user_cache_hits_skip_the_inner_store() {
    let (cached, user_lookups, _, _) = counting_store();

    let first = cached.user_by_username("alice").await.unwrap();
    let second = cached.user_by_username("alice").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(user_lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_skill_and_area_caches_are_read_through() {
    let (cached, _, skill_lookups, area_lookups) = counting_store();

    cached.resolve_skill_name("go").await.unwrap().unwrap();
    cached.resolve_skill_name("GO").await.unwrap().unwrap();
    assert_eq!(skill_lookups.load(Ordering::SeqCst), 1);

    cached.area_by_title("Backend").await.unwrap();
    cached.area_by_title("Backend").await.unwrap();
    assert_eq!(area_lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_misses_are_not_cached() {
    let (cached, _, skill_lookups, _) = counting_store();

    assert!(cached.resolve_skill_name("Cobol").await.unwrap().is_none());
    assert!(cached.resolve_skill_name("Cobol").await.unwrap().is_none());
    assert_eq!(skill_lookups.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_user_saved_later_is_visible_through_the_cache() {
    let (cached, _, _, _) = counting_store();

    let err = cached.user_by_username("bob").await.unwrap_err();
    assert!(err.is_not_found());

    cached
        .save_user(NewUser {
            username: "bob".to_string(),
            display_name: None,
            skill_ids: Default::default(),
        })
        .await
        .unwrap();

    assert_eq!(cached.user_by_username("bob").await.unwrap().username, "bob");
}
