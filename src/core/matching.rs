use crate::domain::model::{SkillId, User};
use std::collections::HashSet;

/// Search policy across the requested skill set. The original product
/// left this ambiguous, so it is an explicit parameter rather than a
/// baked-in choice: `Any` (the default) qualifies a user holding at
/// least one requested skill, `All` requires every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    #[default]
    Any,
    All,
}

/// Filters `users` down to those whose skill set qualifies against
/// `requested` under `policy`. Pure and read-only: the result is always
/// a subset of the input, with no duplicates and no guaranteed order.
/// An empty `requested` set matches nobody, and an empty result is not
/// an error.
pub fn match_users(
    users: impl IntoIterator<Item = User>,
    requested: &HashSet<SkillId>,
    policy: MatchPolicy,
) -> Vec<User> {
    if requested.is_empty() {
        return Vec::new();
    }

    users
        .into_iter()
        .filter(|user| match policy {
            MatchPolicy::Any => !user.skill_ids.is_disjoint(requested),
            MatchPolicy::All => requested.is_subset(&user.skill_ids),
        })
        .collect()
}
