use tokio::sync::RwLock;

use crate::profile::model::Profile;

/// Session-scoped cache of the signed-in user's profile.
///
/// Lifecycle: populated at login, cleared at logout. The cache is an owned,
/// injectable object; callers hold it behind an `Arc` and pass it to the use
/// cases that reconcile it after successful mutations.
#[derive(Debug, Default)]
pub struct ProfileCache {
    inner: RwLock<Option<Profile>>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-populated with a profile, as after login.
    pub fn with_profile(profile: Profile) -> Self {
        Self {
            inner: RwLock::new(Some(profile)),
        }
    }

    /// Snapshot of the cached profile, if a session is active.
    pub async fn get(&self) -> Option<Profile> {
        self.inner.read().await.clone()
    }

    /// Replace the cached profile. Called at login and after full refreshes.
    pub async fn set(&self, profile: Profile) {
        *self.inner.write().await = Some(profile);
    }

    /// Apply `f` to the cached profile in place.
    ///
    /// Returns false when no profile is cached; the mutation is not applied.
    pub async fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut Profile),
    {
        let mut guard = self.inner.write().await;
        match guard.as_mut() {
            Some(profile) => {
                f(profile);
                true
            }
            None => false,
        }
    }

    /// Drop the cached profile. Called at logout.
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use crate::profile::status::Status;

    fn profile() -> Profile {
        Profile {
            id: UserId::from("user-1"),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            avatar_url: None,
            status: Status::Active,
        }
    }

    #[tokio::test]
    async fn test_starts_empty_and_clears() {
        let cache = ProfileCache::new();
        assert!(cache.get().await.is_none());

        cache.set(profile()).await;
        assert!(cache.get().await.is_some());

        cache.clear().await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let cache = ProfileCache::with_profile(profile());

        let applied = cache.update(|p| p.status = Status::Busy).await;

        assert!(applied);
        assert_eq!(cache.get().await.unwrap().status, Status::Busy);
    }

    #[tokio::test]
    async fn test_update_without_session_is_rejected() {
        let cache = ProfileCache::new();

        let applied = cache.update(|p| p.username = "ghost".to_string()).await;

        assert!(!applied);
        assert!(cache.get().await.is_none());
    }
}
