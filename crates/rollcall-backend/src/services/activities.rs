use async_trait::async_trait;
use dashmap::DashMap;

use rollcall::data::{Activities, Activity, Message, RosterPolicy};
use rollcall::errors::RosterError;

/// Totals over the whole directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub activities: usize,
    pub participants: usize,
}

/// A trait for reading activities and changing their rosters.
///
/// The set of activities is fixed when the service is built; only rosters
/// change afterwards. Implementations decide where the rosters live.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     service.signup("Chess Club", "alice@mergington.edu").await?;
///     service.unregister("Chess Club", "alice@mergington.edu").await?;
///
///     let activities = service.list().await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity, in directory order.
    async fn list(&self) -> Result<Activities, Self::Error>;

    /// Appends `email` to the roster of `activity_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, or if the service's
    /// roster policy rejects the signup.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<Message, Self::Error>;

    /// Removes the first occurrence of `email` from the roster of `activity_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not on its roster.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<Message, Self::Error>;

    /// Counts activities and roster entries.
    async fn stats(&self) -> Result<DirectoryStats, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`, so every roster change holds that
/// activity's entry lock for the whole read-modify-write. Listing walks the
/// activities in the order they were seeded.
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
    order: Vec<String>,
    policy: RosterPolicy,
}

impl ActivityServiceInMemory {
    pub fn new(seed: Activities, policy: RosterPolicy) -> Self {
        let activities = DashMap::with_capacity(seed.len());
        let mut order = Vec::with_capacity(seed.len());

        for (name, activity) in seed {
            if activities.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }

        Self {
            activities,
            order,
            policy,
        }
    }

    /// A directory holding the standard Mergington seed with the default policy.
    pub fn seeded() -> Self {
        Self::new(rollcall::seed::activities(), RosterPolicy::default())
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = RosterError;

    async fn list(&self) -> Result<Activities, Self::Error> {
        Ok(self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|entry| (name.clone(), entry.value().clone()))
            })
            .collect())
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<Message, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if self.policy.reject_duplicates && activity.is_registered(email) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        if self.policy.enforce_capacity && activity.is_full() {
            return Err(RosterError::ActivityFull(activity_name.to_string()));
        }

        activity.add_participant(email);
        Ok(Message::signed_up(email, activity_name))
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<Message, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.remove_participant(email) {
            return Err(RosterError::ParticipantNotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        Ok(Message::unregistered(email, activity_name))
    }

    async fn stats(&self) -> Result<DirectoryStats, Self::Error> {
        Ok(DirectoryStats {
            activities: self.activities.len(),
            participants: self
                .activities
                .iter()
                .map(|entry| entry.value().participants.len())
                .sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn roster(activities: &Activities, name: &str) -> Vec<String> {
        activities.get(name).unwrap().participants.clone()
    }

    #[tokio::test]
    async fn list_keeps_seed_order() {
        let service = ActivityServiceInMemory::seeded();
        let listed = service.list().await.unwrap();
        let seed = rollcall::seed::activities();

        assert_eq!(listed, seed);
    }

    #[tokio::test]
    async fn signup_appends_to_roster() {
        let service = ActivityServiceInMemory::seeded();
        let before = roster(&service.list().await.unwrap(), "Tennis Club");

        let message = service.signup("Tennis Club", "new@x.edu").await.unwrap();
        assert_eq!(message.message, "Signed up new@x.edu for Tennis Club");

        let after = roster(&service.list().await.unwrap(), "Tennis Club");
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().map(String::as_str), Some("new@x.edu"));
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[tokio::test]
    async fn signup_unknown_activity_changes_nothing() {
        let service = ActivityServiceInMemory::seeded();
        let before = service.list().await.unwrap();

        let err = service
            .signup("Nonexistent Club", "test@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::ActivityNotFound("Nonexistent Club".to_string())
        );
        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn signup_then_unregister_restores_roster() {
        let service = ActivityServiceInMemory::seeded();
        let before = roster(&service.list().await.unwrap(), "Art Club");

        service.signup("Art Club", "round@mergington.edu").await.unwrap();
        let message = service
            .unregister("Art Club", "round@mergington.edu")
            .await
            .unwrap();
        assert!(message.message.contains("round@mergington.edu"));

        assert_eq!(roster(&service.list().await.unwrap(), "Art Club"), before);
    }

    #[tokio::test]
    async fn unregister_missing_participant_or_activity() {
        let service = ActivityServiceInMemory::seeded();
        let before = service.list().await.unwrap();

        let err = service
            .unregister("Tennis Club", "nonexistent@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::ParticipantNotRegistered { .. }));

        let err = service
            .unregister("Nonexistent Club", "ava@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::ActivityNotFound(_)));

        assert_eq!(service.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn duplicates_allowed_by_default() {
        let service = ActivityServiceInMemory::seeded();
        service.signup("Chess Club", "twice@mergington.edu").await.unwrap();
        service.signup("Chess Club", "twice@mergington.edu").await.unwrap();

        let chess = roster(&service.list().await.unwrap(), "Chess Club");
        assert_eq!(chess.iter().filter(|p| *p == "twice@mergington.edu").count(), 2);

        // Only the first copy goes.
        service
            .unregister("Chess Club", "twice@mergington.edu")
            .await
            .unwrap();
        let chess = roster(&service.list().await.unwrap(), "Chess Club");
        assert_eq!(chess.iter().filter(|p| *p == "twice@mergington.edu").count(), 1);
    }

    #[tokio::test]
    async fn capacity_not_enforced_by_default() {
        let mut seed = Activities::new();
        seed.push("Tiny Club", Activity::new("Small", "Never", 1));
        let service = ActivityServiceInMemory::new(seed, RosterPolicy::default());

        service.signup("Tiny Club", "a@mergington.edu").await.unwrap();
        service.signup("Tiny Club", "b@mergington.edu").await.unwrap();

        let tiny = service.list().await.unwrap();
        assert_eq!(tiny.get("Tiny Club").unwrap().participants.len(), 2);
    }

    #[tokio::test]
    async fn strict_policy_rejects() {
        let mut seed = Activities::new();
        seed.push("Tiny Club", Activity::new("Small", "Never", 1));
        let policy = RosterPolicy {
            enforce_capacity: true,
            reject_duplicates: true,
        };
        let service = ActivityServiceInMemory::new(seed, policy);

        service.signup("Tiny Club", "a@mergington.edu").await.unwrap();

        let err = service
            .signup("Tiny Club", "a@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, RosterError::AlreadySignedUp { .. }));

        let err = service
            .signup("Tiny Club", "b@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, RosterError::ActivityFull("Tiny Club".to_string()));

        let tiny = service.list().await.unwrap();
        assert_eq!(
            tiny.get("Tiny Club").unwrap().participants,
            vec!["a@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn duplicate_seed_names_keep_first_position() {
        let mut seed = Activities::new();
        seed.push("A", Activity::new("first", "Mondays", 3));
        seed.push("B", Activity::new("b", "Mondays", 3));
        seed.push("A", Activity::new("second", "Mondays", 3));
        let service = ActivityServiceInMemory::new(seed, RosterPolicy::default());

        let listed = service.list().await.unwrap();
        assert_eq!(listed.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(listed.get("A").unwrap().description, "second");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_signups_are_not_lost() {
        let service = Arc::new(ActivityServiceInMemory::seeded());
        let before = service.stats().await.unwrap();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .signup("Science Club", &format!("user{i}@mergington.edu"))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let science = roster(&service.list().await.unwrap(), "Science Club");
        for i in 0..64 {
            assert!(science.contains(&format!("user{i}@mergington.edu")));
        }

        let after = service.stats().await.unwrap();
        assert_eq!(after.activities, before.activities);
        assert_eq!(after.participants, before.participants + 64);
    }
}
