use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::ApiError;
use crate::models::Activity;

pub mod seed;

/// In-memory activity store. The whole data set lives in one map guarded by
/// one lock; membership checks and roster mutations happen under a single
/// write-lock acquisition so a duplicate signup cannot slip in between the
/// check and the append.
pub struct ActivityRegistry {
    activities: RwLock<HashMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Registry seeded with the fixed activity table. This is the process
    /// start state; there is no persistence behind it.
    pub fn with_seed_roster() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn all(&self) -> HashMap<String, Activity> {
        self.activities
            .read()
            .expect("activity registry lock poisoned")
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities
            .read()
            .expect("activity registry lock poisoned")
            .get(name)
            .cloned()
    }

    /// Appends `email` to the roster of `name`. Rejects unknown activities
    /// and duplicate entries; the roster keeps signup order.
    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), ApiError> {
        let mut activities = self
            .activities
            .write()
            .expect("activity registry lock poisoned");

        let activity = activities.get_mut(name).ok_or(ApiError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(ApiError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the roster of `name`. Rejects unknown activities
    /// and emails that are not on the roster.
    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), ApiError> {
        let mut activities = self
            .activities
            .write()
            .expect("activity registry lock poisoned");

        let activity = activities.get_mut(name).ok_or(ApiError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(ApiError::NotSignedUp);
        };

        activity.participants.remove(pos);
        Ok(())
    }
}
