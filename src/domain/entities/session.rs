use chrono::{DateTime, Utc};

use crate::domain::entities::{id::Id, user::User};

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Id<Session>,
    pub user_id: Id<User>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: Id<User>) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            user_id,
            created_at: now,
            last_activity: now,
        }
    }
}
