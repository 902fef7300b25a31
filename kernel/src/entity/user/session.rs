use destructure::Destructure;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::References;

use crate::entity::UserProfile;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user: UserProfile,
    #[serde(with = "time::serde::rfc3339")]
    logged_in_at: OffsetDateTime,
}

impl Session {
    pub fn new(user: UserProfile, logged_in_at: OffsetDateTime) -> Self {
        Self { user, logged_in_at }
    }
}
