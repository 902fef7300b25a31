mod picture;
mod statistics;

use std::collections::BTreeMap;

pub use self::{picture::*, statistics::*};
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::UserId;

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize, References)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    #[serde(default)]
    profile_picture: Option<ProfilePicture>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profiles(BTreeMap<UserId, ProfileSettings>);

impl Profiles {
    pub fn get(&self, user_id: &UserId) -> Option<&ProfileSettings> {
        self.0.get(user_id)
    }

    /// Creates empty settings for the user if none exist yet. Returns whether
    /// anything was created.
    pub fn ensure(&mut self, user_id: UserId) -> bool {
        if self.0.contains_key(&user_id) {
            return false;
        }
        self.0.insert(user_id, ProfileSettings::default());
        true
    }

    pub fn set_picture(&mut self, user_id: UserId, picture: ProfilePicture) {
        self.0.entry(user_id).or_default().profile_picture = Some(picture);
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{ProfilePicture, Profiles, UserId};
    use crate::KernelError;

    #[test]
    fn ensure_keeps_existing_settings() -> error_stack::Result<(), KernelError> {
        let mut profiles = Profiles::default();
        let user = UserId::new(1);
        assert!(profiles.ensure(user));
        profiles.set_picture(user, ProfilePicture::parse("data:image/gif;base64,R0lGOD==")?);
        assert!(!profiles.ensure(user));
        assert!(profiles
            .get(&user)
            .and_then(|settings| settings.profile_picture().as_ref())
            .is_some());
        assert!(profiles.get(&UserId::new(2)).is_none());
        Ok(())
    }
}
