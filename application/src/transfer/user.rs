use time::OffsetDateTime;

use kernel::prelude::entity::{
    DestructContact, DestructSession, DestructUserProfile, Session, UserProfile,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: String,
    /// `street, suite, city zipcode`.
    pub address: String,
}

impl From<UserProfile> for UserDto {
    fn from(value: UserProfile) -> Self {
        let DestructUserProfile {
            id,
            username,
            name,
            email,
            contact,
        } = value.into_destruct();
        let address = contact.address().to_string();
        let DestructContact {
            phone,
            website,
            company,
            ..
        } = contact.into_destruct();
        Self {
            id: id.into(),
            username: username.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            website: website.into(),
            company: company.into(),
            address,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SessionDto {
    pub user: UserDto,
    pub logged_in_at: OffsetDateTime,
}

impl From<Session> for SessionDto {
    fn from(value: Session) -> Self {
        let DestructSession { user, logged_in_at } = value.into_destruct();
        Self {
            user: user.into(),
            logged_in_at,
        }
    }
}

pub struct LoginDto {
    /// Username or email address.
    pub login: String,
    /// Accepted but never checked.
    pub password: String,
}
