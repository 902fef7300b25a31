mod contact;
mod email;
mod id;
mod name;
mod session;

pub use self::{contact::*, email::*, id::*, name::*, session::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct UserProfile {
    id: UserId,
    username: UserName,
    name: FullName,
    email: EmailAddress,
    #[serde(default)]
    contact: Contact,
}

impl UserProfile {
    pub fn new(id: UserId, username: UserName, name: FullName, email: EmailAddress) -> Self {
        Self {
            id,
            username,
            name,
            email,
            contact: Contact::default(),
        }
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = contact;
        self
    }

    /// Demo login: the identifier may be either the username or the email.
    pub fn is_identified_by(&self, login: &str) -> bool {
        self.username.as_ref() == login || self.email.as_ref() == login
    }
}
