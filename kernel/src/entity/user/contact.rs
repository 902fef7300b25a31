use std::fmt::{Display, Formatter};

use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln, References};

#[derive(Debug, Clone, Default, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Website(String);

impl Website {
    pub fn new(website: impl Into<String>) -> Self {
        Self(website.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Destructure, References)]
pub struct Address {
    street: String,
    suite: String,
    city: String,
    zipcode: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        suite: impl Into<String>,
        city: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            suite: suite.into(),
            city: city.into(),
            zipcode: zipcode.into(),
        }
    }
}

/// `street, suite, city zipcode`, skipping empty parts.
impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let locality = [self.city.as_str(), self.zipcode.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let line = [self.street.as_str(), self.suite.as_str(), locality.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&line)
    }
}

/// Contact details shown on the profile page. Every part may be empty when
/// the identity provider does not know it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Destructure, References)]
pub struct Contact {
    phone: PhoneNumber,
    website: Website,
    company: CompanyName,
    address: Address,
}

impl Contact {
    pub fn new(
        phone: PhoneNumber,
        website: Website,
        company: CompanyName,
        address: Address,
    ) -> Self {
        Self {
            phone,
            website,
            company,
            address,
        }
    }
}
