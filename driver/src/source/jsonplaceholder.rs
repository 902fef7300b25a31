use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use kernel::interface::query::{CatalogSource, IdentitySource};
use kernel::prelude::entity::{
    Address, CatalogItem, CompanyName, Contact, EmailAddress, FullName, ItemAuthor,
    ItemDescription, ItemId, ItemTitle, PhoneNumber, UserId, UserName, UserProfile, Website,
};
use kernel::KernelError;

use crate::error::ConvertError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Post {
    id: i64,
    user_id: i64,
    title: String,
    body: String,
}

impl From<Post> for CatalogItem {
    fn from(post: Post) -> Self {
        CatalogItem::new(
            ItemId::new(post.id),
            ItemTitle::new(post.title),
            ItemAuthor::new(format!("Author {}", post.user_id)),
            ItemDescription::new(post.body),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserAddress {
    street: String,
    suite: String,
    city: String,
    zipcode: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserCompany {
    name: String,
}

#[derive(Debug, Deserialize)]
struct User {
    id: i64,
    name: String,
    username: String,
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    company: UserCompany,
    #[serde(default)]
    address: UserAddress,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        let UserAddress {
            street,
            suite,
            city,
            zipcode,
        } = user.address;
        let contact = Contact::new(
            PhoneNumber::new(user.phone),
            Website::new(user.website),
            CompanyName::new(user.company.name),
            Address::new(street, suite, city, zipcode),
        );
        UserProfile::new(
            UserId::new(user.id),
            UserName::new(user.username),
            FullName::new(user.name),
            EmailAddress::new(user.email),
        )
        .with_contact(contact)
    }
}

/// Reads posts as catalog items and users as identities from a
/// JSONPlaceholder-compatible API.
#[derive(Debug, Clone)]
pub struct JsonPlaceholderClient {
    http: Client,
    base_url: String,
}

impl JsonPlaceholderClient {
    pub fn new(base_url: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .convert_error()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> error_stack::Result<T, KernelError> {
        let url = format!("{}/{path}", self.base_url);
        debug!("GET {url}");
        self.http
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .convert_error()
            .map_err(|report| report.attach_printable(format!("Request to {url} failed")))?
            .json::<T>()
            .await
            .convert_error()
            .map_err(|report| report.attach_printable(format!("Unexpected body from {url}")))
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonPlaceholderClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_items(&self) -> error_stack::Result<Vec<CatalogItem>, KernelError> {
        let posts = self.fetch::<Vec<Post>>("posts").await?;
        Ok(posts.into_iter().map(CatalogItem::from).collect())
    }
}

#[async_trait::async_trait]
impl IdentitySource for JsonPlaceholderClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_profiles(&self) -> error_stack::Result<Vec<UserProfile>, KernelError> {
        let users = self.fetch::<Vec<User>>("users").await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{CatalogItem, UserProfile};

    use crate::source::jsonplaceholder::{Post, User};

    #[test]
    fn posts_become_items() -> Result<(), serde_json::Error> {
        let post: Post = serde_json::from_str(
            r#"{"userId": 3, "id": 21, "title": "asperiores ea ipsam", "body": "voluptas"}"#,
        )?;
        let item = CatalogItem::from(post);
        assert_eq!(item.id().as_ref(), &21);
        assert_eq!(item.author().as_ref(), "Author 3");
        assert_eq!(item.description().as_ref(), "voluptas");
        assert!(!item.is_rented());
        Ok(())
    }

    #[test]
    fn users_become_profiles() -> Result<(), serde_json::Error> {
        let user: User = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": {
                    "street": "Kulas Light",
                    "suite": "Apt. 556",
                    "city": "Gwenborough",
                    "zipcode": "92998-3874",
                    "geo": {"lat": "-37.3159", "lng": "81.1496"}
                },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": {
                    "name": "Romaguera-Crona",
                    "catchPhrase": "Multi-layered client-server neural-net",
                    "bs": "harness real-time e-markets"
                }
            }"#,
        )?;
        let profile = UserProfile::from(user);
        assert!(profile.is_identified_by("Bret"));
        assert_eq!(profile.name().as_ref(), "Leanne Graham");
        let contact = profile.contact();
        assert_eq!(contact.phone().as_ref(), "1-770-736-8031 x56442");
        assert_eq!(contact.website().as_ref(), "hildegard.org");
        assert_eq!(contact.company().as_ref(), "Romaguera-Crona");
        assert_eq!(
            contact.address().to_string(),
            "Kulas Light, Apt. 556, Gwenborough 92998-3874"
        );
        Ok(())
    }

    #[test]
    fn users_without_contact_details_still_parse() -> Result<(), serde_json::Error> {
        let user: User = serde_json::from_str(
            r#"{"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "a@b.c"}"#,
        )?;
        let profile = UserProfile::from(user);
        assert!(profile.contact().phone().as_ref().is_empty());
        assert_eq!(profile.contact().address().to_string(), "");
        Ok(())
    }
}
