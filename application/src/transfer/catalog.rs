use time::OffsetDateTime;

use kernel::prelude::entity::{Availability, CatalogItem};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CatalogItemDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub is_rented: bool,
    pub rented_by: Option<i64>,
    pub rented_at: Option<OffsetDateTime>,
    pub due_at: Option<OffsetDateTime>,
}

impl From<&CatalogItem> for CatalogItemDto {
    fn from(value: &CatalogItem) -> Self {
        let mark = value.rental().as_ref();
        Self {
            id: (*value.id()).into(),
            title: value.title().as_ref().to_string(),
            author: value.author().as_ref().to_string(),
            description: value.description().as_ref().to_string(),
            is_rented: value.is_rented(),
            rented_by: mark.map(|mark| (*mark.rented_by()).into()),
            rented_at: mark.map(|mark| (*mark.rented_at()).into()),
            due_at: mark.map(|mark| (*mark.due_at()).into()),
        }
    }
}

#[derive(Default)]
pub struct SearchCatalogDto {
    pub query: Option<String>,
    pub availability: Availability,
}

pub struct GetItemDto {
    pub item_id: i64,
}
