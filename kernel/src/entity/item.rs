mod author;
mod description;
mod id;
mod mark;
mod title;

pub use self::{author::*, description::*, id::*, mark::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct CatalogItem {
    id: ItemId,
    title: ItemTitle,
    author: ItemAuthor,
    description: ItemDescription,
    rental: Option<RentalMark>,
}

impl CatalogItem {
    pub fn new(
        id: ItemId,
        title: ItemTitle,
        author: ItemAuthor,
        description: ItemDescription,
    ) -> Self {
        Self {
            id,
            title,
            author,
            description,
            rental: None,
        }
    }

    pub fn is_rented(&self) -> bool {
        self.rental.is_some()
    }
}
