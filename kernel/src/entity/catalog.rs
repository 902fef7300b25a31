use std::collections::HashMap;

use crate::entity::{CatalogItem, ItemId, Rental, RentalMark};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Availability {
    #[default]
    All,
    Available,
    Rented,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CatalogFilter {
    query: Option<String>,
    availability: Availability,
}

impl CatalogFilter {
    pub fn new(query: Option<String>, availability: Availability) -> Self {
        let query = query
            .map(|query| query.trim().to_lowercase())
            .filter(|query| !query.is_empty());
        Self {
            query,
            availability,
        }
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        let availability = match self.availability {
            Availability::All => true,
            Availability::Available => !item.is_rented(),
            Availability::Rented => item.is_rented(),
        };
        availability
            && self.query.as_deref().map_or(true, |query| {
                [
                    item.title().as_ref(),
                    item.description().as_ref(),
                    item.author().as_ref(),
                ]
                .iter()
                .any(|text| text.to_lowercase().contains(query))
            })
    }
}

/// Snapshot of the item catalog with availability derived from the ledger.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn find(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Swaps in a freshly fetched snapshot. Callers reconcile afterwards.
    pub fn replace(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
    }

    /// Rebuilds every item's availability from scratch: clear all marks, then
    /// mark each item referenced by an active rental. Rentals for items that
    /// are not in the snapshot are skipped.
    pub fn reconcile<'a>(&mut self, active: impl IntoIterator<Item = &'a Rental>) {
        self.items
            .iter_mut()
            .for_each(|item| item.substitute(|item| *item.rental = None));

        let index = self
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| (*item.id(), position))
            .collect::<HashMap<ItemId, usize>>();

        for rental in active.into_iter().filter(|rental| rental.is_active()) {
            if let Some(item) = index
                .get(rental.item_id())
                .and_then(|position| self.items.get_mut(*position))
            {
                let mark = RentalMark::from(rental);
                item.substitute(|item| *item.rental = Some(mark));
            }
        }
    }

    pub fn search(&self, filter: &CatalogFilter) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .collect()
    }
}
