use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{ItemId, UserId};

/// Per-user wishlists, keyed by user. Each list keeps insertion order and
/// holds an item at most once.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlists(BTreeMap<UserId, Vec<ItemId>>);

impl Wishlists {
    pub fn items(&self, user_id: &UserId) -> &[ItemId] {
        self.0.get(user_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, user_id: &UserId, item_id: &ItemId) -> bool {
        self.items(user_id).contains(item_id)
    }

    /// Returns `false` when the item was already listed.
    pub fn add(&mut self, user_id: UserId, item_id: ItemId) -> bool {
        let items = self.0.entry(user_id).or_default();
        if items.contains(&item_id) {
            return false;
        }
        items.push(item_id);
        true
    }

    /// Returns `false` when the item was not listed.
    pub fn remove(&mut self, user_id: &UserId, item_id: &ItemId) -> bool {
        let Some(items) = self.0.get_mut(user_id) else {
            return false;
        };
        let before = items.len();
        items.retain(|listed| listed != item_id);
        before != items.len()
    }

    /// Adds the item if absent, removes it otherwise. Returns whether it is
    /// listed afterwards.
    pub fn toggle(&mut self, user_id: UserId, item_id: ItemId) -> bool {
        if self.remove(&user_id, &item_id) {
            false
        } else {
            self.add(user_id, item_id)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{ItemId, UserId, Wishlists};

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut wishlists = Wishlists::default();
        let user = UserId::new(1);

        assert!(wishlists.add(user, ItemId::new(4)));
        assert!(!wishlists.add(user, ItemId::new(4)));
        assert!(wishlists.add(user, ItemId::new(2)));
        assert_eq!(wishlists.items(&user), &[ItemId::new(4), ItemId::new(2)]);

        assert!(wishlists.remove(&user, &ItemId::new(4)));
        assert!(!wishlists.remove(&user, &ItemId::new(4)));
        assert!(!wishlists.remove(&UserId::new(9), &ItemId::new(2)));
        assert_eq!(wishlists.items(&user), &[ItemId::new(2)]);
        assert!(wishlists.items(&UserId::new(9)).is_empty());
    }

    #[test]
    fn lists_are_per_user() {
        let mut wishlists = Wishlists::default();
        wishlists.add(UserId::new(1), ItemId::new(1));
        assert!(wishlists.contains(&UserId::new(1), &ItemId::new(1)));
        assert!(!wishlists.contains(&UserId::new(2), &ItemId::new(1)));

        assert!(!wishlists.toggle(UserId::new(1), ItemId::new(1)));
        assert!(wishlists.toggle(UserId::new(2), ItemId::new(1)));
        assert!(!wishlists.contains(&UserId::new(1), &ItemId::new(1)));
    }

    #[test]
    fn persisted_as_map_of_user_ids() -> Result<(), serde_json::Error> {
        let mut wishlists = Wishlists::default();
        wishlists.add(UserId::new(3), ItemId::new(8));
        let json = serde_json::to_string(&wishlists)?;
        assert_eq!(json, r#"{"3":[8]}"#);
        let back: Wishlists = serde_json::from_str(&json)?;
        assert_eq!(back, wishlists);
        Ok(())
    }
}
