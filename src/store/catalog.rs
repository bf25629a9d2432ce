use std::rc::Rc;

use tracing::info;

use crate::Price;
use crate::model::{Item, SharedItem};

use super::CatalogError;

/// The store of purchasable items, in insertion order.
///
/// Ids are not required to be unique; lookups and edits act on the first
/// match, removal acts on every match. This permissiveness is deliberate.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<SharedItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. No uniqueness check; always succeeds.
    pub fn add(&mut self, item: Item) {
        info!(id = %item.id, name = %item.name, price = %item.price, "item added");
        self.items.push(item.shared());
    }

    /// Remove every item with the given id. Returns the number removed,
    /// which may be zero.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.borrow().id != id);
        let removed = before - self.items.len();
        info!(id, removed, "items removed");
        removed
    }

    /// Edit the first item with the given id, applying only the provided
    /// fields. The caller is responsible for turning unparseable price input
    /// into `None` so a bad price skips that field without blocking a rename.
    pub fn edit(
        &mut self,
        id: &str,
        new_name: Option<&str>,
        new_price: Option<Price>,
    ) -> Result<(), CatalogError> {
        let item = self
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let mut item = item.borrow_mut();
        if let Some(name) = new_name {
            item.name = name.to_string();
        }
        if let Some(price) = new_price {
            item.price = price;
        }
        info!(id, name = %item.name, price = %item.price, "item edited");
        Ok(())
    }

    /// First item with the given id, or `None`.
    pub fn get(&self, id: &str) -> Option<SharedItem> {
        self.items
            .iter()
            .find(|item| item.borrow().id == id)
            .map(Rc::clone)
    }

    /// The full sequence in insertion order, duplicate ids included.
    pub fn items(&self) -> &[SharedItem] {
        &self.items
    }
}
