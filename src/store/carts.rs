use std::collections::HashMap;

use tracing::info;

use crate::model::SharedItem;

use super::{CartError, Catalog};

/// Pending item selections per regular user.
///
/// Carts hold shared references into the catalog, so a later price edit
/// changes what the cart displays. Duplicates are allowed and order is
/// preserved.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: HashMap<String, Vec<SharedItem>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look the item up in the catalog and append it to the user's cart,
    /// creating the cart on first use.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        username: &str,
        item_id: &str,
    ) -> Result<(), CartError> {
        let item = catalog
            .get(item_id)
            .ok_or_else(|| CartError::ItemNotFound(item_id.to_string()))?;

        info!(username, item_id, "item added to cart");
        self.carts.entry(username.to_string()).or_default().push(item);
        Ok(())
    }

    /// The user's cart in insertion order; empty if they have none.
    pub fn cart(&self, username: &str) -> &[SharedItem] {
        self.carts.get(username).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Empty the user's cart. Called after a successful checkout.
    pub fn clear(&mut self, username: &str) {
        if let Some(cart) = self.carts.get_mut(username) {
            info!(username, cleared = cart.len(), "cart cleared");
            cart.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Price;
    use crate::model::Item;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Item::new("1", "A", Price::from_scaled(1_000)));
        catalog.add(Item::new("2", "B", Price::from_scaled(2_000)));
        catalog
    }

    #[test]
    fn cart_is_empty_for_unknown_user() {
        let carts = CartStore::new();
        assert!(carts.cart("user1").is_empty());
    }

    #[test]
    fn add_appends_in_order_with_duplicates() {
        let catalog = catalog();
        let mut carts = CartStore::new();

        carts.add(&catalog, "user1", "1").unwrap();
        carts.add(&catalog, "user1", "2").unwrap();
        carts.add(&catalog, "user1", "1").unwrap();

        let ids: Vec<String> = carts
            .cart("user1")
            .iter()
            .map(|item| item.borrow().id.clone())
            .collect();
        assert_eq!(ids, ["1", "2", "1"]);
    }

    #[test]
    fn add_unknown_item_leaves_cart_unchanged() {
        let catalog = catalog();
        let mut carts = CartStore::new();
        carts.add(&catalog, "user1", "1").unwrap();

        let result = carts.add(&catalog, "user1", "404");
        assert_eq!(result, Err(CartError::ItemNotFound("404".to_string())));
        assert_eq!(carts.cart("user1").len(), 1);
    }

    #[test]
    fn carts_are_per_user() {
        let catalog = catalog();
        let mut carts = CartStore::new();
        carts.add(&catalog, "user1", "1").unwrap();
        carts.add(&catalog, "user2", "2").unwrap();

        assert_eq!(carts.cart("user1").len(), 1);
        assert_eq!(carts.cart("user2").len(), 1);
    }

    #[test]
    fn clear_empties_only_that_users_cart() {
        let catalog = catalog();
        let mut carts = CartStore::new();
        carts.add(&catalog, "user1", "1").unwrap();
        carts.add(&catalog, "user2", "2").unwrap();

        carts.clear("user1");
        assert!(carts.cart("user1").is_empty());
        assert_eq!(carts.cart("user2").len(), 1);
    }

    #[test]
    fn cart_sees_catalog_price_edits() {
        let mut catalog = catalog();
        let mut carts = CartStore::new();
        carts.add(&catalog, "user1", "1").unwrap();

        catalog
            .edit("1", None, Some(Price::from_scaled(9_999)))
            .unwrap();

        let cart = carts.cart("user1");
        assert_eq!(cart[0].borrow().price, Price::from_scaled(9_999));
    }
}
