//! Error types for store operations.

use thiserror::Error;

/// Top-level error covering every store operation the session drives.
///
/// None of these are fatal: the session reports each as a console message
/// and carries on.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("cannot add to cart: {0}")]
    Cart(#[from] CartError),

    #[error("cannot proceed to checkout: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Error during a catalog edit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item not found with ID: {0}")]
    NotFound(String),
}

/// Error during authentication.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Error when adding to a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("item not found with ID: {0}")]
    ItemNotFound(String),
}

/// Error during checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("your cart is empty")]
    EmptyCart,
}
