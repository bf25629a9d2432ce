//! In-memory stores backing the shopping session.
//!
//! Each store is a plain owned value constructed by the caller and handed to
//! the session, so tests can run any number of independent sessions.

mod catalog;
pub use catalog::Catalog;

mod users;
pub use users::UserDirectory;

mod carts;
pub use carts::CartStore;

mod ledger;
pub use ledger::{HistoryFilter, TransactionLedger};

mod error;
pub use error::{AuthError, CartError, CatalogError, CheckoutError, ShopError};
