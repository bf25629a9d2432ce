pub mod console;
pub mod model;
pub mod price;
pub mod session;
pub mod store;

pub use console::{Console, StdConsole};
pub use model::{Item, PaymentMethod, Role, Transaction, User};
pub use price::Price;
pub use session::ShoppingSession;
pub use store::{CartStore, Catalog, HistoryFilter, TransactionLedger, UserDirectory};
