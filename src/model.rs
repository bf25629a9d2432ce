//! Core domain types for the shop.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Price;

/// An item in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Business identifier. The catalog does not enforce uniqueness;
    /// lookups return the first match.
    pub id: String,
    pub name: String,
    pub price: Price,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Wrap the item in a shared cell so catalog and carts alias it.
    pub fn shared(self) -> SharedItem {
        Rc::new(RefCell::new(self))
    }
}

/// A catalog item aliased by carts.
///
/// Carts hold live references rather than snapshots, so an admin edit to an
/// item's price is visible in every cart containing it. Checkout clones the
/// item into the transaction, which is immutable from then on. The whole
/// system is single-threaded, which keeps `Rc<RefCell<_>>` sound.
pub type SharedItem = Rc<RefCell<Item>>;

/// Role of a registered user, determines which menu is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Regular,
}

/// A registered user. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique key in the directory.
    pub username: String,
    /// Stored and compared in plain text; this is a demo, not a vault.
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn admin(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: Role::Admin,
        }
    }

    pub fn regular(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: Role::Regular,
        }
    }
}

/// How a checkout was paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    Bank,
    Cod,
    Qris,
    /// Fallback for any unrecognized menu choice.
    #[default]
    Unknown,
}

impl PaymentMethod {
    /// Map a payment menu choice to a method. Anything outside 1..=3 is
    /// `Unknown`; the session warns but the checkout still goes through.
    pub fn from_choice(choice: u32) -> Self {
        match choice {
            1 => PaymentMethod::Bank,
            2 => PaymentMethod::Cod,
            3 => PaymentMethod::Qris,
            _ => PaymentMethod::Unknown,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Bank => "Bank",
            PaymentMethod::Cod => "COD",
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Generated v4 uuid, unique per checkout.
    pub id: String,
    /// Username of the regular user who checked out.
    pub buyer: String,
    /// Snapshot clones of the cart items, priced at checkout time.
    pub items: Vec<Item>,
    pub total: Price,
    pub payment: PaymentMethod,
}

impl Transaction {
    pub fn new(
        buyer: impl Into<String>,
        items: Vec<Item>,
        total: Price,
        payment: PaymentMethod,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            buyer: buyer.into(),
            items,
            total,
            payment,
        }
    }
}
