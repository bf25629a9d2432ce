//! The shopping session: login, role dispatch, and checkout.
//!
//! The session owns the stores and a [`Console`] and walks a small state
//! machine: role selection, authentication, then the role's menu until the
//! user exits or logs out. All invalid input is re-read in explicit loops.

use std::collections::HashSet;

use tracing::warn;

use crate::Price;
use crate::console::Console;
use crate::model::{Item, PaymentMethod, Role, Transaction, User};
use crate::store::{
    CartStore, Catalog, CheckoutError, HistoryFilter, ShopError, TransactionLedger, UserDirectory,
};

/// What a menu decided about the session's future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Terminate the whole session.
    Exit,
    /// Return to role selection.
    Logout,
}

/// Orchestrator over the four stores, driven by an injected console.
pub struct ShoppingSession<C: Console> {
    console: C,
    catalog: Catalog,
    users: UserDirectory,
    carts: CartStore,
    ledger: TransactionLedger,
    history_filter: HistoryFilter,
}

impl<C: Console> ShoppingSession<C> {
    pub fn new(
        console: C,
        catalog: Catalog,
        users: UserDirectory,
        carts: CartStore,
        ledger: TransactionLedger,
    ) -> Self {
        Self {
            console,
            catalog,
            users,
            carts,
            ledger,
            history_filter: HistoryFilter::default(),
        }
    }

    /// Use a non-default per-user history rule.
    pub fn with_history_filter(mut self, filter: HistoryFilter) -> Self {
        self.history_filter = filter;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn carts(&self) -> &CartStore {
        &self.carts
    }

    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run the session until an Exit selection.
    pub fn run(&mut self) {
        loop {
            self.console.print("");
            self.console.print("Choose user type:");
            self.console.print("1. Admin");
            self.console.print("2. Regular User");
            self.console.print("3. Exit");

            match self.menu_choice(3) {
                1 => {
                    if self.login(Role::Admin).is_some() && self.admin_menu() == Flow::Exit {
                        return;
                    }
                }
                2 => {
                    if let Some(user) = self.login(Role::Regular) {
                        if self.user_menu(&user.username) == Flow::Exit {
                            return;
                        }
                    }
                }
                _ => {
                    self.console.print("Exiting the program. Goodbye!");
                    return;
                }
            }
        }
    }
}

/// Menus
impl<C: Console> ShoppingSession<C> {
    /// Surface a rejected operation to the user and the log, then carry on.
    fn report(&mut self, err: ShopError) {
        warn!(%err, "operation rejected");
        self.console.print(&err.to_string());
    }

    /// Read a menu choice, looping until it falls within `1..=max`.
    fn menu_choice(&mut self, max: u32) -> u32 {
        loop {
            let choice = self.console.read_u32("Enter your choice: ");
            if (1..=max).contains(&choice) {
                return choice;
            }
            self.console.print("Invalid choice. Please try again.");
        }
    }

    fn login(&mut self, role: Role) -> Option<User> {
        let label = match role {
            Role::Admin => "admin",
            Role::Regular => "regular user",
        };
        let username = self.console.read_line(&format!("Enter {label} username: "));
        let password = self.console.read_line(&format!("Enter {label} password: "));

        match self.users.authenticate(&username, &password, role) {
            Ok(user) => {
                let user = user.clone();
                self.console.print(match role {
                    Role::Admin => "Admin login successful!",
                    Role::Regular => "Regular user login successful!",
                });
                Some(user)
            }
            Err(e) => {
                self.report(e.into());
                self.console.print("Login failed. Please try again.");
                None
            }
        }
    }

    fn admin_menu(&mut self) -> Flow {
        const OPTIONS: [&str; 6] = [
            "Add Item",
            "Remove Item",
            "Edit Item",
            "View Transactions",
            "Exit",
            "Logout",
        ];
        loop {
            self.console.print("");
            self.console.print("Admin Menu:");
            for (i, option) in OPTIONS.iter().enumerate() {
                self.console.print(&format!("{}. {option}", i + 1));
            }

            match self.menu_choice(OPTIONS.len() as u32) {
                1 => self.add_item(),
                2 => self.remove_item(),
                3 => self.edit_item(),
                4 => self.view_all_transactions(),
                5 => {
                    self.console.print("Exiting the program. Goodbye!");
                    return Flow::Exit;
                }
                _ => return Flow::Logout,
            }
        }
    }

    fn user_menu(&mut self, username: &str) -> Flow {
        const OPTIONS: [&str; 6] = [
            "View Available Items",
            "Add Item to Cart",
            "Checkout",
            "View Shopping History",
            "Exit",
            "Logout",
        ];
        loop {
            self.console.print("");
            self.console.print("User Menu:");
            for (i, option) in OPTIONS.iter().enumerate() {
                self.console.print(&format!("{}. {option}", i + 1));
            }

            match self.menu_choice(OPTIONS.len() as u32) {
                1 => self.view_items(),
                2 => self.add_to_cart(username),
                3 => self.checkout(username),
                4 => self.view_history(username),
                5 => {
                    self.console.print("Exiting the program. Goodbye!");
                    return Flow::Exit;
                }
                _ => return Flow::Logout,
            }
        }
    }
}

/// Admin actions
impl<C: Console> ShoppingSession<C> {
    fn add_item(&mut self) {
        let id = self.console.read_line("Enter Item ID: ");
        let name = self.console.read_line("Enter Item Name: ");
        let price = self.console.read_price("Enter Item Price: ");

        self.catalog.add(Item::new(id, name, price));
        self.console.print("Item added successfully!");
    }

    fn remove_item(&mut self) {
        let id = self.console.read_line("Enter Item ID to remove: ");
        let removed = self.catalog.remove(&id);
        self.console.print(&format!("Removed {removed} item(s)."));
    }

    fn edit_item(&mut self) {
        let id = self.console.read_line("Enter Item ID to edit: ");
        let Some(item) = self.catalog.get(&id) else {
            self.console.print(&format!("Item not found with ID: {id}"));
            return;
        };

        self.console.print("Editing Item - Current Details:");
        Self::print_item(&mut self.console, &item.borrow());

        let new_name = self
            .console
            .read_line("Enter new Item Name (press Enter to keep the current name): ");
        let price_input = self
            .console
            .read_line("Enter new Item Price (press Enter to keep the current price): ");

        // A bad price skips only the price field; the rename still applies.
        let new_price = if price_input.trim().is_empty() {
            None
        } else {
            match price_input.parse::<Price>() {
                Ok(price) => Some(price),
                Err(_) => {
                    self.console
                        .print("Invalid price format. Item price remains unchanged.");
                    None
                }
            }
        };
        let new_name = (!new_name.is_empty()).then_some(new_name.as_str());

        match self.catalog.edit(&id, new_name, new_price) {
            Ok(()) => self.console.print("Item edited successfully!"),
            Err(e) => self.report(e.into()),
        }
    }

    fn view_all_transactions(&mut self) {
        self.console.print("All Transactions:");
        for tx in self.ledger.all() {
            Self::print_transaction(&mut self.console, tx);
        }
    }
}

/// Regular user actions
impl<C: Console> ShoppingSession<C> {
    fn view_items(&mut self) {
        self.console.print("Available Items:");
        let mut seen = HashSet::new();
        for item in self.catalog.items() {
            let item = item.borrow();
            if seen.insert(item.id.clone()) {
                Self::print_item(&mut self.console, &item);
            }
        }
    }

    fn add_to_cart(&mut self, username: &str) {
        let id = self.console.read_line("Enter Item ID to add to cart: ");
        match self.carts.add(&self.catalog, username, &id) {
            Ok(()) => self.console.print("Item added to cart successfully!"),
            Err(e) => self.report(e.into()),
        }
    }

    fn checkout(&mut self, username: &str) {
        if let Err(e) = self.try_checkout(username) {
            self.report(e.into());
        }
    }

    fn try_checkout(&mut self, username: &str) -> Result<(), CheckoutError> {
        let cart = self.carts.cart(username).to_vec();
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Snapshot the cart now; the transaction must not see later edits.
        let items: Vec<Item> = cart.iter().map(|item| item.borrow().clone()).collect();
        let total: Price = items.iter().map(|item| item.price).sum();

        self.console.print("Items in Cart:");
        for item in &items {
            Self::print_item(&mut self.console, item);
        }
        self.console.print(&format!("Total Price: {total}"));

        self.console.print("Available payment methods:");
        self.console.print("1. Bank");
        self.console.print("2. COD");
        self.console.print("3. QRIS");
        let choice = self.console.read_u32("Enter payment method: ");
        let payment = PaymentMethod::from_choice(choice);
        if payment == PaymentMethod::Unknown {
            warn!(choice, "unrecognized payment method");
            self.console
                .print("Invalid payment method choice. Defaulting to Unknown.");
        }

        self.ledger
            .record(Transaction::new(username, items, total, payment));
        self.carts.clear(username);
        self.console
            .print("Checkout successful! Thank you for shopping.");
        Ok(())
    }

    fn view_history(&mut self, username: &str) {
        self.console
            .print(&format!("Shopping History for User: {username}"));
        for tx in self.ledger.for_user(username, self.history_filter) {
            Self::print_transaction(&mut self.console, tx);
        }
    }
}

/// Rendering helpers
impl<C: Console> ShoppingSession<C> {
    fn print_item(console: &mut C, item: &Item) {
        console.print(&format!(
            "ID: {} | Name: {} | Price: {}",
            item.id, item.name, item.price
        ));
    }

    fn print_transaction(console: &mut C, tx: &Transaction) {
        console.print(&format!("Transaction ID: {}", tx.id));
        console.print(&format!("Total Price: {}", tx.total));
        console.print(&format!("Payment Method: {}", tx.payment));
        console.print("Items Purchased:");

        // Item lines are deduplicated by id within one transaction,
        // first occurrence wins.
        let mut seen = HashSet::new();
        for item in &tx.items {
            if seen.insert(item.id.clone()) {
                console.print(&format!(
                    "  ID: {} | Name: {} | Price: {}",
                    item.id, item.name, item.price
                ));
            }
        }
        console.print("-------------------------");
    }
}
