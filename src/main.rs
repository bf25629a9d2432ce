use tracing_subscriber::EnvFilter;

use shoplet::{
    CartStore, Catalog, Item, Price, ShoppingSession, StdConsole, TransactionLedger, User,
    UserDirectory,
};

fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Item::new("001", "Kemeja", Price::from_float(150.0)));
    catalog.add(Item::new("002", "Celana", Price::from_float(120.0)));
    catalog.add(Item::new("003", "Sepatu", Price::from_float(200.0)));
    catalog
}

fn seed_users() -> UserDirectory {
    let mut users = UserDirectory::new();
    users.add(User::admin("admin1", "adminpassword"));
    users.add(User::regular("user1", "userpassword"));
    users.add(User::regular("user2", "userpassword2"));
    users.add(User::admin("admin2", "adminpassword2"));
    users
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let mut session = ShoppingSession::new(
        StdConsole::new(),
        seed_catalog(),
        seed_users(),
        CartStore::new(),
        TransactionLedger::new(),
    );
    session.run();
}
