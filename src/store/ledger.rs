use tracing::info;

use crate::Price;
use crate::model::Transaction;

/// How per-user history is filtered.
///
/// The original selected transactions containing any item priced above zero,
/// which leaks nearly everyone's history to every user. The evidently
/// intended rule, filtering by the buyer, is the default; the legacy rule is
/// kept selectable for anyone who needs transcript-level compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    /// Transactions created by the requesting user.
    #[default]
    Buyer,
    /// Legacy rule: any transaction with at least one item priced above zero.
    AnyPaidItem,
}

/// The store of completed transactions, in insertion order.
#[derive(Debug, Default)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. Always succeeds; records are immutable once in.
    pub fn record(&mut self, tx: Transaction) {
        info!(
            id = %tx.id,
            buyer = %tx.buyer,
            total = %tx.total,
            items = tx.items.len(),
            payment = %tx.payment,
            "transaction recorded"
        );
        self.transactions.push(tx);
    }

    /// All transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions for the given user under the chosen filter.
    pub fn for_user<'a>(
        &'a self,
        username: &'a str,
        filter: HistoryFilter,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.transactions.iter().filter(move |tx| match filter {
            HistoryFilter::Buyer => tx.buyer == username,
            HistoryFilter::AnyPaidItem => tx.items.iter().any(|item| item.price > Price::ZERO),
        })
    }
}
