//! Order lifecycle over the pending and served ledgers.
//!
//! `OrderDesk` owns both collections for the length of a session. Every
//! mutation is followed by a full rewrite of the affected ledger(s); if the
//! write fails the in-memory change is undone before the error is returned.
use super::error::OrderError;
use super::store::OrderStore;
use super::types::{normalize_order_id, Item, Order};
use crate::config::DeskConfig;

#[derive(Debug)]
pub struct OrderDesk {
    pending: Vec<Order>,
    served: Vec<Order>,
    pending_store: OrderStore,
    served_store: OrderStore,
}

impl OrderDesk {
    /// Load both ledgers named by `config`.
    pub fn open(config: &DeskConfig) -> Result<Self, OrderError> {
        Self::from_stores(
            OrderStore::new(&config.pending_path),
            OrderStore::new(&config.served_path),
        )
    }

    pub fn from_stores(
        pending_store: OrderStore,
        served_store: OrderStore,
    ) -> Result<Self, OrderError> {
        let pending = pending_store.load()?;
        let served = served_store.load()?;
        Ok(Self {
            pending,
            served,
            pending_store,
            served_store,
        })
    }

    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    pub fn served(&self) -> &[Order] {
        &self.served
    }

    /// Normalize `raw_id` and confirm no pending order already uses it.
    ///
    /// The console calls this before collecting items so a clash is reported
    /// up front; `create_order` checks again.
    pub fn ensure_available(&self, raw_id: &str) -> Result<String, OrderError> {
        let order_id = normalize_order_id(raw_id);
        if order_id.is_empty() {
            return Err(OrderError::BlankOrderId);
        }
        if self.pending.iter().any(|order| order.order_id == order_id) {
            return Err(OrderError::DuplicateOrder(order_id));
        }
        Ok(order_id)
    }

    /// Append a new pending order and persist the pending ledger.
    pub fn create_order(
        &mut self,
        raw_id: &str,
        customer: &str,
        items: Vec<Item>,
    ) -> Result<&Order, OrderError> {
        let order_id = self.ensure_available(raw_id)?;
        let order = Order::new(&order_id, customer, items)?;

        self.pending.push(order);
        if let Err(err) = self.pending_store.save(&self.pending) {
            self.pending.pop();
            tracing::warn!(order_id = %order_id, "pending ledger write failed; order discarded");
            return Err(err);
        }
        tracing::info!(order_id = %order_id, pending = self.pending.len(), "order created");
        Ok(&self.pending[self.pending.len() - 1])
    }

    /// Move the pending order named by `raw_id` to the served ledger.
    ///
    /// Empty input is a cancellation and yields `Ok(None)` without touching
    /// either ledger. Whitespace is part of the id, as it is when creating.
    pub fn fulfill_order(&mut self, raw_id: &str) -> Result<Option<&Order>, OrderError> {
        if self.pending.is_empty() {
            return Err(OrderError::NoPendingOrders);
        }
        let order_id = normalize_order_id(raw_id);
        if order_id.is_empty() {
            return Ok(None);
        }
        let Some(index) = self
            .pending
            .iter()
            .position(|order| order.order_id == order_id)
        else {
            return Err(OrderError::OrderNotFound(order_id));
        };

        let order = self.pending.remove(index);
        self.served.push(order);
        if let Err(err) = self.persist_transfer(index) {
            tracing::warn!(order_id = %order_id, "ledger write failed; order returned to pending");
            return Err(err);
        }
        tracing::info!(
            order_id = %order_id,
            pending = self.pending.len(),
            served = self.served.len(),
            "order served"
        );
        Ok(self.served.last())
    }

    /// Write both ledgers after a transfer out of pending slot `index`,
    /// restoring the previous state if either write fails.
    fn persist_transfer(&mut self, index: usize) -> Result<(), OrderError> {
        let result = self
            .pending_store
            .save(&self.pending)
            .map_err(|err| (err, false))
            .and_then(|()| self.served_store.save(&self.served).map_err(|err| (err, true)));
        let Err((err, pending_written)) = result else {
            return Ok(());
        };
        if let Some(order) = self.served.pop() {
            self.pending.insert(index, order);
        }
        if pending_written {
            self.restore_pending_ledger();
        }
        Err(err)
    }

    /// Rewrite the pending ledger from memory after a half-finished transfer.
    /// Failure leaves the order missing on disk until the next pending write.
    fn restore_pending_ledger(&self) {
        if let Err(err) = self.pending_store.save(&self.pending) {
            tracing::warn!(
                error = %err,
                pending = self.pending.len(),
                "pending ledger restore failed; file is missing pending orders"
            );
        }
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
