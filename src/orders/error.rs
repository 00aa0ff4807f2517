//! Error kinds surfaced by the order store and workflow.
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which numeric item field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Price,
    Quantity,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Price => f.write_str("price"),
            ItemField::Quantity => f.write_str("quantity"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order {0} already exists")]
    DuplicateOrder(String),

    #[error("order {0} needs at least one item")]
    EmptyOrder(String),

    #[error("order id must not be empty")]
    BlankOrderId,

    #[error("invalid {field}: {reason} (got {input:?})")]
    InvalidItemInput {
        field: ItemField,
        input: String,
        reason: &'static str,
    },

    #[error("no pending orders")]
    NoPendingOrders,

    #[error("order {0} not found")]
    OrderNotFound(String),

    #[error("read orders {}", path.display())]
    StoreRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write orders {}", path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OrderError {
    /// Store failures abort the current operation; everything else is
    /// reported to the operator and the session continues.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            OrderError::StoreRead { .. } | OrderError::StoreWrite { .. }
        )
    }
}
