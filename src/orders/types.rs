//! Order and item records as persisted in the ledger files.
use super::error::{ItemField, OrderError};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: u64,
    pub quantity: u64,
}

impl Item {
    /// Build an item from already-parsed numbers; `quantity` must be at least 1.
    pub fn new(name: impl Into<String>, price: u64, quantity: u64) -> Result<Self, OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidItemInput {
                field: ItemField::Quantity,
                input: quantity.to_string(),
                reason: "must be a positive integer",
            });
        }
        Ok(Self {
            name: name.into(),
            price,
            quantity,
        })
    }

    /// Parse a `NAME:PRICE:QTY` item spec. The name may itself contain colons.
    pub fn parse_spec(spec: &str) -> Result<Self, OrderError> {
        let mut parts = spec.rsplitn(3, ':');
        let quantity = parts.next().unwrap_or_default();
        let price = parts.next();
        let name = parts.next();
        let (Some(price), Some(name)) = (price, name) else {
            return Err(OrderError::InvalidItemInput {
                field: ItemField::Price,
                input: spec.to_string(),
                reason: "expected NAME:PRICE:QTY",
            });
        };
        Self::new(name, parse_price(price)?, parse_quantity(quantity)?)
    }

    /// Exact `price * quantity`; a `u64` product always fits in `u128`.
    pub fn subtotal(&self) -> u128 {
        u128::from(self.price) * u128::from(self.quantity)
    }
}

/// A customer order. `order_id` is always stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer: String,
    pub items: Vec<Item>,
}

impl Order {
    pub fn new(
        order_id: &str,
        customer: impl Into<String>,
        items: Vec<Item>,
    ) -> Result<Self, OrderError> {
        let order_id = normalize_order_id(order_id);
        if order_id.is_empty() {
            return Err(OrderError::BlankOrderId);
        }
        if items.is_empty() {
            return Err(OrderError::EmptyOrder(order_id));
        }
        Ok(Self {
            order_id,
            customer: customer.into(),
            items,
        })
    }

    /// Sum of subtotals. Saturates only past `u128::MAX`, which needs
    /// several items each priced and counted near `u64::MAX`.
    pub fn total(&self) -> u128 {
        self.items
            .iter()
            .fold(0u128, |acc, item| acc.saturating_add(item.subtotal()))
    }
}

/// Canonical form of an operator-typed order id: uppercased as typed.
pub fn normalize_order_id(raw: &str) -> String {
    raw.to_uppercase()
}

/// Parse a unit price typed by the operator.
pub fn parse_price(raw: &str) -> Result<u64, OrderError> {
    let value = parse_integer(raw, ItemField::Price)?;
    check_price(value, raw)
}

/// Parse a quantity typed by the operator.
pub fn parse_quantity(raw: &str) -> Result<u64, OrderError> {
    let value = parse_integer(raw, ItemField::Quantity)?;
    check_quantity(value, raw)
}

/// Integers too long for `i128` clamp to its bounds so the range checks
/// below report them by sign instead of as non-numeric.
fn parse_integer(raw: &str, field: ItemField) -> Result<i128, OrderError> {
    match raw.trim().parse::<i128>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i128::MAX),
            IntErrorKind::NegOverflow => Ok(i128::MIN),
            _ => Err(OrderError::InvalidItemInput {
                field,
                input: raw.to_string(),
                reason: "must be an integer",
            }),
        },
    }
}

fn check_price(value: i128, raw: &str) -> Result<u64, OrderError> {
    let reason = if value < 0 {
        "must not be negative"
    } else {
        match u64::try_from(value) {
            Ok(price) => return Ok(price),
            Err(_) => "exceeds the supported range",
        }
    };
    Err(OrderError::InvalidItemInput {
        field: ItemField::Price,
        input: raw.to_string(),
        reason,
    })
}

fn check_quantity(value: i128, raw: &str) -> Result<u64, OrderError> {
    let reason = if value < 1 {
        "must be a positive integer"
    } else {
        match u64::try_from(value) {
            Ok(quantity) => return Ok(quantity),
            Err(_) => "exceeds the supported range",
        }
    };
    Err(OrderError::InvalidItemInput {
        field: ItemField::Quantity,
        input: raw.to_string(),
        reason,
    })
}
