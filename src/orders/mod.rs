//! Order records, their JSON ledgers, and the pending -> served lifecycle.
mod error;
mod report;
mod store;
mod types;
mod workflow;

pub use error::OrderError;
pub use report::{
    list_orders, render_pending_list, render_report, ReportMode, FULFILLED_TITLE, PENDING_TITLE,
    SERVED_TITLE,
};
#[cfg(test)]
pub(crate) use store::load_orders;
pub use types::{parse_price, parse_quantity, Item};
pub use workflow::OrderDesk;
