//! Order reports: a structured summary plus its console rendering.
use super::types::Order;
use serde::Serialize;

const RULE_WIDTH: usize = 50;

pub const PENDING_TITLE: &str = "Pending orders";
pub const SERVED_TITLE: &str = "Served orders";
pub const FULFILLED_TITLE: &str = "Served order";

/// How orders are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Numbered listing of a whole collection.
    Listing,
    /// Confirmation of an order that was just served; no sequence numbers.
    Fulfilled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub title: String,
    pub mode: ReportMode,
    pub orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// 1-based position within the reported collection.
    pub position: usize,
    pub order_id: String,
    pub customer: String,
    pub lines: Vec<LineSummary>,
    pub total: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub name: String,
    pub price: u64,
    pub quantity: u64,
    pub subtotal: u128,
}

impl OrderReport {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Summarize `orders` in sequence order.
pub fn list_orders(orders: &[Order], title: &str, mode: ReportMode) -> OrderReport {
    let orders = orders
        .iter()
        .enumerate()
        .map(|(idx, order)| OrderSummary {
            position: idx + 1,
            order_id: order.order_id.clone(),
            customer: order.customer.clone(),
            lines: order
                .items
                .iter()
                .map(|item| LineSummary {
                    name: item.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                    subtotal: item.subtotal(),
                })
                .collect(),
            total: order.total(),
        })
        .collect();
    OrderReport {
        title: title.to_string(),
        mode,
        orders,
    }
}

/// Render a report for the console.
pub fn render_report(report: &OrderReport) -> String {
    let mut out = String::new();
    if report.is_empty() {
        push_line(&mut out, "No orders.");
        return out;
    }

    let rule = "-".repeat(RULE_WIDTH);
    out.push('\n');
    push_line(
        &mut out,
        &format!("{bar} {} {bar}", report.title, bar = "=".repeat(20)),
    );
    for order in &report.orders {
        if report.mode == ReportMode::Listing {
            push_line(&mut out, &format!("Order #{}", order.position));
        }
        push_line(&mut out, &format!("Order ID: {}", order.order_id));
        push_line(&mut out, &format!("Customer: {}", order.customer));
        push_line(&mut out, &rule);
        push_line(&mut out, "Item\tPrice\tQty\tSubtotal");
        push_line(&mut out, &rule);
        for line in &order.lines {
            let row = format!(
                "{:<8}\t{:<6}\t{:<4}\t{}",
                line.name,
                group_thousands(u128::from(line.price)),
                line.quantity,
                group_thousands(line.subtotal),
            );
            push_line(&mut out, &row);
        }
        push_line(&mut out, &rule);
        push_line(&mut out, &format!("Total: {}", group_thousands(order.total)));
        push_line(&mut out, &"=".repeat(RULE_WIDTH));
    }
    out
}

/// One `ID: customer` line per order, for picking an order to serve.
pub fn render_pending_list(orders: &[Order]) -> String {
    let mut out = String::new();
    for order in orders {
        push_line(&mut out, &format!("{}: {}", order.order_id, order.customer));
    }
    out
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::Item;

    fn sample() -> Vec<Order> {
        vec![
            Order::new("A1", "Tom", vec![Item::new("Tea", 30, 2).unwrap()]).unwrap(),
            Order::new(
                "B2",
                "Ann",
                vec![
                    Item::new("Cake", 1250, 2).unwrap(),
                    Item::new("Water", 0, 1).unwrap(),
                ],
            )
            .unwrap(),
        ]
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn summary_computes_subtotals_and_totals() {
        let report = list_orders(&sample(), PENDING_TITLE, ReportMode::Listing);
        assert_eq!(report.orders.len(), 2);
        assert_eq!(report.orders[0].total, 60);
        assert_eq!(report.orders[1].position, 2);
        assert_eq!(report.orders[1].lines[0].subtotal, 2500);
        assert_eq!(report.orders[1].total, 2500);
    }

    #[test]
    fn totals_past_u64_render_exactly() {
        let orders = vec![Order::new(
            "G1",
            "Ann",
            vec![Item::new("Gold", u64::MAX / 2, 3).unwrap()],
        )
        .unwrap()];
        let text = render_report(&list_orders(&orders, PENDING_TITLE, ReportMode::Listing));
        assert!(text.contains("Total: 27,670,116,110,564,327,421"), "{text}");
        assert_eq!(
            group_thousands(u128::from(u64::MAX)),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn empty_report_says_so() {
        let report = list_orders(&[], PENDING_TITLE, ReportMode::Listing);
        assert!(report.is_empty());
        assert_eq!(render_report(&report), "No orders.\n");
    }

    #[test]
    fn listing_numbers_orders_and_groups_amounts() {
        let text = render_report(&list_orders(&sample(), PENDING_TITLE, ReportMode::Listing));
        assert!(text.contains("==================== Pending orders ===================="));
        assert!(text.contains("Order #1\nOrder ID: A1\nCustomer: Tom\n"));
        assert!(text.contains("Order #2"));
        assert!(text.contains("1,250"));
        assert!(text.contains("Total: 2,500"));
        assert!(text.contains("Total: 60"));
    }

    #[test]
    fn fulfilled_mode_omits_sequence_numbers() {
        let orders = sample();
        let text = render_report(&list_orders(&orders[..1], FULFILLED_TITLE, ReportMode::Fulfilled));
        assert!(!text.contains("Order #"));
        assert!(text.contains("Order ID: A1"));
        assert!(text.contains("Total: 60"));
    }

    #[test]
    fn pending_list_is_one_line_per_order() {
        assert_eq!(render_pending_list(&sample()), "A1: Tom\nB2: Ann\n");
        assert_eq!(render_pending_list(&[]), "");
    }

    #[test]
    fn report_serializes_raw_integers() {
        let report = list_orders(&sample(), PENDING_TITLE, ReportMode::Listing);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["mode"], "listing");
        assert_eq!(value["orders"][1]["lines"][0]["subtotal"], 2500);
    }
}
