//! Interactive menu loop for the counter.
//!
//! Input and output are injected so the loop can be driven from tests.
//! Operator mistakes are printed and the loop continues; ledger I/O failures
//! end the session with an error.
use crate::orders::{
    list_orders, parse_price, parse_quantity, render_pending_list, render_report, Item,
    OrderDesk, OrderError, ReportMode, FULFILLED_TITLE, PENDING_TITLE,
};
use anyhow::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\n*************** Menu ***************\n\
1. Add order\n\
2. Show order report\n\
3. Serve an order\n\
4. Exit\n\
************************************";

enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the operator picks exit or input ends.
    pub fn run(&mut self, desk: &mut OrderDesk) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.add_order(desk)?,
                "2" => self.show_report(desk)?,
                "3" => self.serve_order(desk)?,
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "=> Please choose a valid option (1-4)")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn add_order(&mut self, desk: &mut OrderDesk) -> Result<Flow> {
        let Some(raw_id) = self.prompt("Order id: ")? else {
            return Ok(Flow::Exit);
        };
        let order_id = match desk.ensure_available(&raw_id) {
            Ok(order_id) => order_id,
            Err(err) => {
                self.report_error(err)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(customer) = self.prompt("Customer name: ")? else {
            return Ok(Flow::Exit);
        };

        let mut items = Vec::new();
        loop {
            let Some(name) = self.prompt("Item name (empty to finish): ")? else {
                return Ok(Flow::Exit);
            };
            if name.is_empty() {
                break;
            }
            let Some(price) = self.read_number("Price: ", parse_price)? else {
                return Ok(Flow::Exit);
            };
            let Some(quantity) = self.read_number("Quantity: ", parse_quantity)? else {
                return Ok(Flow::Exit);
            };
            items.push(Item::new(name, price, quantity)?);
        }

        match desk.create_order(&order_id, &customer, items) {
            Ok(order) => writeln!(self.output, "=> Order {} added", order.order_id)?,
            Err(err) => self.report_error(err)?,
        }
        Ok(Flow::Continue)
    }

    fn show_report(&mut self, desk: &OrderDesk) -> Result<Flow> {
        let report = list_orders(desk.pending(), PENDING_TITLE, ReportMode::Listing);
        write!(self.output, "{}", render_report(&report))?;
        Ok(Flow::Continue)
    }

    fn serve_order(&mut self, desk: &mut OrderDesk) -> Result<Flow> {
        if desk.pending().is_empty() {
            self.report_error(OrderError::NoPendingOrders)?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output, "Pending orders:")?;
        write!(self.output, "{}", render_pending_list(desk.pending()))?;
        let Some(raw_id) = self.prompt("Order id to serve (Enter to cancel): ")? else {
            return Ok(Flow::Exit);
        };

        match desk.fulfill_order(&raw_id) {
            Ok(Some(order)) => {
                let report = list_orders(
                    std::slice::from_ref(order),
                    FULFILLED_TITLE,
                    ReportMode::Fulfilled,
                );
                writeln!(self.output, "=> Order {} served", order.order_id)?;
                write!(self.output, "{}", render_report(&report))?;
            }
            Ok(None) => writeln!(self.output, "=> Cancelled")?,
            Err(err) => self.report_error(err)?,
        }
        Ok(Flow::Continue)
    }

    /// Re-prompt until `parse` accepts the input. `None` means input ended.
    fn read_number<F>(&mut self, label: &str, parse: F) -> Result<Option<u64>>
    where
        F: Fn(&str) -> Result<u64, OrderError>,
    {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "=> Error: {err}; please re-enter")?,
            }
        }
    }

    fn report_error(&mut self, err: OrderError) -> Result<()> {
        if err.is_fatal() {
            return Err(err.into());
        }
        writeln!(self.output, "=> Error: {err}")?;
        Ok(())
    }

    /// Print `label` and read one line without its terminator.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
