//! Handlers behind each CLI subcommand.
use crate::cli::{AddArgs, ConfigArgs, FulfillArgs, ReportArgs};
use crate::config::{config_stub, DeskConfig};
use crate::console::Console;
use crate::orders::{
    list_orders, render_pending_list, render_report, Item, OrderDesk, ReportMode,
    FULFILLED_TITLE, PENDING_TITLE, SERVED_TITLE,
};
use anyhow::{Context, Result};
use std::io;

fn open_desk(config: &DeskConfig) -> Result<OrderDesk> {
    OrderDesk::open(config).context("open order ledgers")
}

pub fn run_console(config: &DeskConfig) -> Result<()> {
    let mut desk = open_desk(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run(&mut desk)
}

pub fn run_add(config: &DeskConfig, args: &AddArgs) -> Result<()> {
    let items = args
        .items
        .iter()
        .map(|spec| Item::parse_spec(spec).with_context(|| format!("parse --item {spec:?}")))
        .collect::<Result<Vec<_>>>()?;
    let mut desk = open_desk(config)?;
    let order = desk.create_order(&args.order_id, &args.customer, items)?;
    println!("=> Order {} added", order.order_id);
    Ok(())
}

pub fn run_report(config: &DeskConfig, args: &ReportArgs) -> Result<()> {
    let desk = open_desk(config)?;
    let (orders, title) = if args.served {
        (desk.served(), SERVED_TITLE)
    } else {
        (desk.pending(), PENDING_TITLE)
    };
    let report = list_orders(orders, title, ReportMode::Listing);
    if args.json {
        let text = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{text}");
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

pub fn run_fulfill(config: &DeskConfig, args: &FulfillArgs) -> Result<()> {
    let mut desk = open_desk(config)?;
    let Some(order) = desk.fulfill_order(&args.order_id)? else {
        println!("=> Cancelled");
        return Ok(());
    };
    let report = list_orders(
        std::slice::from_ref(order),
        FULFILLED_TITLE,
        ReportMode::Fulfilled,
    );
    println!("=> Order {} served", order.order_id);
    print!("{}", render_report(&report));
    Ok(())
}

pub fn run_pending(config: &DeskConfig) -> Result<()> {
    let desk = open_desk(config)?;
    print!("{}", render_pending_list(desk.pending()));
    Ok(())
}

pub fn run_config(config: &DeskConfig, args: &ConfigArgs) -> Result<()> {
    let text = if args.stub {
        config_stub()?
    } else {
        serde_json::to_string_pretty(config).context("serialize config")?
    };
    println!("{text}");
    Ok(())
}
