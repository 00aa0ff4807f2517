//! CLI argument parsing for the order desk.
//!
//! The CLI is thin: it resolves ledger locations and hands off to the
//! command handlers, which all go through the same `OrderDesk`.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "odesk",
    version,
    about = "Track counter orders from pending to served",
    after_help = "Commands:\n  console                           Interactive menu (default)\n  add <ID> --item NAME:PRICE:QTY    Record a new pending order\n  report [--served] [--json]        Show an order report\n  fulfill <ID>                      Mark a pending order as served\n  pending                           List pending order ids\n  config [--stub]                   Show resolved configuration\n\nExamples:\n  odesk\n  odesk add a7 --customer Tom --item Tea:30:2 --item Bun:45:1\n  odesk report --json\n  odesk fulfill A7"
)]
pub struct RootArgs {
    #[command(flatten)]
    pub ledgers: LedgerArgs,

    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Ledger location flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct LedgerArgs {
    /// Config file (defaults to the per-user order-desk/config.json when present)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Pending orders ledger
    #[arg(id = "pending_file", long = "pending-file", value_name = "PATH", global = true)]
    pub pending: Option<PathBuf>,

    /// Served orders ledger
    #[arg(id = "served_file", long = "served-file", value_name = "PATH", global = true)]
    pub served: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu: add, report, fulfill, exit
    Console,
    Add(AddArgs),
    Report(ReportArgs),
    Fulfill(FulfillArgs),
    /// List pending orders as `ID: customer`
    Pending,
    Config(ConfigArgs),
}

/// Add command inputs for a single new order.
#[derive(Parser, Debug)]
#[command(about = "Record a new pending order")]
pub struct AddArgs {
    /// Order id (stored uppercased)
    #[arg(value_name = "ORDER_ID")]
    pub order_id: String,

    /// Customer name
    #[arg(long, default_value = "")]
    pub customer: String,

    /// Line item as NAME:PRICE:QTY; repeat for more items
    #[arg(long = "item", value_name = "NAME:PRICE:QTY")]
    pub items: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(about = "Show an order report")]
pub struct ReportArgs {
    /// Report the served ledger instead of pending
    #[arg(long)]
    pub served: bool,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Mark a pending order as served")]
pub struct FulfillArgs {
    /// Order id (case-insensitive)
    #[arg(value_name = "ORDER_ID")]
    pub order_id: String,
}

#[derive(Parser, Debug)]
#[command(about = "Show the resolved configuration")]
pub struct ConfigArgs {
    /// Print a default config file instead
    #[arg(long)]
    pub stub: bool,
}
