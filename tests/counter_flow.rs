mod common;

use common::{read_ledger, stderr, stdout, Ledgers};

#[test]
fn add_report_fulfill_round_trip() {
    let ledgers = Ledgers::scratch();

    let add = ledgers.run(&[
        "add", "a1", "--customer", "Tom", "--item", "Tea:30:2", "--item", "Cake:1200:1",
    ]);
    assert!(add.status.success(), "add failed: {}", stderr(&add));
    assert!(stdout(&add).contains("=> Order A1 added"));

    let pending = read_ledger(&ledgers.pending);
    assert_eq!(pending[0]["order_id"], "A1");
    assert_eq!(pending[0]["items"][1]["price"], 1200);
    assert!(!ledgers.served.exists());

    let report = ledgers.run(&["report", "--json"]);
    assert!(report.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&report)).expect("report JSON");
    assert_eq!(value["orders"][0]["total"], 1260);
    assert_eq!(value["orders"][0]["lines"][0]["subtotal"], 60);

    let text = stdout(&ledgers.run(&["report"]));
    assert!(text.contains("Order #1"));
    assert!(text.contains("Total: 1,260"));

    let list = stdout(&ledgers.run(&["pending"]));
    assert_eq!(list, "A1: Tom\n");

    let fulfill = ledgers.run(&["fulfill", "a1"]);
    assert!(fulfill.status.success(), "fulfill failed: {}", stderr(&fulfill));
    let text = stdout(&fulfill);
    assert!(text.contains("=> Order A1 served"));
    assert!(!text.contains("Order #"));

    assert_eq!(read_ledger(&ledgers.pending), serde_json::json!([]));
    assert_eq!(read_ledger(&ledgers.served)[0]["customer"], "Tom");

    let served = stdout(&ledgers.run(&["report", "--served"]));
    assert!(served.contains("Served orders"));
    assert!(served.contains("Order ID: A1"));
}

#[test]
fn first_run_without_ledgers_reports_no_orders() {
    let ledgers = Ledgers::scratch();
    let output = ledgers.run(&["report"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No orders.\n");
}

#[test]
fn fulfill_errors_exit_non_zero() {
    let ledgers = Ledgers::scratch();

    let empty = ledgers.run(&["fulfill", "Z9"]);
    assert!(!empty.status.success());
    assert!(stderr(&empty).contains("no pending orders"));

    assert!(ledgers
        .run(&["add", "A1", "--item", "Tea:30:2"])
        .status
        .success());
    let missing = ledgers.run(&["fulfill", "z9"]);
    assert!(!missing.status.success());
    assert!(stderr(&missing).contains("order Z9 not found"));
    assert_eq!(read_ledger(&ledgers.pending).as_array().map(Vec::len), Some(1));
    assert!(!ledgers.served.exists());
}

#[test]
fn add_rejects_duplicates_and_bad_items() {
    let ledgers = Ledgers::scratch();
    assert!(ledgers
        .run(&["add", "A1", "--item", "Tea:30:2"])
        .status
        .success());

    let dup = ledgers.run(&["add", "a1", "--item", "Tea:30:2"]);
    assert!(!dup.status.success());
    assert!(stderr(&dup).contains("order A1 already exists"));

    let empty = ledgers.run(&["add", "B2"]);
    assert!(!empty.status.success());
    assert!(stderr(&empty).contains("needs at least one item"));

    let negative = ledgers.run(&["add", "C3", "--item", "Tea:-1:2"]);
    assert!(!negative.status.success());
    assert!(stderr(&negative).contains("must not be negative"));

    assert_eq!(read_ledger(&ledgers.pending).as_array().map(Vec::len), Some(1));
}

#[test]
fn corrupt_ledger_is_fatal() {
    let ledgers = Ledgers::scratch();
    std::fs::write(&ledgers.pending, "{ not json").expect("write ledger");
    let output = ledgers.run(&["report"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("read orders"));
}

#[test]
fn console_session_over_stdin() {
    let ledgers = Ledgers::scratch();
    let output = ledgers.run_with_input(&[], "1\nk7\n陳小姐\n牛肉麵\n180\n2\n\n3\nK7\n4\n");
    assert!(output.status.success(), "console failed: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("=> Order K7 added"));
    assert!(text.contains("=> Order K7 served"));
    assert!(text.contains("Total: 360"));

    let served = std::fs::read_to_string(&ledgers.served).expect("read served");
    assert!(served.contains("牛肉麵"));
    assert_eq!(read_ledger(&ledgers.pending), serde_json::json!([]));
}
