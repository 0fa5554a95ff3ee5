//! Ledger overflow: recorded entries pin at capacity while attempts and
//! the failure hook keep going.

use std::cell::Cell;
use std::rc::Rc;

use kata::{begin_case, check, fail_case, pass_case};
use kata::{Engine, TestCase, TestSuite, MAX_RECORDS};

const FLOOD: u32 = 200;

fn flood_failing_checks(eng: &mut Engine) {
    begin_case!(eng);
    for _ in 0..FLOOD {
        check!(eng, false);
    }
    fail_case!(eng);
}

fn flood_passing_checks(eng: &mut Engine) {
    begin_case!(eng);
    for _ in 0..FLOOD {
        check!(eng, true);
    }
    pass_case!(eng);
}

#[test]
fn failing_records_pin_at_capacity_but_attempts_do_not() {
    let mut engine = Engine::new();
    engine
        .init(TestSuite::new(
            "flood fail",
            vec![TestCase::new("flood", flood_failing_checks)],
        ))
        .unwrap();
    engine.run().unwrap();

    let report = engine.report().expect("report after completion");
    assert_eq!(report.fail_records.len(), MAX_RECORDS);
    // Every check plus the terminal fail marker is counted.
    assert_eq!(report.fail_records.attempts(), FLOOD as u64 + 1);
    assert_eq!(report.failed, 1);
    assert!(report.pass_records.is_empty());
}

#[test]
fn passing_records_pin_at_capacity_but_attempts_do_not() {
    let mut engine = Engine::new();
    engine
        .init(TestSuite::new(
            "flood pass",
            vec![TestCase::new("flood", flood_passing_checks)],
        ))
        .unwrap();
    engine.run().unwrap();

    let report = engine.report().expect("report after completion");
    assert_eq!(report.pass_records.len(), MAX_RECORDS);
    assert_eq!(report.pass_records.attempts(), FLOOD as u64 + 1);
    assert_eq!(report.passed, 1);
    assert!(report.fail_records.is_empty());
    assert!(engine.suite_passed());
}

#[test]
fn failure_hook_fires_even_for_dropped_records() {
    let failures = Rc::new(Cell::new(0u64));
    let f = failures.clone();

    let suite = TestSuite::new(
        "hook past capacity",
        vec![TestCase::new("flood", flood_failing_checks)],
    )
    .with_failure(move |_| f.set(f.get() + 1));

    let mut engine = Engine::new();
    engine.init(suite).unwrap();
    engine.run().unwrap();

    // One invocation per failing assertion, ledger capacity notwithstanding.
    assert_eq!(failures.get(), FLOOD as u64 + 1);
    let report = engine.report().expect("report after completion");
    assert_eq!(report.fail_records.len(), MAX_RECORDS);
}

#[test]
fn recorded_locations_keep_insertion_order() {
    fn two_checks(eng: &mut Engine) {
        begin_case!(eng);
        check!(eng, false);
        check!(eng, false);
        fail_case!(eng);
    }

    let mut engine = Engine::new();
    engine
        .init(TestSuite::new(
            "ordered",
            vec![TestCase::new("two", two_checks)],
        ))
        .unwrap();
    engine.run().unwrap();

    let report = engine.report().expect("report after completion");
    let records = report.fail_records.as_slice();
    assert_eq!(records.len(), 3);
    assert!(records[0].line < records[1].line);
    assert!(records[1].line < records[2].line);
    assert!(records[0].file.ends_with("ledger_capacity.rs"));
}
