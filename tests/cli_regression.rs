// Regression test: the demo runner prints accumulated reports and exits
// nonzero when any suite fails.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn demo_runner_accumulates_and_reports_failure() {
    let mut cmd = Command::cargo_bin("demo_suites").unwrap();
    cmd.arg("--no-color").arg("--repeat").arg("2");
    cmd.assert().failure().stdout(
        contains("=== example suite 1")
            .and(contains("total 12, executed 12, disabled 0"))
            .and(contains("verdict: FAILED")),
    );
}

#[test]
fn demo_runner_rejects_then_resets_a_used_suite() {
    let mut cmd = Command::cargo_bin("demo_suites").unwrap();
    cmd.arg("--no-color");
    cmd.assert().failure().stdout(
        contains("re-init rejected:")
            .and(contains("must be Idle or Disabled")),
    );
}
