//! Drives the bundled example suites and prints their reports.
//!
//! Exercises the whole engine surface: a fully active suite, two suites
//! with disabled cases, repeated runs accumulating into one report, and
//! the rejection of a suite that already ran.

use clap::Parser;

use kata::console::{print_report, ConsoleConfig};
use kata::{begin_case, check, fail_case, pass_case};
use kata::{Engine, TestCase, TestSuite};

#[derive(Debug, Parser)]
#[command(
    name = "demo_suites",
    version,
    about = "Run the bundled example test suites and print their reports."
)]
struct DemoArgs {
    /// Run each suite this many times without re-initializing.
    #[arg(long, default_value_t = 1)]
    repeat: u32,
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn pass_end(eng: &mut Engine) {
    begin_case!(eng);
    pass_case!(eng);
}

fn fail_end(eng: &mut Engine) {
    begin_case!(eng);
    fail_case!(eng);
}

fn check_true_then_pass(eng: &mut Engine) {
    begin_case!(eng);
    check!(eng, true);
    pass_case!(eng);
}

fn check_true_then_fail(eng: &mut Engine) {
    begin_case!(eng);
    check!(eng, true);
    fail_case!(eng);
}

fn check_false_then_pass(eng: &mut Engine) {
    begin_case!(eng);
    check!(eng, false);
    pass_case!(eng);
}

fn check_false_then_fail(eng: &mut Engine) {
    begin_case!(eng);
    check!(eng, false);
    fail_case!(eng);
}

fn all_active_suite() -> TestSuite {
    TestSuite::new(
        "example suite 1",
        vec![
            TestCase::new("pass_end", pass_end),
            TestCase::new("fail_end", fail_end),
            TestCase::new("check_true_then_pass", check_true_then_pass),
            TestCase::new("check_true_then_fail", check_true_then_fail),
            TestCase::new("check_false_then_pass", check_false_then_pass),
            TestCase::new("check_false_then_fail", check_false_then_fail),
        ],
    )
}

fn even_cases_disabled_suite() -> TestSuite {
    TestSuite::new(
        "example suite 2",
        vec![
            TestCase::disabled("pass_end", pass_end),
            TestCase::new("fail_end", fail_end),
            TestCase::disabled("check_true_then_pass", check_true_then_pass),
            TestCase::new("check_true_then_fail", check_true_then_fail),
            TestCase::disabled("check_false_then_pass", check_false_then_pass),
            TestCase::new("check_false_then_fail", check_false_then_fail),
        ],
    )
}

fn odd_cases_disabled_suite() -> TestSuite {
    TestSuite::new(
        "example suite 3",
        vec![
            TestCase::new("pass_end", pass_end),
            TestCase::disabled("fail_end", fail_end),
            TestCase::new("check_true_then_pass", check_true_then_pass),
            TestCase::disabled("check_true_then_fail", check_true_then_fail),
            TestCase::new("check_false_then_pass", check_false_then_pass),
            TestCase::disabled("check_false_then_fail", check_false_then_fail),
        ],
    )
}

fn main() {
    let args = DemoArgs::parse();
    let config = ConsoleConfig {
        use_colors: !args.no_color && atty::is(atty::Stream::Stdout),
    };
    let repeat = args.repeat.max(1);

    let mut engine = Engine::new();
    let mut all_passed = true;

    for suite in [
        all_active_suite(),
        even_cases_disabled_suite(),
        odd_cases_disabled_suite(),
    ] {
        let name = suite.name();
        if let Err(err) = engine.init(suite) {
            eprintln!("init of `{}` failed: {}", name, err);
            all_passed = false;
            continue;
        }
        for _ in 0..repeat {
            if let Err(err) = engine.run() {
                eprintln!("run of `{}` failed: {}", name, err);
                all_passed = false;
            }
        }
        if let Some(report) = engine.report() {
            print_report(report, &config);
        }
        all_passed &= engine.suite_passed();
    }

    // A suite that already ran is rejected until explicitly reset.
    if let Some(used) = engine.take_suite() {
        match engine.init(used) {
            Ok(()) => eprintln!("unexpected: a suite that already ran was accepted"),
            Err(err) => {
                println!("re-init rejected: {}", err);
                let mut suite = err.into_suite();
                suite.reset();
                if engine.init(suite).is_ok() && engine.run().is_ok() {
                    if let Some(report) = engine.report() {
                        print_report(report, &config);
                    }
                    all_passed &= engine.suite_passed();
                }
            }
        }
    }

    if !all_passed {
        std::process::exit(1);
    }
}
