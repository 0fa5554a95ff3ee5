//! Lifecycle marker and assertion macros for test-case bodies.
//!
//! A body must call `begin_case!` before any assertion and exactly one of
//! `pass_case!`/`fail_case!` before returning. Each macro captures its
//! source location and expands to an expression returning the resulting
//! [`CaseState`](crate::CaseState), which call sites conventionally ignore.

/// Mark the start of the current test case.
#[macro_export]
macro_rules! begin_case {
    ($engine:expr) => {
        $engine.mark(
            $crate::AssertRecord::new(file!(), line!()),
            $crate::CaseState::Executing,
        )
    };
}

/// Mark the current test case as passed.
#[macro_export]
macro_rules! pass_case {
    ($engine:expr) => {
        $engine.mark(
            $crate::AssertRecord::new(file!(), line!()),
            $crate::CaseState::Pass,
        )
    };
}

/// Mark the current test case as failed.
#[macro_export]
macro_rules! fail_case {
    ($engine:expr) => {
        $engine.mark(
            $crate::AssertRecord::new(file!(), line!()),
            $crate::CaseState::Fail,
        )
    };
}

/// Record a boolean assertion; a false condition fails the current case.
#[macro_export]
macro_rules! check {
    ($engine:expr, $cond:expr) => {
        $engine.check($crate::AssertRecord::new(file!(), line!()), $cond)
    };
}
