//! kata: a minimal test-execution engine with bounded memory behavior.
//!
//! An [`Engine`] drives an ordered [`TestSuite`] of [`TestCase`]s through a
//! run, gates every case-state transition requested from inside a test body,
//! and accumulates pass/fail assertion evidence into a fixed-capacity ledger
//! feeding an in-memory [`Report`]. There is no discovery, no parallelism,
//! and no allocation on the assertion path.

pub mod case;
pub mod console;
pub mod engine;
pub mod errors;
pub mod ledger;
mod macros;
pub mod report;
pub mod suite;

pub use case::{CaseFn, CaseState, TestCase};
pub use engine::{Engine, EngineState};
pub use errors::{InitError, RunError};
pub use ledger::{AssertList, AssertRecord, RecordOutcome, MAX_RECORDS};
pub use report::Report;
pub use suite::TestSuite;
