//! Precondition failures reported by the engine's lifecycle operations.
//!
//! Macro misuse inside a running case is never an `Err`; it is converted
//! into failing ledger records and an inert Disabled signal. Only the
//! init/run preconditions surface as error values.

use thiserror::Error;

use crate::case::CaseState;
use crate::suite::TestSuite;

/// Initialization rejected the suite. The suite travels back inside the
/// error so the caller keeps ownership and can reset and retry.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("case `{case}` is in state {found:?}; every case must be Idle or Disabled at initialization")]
    CaseNotRunnable {
        case: &'static str,
        found: CaseState,
        suite: TestSuite,
    },
}

impl InitError {
    /// Reclaim the rejected suite.
    pub fn into_suite(self) -> TestSuite {
        match self {
            InitError::CaseNotRunnable { suite, .. } => suite,
        }
    }
}

/// A run was requested in a state that cannot accept one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("engine is not initialized; initialize it with a valid suite first")]
    NotInitialized,
}
