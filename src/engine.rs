//! The suite controller: drives a suite through a run and gates every
//! case-state transition requested from inside a test body.
//!
//! Engine lifecycle:
//!
//! ```text
//! [*]      -> NotReady
//! NotReady -> Ready     : init()
//! Ready    -> Running   : run() - entry
//! Running  -> Complete  : run() - exit
//! Complete -> Ready     : init()
//! ```
//!
//! Running again without re-initializing is allowed; the report counters
//! accumulate across runs. Only `init` clears them.

use log::{debug, trace};

use crate::case::CaseState;
use crate::errors::{InitError, RunError};
use crate::ledger::{AssertRecord, RecordOutcome};
use crate::report::Report;
use crate::suite::TestSuite;

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No valid suite; `run` is refused.
    NotReady,
    /// Initialized and ready to run.
    Ready,
    /// Inside `run`, iterating cases.
    Running,
    /// A run finished; the report is readable.
    Complete,
}

/// An explicitly owned execution context for one suite at a time.
///
/// The engine owns the suite from `init` until `take_suite` or the next
/// `init`, tracks the currently executing case by index, and accumulates
/// the [`Report`]. Independent engines are fully independent; nothing here
/// is process-global.
pub struct Engine {
    state: EngineState,
    suite: Option<TestSuite>,
    current: Option<usize>,
    report: Report,
}

impl Engine {
    pub const fn new() -> Self {
        Self {
            state: EngineState::NotReady,
            suite: None,
            current: None,
            report: Report::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Take ownership of the suite, validate it, and arm the engine.
    ///
    /// Every case must be Idle or Disabled. A suite carrying Executing,
    /// Pass or Fail states (typically one that already ran and was not
    /// reset) is rejected before the report is touched, and handed back
    /// inside the error.
    pub fn init(&mut self, suite: TestSuite) -> Result<(), InitError> {
        self.state = EngineState::NotReady;
        self.current = None;

        let bad = suite
            .cases()
            .iter()
            .find(|case| !matches!(case.state(), CaseState::Idle | CaseState::Disabled))
            .map(|case| (case.name(), case.state()));
        if let Some((case, found)) = bad {
            debug!("suite `{}` rejected: case `{}` is {:?}", suite.name(), case, found);
            return Err(InitError::CaseNotRunnable { case, found, suite });
        }

        let count = suite.len();
        self.report.clear_for(suite.name());
        self.current = if suite.is_empty() { None } else { Some(0) };
        self.suite = Some(suite);
        self.state = EngineState::Ready;
        debug!("suite `{}` initialized: {} cases", self.report.name, count);
        Ok(())
    }

    /// Run every case of the initialized suite in order.
    ///
    /// Disabled cases are counted and skipped without touching any hook.
    /// Every other case is set Executing, wrapped in the startup/teardown
    /// hooks, and invoked; a case still not in Pass when its body returns
    /// is counted as failed.
    pub fn run(&mut self) -> Result<(), RunError> {
        if self.state == EngineState::NotReady {
            return Err(RunError::NotInitialized);
        }
        let count = match self.suite.as_ref() {
            Some(suite) => suite.len(),
            None => return Err(RunError::NotInitialized),
        };

        self.report.total += count as u32;
        self.state = EngineState::Running;
        debug!("suite `{}`: running {} cases", self.report.name, count);

        for idx in 0..count {
            self.current = Some(idx);

            let Some(suite) = self.suite.as_mut() else { break };
            if suite.cases()[idx].state() == CaseState::Disabled {
                self.report.disabled += 1;
                continue;
            }

            suite.cases_mut()[idx].set_state(CaseState::Executing);
            let name = suite.cases()[idx].name();
            let func = suite.cases()[idx].func();
            trace!("case `{}` executing", name);
            if let Some(startup) = suite.startup.as_mut() {
                startup();
            }

            func(self);

            if let Some(suite) = self.suite.as_mut() {
                if let Some(teardown) = suite.teardown.as_mut() {
                    teardown();
                }
            }

            self.report.executed += 1;
            let end_state = match self.suite.as_ref() {
                Some(suite) => suite.cases()[idx].state(),
                None => CaseState::Fail,
            };
            if end_state == CaseState::Pass {
                self.report.passed += 1;
            } else {
                // Exiting the body without a terminal marker leaves the
                // case Executing, which counts as a failure.
                self.report.failed += 1;
            }
            trace!("case `{}` finished: {:?}", name, end_state);
        }

        self.state = EngineState::Complete;
        debug!(
            "suite `{}` complete: {} passed, {} failed, {} disabled",
            self.report.name, self.report.passed, self.report.failed, self.report.disabled
        );
        Ok(())
    }

    /// Request a state transition for the current case, as the lifecycle
    /// marker macros do.
    ///
    /// Legality is gated on the case's present state: an Idle case accepts
    /// only Executing; a Disabled case is inert; a started case rejects
    /// Idle/Disabled requests. Illegal requests append a failing record and
    /// return the Disabled signal. Past the gate, a Fail request is always
    /// honored with a failing record; a Pass request is honored with a
    /// passing record only from Executing and is otherwise a silent no-op.
    /// Returns the requested state on every legal request.
    pub fn mark(&mut self, record: AssertRecord, requested: CaseState) -> CaseState {
        if self.state == EngineState::NotReady {
            return CaseState::Disabled;
        }
        debug_assert!(self.current.is_some(), "no current case while initialized");

        match self.current_case_state() {
            CaseState::Idle => {
                if requested != CaseState::Executing {
                    // Markers fired out of order, before the case started.
                    let _ = self.record(record, false);
                    return CaseState::Disabled;
                }
            }
            CaseState::Disabled => return CaseState::Disabled,
            CaseState::Executing | CaseState::Pass | CaseState::Fail => {
                if requested == CaseState::Idle || requested == CaseState::Disabled {
                    // No marker requests these; the macros are being bypassed.
                    let _ = self.record(record, false);
                    return CaseState::Disabled;
                }
            }
        }

        match requested {
            CaseState::Fail => {
                // Failing is always honored; the failing record also
                // forces the case state over.
                let _ = self.record(record, false);
            }
            CaseState::Pass if self.current_case_state() == CaseState::Executing => {
                let _ = self.record(record, true);
                self.set_current_state(CaseState::Pass);
            }
            _ => {}
        }
        requested
    }

    /// Record a boolean assertion for the current case.
    ///
    /// Outside a run this is inert: before initialization it returns the
    /// Disabled signal, and in Ready/Complete it returns the current case's
    /// state without touching the ledger. During a run the outcome is
    /// appended to the matching list, and a false condition forces the case
    /// to Fail and fires the failure hook.
    pub fn check(&mut self, record: AssertRecord, cond: bool) -> CaseState {
        if self.state == EngineState::NotReady {
            return CaseState::Disabled;
        }
        if self.state != EngineState::Running {
            return self.current_case_state();
        }
        let _ = self.record(record, cond);
        self.current_case_state()
    }

    /// True once a run has finished and the report is valid.
    pub fn suite_completed(&self) -> bool {
        self.state == EngineState::Complete
    }

    /// True when the run completed and every executed case passed.
    pub fn suite_passed(&self) -> bool {
        self.suite_completed() && self.report.all_passed()
    }

    /// The accumulated report, readable only once a run has completed.
    pub fn report(&self) -> Option<&Report> {
        if self.suite_completed() {
            Some(&self.report)
        } else {
            None
        }
    }

    /// Reclaim the suite. The engine returns to NotReady and must be
    /// initialized again before the next run.
    pub fn take_suite(&mut self) -> Option<TestSuite> {
        self.state = EngineState::NotReady;
        self.current = None;
        self.suite.take()
    }

    /// Append to the ledger and, on failure, force the current case to
    /// Fail and fire the failure hook. The hook fires whether or not the
    /// record fit in the ledger.
    fn record(&mut self, record: AssertRecord, cond: bool) -> RecordOutcome {
        debug_assert!(
            self.state == EngineState::Running,
            "assertion recorded outside an active run"
        );
        let outcome = if cond {
            self.report.pass_records.push(record)
        } else {
            self.report.fail_records.push(record)
        };
        if !cond {
            debug_assert!(self.current.is_some(), "failing assertion with no current case");
            if let (Some(idx), Some(suite)) = (self.current, self.suite.as_mut()) {
                if let Some(case) = suite.cases_mut().get_mut(idx) {
                    case.set_state(CaseState::Fail);
                }
                if let Some(failure) = suite.failure.as_mut() {
                    failure(&record);
                }
            }
        }
        outcome
    }

    fn current_case_state(&self) -> CaseState {
        match (self.current, self.suite.as_ref()) {
            (Some(idx), Some(suite)) => match suite.cases().get(idx) {
                Some(case) => case.state(),
                None => CaseState::Disabled,
            },
            _ => CaseState::Disabled,
        }
    }

    fn set_current_state(&mut self, state: CaseState) {
        if let (Some(idx), Some(suite)) = (self.current, self.suite.as_mut()) {
            if let Some(case) = suite.cases_mut().get_mut(idx) {
                case.set_state(state);
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
