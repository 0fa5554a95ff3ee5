//! Suite assembly: an ordered collection of cases plus lifecycle hooks.

use core::fmt;

use crate::case::{CaseState, TestCase};
use crate::ledger::AssertRecord;

/// An ordered, fixed collection of test cases with optional hooks.
///
/// The startup and teardown hooks run around every executed (non-disabled)
/// case; the failure hook runs on every failing assertion. Hooks are plain
/// closures and carry whatever context they capture.
pub struct TestSuite {
    name: &'static str,
    cases: Vec<TestCase>,
    pub(crate) startup: Option<Box<dyn FnMut()>>,
    pub(crate) teardown: Option<Box<dyn FnMut()>>,
    pub(crate) failure: Option<Box<dyn FnMut(&AssertRecord)>>,
}

impl TestSuite {
    pub fn new(name: &'static str, cases: Vec<TestCase>) -> Self {
        Self {
            name,
            cases,
            startup: None,
            teardown: None,
            failure: None,
        }
    }

    /// Hook invoked before each executed case.
    pub fn with_startup(mut self, hook: impl FnMut() + 'static) -> Self {
        self.startup = Some(Box::new(hook));
        self
    }

    /// Hook invoked after each executed case.
    pub fn with_teardown(mut self, hook: impl FnMut() + 'static) -> Self {
        self.teardown = Some(Box::new(hook));
        self
    }

    /// Hook invoked on every failing assertion, with its location.
    pub fn with_failure(mut self, hook: impl FnMut(&AssertRecord) + 'static) -> Self {
        self.failure = Some(Box::new(hook));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Return every non-disabled case to Idle, making the suite valid for
    /// initialization again after a run.
    pub fn reset(&mut self) {
        for case in &mut self.cases {
            case.reset();
        }
    }

    /// True when every case is in a state initialization accepts.
    pub fn is_startable(&self) -> bool {
        self.cases
            .iter()
            .all(|case| matches!(case.state(), CaseState::Idle | CaseState::Disabled))
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [TestCase] {
        &mut self.cases
    }
}

impl fmt::Debug for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSuite")
            .field("name", &self.name)
            .field("cases", &self.cases)
            .field("startup", &self.startup.is_some())
            .field("teardown", &self.teardown.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}
