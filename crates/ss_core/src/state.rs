//! State machines: consent gate + one request cycle.
//!
//! Consent:  Locked ──accept──▶ Unlocked (terminal for the session)
//!           Locked ──decline─▶ Terminated (one-way)
//!
//! Cycle:    Idle ──begin──▶ InFlight ──succeed──▶ Succeeded
//!                                   └──fail─────▶ Failed

use core::fmt;

use crate::errors::CoreError;

/// Consent status for the current page load. Never persisted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConsentState {
    #[default]
    Locked,
    Unlocked,
    Terminated,
}

impl ConsentState {
    #[inline]
    pub fn is_unlocked(self) -> bool {
        matches!(self, ConsentState::Unlocked)
    }
}

impl fmt::Display for ConsentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConsentState::Locked => "locked",
            ConsentState::Unlocked => "unlocked",
            ConsentState::Terminated => "terminated",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RequestCycleState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestCycleState {
    /// States in which the submit control may be enabled.
    #[inline]
    pub fn is_ready(self) -> bool {
        !matches!(self, RequestCycleState::InFlight)
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, RequestCycleState::Succeeded | RequestCycleState::Failed)
    }
}

impl fmt::Display for RequestCycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestCycleState::Idle => "idle",
            RequestCycleState::InFlight => "in_flight",
            RequestCycleState::Succeeded => "succeeded",
            RequestCycleState::Failed => "failed",
        })
    }
}

/// One instance per submit action. Transitions are checked; finished cycles are not reused.
#[derive(Clone, Debug, Default)]
pub struct RequestCycle {
    state: RequestCycleState,
}

impl RequestCycle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> RequestCycleState {
        self.state
    }

    pub fn begin(&mut self) -> Result<(), CoreError> {
        self.step(RequestCycleState::Idle, RequestCycleState::InFlight)
    }

    pub fn succeed(&mut self) -> Result<(), CoreError> {
        self.step(RequestCycleState::InFlight, RequestCycleState::Succeeded)
    }

    pub fn fail(&mut self) -> Result<(), CoreError> {
        self.step(RequestCycleState::InFlight, RequestCycleState::Failed)
    }

    fn step(&mut self, from: RequestCycleState, to: RequestCycleState) -> Result<(), CoreError> {
        if self.state != from {
            return Err(CoreError::IllegalTransition { from: self.state, to });
        }
        self.state = to;
        Ok(())
    }
}
