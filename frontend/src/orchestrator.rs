use shared::{OptimizationResult, OptimizeRequest};

use crate::{
    config::{SUBMIT_LABEL, SUBMIT_PENDING_LABEL},
    error::{FetchFailure, ValidationError},
    selection::Selection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// How the submit control should look for the current request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request is already in flight; the control is disabled meanwhile.
    Busy,
    Invalid(ValidationError),
}

/// Owns the in-flight gate and the last successful result.
#[derive(Debug, Default)]
pub struct Orchestrator {
    state: RequestState,
    current: Option<OptimizationResult>,
}

impl Orchestrator {
    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn current(&self) -> Option<&OptimizationResult> {
        self.current.as_ref()
    }

    pub fn control(&self) -> SubmitControl {
        match self.state {
            RequestState::Idle => SubmitControl {
                disabled: false,
                label: SUBMIT_LABEL,
            },
            RequestState::InFlight => SubmitControl {
                disabled: true,
                label: SUBMIT_PENDING_LABEL,
            },
        }
    }

    /// Validates the selection and, if it holds, moves to `InFlight` and
    /// hands back the request to send.
    pub fn submit(&mut self, selection: &Selection) -> Result<OptimizeRequest, SubmitRejected> {
        if self.state == RequestState::InFlight {
            return Err(SubmitRejected::Busy);
        }
        let request = selection.to_request().map_err(SubmitRejected::Invalid)?;
        self.state = RequestState::InFlight;
        Ok(request)
    }

    /// Releases the gate, then stores the payload on success. A failure
    /// leaves the previous result in place.
    pub fn complete(
        &mut self,
        outcome: Result<OptimizationResult, FetchFailure>,
    ) -> Result<&OptimizationResult, FetchFailure> {
        self.state = RequestState::Idle;
        let stored: &OptimizationResult = self.current.insert(outcome?);
        Ok(stored)
    }
}
