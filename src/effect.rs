//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure; it describes the work and the runtime performs
//! it. Each effect produces exactly one completion action.

use crate::action::Operation;
use crate::request::ApiRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Issue one HTTP request; the outcome comes back as a `*Did*` action.
    Request { op: Operation, request: ApiRequest },
}

/// What a dispatch produced: a render hint plus any effects to run.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchResult {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: Vec::new(),
        }
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}
