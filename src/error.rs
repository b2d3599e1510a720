use thiserror::Error;

use crate::model::{Action, State};

/// Errors produced while constructing a model or planner from user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("discount factor must be between 0 and 1, got {0}")]
    InvalidDiscount(f64),

    #[error("probabilities for state {state}, action {action} must sum to 1.0, got {sum}")]
    InvalidDistribution {
        state: State,
        action: Action,
        sum: f64,
    },

    #[error("unknown state '{0}', expected 'fit' or 'unfit'")]
    UnknownState(String),
}

pub type Result<T> = std::result::Result<T, Error>;
