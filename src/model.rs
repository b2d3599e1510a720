//! This module provides the fixed two-state, two-action Markov Decision
//! Process model: transition probabilities and rewards for every
//! (state, action, next state) triple, immutable after construction.

use std::fmt;
use std::str::FromStr;

use approx::abs_diff_eq;

use crate::error::{Error, Result};

/// One of the two states of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Fit,
    Unfit,
}

impl State {
    /// Both states, in table order.
    pub const ALL: [State; 2] = [State::Fit, State::Unfit];

    pub fn index(self) -> usize {
        match self {
            State::Fit => 0,
            State::Unfit => 1,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Fit => write!(f, "fit"),
            State::Unfit => write!(f, "unfit"),
        }
    }
}

impl FromStr for State {
    type Err = Error;

    /// Parses a case-insensitive state token. Unrecognized tokens are an
    /// error rather than a silent fallback.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fit" => Ok(State::Fit),
            "unfit" => Ok(State::Unfit),
            _ => Err(Error::UnknownState(s.to_string())),
        }
    }
}

/// One of the two actions available in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Exercise,
    Relax,
}

impl Action {
    /// Both actions, in table order.
    pub const ALL: [Action; 2] = [Action::Exercise, Action::Relax];

    pub fn index(self) -> usize {
        match self {
            Action::Exercise => 0,
            Action::Relax => 1,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Exercise => write!(f, "exercise"),
            Action::Relax => write!(f, "relax"),
        }
    }
}

/// Probability of reaching a particular next state and the reward collected
/// on that transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub probability: f64,
    pub reward: f64,
}

impl Outcome {
    pub const fn new(probability: f64, reward: f64) -> Self {
        Outcome {
            probability,
            reward,
        }
    }
}

/// The transition and reward structure of the MDP.
///
/// For every (state, action) pair the model stores one [`Outcome`] per next
/// state. [`Model::new`] rejects tables whose outcome probabilities for any
/// (state, action) pair do not sum to 1.0.
#[derive(Debug, Clone)]
pub struct Model {
    /// Indexed as `outcomes[state][action][next_state]`.
    outcomes: [[[Outcome; 2]; 2]; 2],
}

impl Model {
    /// Creates a model from a full outcome table, validating that each
    /// (state, action) pair's probabilities sum to 1.0.
    pub fn new(outcomes: [[[Outcome; 2]; 2]; 2]) -> Result<Self> {
        for state in State::ALL {
            for action in Action::ALL {
                let sum: f64 = outcomes[state.index()][action.index()]
                    .iter()
                    .map(|o| o.probability)
                    .sum();
                if !abs_diff_eq!(sum, 1.0, epsilon = 1e-9) {
                    return Err(Error::InvalidDistribution { state, action, sum });
                }
            }
        }
        Ok(Model { outcomes })
    }

    /// The fixed fitness-domain instance: exercising while fit almost
    /// certainly keeps you fit (reward 8), relaxing while fit pays more
    /// (reward 10) but risks becoming unfit, and once unfit exercising is
    /// the only way back.
    pub fn fitness() -> Self {
        Model {
            outcomes: [
                // From Fit: [Exercise, Relax] x [to Fit, to Unfit]
                [
                    [Outcome::new(0.99, 8.0), Outcome::new(0.01, 8.0)],
                    [Outcome::new(0.7, 10.0), Outcome::new(0.3, 10.0)],
                ],
                // From Unfit
                [
                    [Outcome::new(0.2, 0.0), Outcome::new(0.8, 0.0)],
                    [Outcome::new(0.0, 5.0), Outcome::new(1.0, 5.0)],
                ],
            ],
        }
    }

    /// Probability of reaching `next` when taking `action` in `state`.
    pub fn probability(&self, state: State, action: Action, next: State) -> f64 {
        self.outcomes[state.index()][action.index()][next.index()].probability
    }

    /// Reward collected when taking `action` in `state` and reaching `next`.
    pub fn reward(&self, state: State, action: Action, next: State) -> f64 {
        self.outcomes[state.index()][action.index()][next.index()].reward
    }
}
