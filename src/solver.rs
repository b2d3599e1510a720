//! This module implements finite-horizon backward value iteration with
//! memoized Q-values.
//!
//! The recurrence is
//!
//! ```text
//! Q0(s, a) = sum_{s'} P(s, a, s') * R(s, a, s')
//! Qn(s, a) = Q0(s, a) + gamma * sum_{s'} P(s, a, s') * V(n-1, s')
//! V(k, s)  = max_a Q(k, s, a)
//! ```
//!
//! Each recursive level expands four Q-values at the next-lower horizon, so
//! a naive evaluation is exponential in the horizon; the memo table caps the
//! work at one computation per (state, action, horizon) entry.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{Action, Model, State};

/// Result of solving one planning run: both Q-values at the start state and
/// requested horizon, and the action that maximizes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub start: State,
    pub horizon: u32,
    pub q_exercise: f64,
    pub q_relax: f64,
    pub action: Action,
}

/// Memoized value-iteration engine for one planning run.
///
/// A planner owns its memo table, sized for horizons `0..=horizon` over both
/// states and both actions and filled lazily during the first recursive
/// descent. Runs with a different horizon or discount factor need a fresh
/// planner; cached values are only valid for the gamma they were computed
/// with.
///
/// # Examples
///
/// ```
/// use mdp_planner::{Action, Model, Planner, State};
///
/// let model = Model::fitness();
/// let mut planner = Planner::new(&model, 0, 0.9).unwrap();
/// let solution = planner.solve(State::Fit);
/// assert_eq!(solution.action, Action::Relax);
/// assert_eq!(solution.q_relax, 10.0);
/// ```
#[derive(Debug)]
pub struct Planner<'a> {
    model: &'a Model,
    gamma: f64,
    horizon: u32,
    /// Indexed by (state, action, horizon); `None` means not yet computed.
    memo: Vec<Option<f64>>,
    /// Number of memo entries actually computed, i.e. cache misses.
    computed: u64,
}

impl<'a> Planner<'a> {
    /// Creates a planner for one run over horizons `0..=horizon`.
    ///
    /// Returns [`Error::InvalidDiscount`] if `gamma` is outside `[0, 1]`.
    pub fn new(model: &'a Model, horizon: u32, gamma: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&gamma) {
            return Err(Error::InvalidDiscount(gamma));
        }
        let entries = State::ALL.len() * Action::ALL.len() * (horizon as usize + 1);
        Ok(Planner {
            model,
            gamma,
            horizon,
            memo: vec![None; entries],
            computed: 0,
        })
    }

    /// Expected discounted reward of taking `action` in `state` with `n`
    /// decision steps remaining, then acting optimally.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the horizon this planner was sized for.
    pub fn q(&mut self, state: State, action: Action, n: u32) -> f64 {
        assert!(
            n <= self.horizon,
            "horizon {} exceeds planner horizon {}",
            n,
            self.horizon
        );
        let slot = self.slot(state, action, n);
        if let Some(value) = self.memo[slot] {
            trace!("memo hit: Q{}({}, {})", n, state, action);
            return value;
        }

        let immediate = self.expected_immediate(state, action);
        let value = if n == 0 {
            immediate
        } else {
            let mut future = 0.0;
            for next in State::ALL {
                future += self.model.probability(state, action, next) * self.v(next, n - 1);
            }
            immediate + self.gamma * future
        };

        self.memo[slot] = Some(value);
        self.computed += 1;
        value
    }

    /// Expected discounted reward of being in `state` with `n` steps
    /// remaining and acting optimally: the max of [`Planner::q`] over both
    /// actions.
    pub fn v(&mut self, state: State, n: u32) -> f64 {
        let exercise = self.q(state, Action::Exercise, n);
        let relax = self.q(state, Action::Relax, n);
        exercise.max(relax)
    }

    /// Computes both Q-values at the planner's horizon for `start` and picks
    /// the maximizing action. Ties resolve to [`Action::Relax`].
    pub fn solve(&mut self, start: State) -> Solution {
        let horizon = self.horizon;
        let q_exercise = self.q(start, Action::Exercise, horizon);
        let q_relax = self.q(start, Action::Relax, horizon);
        let action = if q_exercise > q_relax {
            Action::Exercise
        } else {
            Action::Relax
        };
        debug!(
            "solved: Q{}({}, exercise) = {}, Q{}({}, relax) = {}, policy = {}",
            horizon, start, q_exercise, horizon, start, q_relax, action
        );
        Solution {
            start,
            horizon,
            q_exercise,
            q_relax,
            action,
        }
    }

    /// Number of Q-values computed so far (memo hits excluded).
    pub fn computations(&self) -> u64 {
        self.computed
    }

    /// Expected one-step reward of taking `action` in `state`; the horizon-0
    /// Q-value.
    fn expected_immediate(&self, state: State, action: Action) -> f64 {
        let mut total = 0.0;
        for next in State::ALL {
            total += self.model.probability(state, action, next)
                * self.model.reward(state, action, next);
        }
        total
    }

    fn slot(&self, state: State, action: Action, n: u32) -> usize {
        (state.index() * Action::ALL.len() + action.index()) * (self.horizon as usize + 1)
            + n as usize
    }
}
