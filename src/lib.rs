pub mod error;
pub mod model;
pub mod report;
pub mod solver;

pub use error::{Error, Result};
pub use model::{Action, Model, Outcome, State};
pub use solver::{Planner, Solution};
