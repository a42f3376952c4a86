//! Game-agnostic Counterfactual Regret Minimization (CFR) solver for
//! small two-player zero-sum imperfect-information extensive-form games
//! with a chance player.
//!
//! Plug in a [`Game`] implementation and run [`CfrSolver::solve`]; the
//! time-averaged policy returned by [`CfrSolver::policy`] converges to a
//! Nash equilibrium in the limit. Three sampling modes are supported —
//! full, external, and outcome sampling — selected via
//! [`SolverConfig::sampling_strategy`].

mod error;
mod game;
mod sampler;
mod solver;
mod store;
mod traverse;

pub use error::GameError;
pub use game::{Game, Player};
pub use sampler::{ActionSampler, SampledAction, SamplingMode};
pub use solver::{CfrSolver, SolverConfig};
pub use store::RegretStore;
pub use traverse::{traverse, Reach};
