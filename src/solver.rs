use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::game::{Game, Player};
use crate::sampler::{ActionSampler, SamplingMode};
use crate::store::RegretStore;
use crate::traverse::traverse;

/// Solver configuration. Defaults to `Full` sampling, vanilla
/// (non-plus) regret accumulation, and an epsilon sampling floor of
/// 0.05.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub sampling_strategy: SamplingMode,
    pub regret_matching_plus: bool,
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            sampling_strategy: SamplingMode::default(),
            regret_matching_plus: false,
            epsilon: 0.05,
        }
    }
}

/// The CFR solver façade: owns the regret/strategy tables and RNG, and
/// drives iterations of the traversal engine.
///
/// Observable state is either *fresh* (no `solve` call yet, empty
/// tables) or *trained* (after any `solve` call) — there is no error
/// state here; failures surface from individual `solve` calls and abort
/// only the iteration that raised them.
pub struct CfrSolver<G>
where
    G: Game,
{
    config: SolverConfig,
    sampler: ActionSampler,
    rng: StdRng,
    store: RegretStore<G::Action>,
}

impl<G> CfrSolver<G>
where
    G: Game,
{
    /// Builds a solver seeded from OS entropy.
    pub fn new(config: SolverConfig) -> Result<Self, GameError> {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Builds a solver with a fixed RNG seed, for deterministic runs:
    /// two solvers seeded identically and run for the same number of
    /// iterations produce bit-identical policies.
    pub fn seeded(config: SolverConfig, seed: u64) -> Result<Self, GameError> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: SolverConfig, rng: StdRng) -> Result<Self, GameError> {
        let sampler = ActionSampler::new(config.sampling_strategy, config.epsilon)?;
        Ok(Self {
            config,
            sampler,
            rng,
            store: RegretStore::new(),
        })
    }

    /// Runs `iterations` rounds of self-play CFR. Each iteration builds
    /// a fresh initial state from `game_factory`, picks a traversal
    /// player (irrelevant under `Full` sampling; drawn uniformly from
    /// {0, 1} under `External`/`Outcome`), and traverses the tree once.
    ///
    /// An iteration that raises a [`GameError`] aborts immediately; the
    /// tables are left exactly as the partial traversal produced them —
    /// no rollback is performed.
    pub fn solve<F>(&mut self, game_factory: F, iterations: usize) -> Result<(), GameError>
    where
        F: Fn() -> G,
    {
        for i in 0..iterations {
            let traversal_player = match self.config.sampling_strategy {
                SamplingMode::Full => Player::Zero,
                SamplingMode::External | SamplingMode::Outcome => {
                    if self.rng.gen_bool(0.5) {
                        Player::Zero
                    } else {
                        Player::One
                    }
                }
            };
            let root = game_factory();
            traverse(
                &root,
                traversal_player,
                [1.0, 1.0, 1.0],
                1.0,
                &mut self.store,
                &self.sampler,
                &mut self.rng,
                self.config.regret_matching_plus,
            )?;
            log::trace!("completed iteration {i} (traversal_player={traversal_player:?})");
        }
        Ok(())
    }

    /// The full average policy accumulated so far: `state -> (action ->
    /// probability)` for every information set with recorded strategy
    /// mass.
    pub fn policy(&self) -> HashMap<String, HashMap<G::Action, f64>>
    where
        G::Action: Clone + Eq + Hash + Ord + Debug,
    {
        self.store.full_policy()
    }

    /// Whether any `solve` call has run yet.
    pub fn is_trained(&self) -> bool {
        !self.store.is_empty()
    }
}
