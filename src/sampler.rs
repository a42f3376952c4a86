use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::GameError;

/// Which branches the traversal engine explores at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// Explore every action; sampling_prob = 1 for each.
    #[default]
    Full,
    /// Explore every action for the traversal player; sample one action
    /// otherwise.
    External,
    /// Sample exactly one action regardless of role.
    Outcome,
}

/// `(policy_prob, sampling_prob)` for one selected action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledAction {
    pub policy_prob: f64,
    pub sampling_prob: f64,
}

/// Selects which actions the traversal engine should descend into, and
/// with what probability the sampler would have picked them.
///
/// `epsilon` is the minimum per-action sampling weight used for the
/// single-action draw: `w(a) = max(pi(a), epsilon)`, so every action with
/// `pi(a) > 0` keeps positive sampling probability — required for the
/// importance-sampling correction in the traversal engine to stay
/// unbiased.
pub struct ActionSampler {
    mode: SamplingMode,
    epsilon: f64,
}

impl ActionSampler {
    pub fn new(mode: SamplingMode, epsilon: f64) -> Result<Self, GameError> {
        if !(epsilon > 0.0 && epsilon <= 1.0) {
            return Err(GameError::InvalidEpsilon(epsilon));
        }
        Ok(Self { mode, epsilon })
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    /// Selects the actions to explore at a node given its policy `pi`
    /// over a non-empty action set and whether this node belongs to the
    /// player currently being traversed.
    ///
    /// Returned pairs are always sorted by action, in both the
    /// exhaustive and single-action case. This isn't just cosmetic: the
    /// traversal engine recurses over the returned sequence, consuming
    /// the shared RNG once per sibling subtree it descends into, so the
    /// iteration order here determines which slice of the RNG stream
    /// each sibling gets. A `HashMap`'s iteration order depends on its
    /// per-instance random hasher state, not on the RNG seed, which
    /// would make two identically-seeded solvers diverge as soon as any
    /// node exhaustively expands more than one action with sampled
    /// descendants below it (e.g. external sampling at the traversal
    /// player's nodes). Sorting pins the order to the action type's own
    /// `Ord` impl, which is reproducible across runs.
    pub fn select<A, R>(&self, policy: &HashMap<A, f64>, is_traversal_player: bool, rng: &mut R) -> Vec<(A, SampledAction)>
    where
        A: Clone + Eq + Hash + Ord + Debug,
        R: Rng + ?Sized,
    {
        debug_assert!(!policy.is_empty(), "sampler invoked on a node with no actions");
        let exhaustive = match self.mode {
            SamplingMode::Full => true,
            SamplingMode::External => is_traversal_player,
            SamplingMode::Outcome => false,
        };

        if exhaustive {
            let mut out: Vec<(A, SampledAction)> = policy
                .iter()
                .map(|(a, p)| {
                    (
                        a.clone(),
                        SampledAction {
                            policy_prob: *p,
                            sampling_prob: 1.0,
                        },
                    )
                })
                .collect();
            out.sort_by(|(a, _), (b, _)| a.cmp(b));
            return out;
        }

        // Single-action sampling: order is fixed so the draw is
        // reproducible given a seeded RNG.
        let mut actions: Vec<&A> = policy.keys().collect();
        actions.sort();
        let weights: Vec<f64> = actions.iter().map(|a| policy[*a].max(self.epsilon)).collect();
        let dist = WeightedIndex::new(&weights).expect("weights are all positive by construction");
        let chosen = dist.sample(rng);
        let total: f64 = weights.iter().sum();
        let sampling_prob = weights[chosen] / total;
        let action = actions[chosen].clone();
        let policy_prob = policy[&action];

        vec![(
            action,
            SampledAction {
                policy_prob,
                sampling_prob,
            },
        )]
    }
}
