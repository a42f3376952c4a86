use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// The regret/policy store: two sparse tables keyed by (information-set
/// string, action).
///
/// Entries are created lazily the first time an (info-set, action) pair
/// is visited; both tables only ever grow over the lifetime of a
/// [`crate::solver::CfrSolver`] — nothing is ever removed.
#[derive(Debug, Default)]
pub struct RegretStore<A>
where
    A: Clone + Eq + Hash + Ord + Debug,
{
    regret: HashMap<String, HashMap<A, f64>>,
    strategy: HashMap<String, HashMap<A, f64>>,
}

impl<A> RegretStore<A>
where
    A: Clone + Eq + Hash + Ord + Debug,
{
    pub fn new() -> Self {
        Self {
            regret: HashMap::new(),
            strategy: HashMap::new(),
        }
    }

    /// Whether the store has accumulated anything at all. Used by the
    /// solver to distinguish the *fresh* and *trained* states.
    pub fn is_empty(&self) -> bool {
        self.strategy.is_empty()
    }

    /// Current policy at `state` over exactly `legal`, derived from
    /// cumulative regret via regret matching: positive regrets are
    /// normalized, with a uniform fallback when every regret is
    /// non-positive (or the info set has never been visited).
    pub fn current_policy(&self, state: &str, legal: &[A]) -> HashMap<A, f64> {
        let regrets = self.regret.get(state);
        let positive: Vec<f64> = legal
            .iter()
            .map(|a| regrets.and_then(|r| r.get(a)).copied().unwrap_or(0.0).max(0.0))
            .collect();
        let total: f64 = positive.iter().sum();

        let mut policy = HashMap::with_capacity(legal.len());
        if total > 0.0 {
            for (a, r) in legal.iter().zip(positive.iter()) {
                policy.insert(a.clone(), r / total);
            }
        } else {
            let uniform = 1.0 / legal.len() as f64;
            for a in legal {
                policy.insert(a.clone(), uniform);
            }
        }
        policy
    }

    /// Average policy at `state`: the cumulative strategy weights,
    /// normalized over the actions actually recorded for this info set
    /// (uniform fallback if the recorded sum is zero).
    pub fn average_policy(&self, state: &str) -> HashMap<A, f64> {
        match self.strategy.get(state) {
            None => HashMap::new(),
            Some(weights) => normalize(weights),
        }
    }

    /// Average policy for every information set with recorded strategy
    /// mass.
    pub fn full_policy(&self) -> HashMap<String, HashMap<A, f64>> {
        self.strategy
            .keys()
            .map(|s| (s.clone(), self.average_policy(s)))
            .collect()
    }

    /// Accumulates one traversal's regret and strategy contribution for
    /// `(state, action)`.
    ///
    /// `R[state][action] += regret * reach`, clamped to `>= 0` when
    /// `rm_plus`. `Σ[state][action] += policy_prob * reach`.
    pub fn update(&mut self, state: &str, action: &A, regret: f64, policy_prob: f64, reach: f64, rm_plus: bool) {
        let entry = self
            .regret
            .entry(state.to_owned())
            .or_default()
            .entry(action.clone())
            .or_insert(0.0);
        *entry += regret * reach;
        if rm_plus {
            *entry = entry.max(0.0);
        }

        let weight = self
            .strategy
            .entry(state.to_owned())
            .or_default()
            .entry(action.clone())
            .or_insert(0.0);
        *weight += policy_prob * reach;
    }
}

fn normalize<A>(weights: &HashMap<A, f64>) -> HashMap<A, f64>
where
    A: Clone + Eq + Hash + Ord + Debug,
{
    let total: f64 = weights.values().sum();
    if total > 0.0 {
        weights.iter().map(|(a, w)| (a.clone(), w / total)).collect()
    } else {
        let uniform = 1.0 / weights.len() as f64;
        weights.keys().map(|a| (a.clone(), uniform)).collect()
    }
}
