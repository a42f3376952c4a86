use rand::Rng;

use crate::error::GameError;
use crate::game::{Game, Player};
use crate::sampler::ActionSampler;
use crate::store::RegretStore;

/// Reach probabilities for players 0, 1, and chance respectively, indexed
/// by [`Player::index`].
pub type Reach = [f64; 3];

/// Recursively traverses the game tree from `node`, accumulating regret
/// and strategy updates into `store` and returning the expected payoffs
/// for players 0 and 1 along the explored subtree.
///
/// `traversal_player` is the player whose actions the sampler expands
/// exhaustively under `External` sampling; irrelevant under `Full`.
/// `reach` carries the three-way reach probability product accumulated
/// so far; `sampling_prob` carries the product of sampling probabilities
/// along the path, used as the importance-sampling correction on
/// regret.
#[allow(clippy::too_many_arguments)]
pub fn traverse<G, R>(
    node: &G,
    traversal_player: Player,
    reach: Reach,
    sampling_prob: f64,
    store: &mut RegretStore<G::Action>,
    sampler: &ActionSampler,
    rng: &mut R,
    rm_plus: bool,
) -> Result<(f64, f64), GameError>
where
    G: Game,
    R: Rng + ?Sized,
{
    if node.is_terminal() {
        return Ok(node.payoffs());
    }

    let active = node.active_player();
    let policy = if active == Player::Chance {
        let probs = node.chance_probabilities();
        if probs.is_empty() {
            return Err(GameError::EmptyLegalActions);
        }
        probs
    } else {
        let legal = node.legal_actions();
        if legal.is_empty() {
            return Err(GameError::EmptyLegalActions);
        }
        store.current_policy(&node.state(), &legal)
    };

    let sampled = sampler.select(&policy, active == traversal_player, rng);

    let mut total = (0.0, 0.0);
    let mut rewards = Vec::with_capacity(sampled.len());
    for (action, sample) in sampled.iter() {
        let child = node.child(action);
        let mut next_reach = reach;
        next_reach[active.index()] *= sample.policy_prob;
        let (v0, v1) = traverse(
            &child,
            traversal_player,
            next_reach,
            sampling_prob * sample.sampling_prob,
            store,
            sampler,
            rng,
            rm_plus,
        )?;
        total.0 += sample.policy_prob * v0;
        total.1 += sample.policy_prob * v1;
        rewards.push((action.clone(), (v0, v1)));
    }

    if active != Player::Chance {
        let state = node.state();
        let value = match active {
            Player::Zero => total.0,
            Player::One => total.1,
            Player::Chance => unreachable!(),
        };
        let counterfactual_reach = reach[active.other().index()] * reach[Player::Chance.index()];
        for (action, reward) in &rewards {
            let reward_for_active = match active {
                Player::Zero => reward.0,
                Player::One => reward.1,
                Player::Chance => unreachable!(),
            };
            let regret = (reward_for_active - value) / sampling_prob;
            let policy_prob = policy[action];
            store.update(&state, action, regret, policy_prob, counterfactual_reach, rm_plus);
        }
    }

    Ok(total)
}
