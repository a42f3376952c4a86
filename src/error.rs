use thiserror::Error;

/// Errors raised by the solver and its collaborators.
///
/// `Misuse` and `Configuration` variants are programming errors in a
/// `Game` implementation or in solver configuration; the solver fails
/// fast rather than guessing at intent. `Domain` wraps an error
/// surfaced by the game itself and is propagated unchanged.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("chance_probabilities queried while active player is not CHANCE")]
    ChanceProbabilitiesOffChance,

    #[error("legal_actions returned empty at a non-terminal, non-chance node")]
    EmptyLegalActions,

    #[error("sampler configuration {mode:?} does not support role traversal_player={is_traversal_player}")]
    UnsupportedSamplerCombination {
        mode: crate::sampler::SamplingMode,
        is_traversal_player: bool,
    },

    #[error("epsilon must lie in (0, 1], got {0}")]
    InvalidEpsilon(f64),

    #[error("game error: {0}")]
    Domain(String),
}
