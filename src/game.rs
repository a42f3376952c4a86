use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// The player identifier at a game node.
///
/// `Chance` is a distinct sentinel rather than an integer outside
/// `{0, 1}` — the idiomatic Rust rendition of the three-way player tag
/// used throughout the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
    Chance,
}

impl Player {
    /// The other non-chance player. Panics if called on `Chance`; games
    /// and the traversal engine never call this on a chance player.
    pub fn other(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
            Player::Chance => unreachable!("Chance has no opposing player"),
        }
    }

    /// Index into a `[P0, P1, Chance]`-shaped reach-probability triple.
    pub fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
            Player::Chance => 2,
        }
    }
}

/// Any game plugged into the solver must implement this trait.
///
/// A `Game` node is immutable from the solver's point of view: the
/// solver never mutates a node, it only obtains successors via
/// [`Game::child`]. Implementations should be cheap to clone — concrete
/// games typically wrap a compact, `Copy`-friendly representation.
///
/// # Required behavior
///
/// - [`Game::state`] must return equal strings for two nodes that are
///   indistinguishable to the currently active non-chance player. It is
///   not required to be meaningful when [`Game::active_player`] is
///   [`Player::Chance`].
/// - [`Game::legal_actions`] must be non-empty at any non-terminal,
///   non-chance node.
/// - [`Game::chance_probabilities`] is only ever called when the active
///   player is [`Player::Chance`]; its values must sum to 1 and all be
///   strictly positive.
pub trait Game: Clone {
    /// Opaque, hashable, orderable action identifier. Concrete games
    /// define their own action enums.
    type Action: Clone + Eq + Hash + Ord + Debug;

    /// Information-set identifier for the currently active player.
    fn state(&self) -> String;

    /// Whether this node is terminal.
    fn is_terminal(&self) -> bool;

    /// Payoffs for players 0 and 1. Only defined at terminal nodes.
    fn payoffs(&self) -> (f64, f64);

    /// Legal actions at this node, in a fixed order. Non-empty at any
    /// non-terminal, non-chance node.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Chance outcome distribution. Only defined when
    /// `active_player() == Player::Chance`.
    fn chance_probabilities(&self) -> HashMap<Self::Action, f64>;

    /// The player (or chance) acting at this node.
    fn active_player(&self) -> Player;

    /// The successor reached by taking `action`. Functional update: the
    /// receiver is left unaffected.
    fn child(&self, action: &Self::Action) -> Self;
}
