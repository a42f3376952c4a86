//! Kuhn poker, as a test fixture exercising the solver end-to-end.
//!
//! Grounded on `examples/original_source/src/dd_cfr/games/kuhn_poker.py`:
//! three cards {Jack, Queen, King} dealt one each to players 0 and 1 via
//! chance actions, ante 1 per player, sequential Check/Bet with at most
//! one bet, Bet met by Call or Fold, Check-Check goes to showdown.
//! Payoffs are +-1 with no bet met, +-2 with a bet called.
//!
//! Not part of the public crate surface — concrete game implementations
//! are out of scope for the solver itself, which is game-agnostic; this
//! exists purely as a fixture to exercise the solver end-to-end.
use std::collections::HashMap;

use cfr_solver::{Game, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    Jack,
    Queen,
    King,
}

impl Card {
    fn name(self) -> &'static str {
        match self {
            Card::Jack => "JACK",
            Card::Queen => "QUEEN",
            Card::King => "KING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Deal(Card),
    Check,
    Bet,
    Call,
    Fold,
}

impl Action {
    fn name(self) -> &'static str {
        match self {
            Action::Deal(c) => c.name(),
            Action::Check => "CHECK",
            Action::Bet => "BET",
            Action::Call => "CALL",
            Action::Fold => "FOLD",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KuhnPoker {
    cards: Vec<Card>,
    history: Vec<Action>,
}

impl KuhnPoker {
    fn other(player: usize) -> usize {
        1 - player
    }

    fn history_player(&self, depth: usize) -> usize {
        // Player 0 acts first after the deal; players alternate.
        depth % 2
    }

    fn winner(&self) -> usize {
        if *self.history.last().unwrap() == Action::Fold {
            let folding_player = self.history_player(self.history.len() - 1);
            return Self::other(folding_player);
        }
        if self.cards[0] > self.cards[1] {
            0
        } else {
            1
        }
    }

    fn pot(&self) -> f64 {
        if self.history.contains(&Action::Call) {
            2.0
        } else {
            1.0
        }
    }
}

impl Game for KuhnPoker {
    type Action = Action;

    fn state(&self) -> String {
        let active = self.active_player();
        let idx = match active {
            Player::Zero => 0,
            Player::One => 1,
            Player::Chance => return String::new(),
        };
        let card = self.cards[idx].name();
        if self.history.is_empty() {
            card.to_owned()
        } else {
            let history: Vec<&str> = self.history.iter().map(|a| a.name()).collect();
            format!("{card}|{}", history.join(","))
        }
    }

    fn is_terminal(&self) -> bool {
        self.history.len() == 3
            || (self.history.len() == 2 && *self.history.last().unwrap() != Action::Bet)
    }

    fn payoffs(&self) -> (f64, f64) {
        let winner = self.winner();
        let amount = self.pot();
        if winner == 0 {
            (amount, -amount)
        } else {
            (-amount, amount)
        }
    }

    fn legal_actions(&self) -> Vec<Self::Action> {
        match self.history.last() {
            None | Some(Action::Check) => vec![Action::Check, Action::Bet],
            Some(Action::Bet) => vec![Action::Call, Action::Fold],
            _ => vec![],
        }
    }

    fn chance_probabilities(&self) -> HashMap<Self::Action, f64> {
        let remaining: Vec<Card> = [Card::Jack, Card::Queen, Card::King]
            .into_iter()
            .filter(|c| !self.cards.contains(c))
            .collect();
        let p = 1.0 / remaining.len() as f64;
        remaining.into_iter().map(|c| (Action::Deal(c), p)).collect()
    }

    fn active_player(&self) -> Player {
        if self.cards.len() < 2 {
            return Player::Chance;
        }
        if self.history.is_empty() {
            return Player::Zero;
        }
        match self.history_player(self.history.len()) {
            0 => Player::Zero,
            _ => Player::One,
        }
    }

    fn child(&self, action: &Self::Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::Deal(card) => next.cards.push(*card),
            other => next.history.push(*other),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_then_alternates_players() {
        let root = KuhnPoker::default();
        assert_eq!(root.active_player(), Player::Chance);
        let dealt_one = root.child(&Action::Deal(Card::Jack));
        assert_eq!(dealt_one.active_player(), Player::Chance);
        let dealt_two = dealt_one.child(&Action::Deal(Card::Queen));
        assert_eq!(dealt_two.active_player(), Player::Zero);
    }

    #[test]
    fn check_check_goes_to_showdown_with_ante_payoff() {
        let root = KuhnPoker::default();
        let state = root
            .child(&Action::Deal(Card::King))
            .child(&Action::Deal(Card::Jack))
            .child(&Action::Check)
            .child(&Action::Check);
        assert!(state.is_terminal());
        assert_eq!(state.payoffs(), (1.0, -1.0));
    }

    #[test]
    fn bet_fold_awards_pot_to_bettor_without_showdown() {
        let root = KuhnPoker::default();
        let state = root
            .child(&Action::Deal(Card::Jack))
            .child(&Action::Deal(Card::King))
            .child(&Action::Bet)
            .child(&Action::Fold);
        assert!(state.is_terminal());
        assert_eq!(state.payoffs(), (1.0, -1.0));
    }

    #[test]
    fn bet_call_pays_out_the_full_pot() {
        let root = KuhnPoker::default();
        let state = root
            .child(&Action::Deal(Card::Jack))
            .child(&Action::Deal(Card::King))
            .child(&Action::Bet)
            .child(&Action::Call);
        assert!(state.is_terminal());
        assert_eq!(state.payoffs(), (-2.0, 2.0));
    }

    #[test]
    fn information_set_string_hides_the_opponents_card() {
        let root = KuhnPoker::default();
        let state = root.child(&Action::Deal(Card::Queen)).child(&Action::Deal(Card::King));
        assert_eq!(state.state(), "QUEEN");
        let after_check = state.child(&Action::Check);
        assert_eq!(after_check.state(), "KING|CHECK");
    }
}
