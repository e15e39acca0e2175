use serde::{Deserialize, Serialize};

use crate::actors::{bot::Bot, player::Player, Actor};

/// Which party is acting. Stored in snapshots, so the names are part of the
/// persisted format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Bot,
}

impl Side {
    pub fn next(self) -> Self {
        match self {
            Side::Human => Side::Bot,
            Side::Bot => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "player"),
            Side::Bot => write!(f, "bot"),
        }
    }
}

/// The shared pile both sides draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    count: u32,
}

impl Deck {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Remove `amount` items. Callers must have checked `amount <= count`.
    pub fn decrease(&mut self, amount: u32) {
        debug_assert!(
            amount <= self.count,
            "took {amount} from a deck of {}",
            self.count
        );
        self.count -= amount;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One playthrough: the deck plus the two parties drawing from it.
#[derive(Clone, Debug)]
pub struct Game {
    pub deck: Deck,
    pub player: Player,
    pub bot: Bot,
}

impl Game {
    pub fn new(deck: Deck, player: Player, bot: Bot) -> Self {
        Self { deck, player, bot }
    }

    pub fn is_deck_ended(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn actor(&self, side: Side) -> &dyn Actor {
        match side {
            Side::Human => &self.player,
            Side::Bot => &self.bot,
        }
    }

    /// Apply a move that has already been validated against the deck.
    pub fn take(&mut self, side: Side, amount: u32) {
        match side {
            Side::Human => self.player.take_from_deck(&mut self.deck, amount),
            Side::Bot => self.bot.take_from_deck(&mut self.deck, amount),
        }
    }
}
