use super::Actor;
use crate::game::Deck;

/// The human side. Input comes from the view, so this only records who is
/// playing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
}

impl Player {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Actor for Player {
    fn friendly_name(&self) -> String {
        format!("player {}", self.id)
    }

    fn take_from_deck(&self, deck: &mut Deck, count: u32) {
        deck.decrease(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_take() {
        let mut deck = Deck::new(2);
        Player::default().take_from_deck(&mut deck, 2);
        assert!(deck.is_empty());
    }
}
