pub mod bot;
pub mod player;

use crate::game::Deck;

/// Anything that can draw from the deck. The controller decides how much;
/// an actor only carries the move out.
pub trait Actor {
    fn friendly_name(&self) -> String;

    /// Remove `count` items from `deck`. The caller guarantees
    /// `count <= deck.count()`.
    fn take_from_deck(&self, deck: &mut Deck, count: u32);
}
