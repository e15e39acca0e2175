use super::Actor;
use crate::game::Deck;

/// The machine side. How much it takes is picked by the controller's
/// generator; see `controller::TurnController`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bot;

impl Actor for Bot {
    fn friendly_name(&self) -> String {
        "bot".into()
    }

    fn take_from_deck(&self, deck: &mut Deck, count: u32) {
        deck.decrease(count);
    }
}
