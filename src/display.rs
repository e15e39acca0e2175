use std::fmt;

use crate::game::Deck;

const GROUP: u32 = 5;

/// Draws the deck as tally marks in groups of five, e.g. `||||| ||`.
pub struct DeckDisplay<'a>(pub &'a Deck);

impl fmt::Display for DeckDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.count();
        if count == 0 {
            return write!(f, "(empty)");
        }
        for i in 0..count {
            if i > 0 && i % GROUP == 0 {
                write!(f, " ")?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}
