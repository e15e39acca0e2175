use crate::controller::{Phase, RoundOutcome, TurnController};
use crate::game::Side;
use crate::generator::Generate;
use crate::view::View;

/// Play a game to the end, asking `source` for the human's raw input given
/// the current deck count.
///
/// Returns the winner together with the number of rejected inputs.
pub fn battle_royale<V, R, F>(
    controller: &mut TurnController<V, R>,
    mut source: F,
) -> (Side, usize)
where
    V: View,
    R: Generate<u32>,
    F: FnMut(u32) -> String,
{
    let mut rejected = 0;
    loop {
        if let Phase::GameOver(winner) = controller.phase() {
            return (winner, rejected);
        }
        let raw = source(controller.deck_count());
        if let RoundOutcome::Rejected(_) = controller.request_move(&raw) {
            rejected += 1;
        }
    }
}

/// Wins per side over many games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub player: usize,
    pub bot: usize,
}

impl Tally {
    pub fn record(&mut self, winner: Side) {
        match winner {
            Side::Human => self.player += 1,
            Side::Bot => self.bot += 1,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            player: self.player + other.player,
            bot: self.bot + other.bot,
        }
    }

    pub fn total(&self) -> usize {
        self.player + self.bot
    }

    pub fn summary(&self) -> String {
        let total = self.total().max(1) as f32;
        let pct_player = self.player as f32 / total * 100.;
        let pct_bot = self.bot as f32 / total * 100.;
        format!(
            "player / bot: {} ({pct_player:.2}%) / {} ({pct_bot:.2}%)",
            self.player, self.bot
        )
    }
}
