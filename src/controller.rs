//! Runs one round per move request: the human move, then the bot reply,
//! stopping early when either side empties the deck.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::actors::{bot::Bot, player::Player};
use crate::config::{BotMovePolicy, Rules};
use crate::error::{InvalidMove, InvalidSnapshot};
use crate::game::{Deck, Game, Side};
use crate::generator::{Generate, IntGenerator};
use crate::validate::{MoveValidator, Validate};
use crate::view::View;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingHumanMove,
    GameOver(Side),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Input turned down; nothing changed.
    Rejected(InvalidMove),
    /// Both sides moved and items remain.
    Continue,
    PlayerWon,
    BotWon,
    /// The game had already ended before this request.
    Finished,
}

/// Everything needed to bring a game back after the front end goes away.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Deck size the game started with; restoring uses it over the caller's.
    pub initial_deck: u32,
    pub deck_count: u32,
    pub winner: Option<Side>,
}

pub struct TurnController<V: View, R: Generate<u32> = IntGenerator> {
    game: Game,
    rules: Rules,
    validator: MoveValidator,
    generator: R,
    view: V,
    phase: Phase,
}

impl<V: View> TurnController<V> {
    pub fn new(rules: Rules, view: V) -> Self {
        Self::with_generator(rules, IntGenerator::new(rules.bot_ceil), view)
    }

    pub fn restore(rules: Rules, snapshot: Snapshot, view: V) -> Result<Self, InvalidSnapshot> {
        let generator = IntGenerator::new(rules.bot_ceil);
        Self::restore_with_generator(rules, snapshot, generator, view)
    }
}

impl<V: View, R: Generate<u32>> TurnController<V, R> {
    /// Panics if `rules.initial_deck` is zero: an empty deck has no first move
    /// and no winner.
    pub fn with_generator(rules: Rules, generator: R, view: V) -> Self {
        assert!(rules.initial_deck > 0, "a game needs at least one item");
        let mut controller = Self {
            game: Game::new(Deck::new(rules.initial_deck), Player::default(), Bot),
            validator: MoveValidator::from_rules(&rules),
            rules,
            generator,
            view,
            phase: Phase::AwaitingHumanMove,
        };
        controller.show();
        controller
    }

    pub fn restore_with_generator(
        rules: Rules,
        snapshot: Snapshot,
        generator: R,
        view: V,
    ) -> Result<Self, InvalidSnapshot> {
        let Snapshot {
            initial_deck,
            deck_count,
            winner,
        } = snapshot;
        if initial_deck == 0 {
            return Err(InvalidSnapshot::EmptyGame);
        }
        if deck_count > initial_deck {
            return Err(InvalidSnapshot::DeckTooLarge {
                deck_count,
                initial_deck,
            });
        }
        let rules = rules.initial_deck(initial_deck);
        let phase = match (deck_count, winner) {
            (0, Some(side)) => Phase::GameOver(side),
            (0, None) => return Err(InvalidSnapshot::MissingWinner),
            (_, Some(_)) => return Err(InvalidSnapshot::WinnerWithItemsLeft { deck_count }),
            (_, None) => Phase::AwaitingHumanMove,
        };
        debug!("restoring {snapshot:?}");

        let mut controller = Self {
            game: Game::new(Deck::new(deck_count), Player::default(), Bot),
            validator: MoveValidator::from_rules(&rules),
            rules,
            generator,
            view,
            phase,
        };
        controller.show();
        Ok(controller)
    }

    /// Replay the instructions that bring a fresh view up to date.
    fn show(&mut self) {
        self.view.display_deck_count(self.game.deck.count(), None);
        if let Phase::GameOver(winner) = self.phase {
            self.announce(winner);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck_count(&self) -> u32 {
        self.game.deck.count()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            initial_deck: self.rules.initial_deck,
            deck_count: self.game.deck.count(),
            winner: match self.phase {
                Phase::GameOver(side) => Some(side),
                Phase::AwaitingHumanMove => None,
            },
        }
    }

    /// Handle one "move requested" event carrying the raw text of the
    /// human's move.
    pub fn request_move(&mut self, raw: &str) -> RoundOutcome {
        if let Phase::GameOver(winner) = self.phase {
            warn!("move {raw:?} requested after {winner} won");
            self.view.disable_move_control();
            return RoundOutcome::Finished;
        }

        let amount = match self.accept_move(raw) {
            Ok(amount) => amount,
            Err(err) => {
                debug!("rejected {raw:?}: {err}");
                self.view.display_input_error();
                return RoundOutcome::Rejected(err);
            }
        };
        if let Some(outcome) = self.play(Side::Human, amount) {
            return outcome;
        }

        let amount = self.bot_move();
        self.play(Side::Bot, amount).unwrap_or(RoundOutcome::Continue)
    }

    /// The amount the human asked for, if it is in range and fits the deck.
    pub fn accept_move(&self, raw: &str) -> Result<u32, InvalidMove> {
        let parsed = raw.trim().parse::<i64>().ok();
        if !self.validator.validate(&parsed) {
            return Err(match parsed {
                None => InvalidMove::Unparseable,
                Some(amount) => InvalidMove::OutOfRange {
                    amount,
                    min: self.validator.min,
                    max: self.validator.max,
                },
            });
        }

        let amount = parsed
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(InvalidMove::Unparseable)?;
        let remaining = self.game.deck.count();
        if amount > remaining {
            return Err(InvalidMove::ExceedsDeck { amount, remaining });
        }
        Ok(amount)
    }

    /// Pick the bot's amount. Only called while the deck is non-empty.
    fn bot_move(&mut self) -> u32 {
        let remaining = self.game.deck.count();
        debug_assert!(remaining > 0);

        match self.rules.bot_policy {
            BotMovePolicy::Clamp => self.generator.generate().min(remaining),
            BotMovePolicy::Resample { max_attempts } => {
                let mut sample = self.generator.generate();
                let mut rejected = 0;
                while sample > remaining {
                    rejected += 1;
                    trace!("bot sample {sample} exceeds deck {remaining}");
                    if rejected >= max_attempts {
                        warn!(
                            "bot gave up resampling after {rejected} tries, \
                             clamping {sample} to {remaining}"
                        );
                        return remaining;
                    }
                    sample = self.generator.generate();
                }
                sample
            }
        }
    }

    /// Apply a legal move for `side`. Returns the outcome if it ended the
    /// game.
    fn play(&mut self, side: Side, amount: u32) -> Option<RoundOutcome> {
        debug_assert!(amount >= 1 && amount <= self.game.deck.count());
        self.game.take(side, amount);

        let remaining = self.game.deck.count();
        debug!(
            "{} takes {amount}, {remaining} left",
            self.game.actor(side).friendly_name()
        );
        self.view.display_deck_count(remaining, Some(side));

        if !self.game.is_deck_ended() {
            return None;
        }
        info!("{side} wins");
        self.phase = Phase::GameOver(side);
        self.announce(side);
        Some(match side {
            Side::Human => RoundOutcome::PlayerWon,
            Side::Bot => RoundOutcome::BotWon,
        })
    }

    fn announce(&mut self, winner: Side) {
        match winner {
            Side::Human => self.view.display_player_win(),
            Side::Bot => self.view.display_bot_win(),
        }
        self.view.disable_move_control();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Recorder, Signal};

    /// Replays a fixed list of samples, then repeats the last one.
    struct Scripted(Vec<u32>, usize);

    impl Scripted {
        fn new(samples: &[u32]) -> Self {
            Self(samples.to_vec(), 0)
        }
    }

    impl Generate<u32> for Scripted {
        fn generate(&mut self) -> u32 {
            let x = self.0[self.1.min(self.0.len() - 1)];
            self.1 += 1;
            x
        }
    }

    fn controller(deck: u32, samples: &[u32]) -> TurnController<Recorder, Scripted> {
        let mut c = TurnController::with_generator(
            Rules::new().initial_deck(deck),
            Scripted::new(samples),
            Recorder::new(),
        );
        assert_eq!(c.view_mut().take(), vec![Signal::DeckCount(deck, None)]);
        c
    }

    #[test]
    fn test_opening_round() {
        let mut c = TurnController::with_generator(
            Rules::default(),
            IntGenerator::seeded(4, 3),
            Recorder::new(),
        );
        assert_eq!(c.deck_count(), 15);

        assert_eq!(c.request_move("3"), RoundOutcome::Continue);
        let signals = c.view_mut().take();
        assert_eq!(signals[1], Signal::DeckCount(12, Some(Side::Human)));
        let Signal::DeckCount(after_bot, Some(Side::Bot)) = signals[2] else {
            panic!("unexpected {signals:?}");
        };
        assert!((9..=11).contains(&after_bot));
        assert_eq!(c.deck_count(), after_bot);
        assert_eq!(c.phase(), Phase::AwaitingHumanMove);
        assert!(c.view().move_control_enabled);
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut c = controller(15, &[1]);
        for _ in 0..2 {
            assert_eq!(
                c.request_move("7"),
                RoundOutcome::Rejected(InvalidMove::OutOfRange {
                    amount: 7,
                    min: 1,
                    max: 3
                })
            );
            assert_eq!(c.view_mut().take(), vec![Signal::InputError]);
            assert_eq!(c.deck_count(), 15);
        }
    }

    #[test]
    fn test_reject_bad_text() {
        let mut c = controller(15, &[1]);
        for raw in ["", "abc", "1.5", "0", "-2", "99999999999999999999"] {
            assert!(
                matches!(c.request_move(raw), RoundOutcome::Rejected(_)),
                "{raw:?}"
            );
        }
        assert_eq!(c.deck_count(), 15);
        assert_eq!(c.view().signals, vec![Signal::InputError; 6]);
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut c = controller(15, &[1]);
        assert_eq!(c.request_move(" 2\n"), RoundOutcome::Continue);
        assert_eq!(c.deck_count(), 12);
    }

    #[test]
    fn test_reject_more_than_deck() {
        let mut c = controller(2, &[1]);
        assert_eq!(
            c.request_move("3"),
            RoundOutcome::Rejected(InvalidMove::ExceedsDeck {
                amount: 3,
                remaining: 2
            })
        );
        assert_eq!(c.view_mut().take(), vec![Signal::InputError]);
        assert_eq!(c.deck_count(), 2);
    }

    #[test]
    fn test_player_takes_last() {
        let mut c = controller(1, &[1]);
        assert_eq!(c.request_move("1"), RoundOutcome::PlayerWon);
        assert_eq!(
            c.view_mut().take(),
            vec![
                Signal::DeckCount(0, Some(Side::Human)),
                Signal::PlayerWin,
                Signal::DisableMoveControl,
            ]
        );
        assert_eq!(c.phase(), Phase::GameOver(Side::Human));
    }

    #[test]
    fn test_bot_takes_last() {
        // The bot's 3 is too many for a deck of 2, so it draws again.
        let mut c = controller(3, &[3, 2]);
        assert_eq!(c.request_move("1"), RoundOutcome::BotWon);
        assert_eq!(
            c.view_mut().take(),
            vec![
                Signal::DeckCount(2, Some(Side::Human)),
                Signal::DeckCount(0, Some(Side::Bot)),
                Signal::BotWin,
                Signal::DisableMoveControl,
            ]
        );
        assert_eq!(c.phase(), Phase::GameOver(Side::Bot));
        assert!(!c.view().move_control_enabled);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut c = controller(1, &[1]);
        c.request_move("1");
        c.view_mut().take();
        assert_eq!(c.request_move("1"), RoundOutcome::Finished);
        assert_eq!(c.view_mut().take(), vec![Signal::DisableMoveControl]);
        assert_eq!(c.deck_count(), 0);
    }

    #[test]
    fn test_resample_gives_up() {
        let rules = Rules::new()
            .initial_deck(2)
            .bot_policy(BotMovePolicy::Resample { max_attempts: 5 });
        let mut c = TurnController::with_generator(rules, Scripted::new(&[3]), Recorder::new());
        assert_eq!(c.request_move("1"), RoundOutcome::BotWon);
        assert_eq!(c.generator.1, 5);
    }

    #[test]
    fn test_clamp_policy() {
        let rules = Rules::new().initial_deck(3).bot_policy(BotMovePolicy::Clamp);
        let mut c = TurnController::with_generator(rules, Scripted::new(&[3]), Recorder::new());
        assert_eq!(c.request_move("2"), RoundOutcome::BotWon);
        assert_eq!(c.generator.1, 1);
    }

    #[test]
    fn test_bot_never_overdraws() {
        for seed in 0..200 {
            let mut c = TurnController::with_generator(
                Rules::default(),
                IntGenerator::seeded(4, seed),
                Recorder::new(),
            );
            while c.phase() == Phase::AwaitingHumanMove {
                c.view_mut().take();
                c.request_move("1");
                let signals = c.view_mut().take();
                let Signal::DeckCount(before, Some(Side::Human)) = signals[0] else {
                    panic!("unexpected {signals:?}");
                };
                let after = signals.iter().find_map(|s| match s {
                    Signal::DeckCount(n, Some(Side::Bot)) => Some(*n),
                    _ => None,
                });
                match after {
                    Some(after) => {
                        let taken = before - after;
                        assert!(
                            (1..=3).contains(&taken) && taken <= before,
                            "bot took {taken} from {before}"
                        );
                    }
                    None => assert_eq!(before, 0),
                }
            }
        }
    }

    #[test]
    fn test_snapshot_resume() {
        let mut c = controller(15, &[2]);
        c.request_move("3");
        let snapshot = c.snapshot();
        assert_eq!(
            snapshot,
            Snapshot {
                initial_deck: 15,
                deck_count: 10,
                winner: None
            }
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
        let mut resumed = TurnController::restore_with_generator(
            Rules::default(),
            snapshot,
            Scripted::new(&[2]),
            Recorder::new(),
        )
        .unwrap();
        assert_eq!(resumed.view_mut().take(), vec![Signal::DeckCount(10, None)]);
        assert_eq!(resumed.request_move("3"), RoundOutcome::Continue);
        assert_eq!(resumed.deck_count(), 5);
    }

    #[test]
    fn test_restore_finished() {
        let snapshot = Snapshot {
            initial_deck: 15,
            deck_count: 0,
            winner: Some(Side::Bot),
        };
        let c = TurnController::restore(Rules::default(), snapshot, Recorder::new()).unwrap();
        assert_eq!(c.phase(), Phase::GameOver(Side::Bot));
        assert_eq!(
            c.view().signals,
            vec![
                Signal::DeckCount(0, None),
                Signal::BotWin,
                Signal::DisableMoveControl
            ]
        );
    }

    #[test]
    fn test_restore_rejects_inconsistent() {
        let rules = Rules::default();
        let snapshot = |deck_count, winner| Snapshot {
            initial_deck: 15,
            deck_count,
            winner,
        };
        let empty = Snapshot {
            initial_deck: 0,
            deck_count: 0,
            winner: None,
        };
        let bad = [
            (empty, InvalidSnapshot::EmptyGame),
            (
                snapshot(16, None),
                InvalidSnapshot::DeckTooLarge {
                    deck_count: 16,
                    initial_deck: 15,
                },
            ),
            (snapshot(0, None), InvalidSnapshot::MissingWinner),
            (
                snapshot(4, Some(Side::Human)),
                InvalidSnapshot::WinnerWithItemsLeft { deck_count: 4 },
            ),
        ];
        for (snapshot, expected) in bad {
            let err = TurnController::restore(rules, snapshot, Recorder::new()).err();
            assert_eq!(err, Some(expected));
        }
    }

    #[test]
    fn test_restore_keeps_saved_deck_size() {
        let mut c = controller(20, &[1]);
        c.request_move("1");
        let snapshot = c.snapshot();
        assert_eq!(snapshot.deck_count, 18);

        let resumed = TurnController::restore(Rules::default(), snapshot, Recorder::new()).unwrap();
        assert_eq!(resumed.rules().initial_deck, 20);
        assert_eq!(resumed.deck_count(), 18);
        assert_eq!(resumed.snapshot(), snapshot);
    }

    #[test]
    #[should_panic]
    fn test_empty_deck_refused() {
        TurnController::with_generator(
            Rules::new().initial_deck(0),
            IntGenerator::seeded(4, 0),
            Recorder::new(),
        );
    }
}
