use thiserror::Error as ThisError;

/// Why a human move was turned down. The view only ever sees one "rejected"
/// signal; the variants are kept for logging.
#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("move is not a number")]
    Unparseable,
    #[error("move out of range (got={amount}, min={min}, max={max})")]
    OutOfRange { amount: i64, min: u32, max: u32 },
    #[error("move exceeds deck (got={amount}, remaining={remaining})")]
    ExceedsDeck { amount: u32, remaining: u32 },
}

#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSnapshot {
    #[error("game started with an empty deck")]
    EmptyGame,
    #[error("deck holds more than it started with (got={deck_count}, max={initial_deck})")]
    DeckTooLarge { deck_count: u32, initial_deck: u32 },
    #[error("winner recorded with items left (deck_count={deck_count})")]
    WinnerWithItemsLeft { deck_count: u32 },
    #[error("empty deck without a winner")]
    MissingWinner,
}
