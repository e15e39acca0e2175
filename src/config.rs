use std::str::FromStr;

/// How the bot turns a generator sample into a legal amount once the deck
/// holds fewer items than the generator can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotMovePolicy {
    /// Discard samples larger than the deck and draw again. After
    /// `max_attempts` discarded samples the last one is clamped.
    Resample { max_attempts: u32 },

    /// Draw once and clamp to the deck.
    Clamp,
}

impl Default for BotMovePolicy {
    fn default() -> Self {
        BotMovePolicy::Resample { max_attempts: 64 }
    }
}

impl FromStr for BotMovePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resample" => Ok(Self::default()),
            "clamp" => Ok(BotMovePolicy::Clamp),
            _ => Err(format!("unknown bot policy: {s} (expected resample or clamp)")),
        }
    }
}

/// Fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub initial_deck: u32,
    pub min_take: u32,
    pub max_take: u32,
    /// Exclusive upper bound for bot samples.
    pub bot_ceil: u32,
    pub bot_policy: BotMovePolicy,
}

impl Rules {
    pub fn new() -> Self {
        Self {
            initial_deck: 15,
            min_take: 1,
            max_take: 3,
            bot_ceil: 4,
            bot_policy: BotMovePolicy::default(),
        }
    }

    pub fn initial_deck(mut self, initial_deck: u32) -> Self {
        self.initial_deck = initial_deck;
        self
    }

    // NOTE: keeps the bot's range equal to the human's
    pub fn max_take(mut self, max_take: u32) -> Self {
        self.max_take = max_take;
        self.bot_ceil = max_take.saturating_add(1);
        self
    }

    pub fn bot_policy(mut self, bot_policy: BotMovePolicy) -> Self {
        self.bot_policy = bot_policy;
        self
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
