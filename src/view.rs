use crate::game::Side;

/// Instructions the controller sends to whatever is showing the game.
pub trait View {
    /// Show the deck. `by` is the side that just moved, or `None` when the
    /// game is first shown.
    fn display_deck_count(&mut self, count: u32, by: Option<Side>);

    fn display_player_win(&mut self);

    fn display_bot_win(&mut self);

    /// The last requested move was rejected.
    fn display_input_error(&mut self);

    fn disable_move_control(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    DeckCount(u32, Option<Side>),
    PlayerWin,
    BotWin,
    InputError,
    DisableMoveControl,
}

/// A view that writes every instruction down.
#[derive(Clone, Debug)]
pub struct Recorder {
    pub signals: Vec<Signal>,
    pub move_control_enabled: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
            move_control_enabled: true,
        }
    }

    /// Drain the signals recorded so far.
    pub fn take(&mut self) -> Vec<Signal> {
        std::mem::take(&mut self.signals)
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Recorder {
    fn display_deck_count(&mut self, count: u32, by: Option<Side>) {
        self.signals.push(Signal::DeckCount(count, by));
    }

    fn display_player_win(&mut self) {
        self.signals.push(Signal::PlayerWin);
    }

    fn display_bot_win(&mut self) {
        self.signals.push(Signal::BotWin);
    }

    fn display_input_error(&mut self) {
        self.signals.push(Signal::InputError);
    }

    fn disable_move_control(&mut self) {
        self.move_control_enabled = false;
        self.signals.push(Signal::DisableMoveControl);
    }
}

impl<V: View + ?Sized> View for &mut V {
    fn display_deck_count(&mut self, count: u32, by: Option<Side>) {
        (**self).display_deck_count(count, by);
    }

    fn display_player_win(&mut self) {
        (**self).display_player_win();
    }

    fn display_bot_win(&mut self) {
        (**self).display_bot_win();
    }

    fn display_input_error(&mut self) {
        (**self).display_input_error();
    }

    fn disable_move_control(&mut self) {
        (**self).disable_move_control();
    }
}
