use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use bashe::config::{BotMovePolicy, Rules};
use bashe::controller::{Phase, Snapshot, TurnController};
use bashe::display::DeckDisplay;
use bashe::game::{Deck, Side};
use bashe::generator::IntGenerator;
use bashe::view::View;

#[derive(Parser, Debug)]
#[command(version, about = "Take 1 to 3 items; whoever takes the last one wins.", long_about = None)]
struct Args {
    /// Seed for the bot's moves.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    deck: u32,

    /// Most items a single move may take.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=1000))]
    max_take: u32,

    /// resample or clamp
    #[arg(long, default_value = "resample")]
    policy: BotMovePolicy,

    /// Save the game here on quit and resume from it on start.
    #[arg(long)]
    state: Option<PathBuf>,
}

////////////////////////////////////////////////////////////////////////////////////////

struct TerminalView {
    max_take: u32,
    enabled: bool,
}

impl View for TerminalView {
    fn display_deck_count(&mut self, count: u32, by: Option<Side>) {
        let deck = Deck::new(count);
        match by {
            Some(Side::Bot) => println!("Items in deck after bot's move: {count}"),
            _ => println!("Items in deck: {count}"),
        }
        println!("  {}", DeckDisplay(&deck));
    }

    fn display_player_win(&mut self) {
        println!("You took the last item. You win!");
    }

    fn display_bot_win(&mut self) {
        println!("The bot took the last item. Bot wins!");
    }

    fn display_input_error(&mut self) {
        eprintln!(
            "Wrong move: take between 1 and {} items, no more than remain",
            self.max_take
        );
    }

    fn disable_move_control(&mut self) {
        self.enabled = false;
    }
}

////////////////////////////////////////////////////////////////////////////////////////

fn load(path: &Path) -> Result<Option<Snapshot>, Box<dyn Error>> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&json)?))
}

fn save(path: &Path, snapshot: &Snapshot) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
    info!("saved {snapshot:?} to {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    color_backtrace::install();
    pretty_env_logger::init();

    let args = Args::parse();
    let rules = Rules::new()
        .initial_deck(args.deck)
        .max_take(args.max_take)
        .bot_policy(args.policy);
    let generator = match args.seed {
        Some(seed) => IntGenerator::seeded(rules.bot_ceil, seed),
        None => IntGenerator::new(rules.bot_ceil),
    };
    let view = TerminalView {
        max_take: rules.max_take,
        enabled: true,
    };

    let snapshot = match &args.state {
        Some(path) => load(path)?,
        None => None,
    };
    let mut controller = match snapshot {
        Some(snapshot) => {
            TurnController::restore_with_generator(rules, snapshot, generator, view)?
        }
        None => TurnController::with_generator(rules, generator, view),
    };

    let mut input = String::new();
    while controller.view().enabled {
        input.clear();
        print!("> ");
        io::stdout().flush()?;
        if io::stdin().read_line(&mut input)? == 0 || matches!(input.trim(), "q" | "quit") {
            if let Some(path) = &args.state {
                save(path, &controller.snapshot())?;
            }
            return Ok(());
        }
        controller.request_move(&input);
    }

    // A finished game is not worth resuming.
    if let (Some(path), Phase::GameOver(_)) = (&args.state, controller.phase()) {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}
