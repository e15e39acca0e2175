use clap::{Parser, ValueEnum};
use indicatif::ParallelProgressIterator;
use rand::rngs::SmallRng;
use rand::Rng;
use rand_core::SeedableRng;
use rayon::prelude::*;

use bashe::config::{BotMovePolicy, Rules};
use bashe::controller::TurnController;
use bashe::generator::IntGenerator;
use bashe::util::{battle_royale, Tally};
use bashe::view::Recorder;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Stand {
    /// Legal amounts chosen uniformly.
    Random,
    /// Leave the bot a multiple of four whenever possible.
    Optimal,
    /// Whatever text comes to mind, legal or not.
    Careless,
}

#[derive(Parser, Debug)]
#[command(version, about = "Simulate many games against the bot", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10_000)]
    games: u64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    deck: u32,

    /// Most items a single move may take.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=1000))]
    max_take: u32,

    #[arg(long, default_value = "resample")]
    policy: BotMovePolicy,

    /// How the stand-in for the human chooses its moves.
    #[arg(long, value_enum, default_value_t = Stand::Random)]
    stand: Stand,
}

////////////////////////////////////////////////////////////////////////////////////////

fn human_move(stand: Stand, rng: &mut SmallRng, deck: u32, max_take: u32) -> String {
    match stand {
        Stand::Random => rng.gen_range(1..=deck.min(max_take)).to_string(),
        Stand::Optimal => match deck % (max_take + 1) {
            0 => "1".into(),
            n => n.to_string(),
        },
        Stand::Careless => match rng.gen_range(0..6) {
            0 => "lots".into(),
            n => n.to_string(),
        },
    }
}

fn play_one(args: &Args, rules: Rules, game: u64) -> (Tally, usize) {
    let seed = args.seed.wrapping_add(game);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut controller = TurnController::with_generator(
        rules,
        IntGenerator::seeded(rules.bot_ceil, seed.rotate_left(32)),
        Recorder::new(),
    );
    let (winner, rejected) = battle_royale(&mut controller, |deck| {
        human_move(args.stand, &mut rng, deck, rules.max_take)
    });

    let mut tally = Tally::default();
    tally.record(winner);
    (tally, rejected)
}

fn main() {
    color_backtrace::install();
    pretty_env_logger::init();

    let args = Args::parse();
    let rules = Rules::new()
        .initial_deck(args.deck)
        .max_take(args.max_take)
        .bot_policy(args.policy);

    let (tally, rejected) = (0..args.games)
        .into_par_iter()
        .progress_count(args.games)
        .map(|game| play_one(&args, rules, game))
        .reduce(
            || (Tally::default(), 0),
            |(a, x), (b, y)| (a.merge(b), x + y),
        );

    println!("{:?} human vs. bot, deck of {}", args.stand, args.deck);
    println!("{}", tally.summary());
    println!("rejected inputs: {rejected}");
}
