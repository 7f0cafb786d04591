#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    ui, CliPlayer, FleetPlacer, GameError, Player, Point, RandomPlayer, ShotOutcome, Side,
    TurnEngine, TurnState, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, help = "Board edge length")]
        size: usize,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, help = "Board edge length")]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            ensure_playable_size(size)?;
            println!("Welcome to Sea Battle!");
            println!("Enter shots as a 1-indexed column and row pair, e.g. \"3 5\".");
            let mut rng = make_rng(seed);
            let engine = setup_game(size, &mut rng, false);
            let labels = ("You", "The computer");
            let winner = run_game(engine, rng, Box::new(CliPlayer::new()), labels)?;
            match winner {
                Side::Human => println!("\nVictory! You have sunk the whole enemy fleet."),
                Side::Computer => println!("\nDefeat. The computer sank all your ships."),
            }
        }
        Commands::Auto { seed, size } => {
            ensure_playable_size(size)?;
            println!("Starting a computer vs. computer game...");
            let mut rng = make_rng(seed);
            let engine = setup_game(size, &mut rng, true);
            let labels = ("Computer one", "Computer two");
            let winner = run_game(engine, rng, Box::new(RandomPlayer::new()), labels)?;
            match winner {
                Side::Human => println!("\nComputer one wins."),
                Side::Computer => println!("\nComputer two wins."),
            }
        }
    }
    Ok(())
}

/// The fixed fleet needs room to breathe; below the default size the
/// placement search would retry forever.
#[cfg(feature = "std")]
fn ensure_playable_size(size: usize) -> anyhow::Result<()> {
    anyhow::ensure!(
        size >= BOARD_SIZE,
        "board size must be at least {}",
        BOARD_SIZE
    );
    Ok(())
}

/// Build both fleets and start a game. The second board's ships stay
/// hidden unless `reveal_all` is set (spectator mode shows everything).
#[cfg(feature = "std")]
fn setup_game(size: usize, rng: &mut SmallRng, reveal_all: bool) -> TurnEngine {
    let placer = FleetPlacer::new(size);
    let human_board = placer.random_board(rng);
    let mut computer_board = placer.random_board(rng);
    computer_board.set_reveal(reveal_all);
    TurnEngine::new(human_board, computer_board)
}

/// Drive the game to completion. `first` acts for the side that moves
/// first; the opposing side is always the uniform-random computer actor.
#[cfg(feature = "std")]
fn run_game(
    mut engine: TurnEngine,
    mut rng: SmallRng,
    mut first: Box<dyn Player>,
    labels: (&str, &str),
) -> anyhow::Result<Side> {
    let mut second: Box<dyn Player> = Box::new(RandomPlayer::new());
    loop {
        let side = match engine.state() {
            TurnState::Awaiting(side) => side,
            TurnState::Finished(winner) => return Ok(winner),
        };
        let label = match side {
            Side::Human => labels.0,
            Side::Computer => labels.1,
        };
        println!();
        ui::print_battle_view(&engine);
        println!("\n{} to move.", label);
        let actor = match side {
            Side::Human => &mut first,
            Side::Computer => &mut second,
        };

        // A rejected target never consumes the turn; the same actor is
        // simply asked again.
        let (target, outcome) = loop {
            let target = actor.select_target(&mut rng, engine.board(side.opponent()));
            match engine.play_turn(target) {
                Ok(outcome) => break (target, outcome),
                Err(e @ (GameError::Used | GameError::OutOfBounds)) => {
                    if side == Side::Human {
                        println!("{}", e);
                    }
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        };
        let verdict = match outcome {
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sunk => "sunk a ship",
            ShotOutcome::Miss => "missed",
        };
        println!(
            "{} shot at ({}, {}) and {}.",
            label,
            target.x + 1,
            target.y + 1,
            verdict
        );
        actor.handle_shot_result(target, outcome);
    }
}
