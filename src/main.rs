#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bowling::{
    init_logging, notation::tokenize, print_scorecard, AiBowler, Bowler, CliBowler, Game,
    GameConfig, GameReport, GameSession, GameStatus, ScriptedBowler,
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Ten-pin bowling scorekeeper", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(flatten)]
    rules: RuleArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[cfg(feature = "std")]
struct RuleArgs {
    #[arg(long, global = true, help = "JSON file with game rules")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Number of frames in the game")]
    frames: Option<usize>,
    #[arg(long, global = true, help = "Pins in a full rack")]
    pins: Option<u32>,
    #[arg(long, global = true, help = "Deliveries in a normal frame")]
    bowls: Option<u32>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Score a game entered interactively, one delivery per line.
    Play,
    /// Score a recorded game given as deliveries, e.g. `X 7/ 9- 10 0`.
    Replay {
        #[arg(required = true)]
        deliveries: Vec<String>,
        #[arg(long, help = "Print a JSON report instead of the scorecard")]
        json: bool,
    },
    /// Let a random bowler play a game.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = AiBowler::DEFAULT_ACCURACY)]
        accuracy: f64,
        #[arg(long, help = "Print a JSON report instead of the scorecard")]
        json: bool,
    },
}

#[cfg(feature = "std")]
impl RuleArgs {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                GameConfig::from_json_str(&json)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => GameConfig::default(),
        };
        if let Some(frames) = self.frames {
            config.total_frames = frames;
        }
        if let Some(pins) = self.pins {
            config.total_pins_per_frame = pins;
        }
        if let Some(bowls) = self.bowls {
            config.bowls_per_normal_frame = bowls;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_session(
    config: GameConfig,
    bowler: Box<dyn Bowler>,
    rng: &mut SmallRng,
) -> anyhow::Result<Game> {
    let game = Game::new(config).map_err(|e| anyhow::anyhow!(e))?;
    let mut session = GameSession::new(game, bowler);
    let status = session.run(rng)?;
    if status == GameStatus::InProgress {
        log::warn!("Input ended before the last frame was bowled");
    }
    Ok(session.into_game())
}

#[cfg(feature = "std")]
fn show(game: &Game, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&GameReport::from_game(game))?);
    } else {
        print_scorecard(game);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.rules.game_config()?;

    match cli.command {
        Commands::Play => {
            println!(
                "Starting a {}-frame game. Enter pins, x for a strike, / for a spare.",
                config.total_frames
            );
            let mut rng = make_rng(None);
            let game = run_session(config, Box::new(CliBowler::new()), &mut rng)?;
            println!("FINAL SCORE: {}", game.final_score());
        }
        Commands::Replay { deliveries, json } => {
            let tokens: Vec<String> = deliveries
                .iter()
                .flat_map(|d| tokenize(d))
                .map(String::from)
                .collect();
            let mut rng = make_rng(None);
            let game = run_session(config, Box::new(ScriptedBowler::new(tokens)), &mut rng)?;
            show(&game, json)?;
        }
        Commands::Auto {
            seed,
            accuracy,
            json,
        } => {
            if let Some(s) = seed {
                log::info!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let bowler = AiBowler::with_accuracy(accuracy);
            let game = run_session(config, Box::new(bowler), &mut rng)?;
            show(&game, json)?;
        }
    }
    Ok(())
}
