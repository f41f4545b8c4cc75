use bowling::{AiBowler, Game, GameReport, GameSession};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [accuracy]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let accuracy: f64 = match args.get(2) {
        Some(a) => a.parse()?,
        None => AiBowler::DEFAULT_ACCURACY,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(Game::default(), Box::new(AiBowler::with_accuracy(accuracy)));
    session.run(&mut rng)?;

    let report = GameReport::from_game(session.game());
    let result = json!({
        "seed": seed,
        "final_score": report.final_score,
        "finished": report.finished,
        "frames": report.frames,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
