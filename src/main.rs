use std::env;

use anyhow::{Context, Result};
use chess_sim::Game;
#[allow(unused_imports)]
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_PLIES: usize = 30;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let plies: usize = match args.get(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid plies count: {arg:?}"))?,
        None => DEFAULT_PLIES,
    };
    let seed: u64 = match args.get(2) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Invalid seed: {arg:?}"))?,
        None => rand::thread_rng().gen(),
    };
    info!("Playing {plies} random plies with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut game = Game::default();
    for _ in 0..plies {
        game.random_move_with(&mut rng);
    }
    debug!("{} to move", game.turn());

    println!("{game}");
    for line in game.evaluate_best_moves() {
        let line: String = line
            .iter()
            .map(|_move| format!("{}-{}; ", _move.start, _move.end))
            .collect();
        println!("{line}");
    }
    Ok(())
}
