//! Local Pong match
//!
//! Loads cumulative statistics, plays one match between two autopilot
//! paddles and records the result.

mod console;
mod env_config;

use std::io::BufRead;

use game_core::{Autopilot, Clock, Config, NoDelayClock, Players, Simulation, ThreadClock};
use stats::StatsStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::console::{print_banner, print_stats, ConsoleRenderer};
use crate::env_config::Settings;

fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let settings = Settings::from_env();
    let config = Config::new();
    let mut players = Players::new();

    print_banner(&config, &players);

    // Load previous statistics
    let mut store = StatsStore::new(&settings.stats_path, &settings.scores_path);
    store.load(&mut players);
    print_stats(&players);

    match store.read_history() {
        Ok(Some(history)) => {
            println!("\n PREVIOUS GAME SCORES:");
            println!("{history}");
        }
        Ok(None) => println!(" No previous games recorded yet!"),
        Err(e) => error!("Error reading scores: {e}"),
    }

    let mut sim = Simulation::new(config, players);
    let mut clock: Box<dyn Clock> = if settings.realtime {
        Box::new(ThreadClock)
    } else {
        Box::new(NoDelayClock)
    };
    let mut input = Autopilot::new(settings.seed);
    let mut renderer = ConsoleRenderer::new();

    info!(seed = settings.seed, realtime = settings.realtime, "GAME STARTED");
    sim.run(clock.as_mut(), &mut input, &mut renderer, &mut store);
    info!(ticks = sim.tick, "match finished");

    print_stats(&sim.players);

    if settings.wait_for_exit {
        println!(" Thanks for playing! Press Enter to exit.\n");
        let mut line = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
            error!("Failed to read from stdin: {e}");
        }
    }
}
