//! stash-runner: headless host for the Stash-Dash game store.
//!
//! Usage:
//!   stash-runner --db save.db                 # print the saved game
//!   stash-runner --db save.db --ipc-mode      # JSON lines on stdin/stdout
//!   stash-runner --db save.db --ipc-mode --seed 7 --data-dir ./data

mod ipc;

use anyhow::Result;
use stashdash_core::{
    config::GameConfig,
    feedback::FeedbackDirector,
    store::SqliteSlot,
    view::StatusView,
    GameStateStore,
};
use std::env;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 0x5EED_u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or("stashdash.db");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let config = GameConfig::load(data_dir).unwrap_or_else(|e| {
        log::warn!("using default config: {e}");
        GameConfig::default()
    });

    let slot = SqliteSlot::open(db)?;
    slot.migrate()?;
    let mut store = GameStateStore::load(slot, config)?;

    if ipc_mode {
        let mut feedback = FeedbackDirector::new(store.config(), seed);
        let stdin = io::stdin();
        ipc::run_ipc_loop(&mut store, &mut feedback, stdin.lock(), io::stdout())?;
    } else {
        print_summary(&store, db);
    }

    Ok(())
}

fn print_summary(store: &GameStateStore<SqliteSlot>, db: &str) {
    let view = StatusView::build(store.state(), store.config());

    println!("Stash-Dash: saved game");
    println!("  db:        {db}");
    println!("  health:    {} ({:?})", view.hp_text, view.band);
    println!("  gold:      {}", view.currency);
    println!("  spent:     {:.2} (left today: {:.2})", view.spent, view.allowance_left);
    if view.game_over {
        println!("  status:    GAME OVER");
    }

    println!();
    println!("=== TODAY'S EXPENSES ===");
    if view.expenses.is_empty() {
        println!("  (none logged)");
    } else {
        for row in &view.expenses {
            println!("  [{}] {} ({}) {}", row.id, row.name, row.category, row.cost_text);
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
