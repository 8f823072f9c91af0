//! Drag Race in the terminal
//!
//! Press Enter to stage the tree, then Enter again when the bottom lamp goes
//! green. Type `pro` or `sportsman` to switch trees between runs, `q` to quit.
//!
//! The default tree comes from `DRAGTREE_TREE`; log verbosity from `RUST_LOG`.
//!
//! Run with: cargo run --example drag_race

use dragtree::core::{describe, LightState, RaceState, TreeType};
use dragtree::race::{RaceResult, SystemRace};
use dragtree::{RaceBuilder, RaceConfig, SystemClock};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const IDLE_WAIT: Duration = Duration::from_millis(50);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = RaceConfig::from_env()?;
    let mut tree = config.default_tree;
    let mut race: SystemRace = RaceBuilder::new()
        .timer(SystemClock::new())
        .config(config)
        .sink(|result: &RaceResult| println!("\n  {}\n", result.message))
        .build()?;

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("=== Drag Race ({tree} tree) ===");
    println!("Enter: start / launch   pro | sportsman: switch tree   q: quit\n");

    let mut shown = race.lights();
    loop {
        let wait = race.time_until_next().unwrap_or(IDLE_WAIT).min(IDLE_WAIT);
        match rx.recv_timeout(wait) {
            Ok(line) => match line.trim() {
                "q" => break,
                "" => match race.race_state() {
                    RaceState::Idle | RaceState::Finished => race.start_race(tree)?,
                    RaceState::Staging | RaceState::Racing => {
                        race.launch();
                    }
                },
                other => match other.parse::<TreeType>() {
                    Ok(next) if race.race_state().is_active() => {
                        println!("Finish this run before switching to the {next} tree");
                    }
                    Ok(next) => {
                        tree = next;
                        println!("Switched to the {tree} tree");
                    }
                    Err(err) => println!("{err}"),
                },
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        race.poll();
        if race.lights() != shown {
            shown = race.lights();
            println!("  [{}]{}", describe(&shown), go_hint(&shown));
        }
    }

    Ok(())
}

fn go_hint(lights: &[LightState; 3]) -> &'static str {
    if lights[2] == LightState::Green {
        "  GO!"
    } else {
        ""
    }
}
