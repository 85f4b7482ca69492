//! Async session runtime.
//!
//! One task owns the [`Session`] and is the only writer of its state. It
//! multiplexes the inbound command queue with the gravity ticker, so ticks
//! and commands are applied one at a time in arrival order. The ticker arm
//! is only polled while the game is running: once a stop or game over has
//! been applied, no further tick can reach the session.

use anyhow::{ensure, Context, Result};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, MissedTickBehavior};

use crate::config::{ConfigError, EngineConfig};
use crate::core::{GameSnapshot, State};
use crate::event_log::spawn_event_log;
use crate::session::{Outcome, Session, SessionEvent};
use crate::types::Command;

/// Run a session until the command channel closes.
///
/// Every state change is published on `snapshots`. Returns the final state,
/// or an error if `config.tick_ms` is zero.
pub async fn run_session(
    config: EngineConfig,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<GameSnapshot>,
) -> Result<State> {
    // `time::interval` panics on a zero period
    ensure!(config.tick_ms > 0, ConfigError::ZeroTick);

    let (event_log, log_writer) = match config.log_path.clone() {
        Some(path) => {
            let (tx, handle) = spawn_event_log(path);
            (Some(tx), Some(handle))
        }
        None => (None, None),
    };

    let mut session = Session::new(config.rules);
    let mut ticker = new_ticker(&config);

    loop {
        let running = session.state().is_running();

        let command = tokio::select! {
            biased;

            cmd = commands.recv() => match cmd {
                Some(cmd) => cmd,
                None => break,
            },
            _ = ticker.tick(), if running => Command::Tick,
        };

        let outcome = session.apply(command);
        if command == Command::Start && outcome == Outcome::Applied {
            // First gravity step fires immediately, then once per period
            ticker = new_ticker(&config);
        }

        for event in session.take_events() {
            match event {
                SessionEvent::Started => eprintln!("[Session] game started"),
                SessionEvent::GameOver { score, lines } => {
                    eprintln!("[Session] game over, score {} ({} lines)", score, lines)
                }
                SessionEvent::Stopped { score, lines } => {
                    eprintln!("[Session] stopped, score {} ({} lines)", score, lines)
                }
                SessionEvent::Locked(_) => {}
            }
            if let Some(tx) = &event_log {
                let _ = tx.send(event);
            }
        }

        if outcome != Outcome::NoEffect {
            snapshots.send_replace(session.state().snapshot());
        }
    }

    drop(event_log);
    if let Some(handle) = log_writer {
        handle.await.context("event log task panicked")?;
    }

    Ok(session.into_state())
}

fn new_ticker(config: &EngineConfig) -> time::Interval {
    let mut ticker = time::interval(config.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
