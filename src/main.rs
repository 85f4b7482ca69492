//! Headless runner (default binary).
//!
//! Reads one command per line from stdin (`start`, `move-left`,
//! `move-right`, `soft-drop`, `rotate`, `tick`, `stop`; `quit` exits) and
//! prints every resulting snapshot to stdout as a JSON line. Gravity ticks
//! run in real time once a game is started. Diagnostics go to stderr.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};

use tick_tetris::core::GameSnapshot;
use tick_tetris::engine::{run_session, EngineConfig};
use tick_tetris::types::Command;

#[tokio::main]
async fn main() -> Result<()> {
    let config = EngineConfig::from_env().context("invalid TETRIS_* configuration")?;
    eprintln!(
        "[tick-tetris] tick {}ms, spawn order {:?}",
        config.tick_ms, config.rules.spawn_order
    );

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(32);
    let (snap_tx, mut snap_rx) = watch::channel(GameSnapshot::default());

    let session = tokio::spawn(run_session(config, cmd_rx, snap_tx));

    // Ends when the session drops its sender
    let printer = tokio::spawn(async move {
        while snap_rx.changed().await.is_ok() {
            let line = serde_json::to_string(&*snap_rx.borrow_and_update())?;
            println!("{}", line);
        }
        Ok::<_, anyhow::Error>(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        match Command::from_str(line) {
            Some(cmd) => cmd_tx
                .send(cmd)
                .await
                .context("session ended unexpectedly")?,
            None => eprintln!("[tick-tetris] unknown command: {}", line),
        }
    }
    drop(cmd_tx);

    let final_state = session.await.context("session task panicked")??;
    printer.await.context("printer task panicked")??;

    eprintln!(
        "[tick-tetris] final score {} ({} lines)",
        final_state.score(),
        final_state.lines()
    );
    Ok(())
}
