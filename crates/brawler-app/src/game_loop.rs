//! Game loop thread. Runs the encounter director at the nominal tick rate.
//!
//! The director is created inside this thread and never leaves it.
//! Commands arrive via `mpsc` channel. Snapshots go to the [`Presenter`] and
//! are stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use brawler_core::constants::{TICK_MS, TICK_RATE};
use brawler_core::state::EncounterSnapshot;
use brawler_sim::engine::{EncounterDirector, SimConfig};

use crate::error::HostError;
use crate::presenter::Presenter;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control layer and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    presenter: impl Presenter,
    latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), HostError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("brawler-game-loop".into())
        .spawn(move || {
            run_game_loop(config, presenter, cmd_rx, &latest_snapshot);
        })
        .map_err(HostError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    mut presenter: impl Presenter,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<EncounterSnapshot>>,
) {
    let mut director = EncounterDirector::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut director) {
            tracing::info!(at_secs = director.time().elapsed_secs(), "game loop stopped");
            return;
        }

        // 2. Advance one tick (director handles pause semantics internally)
        let snapshot = director.tick(TICK_MS);

        // 3. Hand the snapshot to presentation
        presenter.present(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            tracing::warn!(behind_ms = (now - next_tick_time).as_millis() as u64, "game loop falling behind");
            next_tick_time = now;
        }
    }
}

/// Queue every pending command. Returns false once the loop should stop.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, director: &mut EncounterDirector) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => director.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
