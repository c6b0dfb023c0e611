//! Control functions a front end calls to drive the encounter.
//!
//! They bridge front-end requests to the game loop thread via channels.

use std::fs;
use std::path::Path;

use brawler_core::commands::PlayerCommand;
use brawler_core::config::CombatConfig;
use brawler_core::state::EncounterSnapshot;
use brawler_sim::engine::SimConfig;

use crate::error::HostError;
use crate::game_loop;
use crate::presenter::Presenter;
use crate::state::{GameLoopCommand, HostState};

/// Read a (possibly partial) JSON combat config from disk.
pub fn load_combat_config(path: &Path) -> Result<CombatConfig, HostError> {
    let json = fs::read_to_string(path).map_err(|source| HostError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CombatConfig::from_json_str(&json)?)
}

/// Start the encounter. Spawns the game loop thread if not already running.
pub fn start_encounter(state: &HostState, config: SimConfig, presenter: impl Presenter) -> Result<(), HostError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?;
    if tx_lock.is_some() {
        return Err(HostError::AlreadyRunning);
    }

    let seed = config.seed;
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, presenter, state.latest_snapshot.clone())?;

    *tx_lock = Some(cmd_tx);
    *state.loop_thread.lock().map_err(|_| HostError::LockPoisoned)? = Some(handle);
    tracing::info!(seed, "game loop started");
    Ok(())
}

/// Send a player command to the encounter.
pub fn send_command(state: &HostState, command: PlayerCommand) -> Result<(), HostError> {
    let tx_lock = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| HostError::Disconnected),
        None => Err(HostError::NotStarted),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &HostState) -> Result<Option<EncounterSnapshot>, HostError> {
    let lock = state.latest_snapshot.lock().map_err(|_| HostError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn shutdown(state: &HostState) -> Result<(), HostError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| HostError::LockPoisoned)?
        .take()
        .ok_or(HostError::NotStarted)?;
    // A loop that already exited has dropped its receiver; joining is all that's left.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state.loop_thread.lock().map_err(|_| HostError::LockPoisoned)?.take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            tracing::warn!("game loop thread panicked");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use brawler_core::enums::{Direction, EncounterPhase};
    use brawler_core::events::CombatEvent;

    use super::*;

    /// Collects every event it is shown.
    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<CombatEvent>>>,
    }

    impl Presenter for Recorder {
        fn present(&mut self, snapshot: &EncounterSnapshot) {
            self.events.lock().unwrap().extend(snapshot.events.iter().cloned());
        }
    }

    fn wait_for(mut done: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if done() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_commands_before_start_are_rejected() {
        let state = HostState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::Pause),
            Err(HostError::NotStarted)
        ));
        assert!(matches!(shutdown(&state), Err(HostError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_full_host_round_trip() {
        let state = HostState::new();
        let recorder = Recorder::default();
        let events = recorder.events.clone();

        start_encounter(&state, SimConfig::default(), recorder).unwrap();
        assert!(matches!(
            start_encounter(&state, SimConfig::default(), Recorder::default()),
            Err(HostError::AlreadyRunning)
        ));

        send_command(
            &state,
            PlayerCommand::Attack {
                direction: Direction::Right,
            },
        )
        .unwrap();
        assert!(wait_for(|| events
            .lock()
            .unwrap()
            .iter()
            .any(|e| matches!(e, CombatEvent::AttackFailed { .. }))));

        send_command(&state, PlayerCommand::Pause).unwrap();
        assert!(wait_for(|| matches!(
            get_snapshot(&state),
            Ok(Some(ref snap)) if snap.phase == EncounterPhase::Paused
        )));

        shutdown(&state).unwrap();
        assert!(state.loop_thread.lock().unwrap().is_none());
    }

    #[test]
    fn test_load_config_errors() {
        let missing = load_combat_config(Path::new("/nonexistent/brawler.json"));
        assert!(matches!(missing, Err(HostError::ConfigRead { .. })));

        let path = std::env::temp_dir().join(format!("brawler-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "max_hp": -1.0 }"#).unwrap();
        let invalid = load_combat_config(&path);
        assert!(matches!(invalid, Err(HostError::Config(_))));

        fs::write(&path, r#"{ "max_hp": 50.0 }"#).unwrap();
        let config = load_combat_config(&path).unwrap();
        assert_eq!(config.max_hp, 50.0);
        let _ = fs::remove_file(&path);
    }
}
