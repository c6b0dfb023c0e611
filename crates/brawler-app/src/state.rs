//! Host state shared between the control functions and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use brawler_core::commands::PlayerCommand;
use brawler_core::state::EncounterSnapshot;

/// Commands sent from the control layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the encounter director.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state can be shared by reference
/// - `Mutex<Option<...>>` holds what does not exist before `start_encounter`
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the game loop thread)
pub struct HostState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_encounter` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<EncounterSnapshot>>>,
    /// The game loop thread, joined on shutdown.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }
}
