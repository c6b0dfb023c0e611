//! Headless demo: runs an encounter in real time with a simple autopilot
//! pressing the attack keys, narrating everything through the log.
//!
//! Usage: `brawler-app [CONFIG_JSON] [SECONDS]`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use brawler_app::control;
use brawler_app::input::{KeyLatch, KeySample};
use brawler_app::presenter::LogPresenter;
use brawler_app::state::HostState;
use brawler_app::HostError;
use brawler_core::config::CombatConfig;
use brawler_core::constants::TICK_MS;
use brawler_core::enums::{Direction, EncounterPhase};
use brawler_core::state::EncounterSnapshot;
use brawler_sim::engine::SimConfig;

/// Distance at which the autopilot swings at an approaching enemy.
const AUTOPILOT_REACH: f64 = 200.0;

fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let combat = match args.next().map(PathBuf::from) {
        Some(path) => control::load_combat_config(&path).unwrap_or_else(|error| {
            tracing::warn!(%error, path = %path.display(), "ignoring config override");
            CombatConfig::default()
        }),
        None => CombatConfig::default(),
    };
    let seconds = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(20);

    let state = HostState::new();
    control::start_encounter(
        &state,
        SimConfig {
            seed: 42,
            combat,
        },
        LogPresenter::new(),
    )?;

    let mut latch = KeyLatch::new();
    let deadline = Instant::now() + Duration::from_secs(seconds);
    let frame = Duration::from_secs_f64(TICK_MS / 1000.0);

    while Instant::now() < deadline {
        if let Some(snapshot) = control::get_snapshot(&state)? {
            if snapshot.phase == EncounterPhase::Defeated {
                break;
            }
            if let Some(command) = latch.sample(autopilot_keys(&snapshot)) {
                control::send_command(&state, command)?;
            }
        }
        std::thread::sleep(frame);
    }

    if let Some(snapshot) = control::get_snapshot(&state)? {
        tracing::info!(
            survival_secs = snapshot.score.survival_secs,
            spawned = snapshot.score.enemies_spawned,
            defeated = snapshot.score.enemies_defeated,
            hits_taken = snapshot.score.hits_taken,
            whiffs = snapshot.score.attacks_whiffed,
            "final score"
        );
    }
    control::shutdown(&state)
}

/// Hold the key toward the nearest live enemy once it is within reach.
fn autopilot_keys(snapshot: &EncounterSnapshot) -> KeySample {
    let player_x = snapshot.player.position.x;
    let nearest = snapshot
        .enemies
        .iter()
        .filter(|e| !e.damaged)
        .map(|e| e.position.x - player_x)
        .filter(|dx| dx.abs() <= AUTOPILOT_REACH)
        .min_by(|a, b| a.abs().total_cmp(&b.abs()));

    match nearest.map(|dx| if dx < 0.0 { Direction::Left } else { Direction::Right }) {
        Some(Direction::Left) => KeySample {
            left: true,
            ..Default::default()
        },
        Some(Direction::Right) => KeySample {
            right: true,
            ..Default::default()
        },
        None => KeySample::default(),
    }
}
