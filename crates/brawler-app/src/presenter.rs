//! Presentation boundary.
//!
//! The game loop hands every snapshot to a [`Presenter`]. Sprites, tweens,
//! sounds and camera shake live behind this trait; the simulation only ever
//! describes what happened through [`CombatEvent`]s.

use std::io::Write;

use brawler_core::enums::EncounterPhase;
use brawler_core::events::CombatEvent;
use brawler_core::state::EncounterSnapshot;

/// Receives each snapshot produced by the game loop.
pub trait Presenter: Send + 'static {
    fn present(&mut self, snapshot: &EncounterSnapshot);
}

/// Headless presenter that narrates the encounter through `tracing`.
#[derive(Debug, Default)]
pub struct LogPresenter {
    last_phase: EncounterPhase,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, snapshot: &EncounterSnapshot) {
        for event in &snapshot.events {
            log_event(event, snapshot);
        }
        if snapshot.phase != self.last_phase {
            tracing::info!(
                from = ?self.last_phase,
                to = ?snapshot.phase,
                at_secs = snapshot.time.elapsed_secs(),
                "phase changed"
            );
            self.last_phase = snapshot.phase;
        }
    }
}

/// Writes every snapshot carrying events as one JSON line, for a front end
/// reading the host's output stream.
pub struct JsonLinesPresenter<W> {
    writer: W,
}

impl<W: Write + Send + 'static> JsonLinesPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + 'static> Presenter for JsonLinesPresenter<W> {
    fn present(&mut self, snapshot: &EncounterSnapshot) {
        if snapshot.events.is_empty() {
            return;
        }
        let written = serde_json::to_writer(&mut self.writer, snapshot)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        if let Err(error) = written {
            tracing::warn!(%error, "failed to write snapshot");
        }
    }
}

fn log_event(event: &CombatEvent, snapshot: &EncounterSnapshot) {
    match event {
        CombatEvent::AttackStarted { direction, zone } => {
            tracing::debug!(?direction, zone_x = zone.x, zone_width = zone.width, "attack");
        }
        CombatEvent::SuccessfulHit { enemy, position } => {
            tracing::info!(%enemy, x = position.x, "hit");
        }
        CombatEvent::AttackFailed { direction } => {
            tracing::info!(?direction, "whiff");
        }
        CombatEvent::PlayerDamaged { from, damage, hp } => {
            tracing::info!(?from, damage, hp, health = snapshot.player.health_fraction, "player damaged");
        }
        CombatEvent::PlayerDied => {
            tracing::info!(
                survived_secs = snapshot.score.survival_secs,
                defeated = snapshot.score.enemies_defeated,
                "player died"
            );
        }
        CombatEvent::EnemySpawned { enemy, position, origin } => {
            tracing::debug!(%enemy, ?origin, x = position.x, "enemy spawned");
        }
        CombatEvent::EnemyKnockedOut { enemy, .. } => {
            tracing::debug!(%enemy, "enemy knocked out");
        }
        CombatEvent::EnemyRemoved { enemy, reason } => {
            tracing::debug!(%enemy, ?reason, "enemy removed");
        }
    }
}
