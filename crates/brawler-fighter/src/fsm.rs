//! Player combat finite state machine.
//!
//! `PlayerCombatant` owns its health, timing windows and derived regions. It
//! never sees the enemy set directly: the caller hands it target candidates
//! and receives [`FighterSignal`]s back. `T` is the caller's enemy handle;
//! the fighter stores it but never dereferences it.

use std::fmt::Debug;

use glam::DVec2;

use brawler_core::actor::Actor;
use brawler_core::enums::{CombatState, Direction};
use brawler_core::geometry::Rect;
use brawler_core::types::{sanitize_dt, Position};

use crate::health::Health;
use crate::profiles::FighterProfile;
use crate::targeting::{select_target, TargetCandidate};
use crate::timers::TaskQueue;

/// Deferred transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FighterTask {
    ChargeComplete,
    StrikeComplete,
    VulnerableElapsed,
    StunElapsed,
}

/// What the current strike will resolve into.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Strike<T> {
    /// Charged at a target.
    Targeted(T),
    /// Zone was empty.
    Whiff(Direction),
    /// Directionless special move.
    Special,
}

/// Constant-velocity displacement over a fixed window (charge dash, knockback).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    /// px per ms.
    velocity_x: f64,
    remaining_ms: f64,
}

/// Outcome of an attack command that was accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackStart<T> {
    pub direction: Direction,
    /// The zone that was scanned.
    pub zone: Rect,
    /// The target being charged, if the zone was not empty.
    pub target: Option<T>,
}

/// Outcome of an incoming hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// The fighter was charging, striking, stunned or dead.
    Ignored,
    Stunned { damage: f64, hp: f64 },
    Killed { damage: f64 },
}

/// Signals produced while time advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FighterSignal<T> {
    /// A charged strike finished against `target`. The caller must confirm
    /// the target is still live before treating it as a hit.
    StrikeLanded { target: T },
    /// An attack into empty space finished its vulnerable window.
    Whiffed { direction: Direction },
}

/// The player-controlled combatant.
#[derive(Debug, Clone)]
pub struct PlayerCombatant<T> {
    profile: FighterProfile,
    position: Position,
    facing: Direction,
    state: CombatState,
    health: Health,
    target: Option<T>,
    strike: Option<Strike<T>>,
    motion: Option<Motion>,
    tasks: TaskQueue<FighterTask>,
    /// Bumped on every transition; tasks from older epochs never fire.
    epoch: u64,
    /// Fighter-local clock (ms).
    now_ms: f64,
    hurt_zone: Rect,
    attack_zone_left: Rect,
    attack_zone_right: Rect,
}

impl<T: Copy + PartialEq + Debug> PlayerCombatant<T> {
    pub fn new(profile: FighterProfile, position: Position) -> Self {
        let mut fighter = Self {
            profile,
            position,
            facing: Direction::Right,
            state: CombatState::Idle,
            health: Health::new(profile.max_hp),
            target: None,
            strike: None,
            motion: None,
            tasks: TaskQueue::new(),
            epoch: 0,
            now_ms: 0.0,
            hurt_zone: Rect::default(),
            attack_zone_left: Rect::default(),
            attack_zone_right: Rect::default(),
        };
        fighter.update_regions();
        fighter
    }

    // --- Queries ---

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn hp(&self) -> f64 {
        self.health.current()
    }

    pub fn max_hp(&self) -> f64 {
        self.health.max()
    }

    pub fn health_fraction(&self) -> f64 {
        self.health.fraction()
    }

    pub fn is_dead(&self) -> bool {
        self.state == CombatState::Dead
    }

    /// Only `Idle` accepts a new attack.
    pub fn can_attack(&self) -> bool {
        self.state == CombatState::Idle
    }

    pub fn target(&self) -> Option<T> {
        self.target
    }

    pub fn hurt_zone(&self) -> Rect {
        self.hurt_zone
    }

    pub fn attack_zone(&self, direction: Direction) -> Rect {
        match direction {
            Direction::Left => self.attack_zone_left,
            Direction::Right => self.attack_zone_right,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn profile(&self) -> &FighterProfile {
        &self.profile
    }

    // --- Commands ---

    /// Begin an attack toward `direction`.
    ///
    /// Candidates overlapping the attack zone are considered; the nearest
    /// becomes the target and the fighter charges it. With no candidate the
    /// strike is thrown in place and ends in a vulnerable window. Returns
    /// `None` unless the fighter is idle.
    pub fn attack(
        &mut self,
        direction: Direction,
        candidates: impl IntoIterator<Item = TargetCandidate<T>>,
    ) -> Option<AttackStart<T>> {
        if !self.can_attack() {
            tracing::trace!(state = ?self.state, "attack ignored");
            return None;
        }

        let zone = self.attack_zone(direction);
        self.facing = direction;

        match select_target(&zone, self.position.x, candidates) {
            Some(candidate) => {
                self.enter(CombatState::Charging);
                self.target = Some(candidate.handle);
                self.strike = Some(Strike::Targeted(candidate.handle));

                // Stop short of the target by the strike reach, never backing away.
                let mut destination = candidate.x - direction.sign() * self.profile.strike_reach;
                if (destination - self.position.x) * direction.sign() < 0.0 {
                    destination = self.position.x;
                }
                self.start_motion(destination - self.position.x, self.profile.charge_duration_ms);
                self.schedule(self.now_ms + self.profile.charge_duration_ms, FighterTask::ChargeComplete);

                tracing::debug!(?direction, target = ?candidate.handle, destination, "charging");
                Some(AttackStart {
                    direction,
                    zone,
                    target: Some(candidate.handle),
                })
            }
            None => {
                self.enter(CombatState::Attacking);
                self.strike = Some(Strike::Whiff(direction));
                self.schedule(self.now_ms + self.profile.strike_duration_ms, FighterTask::StrikeComplete);

                tracing::debug!(?direction, "striking empty zone");
                Some(AttackStart {
                    direction,
                    zone,
                    target: None,
                })
            }
        }
    }

    /// Directionless special move: a strike window in place that returns
    /// straight to idle. Returns false unless the fighter is idle.
    pub fn special(&mut self) -> bool {
        if !self.can_attack() {
            return false;
        }
        self.enter(CombatState::Attacking);
        self.strike = Some(Strike::Special);
        self.schedule(self.now_ms + self.profile.strike_duration_ms, FighterTask::StrikeComplete);
        tracing::debug!("special move");
        true
    }

    /// Take a hit from an attacker on side `from`.
    ///
    /// Ignored while charging, striking, stunned or dead. Otherwise applies
    /// the profile's hit damage, turns toward the attacker, starts a knockback
    /// and schedules recovery.
    pub fn receive_hit(&mut self, from: Direction) -> HitOutcome {
        if self.state.is_invulnerable() {
            tracing::trace!(state = ?self.state, "hit ignored");
            return HitOutcome::Ignored;
        }

        let damage = self.health.take_damage(self.profile.hit_damage);
        self.facing = from;

        if self.health.is_depleted() {
            self.die();
            return HitOutcome::Killed { damage };
        }

        self.enter(CombatState::Stunned);
        self.start_motion(
            from.opposite().sign() * self.profile.knockback_distance,
            self.profile.knockback_duration_ms,
        );
        self.schedule(self.now_ms + self.profile.stun_duration_ms, FighterTask::StunElapsed);

        tracing::debug!(?from, damage, hp = self.health.current(), "stunned");
        HitOutcome::Stunned {
            damage,
            hp: self.health.current(),
        }
    }

    /// Clamped damage outside the hit pipeline. Reaching zero kills the fighter.
    /// Returns the damage actually applied.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        if self.is_dead() {
            return 0.0;
        }
        let applied = self.health.take_damage(amount);
        if self.health.is_depleted() {
            self.die();
        }
        applied
    }

    /// Clamped healing. The dead stay dead. Returns the amount restored.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if self.is_dead() {
            return 0.0;
        }
        self.health.heal(amount)
    }

    // --- Time ---

    /// Advance the fighter's clock by `dt_ms`, applying motion and firing due
    /// transitions. Non-positive or non-finite deltas are ignored.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<FighterSignal<T>> {
        let mut signals = Vec::new();
        let dt_ms = sanitize_dt(dt_ms);
        if dt_ms == 0.0 || self.is_dead() {
            return signals;
        }

        if let Some(mut motion) = self.motion.take() {
            let step = dt_ms.min(motion.remaining_ms);
            self.position.x += motion.velocity_x * step;
            motion.remaining_ms -= step;
            if motion.remaining_ms > 0.0 {
                self.motion = Some(motion);
            }
        }

        self.now_ms += dt_ms;

        while let Some(scheduled) = self.tasks.pop_due(self.now_ms, self.epoch) {
            if let Some(signal) = self.fire(scheduled.task, scheduled.due_ms) {
                signals.push(signal);
            }
        }

        self.update_regions();
        signals
    }

    fn fire(&mut self, task: FighterTask, at_ms: f64) -> Option<FighterSignal<T>> {
        match task {
            FighterTask::ChargeComplete => {
                self.enter(CombatState::Attacking);
                self.schedule(at_ms + self.profile.strike_duration_ms, FighterTask::StrikeComplete);
                None
            }
            FighterTask::StrikeComplete => match self.strike.take() {
                Some(Strike::Targeted(target)) => {
                    self.enter(CombatState::Idle);
                    Some(FighterSignal::StrikeLanded { target })
                }
                Some(Strike::Whiff(direction)) => {
                    self.enter(CombatState::Vulnerable);
                    self.strike = Some(Strike::Whiff(direction));
                    self.schedule(at_ms + self.profile.vulnerable_duration_ms, FighterTask::VulnerableElapsed);
                    None
                }
                Some(Strike::Special) | None => {
                    self.enter(CombatState::Idle);
                    None
                }
            },
            FighterTask::VulnerableElapsed => {
                let whiff = self.strike.take();
                self.enter(CombatState::Idle);
                match whiff {
                    Some(Strike::Whiff(direction)) => Some(FighterSignal::Whiffed { direction }),
                    _ => None,
                }
            }
            FighterTask::StunElapsed => {
                self.enter(CombatState::Idle);
                None
            }
        }
    }

    // --- Internals ---

    /// Single entry point for state changes: cancels pending work and starts a new epoch.
    fn enter(&mut self, state: CombatState) {
        tracing::debug!(from = ?self.state, to = ?state, at_ms = self.now_ms, "fighter transition");
        self.state = state;
        self.epoch += 1;
        self.tasks.cancel_all();
        self.motion = None;
        if state != CombatState::Attacking {
            self.target = self.target.filter(|_| state == CombatState::Charging);
        }
        if matches!(state, CombatState::Idle | CombatState::Stunned | CombatState::Dead) {
            self.strike = None;
        }
    }

    /// Spread a horizontal displacement over `duration_ms`. Without a
    /// positive duration the displacement lands at once.
    fn start_motion(&mut self, distance_x: f64, duration_ms: f64) {
        if duration_ms > 0.0 {
            self.motion = Some(Motion {
                velocity_x: distance_x / duration_ms,
                remaining_ms: duration_ms,
            });
        } else {
            self.position.x += distance_x;
            self.update_regions();
        }
    }

    fn schedule(&mut self, due_ms: f64, task: FighterTask) {
        self.tasks.schedule(due_ms, self.epoch, task);
    }

    fn die(&mut self) {
        self.enter(CombatState::Dead);
        tracing::info!(at_ms = self.now_ms, "fighter died");
    }
}

impl<T: Copy + PartialEq + Debug> Actor for PlayerCombatant<T> {
    fn position(&self) -> Position {
        self.position
    }

    fn facing(&self) -> Direction {
        self.facing
    }

    fn update_regions(&mut self) {
        self.hurt_zone = self.profile.hurt_zone.at(self.position);
        self.attack_zone_left = self.profile.attack_zone_left.at(self.position);
        self.attack_zone_right = self.profile.attack_zone_right.at(self.position);
    }
}

impl<T: Copy + PartialEq + Debug> PlayerCombatant<T> {
    /// Teleport, for scripted setups. Regions follow immediately.
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
        self.update_regions();
    }
}
