#[cfg(test)]
mod tests {
    use brawler_core::actor::Actor;
    use brawler_core::config::CombatConfig;
    use brawler_core::enums::{CombatState, Direction};
    use brawler_core::geometry::Rect;
    use glam::DVec2;

    use crate::fsm::{FighterSignal, HitOutcome, PlayerCombatant};
    use crate::profiles::FighterProfile;
    use crate::targeting::TargetCandidate;

    fn fighter() -> PlayerCombatant<u32> {
        PlayerCombatant::new(FighterProfile::default(), DVec2::new(400.0, 300.0))
    }

    fn enemy_at(handle: u32, x: f64) -> TargetCandidate<u32> {
        TargetCandidate {
            handle,
            x,
            hit_region: Rect::new(x - 20.0, 260.0, 40.0, 80.0),
        }
    }

    fn none() -> Vec<TargetCandidate<u32>> {
        Vec::new()
    }

    #[test]
    fn test_whiff_cycle() {
        let mut f = fighter();
        let start = f.attack(Direction::Right, none()).unwrap();
        assert!(start.target.is_none());
        assert_eq!(start.zone, f.attack_zone(Direction::Right));
        assert_eq!(f.state(), CombatState::Attacking);

        assert!(f.advance(99.0).is_empty());
        assert_eq!(f.state(), CombatState::Attacking);
        assert!(f.advance(1.0).is_empty());
        assert_eq!(f.state(), CombatState::Vulnerable);

        assert!(f.advance(399.0).is_empty());
        assert_eq!(f.state(), CombatState::Vulnerable);
        let signals = f.advance(1.0);
        assert_eq!(
            signals,
            vec![FighterSignal::Whiffed {
                direction: Direction::Right
            }]
        );
        assert_eq!(f.state(), CombatState::Idle);

        // Nothing else is pending.
        assert!(f.advance(5000.0).is_empty());
    }

    #[test]
    fn test_charge_then_strike() {
        let mut f = fighter();
        let start = f.attack(Direction::Left, vec![enemy_at(1, 300.0)]).unwrap();
        assert_eq!(start.target, Some(1));
        assert_eq!(f.state(), CombatState::Charging);
        assert_eq!(f.facing(), Direction::Left);
        assert_eq!(f.target(), Some(1));

        f.advance(50.0);
        assert!((f.position().x - 390.0).abs() < 1e-9);
        f.advance(50.0);
        assert!((f.position().x - 380.0).abs() < 1e-9);
        assert_eq!(f.state(), CombatState::Attacking);
        assert_eq!(f.target(), Some(1));

        let signals = f.advance(100.0);
        assert_eq!(signals, vec![FighterSignal::StrikeLanded { target: 1 }]);
        assert_eq!(f.state(), CombatState::Idle);
        assert_eq!(f.target(), None);
        // Regions moved with the charge.
        assert!((f.hurt_zone().x - 356.0).abs() < 1e-9);
    }

    #[test]
    fn test_large_step_chains_transitions() {
        let mut f = fighter();
        f.attack(Direction::Left, vec![enemy_at(1, 300.0)]);
        let signals = f.advance(1000.0);
        assert_eq!(signals, vec![FighterSignal::StrikeLanded { target: 1 }]);
        assert_eq!(f.state(), CombatState::Idle);
        assert!((f.position().x - 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_charge_picks_nearest() {
        let mut f = fighter();
        let start = f
            .attack(Direction::Left, vec![enemy_at(1, 200.0), enemy_at(2, 320.0)])
            .unwrap();
        assert_eq!(start.target, Some(2));
    }

    #[test]
    fn test_charge_never_backs_away() {
        let mut f = fighter();
        f.attack(Direction::Left, vec![enemy_at(1, 350.0)]);
        f.advance(100.0);
        assert!((f.position().x - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_attack_only_from_idle() {
        let mut f = fighter();
        f.attack(Direction::Right, none()).unwrap();
        assert!(f.attack(Direction::Left, none()).is_none());
        assert!(!f.special());
        f.advance(100.0);
        assert_eq!(f.state(), CombatState::Vulnerable);
        assert!(f.attack(Direction::Left, none()).is_none());
    }

    #[test]
    fn test_receive_hit_from_idle() {
        let mut f = fighter();
        let outcome = f.receive_hit(Direction::Left);
        assert_eq!(outcome, HitOutcome::Stunned { damage: 10.0, hp: 90.0 });
        assert_eq!(f.state(), CombatState::Stunned);
        assert_eq!(f.facing(), Direction::Left);

        // Knocked away from the attacker.
        f.advance(150.0);
        assert!((f.position().x - 420.0).abs() < 1e-9);
        assert!((f.hurt_zone().x - 396.0).abs() < 1e-9);
        f.advance(149.0);
        assert_eq!(f.state(), CombatState::Stunned);
        f.advance(1.0);
        assert_eq!(f.state(), CombatState::Idle);
    }

    #[test]
    fn test_receive_hit_ignored_while_committed() {
        let mut f = fighter();
        f.attack(Direction::Left, vec![enemy_at(1, 300.0)]);
        assert_eq!(f.receive_hit(Direction::Right), HitOutcome::Ignored);
        assert_eq!(f.state(), CombatState::Charging);

        f.advance(100.0);
        assert_eq!(f.state(), CombatState::Attacking);
        assert_eq!(f.receive_hit(Direction::Right), HitOutcome::Ignored);
        assert_eq!(f.hp(), 100.0);

        f.advance(100.0);
        f.receive_hit(Direction::Right);
        assert_eq!(f.state(), CombatState::Stunned);
        assert_eq!(f.receive_hit(Direction::Left), HitOutcome::Ignored);
        assert_eq!(f.hp(), 90.0);
        assert_eq!(f.facing(), Direction::Right);
    }

    #[test]
    fn test_hit_during_vulnerable_window_overrides_pending_recovery() {
        let mut f = fighter();
        f.attack(Direction::Right, none());
        f.advance(100.0);
        assert_eq!(f.state(), CombatState::Vulnerable);

        // Vulnerable window would close at 500; the stun ends at 600.
        f.advance(200.0);
        assert!(matches!(f.receive_hit(Direction::Left), HitOutcome::Stunned { .. }));

        let signals = f.advance(250.0);
        assert!(signals.is_empty(), "stale vulnerable timeout must not fire");
        assert_eq!(f.state(), CombatState::Stunned);

        f.advance(50.0);
        assert_eq!(f.state(), CombatState::Idle);
    }

    #[test]
    fn test_second_stun_after_recovery_runs_full_length() {
        let mut f = fighter();
        f.receive_hit(Direction::Left);
        f.advance(300.0);
        assert_eq!(f.state(), CombatState::Idle);

        f.receive_hit(Direction::Right);
        f.advance(299.0);
        assert_eq!(f.state(), CombatState::Stunned);
        f.advance(1.0);
        assert_eq!(f.state(), CombatState::Idle);
        assert_eq!(f.hp(), 80.0);
    }

    #[test]
    fn test_special_returns_to_idle_without_signal() {
        let mut f = fighter();
        assert!(f.special());
        assert_eq!(f.state(), CombatState::Attacking);
        assert_eq!(f.receive_hit(Direction::Left), HitOutcome::Ignored);
        let signals = f.advance(100.0);
        assert!(signals.is_empty());
        assert_eq!(f.state(), CombatState::Idle);
    }

    #[test]
    fn test_lethal_hit_kills() {
        let config = CombatConfig {
            max_hp: 15.0,
            ..Default::default()
        };
        let mut f: PlayerCombatant<u32> =
            PlayerCombatant::new(FighterProfile::from_config(&config), DVec2::new(400.0, 300.0));
        f.receive_hit(Direction::Left);
        f.advance(300.0);
        assert_eq!(f.receive_hit(Direction::Left), HitOutcome::Killed { damage: 5.0 });
        assert_eq!(f.state(), CombatState::Dead);
        assert_eq!(f.hp(), 0.0);
    }

    #[test]
    fn test_dead_is_terminal() {
        let mut f = fighter();
        f.attack(Direction::Right, none());
        assert_eq!(f.take_damage(250.0), 100.0);
        assert!(f.is_dead());

        assert!(f.attack(Direction::Left, none()).is_none());
        assert!(!f.special());
        assert_eq!(f.receive_hit(Direction::Left), HitOutcome::Ignored);
        assert_eq!(f.heal(50.0), 0.0);
        assert!(f.advance(10_000.0).is_empty());
        assert_eq!(f.state(), CombatState::Dead);
    }

    #[test]
    fn test_damage_and_heal_clamped() {
        let mut f = fighter();
        assert_eq!(f.take_damage(-5.0), 0.0);
        assert_eq!(f.take_damage(30.0), 30.0);
        assert_eq!(f.heal(500.0), 30.0);
        assert_eq!(f.hp(), f.max_hp());
        assert_eq!(f.health_fraction(), 1.0);
    }

    #[test]
    fn test_non_positive_dt_ignored() {
        let mut f = fighter();
        f.attack(Direction::Right, none());
        assert!(f.advance(0.0).is_empty());
        assert!(f.advance(-100.0).is_empty());
        assert!(f.advance(f64::NAN).is_empty());
        assert_eq!(f.now_ms(), 0.0);
        assert_eq!(f.state(), CombatState::Attacking);
    }

    #[test]
    fn test_zero_duration_motions_land_at_once() {
        let profile = FighterProfile::from_config(&CombatConfig {
            charge_duration_ms: 0.0,
            knockback_duration_ms: 0.0,
            ..Default::default()
        });
        let mut f: PlayerCombatant<u32> = PlayerCombatant::new(profile, DVec2::new(400.0, 300.0));

        f.attack(Direction::Left, vec![enemy_at(1, 300.0)]);
        assert_eq!(f.position().x, 380.0);
        assert_eq!(f.hurt_zone().x, 356.0);

        assert!(f.advance(16.0).is_empty());
        assert!(f.position().x.is_finite());
        assert_eq!(f.position().x, 380.0);
        assert_eq!(f.state(), CombatState::Attacking);
        assert_eq!(f.advance(100.0), vec![FighterSignal::StrikeLanded { target: 1 }]);
        assert_eq!(f.state(), CombatState::Idle);

        // Knockback away from the attacker, all in one go.
        f.receive_hit(Direction::Left);
        assert_eq!(f.position().x, 400.0);
        f.advance(16.0);
        assert_eq!(f.position().x, 400.0);
    }

    #[test]
    fn test_regions_consistent_after_teleport() {
        let mut f = fighter();
        f.set_position(DVec2::new(100.0, 200.0));
        assert_eq!(f.hurt_zone(), Rect::new(76.0, 160.0, 48.0, 80.0));
        assert_eq!(f.attack_zone(Direction::Left), Rect::new(-160.0, 152.0, 240.0, 96.0));
        assert_eq!(f.attack_zone(Direction::Right), Rect::new(120.0, 152.0, 240.0, 96.0));
    }
}
