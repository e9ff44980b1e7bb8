#[cfg(test)]
mod tests {
    use calypso_core::components::*;
    use calypso_core::constants::*;
    use calypso_core::enums::*;
    use calypso_core::types::Position;
    use rand::rngs::mock::StepRng;

    use crate::fsm::*;
    use crate::profiles::*;

    /// Every uniform draw is 0.0, so every roll succeeds.
    fn hit_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every uniform draw is just below 1.0, so every roll fails.
    fn miss_rng() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn bot(x: f64, y: f64, in_cover: bool) -> BotView {
        BotView {
            position: Position::new(x, y),
            in_cover,
        }
    }

    fn enemy(accuracy: f64) -> Enemy {
        Enemy {
            index: 0,
            health: 1.0,
            armor: 0.1,
            accuracy,
            weapon: WeaponType::HgPistol,
            ammo: 7,
            in_cover: false,
            alive: true,
        }
    }

    fn grunt(state: GruntState, state_timer: f64) -> GruntMind {
        GruntMind { state, state_timer }
    }

    fn shield_unit(variant: ShieldVariant, has_shield: bool, shield_hp: f64) -> ShieldUnit {
        ShieldUnit {
            variant,
            has_shield,
            shield_hp,
            regen_timer: 0.0,
            weak_point: WeakPoint {
                location: WeakPointLocation::Head,
                hp: 1.0,
            },
        }
    }

    fn boss(state: BossState, state_timer: f64) -> Boss {
        Boss {
            health: 1.0,
            armor: BOSS_ARMOR,
            armor_current: BOSS_ARMOR,
            state,
            state_timer,
            stun_timer: 0.0,
            weak_points_visible: false,
            since_defense: 0.0,
            alive: true,
        }
    }

    // --- Grunt ---

    #[test]
    fn test_grunt_spots_bot_within_sight_range() {
        let mut mind = grunt(GruntState::Patrol, 0.0);
        let mut unit = enemy(0.15);
        let mut pos = Position::new(0.5, 0.9);
        let r = tick_grunt(&mut mind, &mut unit, &mut pos, &bot(0.5, 0.5, false), &mut miss_rng());
        assert!(r.state_changed);
        assert_eq!(mind.state, GruntState::Surprised);
        assert_eq!(mind.state_timer, 0.0);
    }

    #[test]
    fn test_grunt_keeps_patrolling_when_bot_far() {
        let mut mind = grunt(GruntState::Patrol, 0.0);
        let mut unit = enemy(0.15);
        let mut pos = Position::new(0.0, 0.0);
        let r = tick_grunt(&mut mind, &mut unit, &mut pos, &bot(0.9, 0.9, false), &mut hit_rng());
        assert!(!r.state_changed);
        assert_eq!(mind.state, GruntState::Patrol);
        assert!((mind.state_timer - DT).abs() < 1e-12);
    }

    #[test]
    fn test_grunt_surprise_lasts_one_and_a_half_seconds() {
        let mut mind = grunt(GruntState::Surprised, 1.4);
        let mut unit = enemy(0.15);
        let mut pos = Position::new(0.5, 0.6);
        let view = bot(0.5, 0.5, false);
        tick_grunt(&mut mind, &mut unit, &mut pos, &view, &mut miss_rng());
        assert_eq!(mind.state, GruntState::Surprised);

        mind.state_timer = 1.49;
        tick_grunt(&mut mind, &mut unit, &mut pos, &view, &mut miss_rng());
        assert_eq!(mind.state, GruntState::PanicFire);
    }

    #[test]
    fn test_grunt_panic_fire_only_hurts_exposed_bot() {
        let mut unit = enemy(0.15);
        let mut pos = Position::new(0.5, 0.6);

        let mut mind = grunt(GruntState::PanicFire, 0.0);
        let r = tick_grunt(&mut mind, &mut unit, &mut pos, &bot(0.5, 0.5, false), &mut hit_rng());
        assert_eq!(r.bot_damage, GRUNT_PANIC_DAMAGE);

        let mut mind = grunt(GruntState::PanicFire, 0.0);
        let r = tick_grunt(&mut mind, &mut unit, &mut pos, &bot(0.5, 0.5, true), &mut hit_rng());
        assert_eq!(r.bot_damage, 0.0);

        let mut mind = grunt(GruntState::PanicFire, 0.0);
        let r = tick_grunt(&mut mind, &mut unit, &mut pos, &bot(0.5, 0.5, false), &mut miss_rng());
        assert_eq!(r.bot_damage, 0.0);
    }

    #[test]
    fn test_grunt_panic_fire_ends_in_flight() {
        let mut mind = grunt(GruntState::PanicFire, 2.0);
        let mut unit = enemy(0.15);
        let mut pos = Position::new(0.5, 0.6);
        let r = tick_grunt(&mut mind, &mut unit, &mut pos, &bot(0.5, 0.5, false), &mut hit_rng());
        assert_eq!(r.bot_damage, 0.0);
        assert_eq!(mind.state, GruntState::Fleeing);
    }

    #[test]
    fn test_grunt_flees_away_then_hides() {
        let mut mind = grunt(GruntState::Fleeing, 0.0);
        let mut unit = enemy(0.15);
        let mut pos = Position::new(0.5, 0.6);
        let view = bot(0.5, 0.5, false);

        tick_grunt(&mut mind, &mut unit, &mut pos, &view, &mut miss_rng());
        assert!((pos.y - (0.6 + GRUNT_FLEE_STEP)).abs() < 1e-6);
        assert!(!unit.in_cover);

        mind.state_timer = 0.98;
        tick_grunt(&mut mind, &mut unit, &mut pos, &view, &mut miss_rng());
        assert_eq!(mind.state, GruntState::Passive);
        assert!(unit.in_cover);
    }

    #[test]
    fn test_grunt_passive_returns_to_panic_fire() {
        let mut mind = grunt(GruntState::Passive, 6.98);
        let mut unit = enemy(0.15);
        let mut pos = Position::new(0.5, 0.6);
        tick_grunt(&mut mind, &mut unit, &mut pos, &bot(0.5, 0.5, false), &mut miss_rng());
        assert_eq!(mind.state, GruntState::PanicFire);
        assert!(unit.in_cover);
    }

    // --- Riflemen ---

    fn rifleman(role: RiflemanRole) -> RiflemanMind {
        RiflemanMind {
            role,
            state_timer: 0.0,
        }
    }

    #[test]
    fn test_suppression_pins_bot_in_cover() {
        let mut mind = rifleman(RiflemanRole::Suppression);
        let unit = enemy(0.4);
        let mut pos = Position::new(0.5, 0.8);
        let r = tick_rifleman(&mut mind, &unit, &mut pos, &bot(0.5, 0.5, true), &mut hit_rng());
        assert!((r.bot_damage - 0.009).abs() < 1e-12);
    }

    #[test]
    fn test_suppression_open_fire() {
        let mut mind = rifleman(RiflemanRole::Suppression);
        let unit = enemy(0.4);
        let mut pos = Position::new(0.5, 0.8);
        let r = tick_rifleman(&mut mind, &unit, &mut pos, &bot(0.5, 0.5, false), &mut hit_rng());
        assert_eq!(r.bot_damage, SUPPRESSION_DAMAGE);

        // Far away and bot in cover: the shot is wasted.
        let mut far = Position::new(0.0, 0.0);
        let r = tick_rifleman(&mut mind, &unit, &mut far, &bot(0.9, 0.9, true), &mut hit_rng());
        assert_eq!(r.bot_damage, 0.0);
    }

    #[test]
    fn test_flanker_bursts_at_close_range() {
        let mut mind = rifleman(RiflemanRole::Flanker);
        let unit = enemy(0.4);
        let mut pos = Position::new(0.5, 0.7);
        let r = tick_rifleman(&mut mind, &unit, &mut pos, &bot(0.5, 0.5, false), &mut hit_rng());
        assert_eq!(r.bot_damage, FLANKER_DAMAGE);
        assert_eq!(pos, Position::new(0.5, 0.7));
    }

    #[test]
    fn test_flanker_circles_when_out_of_reach() {
        let mut mind = rifleman(RiflemanRole::Flanker);
        let unit = enemy(0.4);
        let mut pos = Position::new(0.5, 0.5);
        let r = tick_rifleman(&mut mind, &unit, &mut pos, &bot(0.9, 0.5, false), &mut hit_rng());
        assert_eq!(r.bot_damage, 0.0);
        // Perpendicular to the line toward the bot.
        assert!((pos.x - 0.5).abs() < 1e-6);
        assert!((pos.y - (0.5 + FLANKER_STEP)).abs() < 1e-6);
    }

    // --- Marksman ---

    #[test]
    fn test_marksman_holds_fire_up_close() {
        let mut mind = MarksmanMind::default();
        let unit = enemy(0.7);
        let pos = Position::new(0.5, 0.8);
        let r = tick_marksman(&mut mind, &unit, &pos, &bot(0.5, 0.5, false), &mut hit_rng());
        assert_eq!(r.bot_damage, 0.0);
    }

    #[test]
    fn test_marksman_long_range_damage() {
        let mut mind = MarksmanMind::default();
        let unit = enemy(0.7);
        let pos = Position::new(0.9, 0.9);
        let exposed = tick_marksman(&mut mind, &unit, &pos, &bot(0.1, 0.1, false), &mut hit_rng());
        assert_eq!(exposed.bot_damage, MARKSMAN_EXPOSED_DAMAGE);
        let covered = tick_marksman(&mut mind, &unit, &pos, &bot(0.1, 0.1, true), &mut hit_rng());
        assert_eq!(covered.bot_damage, MARKSMAN_COVER_DAMAGE);
        let missed = tick_marksman(&mut mind, &unit, &pos, &bot(0.1, 0.1, false), &mut miss_rng());
        assert_eq!(missed.bot_damage, 0.0);
    }

    // --- Shielded ---

    #[test]
    fn test_plasma_shield_regenerates_after_six_seconds() {
        let mut unit = shield_unit(ShieldVariant::Plasma, true, 0.0);
        unit.regen_timer = 5.9;
        let mut pos = Position::new(0.5, 0.9);
        let view = bot(0.5, 0.1, false);

        tick_shielded(&mut unit, &mut pos, &view, &mut miss_rng());
        assert_eq!(unit.shield_hp, 0.0);

        unit.regen_timer = 5.98;
        let r = tick_shielded(&mut unit, &mut pos, &view, &mut miss_rng());
        assert!(r.state_changed);
        assert_eq!(unit.shield_hp, 1.0);
        assert_eq!(unit.regen_timer, 0.0);
    }

    #[test]
    fn test_iron_clad_and_stripped_shields_stay_down() {
        let view = bot(0.5, 0.1, false);
        let mut pos = Position::new(0.5, 0.9);

        let mut iron = shield_unit(ShieldVariant::IronClad, true, 0.0);
        iron.regen_timer = 5.99;
        tick_shielded(&mut iron, &mut pos, &view, &mut miss_rng());
        assert_eq!(iron.shield_hp, 0.0);

        let mut stripped = shield_unit(ShieldVariant::Plasma, false, 0.0);
        for _ in 0..300 {
            tick_shielded(&mut stripped, &mut pos, &view, &mut miss_rng());
        }
        assert_eq!(stripped.shield_hp, 0.0);
        assert!(!stripped.has_shield);
        // Without a shield the unit stops advancing.
        assert_eq!(pos, Position::new(0.5, 0.9));
    }

    #[test]
    fn test_shielded_advances_behind_shield() {
        let mut unit = shield_unit(ShieldVariant::Plasma, true, 1.0);
        let mut pos = Position::new(0.5, 0.9);
        tick_shielded(&mut unit, &mut pos, &bot(0.5, 0.1, false), &mut miss_rng());
        assert!((pos.y - (0.9 - SHIELDED_STEP)).abs() < 1e-6);

        // Holds position once close.
        let mut close = Position::new(0.5, 0.3);
        tick_shielded(&mut unit, &mut close, &bot(0.5, 0.1, false), &mut miss_rng());
        assert_eq!(close, Position::new(0.5, 0.3));
    }

    #[test]
    fn test_shielded_jab_reduced_by_cover() {
        let mut unit = shield_unit(ShieldVariant::Plasma, true, 1.0);
        let mut pos = Position::new(0.5, 0.6);
        let exposed = tick_shielded(&mut unit, &mut pos, &bot(0.5, 0.5, false), &mut hit_rng());
        assert_eq!(exposed.bot_damage, SHIELDED_ATTACK_DAMAGE);
        let covered = tick_shielded(&mut unit, &mut pos, &bot(0.5, 0.5, true), &mut hit_rng());
        assert!((covered.bot_damage - 0.006).abs() < 1e-12);
    }

    // --- Spider mine ---

    fn mine() -> SpiderMine {
        SpiderMine {
            body_health: 1.0,
            leg_health: [1.0; MINE_LEG_COUNT],
            state: MineState::Approaching,
            alive: true,
        }
    }

    #[test]
    fn test_mine_approaches_then_arms() {
        let mut m = mine();
        let mut pos = Position::new(0.5, 0.9);
        let view = bot(0.5, 0.5, false);

        let r = tick_mine(&mut m, &mut pos, &view);
        assert!(!r.state_changed);
        assert!((pos.y - (0.9 - MINE_STEP)).abs() < 1e-6);

        let mut close = Position::new(0.5, 0.6);
        let r = tick_mine(&mut m, &mut close, &view);
        assert!(r.state_changed);
        assert!(m.is_exploding());
    }

    #[test]
    fn test_mine_detonates_once_when_fuse_completes() {
        let view = bot(0.5, 0.5, false);

        let mut m = mine();
        m.state = MineState::Exploding { fuse_secs: 2.4 };
        let mut pos = Position::new(0.5, 0.6);
        let r = tick_mine(&mut m, &mut pos, &view);
        assert!(!r.detonated);
        assert!(m.alive);

        m.state = MineState::Exploding { fuse_secs: 2.48 };
        let r = tick_mine(&mut m, &mut pos, &view);
        assert!(r.detonated);
        assert_eq!(r.bot_damage, MINE_BLAST_DAMAGE);
        assert!(!m.alive);
    }

    #[test]
    fn test_mine_blast_misses_outside_radius() {
        let mut m = mine();
        m.state = MineState::Exploding { fuse_secs: 2.48 };
        let mut pos = Position::new(0.5, 0.9);
        let r = tick_mine(&mut m, &mut pos, &bot(0.5, 0.5, false));
        assert!(r.detonated);
        assert_eq!(r.bot_damage, 0.0);
        assert!(!m.alive);
    }

    // --- Boss ---

    #[test]
    fn test_boss_walks_into_hammer_combo() {
        let mut b = boss(BossState::Walking, 0.0);
        let mut pos = Position::new(0.7, 0.5);
        tick_boss(&mut b, &mut pos, &bot(0.5, 0.5, false));
        assert_eq!(b.state, BossState::HammerCombo { swings: 0 });
        assert!(pos.x < 0.7);
    }

    #[test]
    fn test_boss_combo_three_swings() {
        let mut b = boss(BossState::HammerCombo { swings: 0 }, 0.0);
        let mut pos = Position::new(0.6, 0.5);
        let view = bot(0.5, 0.5, false);

        let mut hits = Vec::new();
        for _ in 0..75 {
            let r = tick_boss(&mut b, &mut pos, &view);
            if r.bot_damage > 0.0 {
                hits.push(r.bot_damage);
            }
        }
        assert_eq!(
            hits,
            vec![BOSS_LIGHT_SWING_DAMAGE, BOSS_LIGHT_SWING_DAMAGE, BOSS_HEAVY_SWING_DAMAGE]
        );
        assert_eq!(b.state, BossState::Walking);
    }

    #[test]
    fn test_boss_leaps_at_distant_bot() {
        let mut b = boss(BossState::Walking, BOSS_LEAP_WINDUP_SECS);
        let mut pos = Position::new(0.9, 0.5);
        tick_boss(&mut b, &mut pos, &bot(0.2, 0.5, false));
        assert_eq!(b.state, BossState::Leap);
    }

    #[test]
    fn test_boss_leap_into_wall_stuns() {
        let mut b = boss(BossState::Leap, BOSS_LEAP_SECS);
        let mut pos = Position::new(0.02, 0.5);
        let r = tick_boss(&mut b, &mut pos, &bot(0.1, 0.5, false));
        assert_eq!(r.bot_damage, BOSS_LANDING_DAMAGE);
        assert_eq!(b.state, BossState::Stunned);
        assert!(b.is_stunned());
    }

    #[test]
    fn test_boss_leap_in_open_resumes_walking() {
        let mut b = boss(BossState::Leap, BOSS_LEAP_SECS);
        let mut pos = Position::new(0.5, 0.5);
        let r = tick_boss(&mut b, &mut pos, &bot(0.5, 0.9, false));
        assert_eq!(r.bot_damage, 0.0);
        assert_eq!(b.state, BossState::Walking);
    }

    #[test]
    fn test_boss_stun_exposes_weak_points_for_three_seconds() {
        let mut b = boss(BossState::Stunned, 0.0);
        let mut pos = Position::new(0.02, 0.5);
        let view = bot(0.5, 0.5, false);

        tick_boss(&mut b, &mut pos, &view);
        assert!(b.weak_points_visible);
        assert_eq!(pos, Position::new(0.02, 0.5));

        b.stun_timer = 2.98;
        tick_boss(&mut b, &mut pos, &view);
        assert_eq!(b.state, BossState::Walking);
        assert!(!b.weak_points_visible);
    }

    #[test]
    fn test_boss_defense_stance_cycle() {
        let mut b = boss(BossState::Walking, 0.0);
        b.health = 0.4;
        b.since_defense = BOSS_DEFENSE_COOLDOWN_SECS;
        let mut pos = Position::new(0.9, 0.5);
        let view = bot(0.5, 0.5, false);

        tick_boss(&mut b, &mut pos, &view);
        assert_eq!(b.state, BossState::Defense);
        assert_eq!(b.armor_current, BOSS_DEFENSE_ARMOR);

        b.state_timer = 4.98;
        tick_boss(&mut b, &mut pos, &view);
        assert_eq!(b.state, BossState::Walking);
        assert_eq!(b.armor_current, BOSS_ARMOR);
        assert_eq!(b.since_defense, 0.0);

        // Cooldown blocks an immediate second stance.
        tick_boss(&mut b, &mut pos, &view);
        assert_eq!(b.state, BossState::Walking);
    }

    // --- Profiles ---

    #[test]
    fn test_tier_profiles() {
        assert_eq!(tier_profile(EnemyTier::Tier1).max_health, 100.0);
        assert_eq!(tier_profile(EnemyTier::Marksman).armor, 0.0);
        assert_eq!(tier_profile(EnemyTier::Boss).max_health, 1000.0);
        assert_eq!(tier_profile(EnemyTier::Shielded).kill_reward, KILL_REWARD_SHIELDED);
        assert_eq!(tier_profile(EnemyTier::Tier2).accuracy, 0.40);
    }

    #[test]
    fn test_magazine_sizes() {
        assert_eq!(magazine_size(WeaponType::HgPistol), 7);
        assert_eq!(magazine_size(WeaponType::ArBurst), 30);
        assert_eq!(magazine_size(WeaponType::Dmr), 4);
        assert_eq!(magazine_size(WeaponType::EnergyPistol), 20);
        assert_eq!(grunt_weapon(0.1), WeaponType::HgPistol);
        assert_eq!(grunt_weapon(0.9), WeaponType::Smg);
        assert!(shield_capacity(ShieldVariant::IronClad) > shield_capacity(ShieldVariant::Plasma));
    }
}
