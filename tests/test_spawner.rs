mod common;

use common::seeded_rng;
use dino_runner::entities::{EntityKind, GroundHazard, Hazard};
use dino_runner::spawner::{random_hazard, spawn_delay_ms, Spawner};
use dino_runner::GameConfig;

use proptest::prelude::*;

// ── spawn_delay_ms ────────────────────────────────────────────────────────────

#[test]
fn delay_at_base_speed() {
    let config = GameConfig::default();
    assert_eq!(spawn_delay_ms(5.0, &config), 1900);
}

#[test]
fn delay_shrinks_as_speed_grows() {
    let config = GameConfig::default();
    assert!(spawn_delay_ms(10.0, &config) < spawn_delay_ms(5.0, &config));
    assert_eq!(spawn_delay_ms(50.0, &config), 1000);
}

#[test]
fn delay_floors_at_500() {
    let config = GameConfig::default();
    assert_eq!(spawn_delay_ms(75.0, &config), 500);
    assert_eq!(spawn_delay_ms(1.0e12, &config), 500);
    assert_eq!(spawn_delay_ms(f64::INFINITY, &config), 500);
    assert_eq!(spawn_delay_ms(f64::NAN, &config), 500);
}

proptest! {
    #[test]
    fn delay_never_below_floor(speed in 0.0..1.0e9f64) {
        let config = GameConfig::default();
        prop_assert!(spawn_delay_ms(speed, &config) >= 500);
    }
}

// ── random_hazard ─────────────────────────────────────────────────────────────

#[test]
fn hazards_spawn_at_right_edge_with_snapshot_speed() {
    let config = GameConfig::default();
    let mut rng = seeded_rng();
    for _ in 0..20 {
        let h = random_hazard(&mut rng, 7.5, &config);
        assert_eq!(h.body().x, 800.0);
        assert_eq!(h.speed(), 7.5);
    }
}

#[test]
fn both_kinds_are_chosen() {
    let config = GameConfig::default();
    let mut rng = seeded_rng();
    let kinds: Vec<EntityKind> = (0..200)
        .map(|_| random_hazard(&mut rng, 5.0, &config).kind())
        .collect();
    let ground = kinds.iter().filter(|k| **k == EntityKind::GroundHazard).count();
    let flying = kinds.iter().filter(|k| **k == EntityKind::FlyingHazard).count();
    assert_eq!(ground + flying, 200);
    // Roughly even split
    assert!(ground > 60 && flying > 60, "ground={} flying={}", ground, flying);
}

#[test]
fn snapshot_speed_survives_global_speed_change() {
    let config = GameConfig::default();
    let mut global_speed = 5.0;
    let mut h = Hazard::Ground(GroundHazard::new(800.0, global_speed, &config));
    global_speed = 8.0;
    h.update(&config);
    assert_eq!(h.speed(), 5.0);
    assert_eq!(h.body().x, 795.0);
    assert_ne!(h.speed(), global_speed);
}

// ── Spawner ───────────────────────────────────────────────────────────────────

#[test]
fn spawner_rearms_after_firing() {
    let config = GameConfig::default();
    let mut rng = seeded_rng();
    let mut spawner = Spawner::new(0);
    assert_eq!(spawner.due_ms(), Some(0));

    let h = spawner.fire(0, true, 5.0, &config, &mut rng);
    assert!(h.is_some());
    assert_eq!(spawner.due_ms(), Some(1900));

    let h = spawner.fire(1900, true, 10.0, &config, &mut rng);
    assert_eq!(h.map(|h| h.speed()), Some(10.0));
    assert_eq!(spawner.due_ms(), Some(1900 + 1800));
}

#[test]
fn spawner_aborts_and_stops_after_game_over() {
    let config = GameConfig::default();
    let mut rng = seeded_rng();
    let mut spawner = Spawner::new(0);

    assert!(spawner.fire(0, false, 5.0, &config, &mut rng).is_none());
    assert_eq!(spawner.due_ms(), None);

    // Nothing pending any more
    assert!(spawner.fire(5000, true, 5.0, &config, &mut rng).is_none());
}
