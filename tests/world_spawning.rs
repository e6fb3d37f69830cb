use enemy_spawner_wasm::domain::{Behavior, EnemyKind, GameConfig, ScriptedRandom, World};

const EPS: f64 = 1e-9;

fn world_with(values: Vec<f64>) -> World {
    World::new(GameConfig::with_size(500.0, 700.0), Box::new(ScriptedRandom::new(values)))
}

#[test]
fn first_tick_past_interval_spawns_one_worm() {
    // pick 0.0 -> worm, vx = 0.1 + 0.5 * 0.1
    let mut world = world_with(vec![0.0, 0.5]);
    world.update(600.0);

    assert_eq!(world.len(), 1);
    let worm = &world.enemies()[0];
    assert_eq!(worm.kind(), EnemyKind::Worm);
    // spawned at the right edge, then moved by the same frame's update
    assert!((worm.x() - (500.0 - worm.velocity_x() * 600.0)).abs() < EPS);
    assert!((worm.y() - (700.0 - worm.height())).abs() < EPS);
    assert!((worm.velocity_x() - 0.15).abs() < EPS);
}

#[test]
fn ghost_spawns_in_upper_band() {
    // pick 0.5 -> ghost; y, vx, curve all from 0.5
    let mut world = world_with(vec![0.5]);
    world.update(600.0);

    let ghost = &world.enemies()[0];
    assert_eq!(ghost.kind(), EnemyKind::Ghost);
    assert!((ghost.velocity_x() - 0.2).abs() < EPS);
    assert!((ghost.x() - (500.0 - 0.2 * 600.0)).abs() < EPS);
    // sin(0) adds nothing on the first update
    assert!((ghost.y() - 210.0).abs() < EPS);
    match ghost.behavior() {
        Behavior::Ghost { angle, curve } => {
            assert!((angle - 0.04).abs() < EPS);
            assert!((curve - 1.5).abs() < EPS);
        }
        other => panic!("expected ghost, got {:?}", other),
    }
}

#[test]
fn spider_spawns_above_the_top() {
    let mut world = world_with(vec![0.9, 0.5, 0.5, 0.5]);
    world.update(600.0);

    let spider = &world.enemies()[0];
    assert_eq!(spider.kind(), EnemyKind::Spider);
    assert_eq!(spider.x(), 250.0);
    assert_eq!(spider.velocity_x(), 0.0);
    assert!((spider.y() - (-spider.height() + 0.15 * 600.0)).abs() < EPS);
}

#[test]
fn huge_delta_spawns_only_once() {
    let mut world = world_with(vec![0.0]);
    world.update(1_000_000.0);
    assert_eq!(world.len(), 1);
    assert_eq!(world.spawned_total(), 1);
}

#[test]
fn marked_enemies_wait_for_next_spawn_tick() {
    // always worms with vx = 0.1
    let mut world = world_with(vec![0.0]);
    world.spawn(EnemyKind::Worm);

    world.update(7000.0);
    assert_eq!(world.len(), 2);
    assert!(world.enemies().iter().all(|e| e.is_marked_for_deletion()));

    // below the interval: nothing pruned yet
    world.update(100.0);
    assert_eq!(world.len(), 2);

    world.update(450.0);
    assert_eq!(world.len(), 1);
    assert!(!world.enemies()[0].is_marked_for_deletion());
    assert_eq!(world.spawned_total(), 3);
}

#[test]
fn enemies_keep_spawn_order() {
    let mut world = world_with(vec![0.0]);
    world.spawn(EnemyKind::Spider);
    world.spawn(EnemyKind::Ghost);
    world.update(501.0);

    let kinds: Vec<EnemyKind> = world.enemies().iter().map(|e| e.kind()).collect();
    assert_eq!(kinds, vec![EnemyKind::Spider, EnemyKind::Ghost, EnemyKind::Worm]);
}
