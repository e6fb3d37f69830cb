use enemy_spawner_wasm::domain::{
    Enemy, EnemyKind, GameConfig, RecordingSurface, ScriptedRandom, World,
};
use quickcheck_macros::quickcheck;

fn scripted(seeds: &[u8]) -> ScriptedRandom {
    ScriptedRandom::new(seeds.iter().map(|b| *b as f64 / 256.0).collect())
}

fn kind_from(selector: u8) -> EnemyKind {
    match selector % 3 {
        0 => EnemyKind::Worm,
        1 => EnemyKind::Ghost,
        _ => EnemyKind::Spider,
    }
}

#[quickcheck]
fn frame_index_stays_in_range(selector: u8, seeds: Vec<u8>, deltas: Vec<u16>) -> bool {
    let config = GameConfig::default();
    let mut enemy = Enemy::spawn(kind_from(selector), &config, &mut scripted(&seeds));
    deltas.iter().all(|dt| {
        enemy.update(*dt as f64);
        enemy.frame() <= enemy.max_frame()
    })
}

#[quickcheck]
fn deletion_flag_never_clears(selector: u8, seeds: Vec<u8>, deltas: Vec<u16>) -> bool {
    let config = GameConfig::default();
    let mut enemy = Enemy::spawn(kind_from(selector), &config, &mut scripted(&seeds));
    let mut marked = false;
    for dt in deltas {
        enemy.update(dt as f64);
        if marked && !enemy.is_marked_for_deletion() {
            return false;
        }
        marked = enemy.is_marked_for_deletion();
    }
    true
}

#[quickcheck]
fn one_spawn_per_crossing(seeds: Vec<u8>, deltas: Vec<u32>) -> bool {
    let config = GameConfig::default();
    let interval = config.spawn_interval_ms;
    let mut world = World::new(config, Box::new(scripted(&seeds)));
    let mut timer = 0.0;

    deltas.iter().all(|dt| {
        let dt = *dt as f64;
        let before = world.spawned_total();
        world.update(dt);

        timer += dt;
        let crossed = timer > interval;
        if crossed {
            timer = 0.0;
        }
        world.spawned_total() - before == crossed as u64
    })
}

#[quickcheck]
fn draw_does_not_mutate_world(seeds: Vec<u8>, deltas: Vec<u16>) -> bool {
    let mut world = World::new(GameConfig::default(), Box::new(scripted(&seeds)));
    for dt in deltas {
        world.update(dt as f64 * 4.0);
    }

    let before: Vec<Enemy> = world.enemies().to_vec();
    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    world.draw(&mut first);
    world.draw(&mut second);

    world.enemies() == before.as_slice()
        && first.commands() == second.commands()
        && first.opacity() == 1.0
        && first.save_depth() == 0
}
