use enemy_spawner_wasm::application::GameLoop;
use enemy_spawner_wasm::domain::{EnemyKind, GameConfig, RecordingSurface, ScriptedRandom, World};
use insta::assert_snapshot;

fn populated_world() -> World {
    // every random draw is 0: ghost at the top, spider at the left edge
    let mut world = World::new(GameConfig::default(), Box::new(ScriptedRandom::constant(0.0)));
    world.spawn(EnemyKind::Worm);
    world.spawn(EnemyKind::Ghost);
    world.spawn(EnemyKind::Spider);
    world
}

#[test]
fn first_frame_transcript() {
    let mut game = GameLoop::new(populated_world(), RecordingSurface::new());
    game.run_frame(0.0);

    assert_snapshot!(game.surface().transcript(), @r"
    clear 0 0 500 700
    blit worm [0 0 229 171] -> [500 614.5 114.5 85.5] alpha=1
    save
    opacity 0.7
    blit ghost [0 0 261 209] -> [500 0 130.5 104.5] alpha=0.7
    restore
    line 77.5,0 -> 77.5,-77.5
    blit spider [0 0 310 175] -> [0 -87.5 155 87.5] alpha=1
    ");
}

#[test]
fn repeated_draws_produce_identical_transcripts() {
    let world = populated_world();
    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    world.draw(&mut first);
    world.draw(&mut second);
    assert_eq!(first.transcript(), second.transcript());
}
