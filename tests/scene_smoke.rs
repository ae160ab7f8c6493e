use dice_engine::simulation::BodyCommand;
use dice_engine::systems::SceneVisibility;
use dice_engine::{DiceSceneCore, Vec3};

#[test]
fn scene_smoke_full_session() {
    let mut scene = DiceSceneCore::with_defaults();
    scene.resize(1280.0, 720.0);

    // Visitor clicks the navbar die.
    assert!(scene.show(0.0));
    let mut now = 0.0;
    let mut throws_seen = 0;
    let mut sleeps_seen = 0;

    // 60 fps host loop: tick, feed a settled position, drain commands.
    while now <= 10_000.0 {
        scene.advance(now);
        scene.on_position(Vec3::new(0.2, 0.5, -0.4), now);
        for command in scene.take_commands() {
            match command {
                BodyCommand::ApplyImpulse { .. } => throws_seen += 1,
                BodyCommand::Sleep => sleeps_seen += 1,
                _ => {}
            }
        }
        now += 16.0;
    }

    assert_eq!(throws_seen, 1);
    assert_eq!(sleeps_seen, 1);
    assert_eq!(scene.visibility(), SceneVisibility::Hidden);
    assert!(scene.indicator_visible());
    assert_eq!(scene.pending_timers(), 0);
}

#[test]
fn scene_smoke_repeated_shows() {
    let mut scene = DiceSceneCore::with_defaults();
    let mut now = 0.0;
    for round in 1..=3u32 {
        assert!(scene.show(now));
        now += 300.0;
        scene.advance(now);
        assert_eq!(scene.throw_count(), round);
        assert!(scene.close(now));
        now += 1000.0;
        scene.advance(now);
        assert!(!scene.scene_visible());
    }
    assert_eq!(scene.pending_timers(), 0);
}

#[test]
fn tick_now_shares_the_host_time_base() {
    use dice_engine::core::clock;
    use dice_engine::DiceScene;

    let mut scene = DiceScene::with_seed(5);
    assert!(scene.show(clock::now_ms()));

    // Mixing host-stamped and clock-read calls must not jump the timeline.
    assert_eq!(scene.tick_now(), 0);
    assert!(scene.scene_visible());
    assert_eq!(scene.visibility(), "active");
    assert_eq!(scene.throw_count(), 0);

    let later = clock::now_ms() + 300.0;
    scene.tick(later);
    assert_eq!(scene.throw_count(), 1);
    assert!(scene.scene_visible());
}
