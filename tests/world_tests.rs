//! Lane tiling and scrolling behaviour of the world window.

mod common;

use lane_hopper::engine::color::Color;
use lane_hopper::game::config::GameConfig;
use lane_hopper::game::entity::{Tree, Vehicle};
use lane_hopper::game::lane::{Ground, Lane};
use lane_hopper::game::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn assert_tiles(world: &World, config: &GameConfig) {
    let rows: Vec<i32> = world.rows().collect();
    let expected: Vec<i32> = (0..config.rows).collect();
    assert_eq!(rows, expected);
    let pixel_rows: Vec<i32> = world.lanes().map(|l| l.y(config.grid_size)).collect();
    assert!(pixel_rows.iter().all(|y| y % config.grid_size == 0));
    assert_eq!(pixel_rows.last().map(|y| y + config.grid_size), Some(config.height()));
}

#[test]
fn tiling_holds_across_many_scrolls() {
    for seed in 0..8 {
        let config = common::seeded(seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut world = World::generate(&config, 0, &mut rng);
        assert_tiles(&world, &config);
        for step in 0..40 {
            world.scroll(step, &config, &mut rng);
            world.update(&config, &mut rng);
            assert_tiles(&world, &config);
        }
    }
}

#[test]
fn scroll_preserves_lane_contents() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(99);
    let mut world = common::open_field(&config);

    let mut road = Lane::empty(5, Ground::Road);
    road.speed = 2.5;
    road.push_vehicle(Vehicle { x: 12.5, width: 60.0, height: 30.0, speed: 2.5, direction: 1, color: Color::BLACK });
    road.push_vehicle(Vehicle { x: 250.0, width: 100.0, height: 30.0, speed: 2.5, direction: 1, color: Color::WHITE });
    *world.lane_at_mut(5).unwrap() = road;
    world.lane_at_mut(9).unwrap().push_tree(Tree { col: 3 });

    for n in 1..=3 {
        world.scroll(0, &config, &mut rng);
        let moved = world.lane_at(5 + n).unwrap();
        assert_eq!(moved.ground, Ground::Road);
        let xs: Vec<f32> = moved.vehicles().iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![12.5, 250.0]);
        assert!(world.is_blocked(3, 9 + n));
    }
}

#[test]
fn bottom_lane_is_discarded() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut world = common::open_field(&config);
    world.lane_at_mut(15).unwrap().push_tree(Tree { col: 0 });
    world.scroll(0, &config, &mut rng);
    assert_eq!(world.len(), 16);
    assert!(!world.is_blocked(0, 15));
    assert!(world.lanes().all(|l| l.trees().is_empty() || l.row == 0));
}

#[test]
fn new_lane_uses_current_score_for_speed() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(21);
    let mut world = common::open_field(&config);
    for _ in 0..30 {
        world.scroll(200, &config, &mut rng);
        let top = world.lane_at(0).unwrap();
        assert!(top.speed >= 7.0, "speed {}", top.speed);
    }
}
