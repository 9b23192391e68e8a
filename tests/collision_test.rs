//! Integration test: collision geometry
//!
//! Checks the AABB rule on fixed rectangles and on pipe pairs built from
//! world coordinates.

use skyhop::core::collision::{obstacle_bounds, player_bounds, player_hits_obstacle};
use skyhop::{any_collision, Bounds, GameConfig, Obstacle, PlayerState};

fn player_rect() -> Bounds {
    Bounds::new(40.0, 70.0, 100.0, 140.0)
}

#[test]
fn test_reference_rectangles() {
    let above = Bounds::new(50.0, 80.0, 0.0, 90.0);
    let below = Bounds::new(50.0, 80.0, 110.0, 400.0);

    assert!(!any_collision(&player_rect(), &[above]));
    assert!(any_collision(&player_rect(), &[below]));
    assert!(any_collision(&player_rect(), &[above, below]));
}

#[test]
fn test_edges_touching_do_not_collide() {
    let touching_below = Bounds::new(50.0, 80.0, 140.0, 400.0);
    let touching_right = Bounds::new(70.0, 100.0, 0.0, 400.0);
    assert!(!any_collision(&player_rect(), &[touching_below, touching_right]));
}

#[test]
fn test_both_pipes_checked_independently() {
    let config = GameConfig::default();
    let obstacle = Obstacle::new(60.0, 120.0, &config);
    let [bottom, top] = obstacle_bounds(&obstacle, &config);

    // Gap spans 120..220 above the floor
    let low = player_bounds(&PlayerState { y: 100.0, velocity: 0.0 }, &config);
    let mid = player_bounds(&PlayerState { y: 150.0, velocity: 0.0 }, &config);
    let high = player_bounds(&PlayerState { y: 200.0, velocity: 0.0 }, &config);

    assert!(low.overlaps(&bottom) && !low.overlaps(&top));
    assert!(!mid.overlaps(&bottom) && !mid.overlaps(&top));
    assert!(!high.overlaps(&bottom) && high.overlaps(&top));
}

#[test]
fn test_obstacle_behind_player_is_harmless() {
    let config = GameConfig::default();
    let behind = Obstacle::new(10.0, 200.0, &config);
    let player = PlayerState::on_floor(&config);
    assert!(!player_hits_obstacle(&player, &[behind], &config));
}

#[test]
fn test_any_pipe_among_many_triggers() {
    let config = GameConfig::default();
    let player = PlayerState::on_floor(&config);
    let obstacles = vec![
        Obstacle::new(300.0, 200.0, &config),
        Obstacle::new(500.0, 200.0, &config),
        Obstacle::new(65.0, 60.0, &config),
    ];
    assert!(player_hits_obstacle(&player, &obstacles, &config));
    assert!(!player_hits_obstacle(&player, &obstacles[..2], &config));
}
