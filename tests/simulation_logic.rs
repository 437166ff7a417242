mod common;

use common::{alive_cells, WorldBuilder, BLINKER, BLOCK, GLIDER};
use lifegame_core::{Generation, Shape};

#[test]
fn test_blinker_oscillates() {
    let mut world = WorldBuilder::new(5, 5).with_pattern(2, 1, BLINKER).build();
    let horizontal = world.current().clone();

    world.advance();
    assert_eq!(alive_cells(world.current()), vec![(1, 2), (2, 2), (3, 2)]);

    world.advance();
    assert_eq!(world.current(), &horizontal);
    assert_eq!(world.generation(), 2);
}

#[test]
fn test_block_is_still() {
    let mut world = WorldBuilder::new(6, 6).with_pattern(2, 2, BLOCK).build();
    let before = world.current().clone();
    for _ in 0..10 {
        world.advance();
    }
    assert_eq!(world.current(), &before);
}

#[test]
fn test_glider_wraps_around_the_torus() {
    // A glider moves one cell down and right every four generations, so on an
    // 8x8 torus it is back where it started after 32.
    let mut world = WorldBuilder::new(8, 8).with_pattern(0, 0, GLIDER).build();
    let start = world.current().clone();

    for _ in 0..4 {
        world.advance();
    }
    let shifted = Generation::with_alive(
        Shape::new(8, 8),
        GLIDER.iter().map(|&(r, c)| (r + 1, c + 1)),
    );
    assert_eq!(world.current(), &shifted);

    for _ in 4..32 {
        world.advance();
    }
    assert_eq!(world.current(), &start);
    assert_eq!(world.population(), 5);
}

#[test]
fn test_blinker_across_the_seam() {
    // Same blinker, split over the left and right edges.
    let mut world = WorldBuilder::new(5, 5).with_pattern(2, 4, BLINKER).build();
    assert_eq!(alive_cells(world.current()), vec![(2, 0), (2, 1), (2, 4)]);

    world.advance();
    assert_eq!(alive_cells(world.current()), vec![(1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_lonely_cell_dies_and_crowd_thins() {
    let mut lonely = WorldBuilder::new(4, 4).with_pattern(1, 1, &[(0, 0)]).build();
    lonely.advance();
    assert_eq!(lonely.population(), 0);

    // Centre of a plus has four neighbours and dies.
    let plus = [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)];
    let mut crowd = WorldBuilder::new(7, 7).with_pattern(2, 2, &plus).build();
    crowd.advance();
    assert_eq!(crowd.current().get(3, 3), Some(false));
}

#[test]
fn test_reset_replays_the_pattern() {
    let mut world = WorldBuilder::new(8, 8).with_pattern(0, 0, GLIDER).build();
    let start = world.current().clone();
    world.advance().advance().advance();
    world.reset().unwrap();
    assert_eq!(world.current(), &start);
    assert_eq!(world.generation(), 0);
}

#[test]
fn test_empty_worlds_advance() {
    for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
        let mut world = WorldBuilder::new(rows, cols).build();
        world.advance();
        assert_eq!(world.generation(), 1);
        assert_eq!(world.population(), 0);
        assert_eq!(world.population_density(), 0.0);
    }
}

#[test]
fn test_single_cell_world() {
    // The only cell is its own neighbour eight times over.
    let mut world = WorldBuilder::new(1, 1).with_pattern(0, 0, &[(0, 0)]).build();
    world.advance();
    assert_eq!(world.population(), 0);
}
