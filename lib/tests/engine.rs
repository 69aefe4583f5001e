use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rlifesim_lib::{Config, Error, Ruleset, World2, World3, ALIVE, DEAD};
use std::error::Error as StdError;

/// Builds a 2D world from rows of `o` (live) and `.` (dead) characters.
fn world_from_rows(rows: &[&str]) -> Result<World2, Box<dyn StdError>> {
    let mut world: World2 = Config::new(rows.len()).set_seed(0).world()?;
    for (row, line) in rows.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            world.set([row, col], if c == 'o' { ALIVE } else { DEAD });
        }
    }
    Ok(world)
}

#[test]
fn fresh_grid_size_and_states() -> Result<(), Box<dyn StdError>> {
    let world: World2 = Config::new(7).set_seed(1).world()?;
    assert_eq!(world.side(), 7);
    assert_eq!(world.grid().len(), 49);
    assert!(world.grid().iter().all(|&s| s == ALIVE || s == DEAD));

    let world: World3 = Config::new(3).set_seed(1).world()?;
    assert_eq!(world.grid().len(), 27);
    assert!(world.grid().iter().all(|&s| s == ALIVE || s == DEAD));
    Ok(())
}

#[test]
fn construction_errors() {
    assert_eq!(
        Config::new(0).world::<2>().unwrap_err(),
        Error::NonPositiveSize
    );
    assert_eq!(
        Config::new(4)
            .set_ruleset(Ruleset::new(3, 2, 3, 3))
            .world::<2>()
            .unwrap_err(),
        Error::SurvivalRange(3, 2)
    );
    assert_eq!(
        Config::new(4)
            .set_ruleset(Ruleset::new(2, 3, 4, 3))
            .world::<3>()
            .unwrap_err(),
        Error::BirthRange(4, 3)
    );
}

#[test]
fn explicit_rng_reproducibility() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(8);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let a = World2::new_with_rng(&config, &mut rng)?;
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let b = World2::new_with_rng(&config, &mut rng)?;
    assert_eq!(a.grid(), b.grid());
    Ok(())
}

#[test]
fn equal_seeds_give_equal_worlds() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(16).set_seed(42);
    let mut a: World2 = config.world()?;
    let mut b: World2 = config.world()?;
    assert_eq!(a.grid(), b.grid());
    a.update();
    b.update();
    assert_eq!(a.grid(), b.grid());
    Ok(())
}

#[test]
fn seeded_fill_contains_both_states() -> Result<(), Box<dyn StdError>> {
    let world: World2 = Config::new(16).set_seed(7).world()?;
    assert!(world.grid().iter().any(|s| s.is_alive()));
    assert!(world.grid().iter().any(|s| !s.is_alive()));
    Ok(())
}

#[test]
fn update_is_deterministic() -> Result<(), Box<dyn StdError>> {
    let world = world_from_rows(&["..o..", "o.o..", ".oo..", ".....", "....."])?;
    let mut a = world.clone();
    let mut b = world;
    a.update();
    b.update();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.generation(), 1);
    Ok(())
}

#[test]
fn neighbor_count_clamps_at_edges() -> Result<(), Box<dyn StdError>> {
    let world = world_from_rows(&["ooo", "ooo", "ooo"])?;
    // A corner sees 3 of its 8 possible neighbors, an edge cell 5.
    assert_eq!(world.neighbor_count([0, 0]), 3);
    assert_eq!(world.neighbor_count([0, 2]), 3);
    assert_eq!(world.neighbor_count([2, 2]), 3);
    assert_eq!(world.neighbor_count([0, 1]), 5);
    assert_eq!(world.neighbor_count([1, 0]), 5);
    assert_eq!(world.neighbor_count([1, 1]), 8);
    Ok(())
}

#[test]
fn neighbor_count_excludes_the_cell_itself() -> Result<(), Box<dyn StdError>> {
    let world = world_from_rows(&["...", ".o.", "..."])?;
    assert_eq!(world.neighbor_count([1, 1]), 0);
    assert_eq!(world.neighbor_count([0, 0]), 1);
    Ok(())
}

#[test]
fn neighbor_count_in_three_dimensions() -> Result<(), Box<dyn StdError>> {
    let mut world: World3 = Config::new(3).set_seed(0).world()?;
    for index in 0..world.side().pow(3) {
        let coord = [index / 9, index / 3 % 3, index % 3];
        world.set(coord, ALIVE);
    }
    assert_eq!(world.neighbor_count([1, 1, 1]), 26);
    assert_eq!(world.neighbor_count([0, 0, 0]), 7);
    assert_eq!(world.neighbor_count([0, 1, 1]), 17);
    Ok(())
}

#[test]
#[should_panic]
fn neighbor_count_out_of_range() {
    let world: World2 = Config::new(3).set_seed(0).world().unwrap();
    world.neighbor_count([0, 3]);
}

#[test]
#[should_panic]
fn get_out_of_range() {
    let world: World3 = Config::new(3).set_seed(0).world().unwrap();
    world.get([3, 0, 0]);
}

#[test]
fn empty_grid_is_a_fixed_point() -> Result<(), Box<dyn StdError>> {
    let mut world = world_from_rows(&["....", "....", "....", "...."])?;
    world.update();
    assert_eq!(world.population(), 0);
    Ok(())
}

#[test]
fn block_is_stable() -> Result<(), Box<dyn StdError>> {
    let mut world = world_from_rows(&["....", ".oo.", ".oo.", "...."])?;
    let before = world.grid().to_vec();
    world.update();
    assert_eq!(world.grid(), &before[..]);
    assert_eq!(world.population(), 4);
    Ok(())
}

#[test]
fn blinker_oscillates_with_period_two() -> Result<(), Box<dyn StdError>> {
    let mut world = world_from_rows(&[".....", ".....", ".ooo.", ".....", "....."])?;
    let horizontal = world.grid().to_vec();
    world.update();
    assert_eq!(
        world.plaintext(),
        ".....$\n\
         ..o..$\n\
         ..o..$\n\
         ..o..$\n\
         .....!\n"
    );
    world.update();
    assert_eq!(world.grid(), &horizontal[..]);
    Ok(())
}

#[test]
fn three_by_three_scenario() -> Result<(), Box<dyn StdError>> {
    // From a seeded L-tromino: the three live cells each keep 2 or 3 live
    // neighbors and survive, the inner dead corner is born with 3.
    let mut world = world_from_rows(&["oo.", "o..", "..."])?;
    world.update();
    assert_eq!(
        world.plaintext(),
        "oo.$\n\
         oo.$\n\
         ...!\n"
    );
    Ok(())
}

#[test]
fn bays_rule_keeps_a_full_cube_alive() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(2)
        .set_ruleset(Ruleset::bays_5766())
        .set_seed(3);
    let mut world: World3 = config.world()?;
    for index in 0..8 {
        let coord = [index / 4, index / 2 % 2, index % 2];
        world.set(coord, ALIVE);
    }
    // Every cell of a full 2x2x2 cube has 7 live neighbors, within 5..=7.
    world.update();
    assert_eq!(world.population(), 8);
    Ok(())
}

#[test]
fn plaintext_layer_of_a_cubic_world() -> Result<(), Box<dyn StdError>> {
    let mut world: World3 = Config::new(2).set_seed(0).world()?;
    for index in 0..8 {
        let coord = [index / 4, index / 2 % 2, index % 2];
        world.set(coord, DEAD);
    }
    world.set([1, 0, 1], ALIVE);
    assert_eq!(world.plaintext_layer(0), "..$\n..!\n");
    assert_eq!(world.plaintext_layer(1), ".o$\n..!\n");
    Ok(())
}

#[test]
fn population_and_generation_counters() -> Result<(), Box<dyn StdError>> {
    let mut world = world_from_rows(&["ooo", "...", "..."])?;
    assert_eq!(world.population(), 3);
    assert_eq!(world.generation(), 0);
    world.update();
    world.update();
    assert_eq!(world.generation(), 2);
    Ok(())
}
