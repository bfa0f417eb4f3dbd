use battleship_ai::{
    cross_cells, AiPlayer, Difficulty, Move, Orientation, Ship, ShipType, ShotResult,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Resolve every cell of a move as a miss, the way a driver would.
fn resolve_all_miss(player: &mut AiPlayer, mv: Move) {
    match mv {
        Move::Shot(x, y) => player.update_strategy(ShotResult::Miss, x, y),
        Move::MultiHit(cx, cy) => {
            for (x, y) in cross_cells(cx, cy) {
                player.update_strategy(ShotResult::Miss, x, y);
            }
        }
    }
}

#[test]
fn test_easy_fires_one_multi_hit_on_the_first_turn() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut player = AiPlayer::new(Difficulty::Easy);
    let first = player.next_move(&mut rng);
    assert!(matches!(first, Move::MultiHit(_, _)));
    assert_eq!(player.multi_hit_budget(), 1);
    resolve_all_miss(&mut player, first);
    for _ in 0..30 {
        let mv = player.next_move(&mut rng);
        assert!(matches!(mv, Move::Shot(_, _)));
        resolve_all_miss(&mut player, mv);
    }
    assert_eq!(player.multi_hit_budget(), 1);
}

#[test]
fn test_hard_fires_multi_hits_on_turns_three_and_six() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut player = AiPlayer::new(Difficulty::Hard);
    for turn in 1..=12u32 {
        let mv = player.next_move(&mut rng);
        let expect_multi = turn == 3 || turn == 6;
        assert_eq!(
            matches!(mv, Move::MultiHit(_, _)),
            expect_multi,
            "turn {turn}"
        );
        resolve_all_miss(&mut player, mv);
    }
    assert_eq!(player.multi_hit_budget(), 0);
}

#[test]
fn test_multi_hit_center_is_interior() {
    let mut rng = SmallRng::seed_from_u64(19);
    let mut player = AiPlayer::new(Difficulty::Easy);
    let Move::MultiHit(cx, cy) = player.next_move(&mut rng) else {
        panic!("expected the scheduled multi-hit");
    };
    assert!((1..9).contains(&cx) && (1..9).contains(&cy));
    assert_eq!(cross_cells(cx, cy).len(), 5);
}

#[test]
fn test_cross_template_shrinks_at_edges() {
    assert_eq!(cross_cells(0, 0).len(), 3);
    assert_eq!(cross_cells(5, 0).len(), 4);
    assert_eq!(cross_cells(9, 9).len(), 3);
    assert_eq!(cross_cells(5, 5).len(), 5);
    assert!(cross_cells(0, 0).contains(&(0, 0)));
    assert!(cross_cells(0, 0).contains(&(1, 0)));
    assert!(cross_cells(0, 0).contains(&(0, 1)));
}

#[test]
fn test_moves_are_never_repeated_before_resolution() {
    let mut rng = SmallRng::seed_from_u64(23);
    let mut player = AiPlayer::new(Difficulty::Hard);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..60 {
        match player.next_move(&mut rng) {
            Move::Shot(x, y) => {
                assert!(seen.insert((x, y)), "cell ({x}, {y}) issued twice");
                player.update_strategy(ShotResult::Miss, x, y);
            }
            Move::MultiHit(cx, cy) => {
                for (x, y) in cross_cells(cx, cy) {
                    if seen.insert((x, y)) {
                        player.update_strategy(ShotResult::Miss, x, y);
                    }
                }
            }
        }
    }
}

#[test]
fn test_easy_targets_adjacent_after_a_hit() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut player = AiPlayer::new(Difficulty::Easy);
    let first = player.next_move(&mut rng);
    let Move::MultiHit(cx, cy) = first else {
        panic!("expected the scheduled multi-hit");
    };
    resolve_all_miss(&mut player, first);
    // report a hit well clear of the resolved cross cells
    let (hx, hy) = (if cx < 5 { 8 } else { 1 }, if cy < 5 { 8 } else { 1 });
    player.update_strategy(ShotResult::Hit, hx, hy);
    let Move::Shot(x, y) = player.next_move(&mut rng) else {
        panic!("expected a single shot");
    };
    let dist = (x as i32 - hx as i32).abs() + (y as i32 - hy as i32).abs();
    assert_eq!(dist, 1, "easy tier should probe a neighbour, got ({x}, {y})");
}

#[test]
fn test_hard_pursues_until_sunk_result() {
    let mut rng = SmallRng::seed_from_u64(31);
    let mut player = AiPlayer::new(Difficulty::Hard);
    player.update_strategy(ShotResult::Hit, 4, 4);
    // pursue across the turns before the scheduled multi-hit; feed misses
    // so the stack persists
    for _ in 0..2 {
        let Move::Shot(x, y) = player.next_move(&mut rng) else {
            panic!("expected a single shot");
        };
        let dist = (x as i32 - 4).abs() + (y as i32 - 4).abs();
        assert_eq!(dist, 1, "pursuit left the contact, got ({x}, {y})");
        player.update_strategy(ShotResult::Miss, x, y);
    }
    assert_eq!(player.targeting().hit_stack(), &[(4, 4)]);
    player.update_strategy(ShotResult::Sunk { length: 2 }, 4, 4);
    assert!(player.targeting().hit_stack().is_empty());
}

#[test]
fn test_sunk_length_retires_matching_entry() {
    let mut player = AiPlayer::new(Difficulty::Hard);
    assert_eq!(player.remaining_lengths(), &[5, 4, 3, 3, 2]);
    player.update_strategy(ShotResult::Sunk { length: 3 }, 0, 0);
    assert_eq!(player.remaining_lengths(), &[5, 4, 3, 2]);
    player.update_strategy(ShotResult::Sunk { length: 5 }, 1, 0);
    assert_eq!(player.remaining_lengths(), &[4, 3, 2]);
}

#[test]
fn test_placement_retry_exhaustion_is_reported() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut player = AiPlayer::new(Difficulty::Hard);
    // wall the board off so the fleet cannot fit anywhere
    for x in 0..10 {
        player
            .board_mut()
            .place_ship(Ship::new(ShipType::new("Wall", 10)), x, 0, Orientation::Vertical)
            .unwrap();
    }
    assert!(player.place_ships(&mut rng).is_err());
}

#[test]
fn test_place_ships_places_whole_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut player = AiPlayer::new(Difficulty::Hard);
    player.place_ships(&mut rng).unwrap();
    assert_eq!(player.board().ship_count(), 5);
    assert_eq!(player.board().occupied().len(), 17);
}
