use battleship_ai::{Difficulty, Match, Side};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_hard_match_runs_to_completion() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = Match::new(Difficulty::Hard);
    game.setup(&mut rng).unwrap();
    let report = game.run(&mut rng);
    assert!(
        report.turns <= 200,
        "game took too many turns: {}",
        report.turns
    );
    assert!(matches!(report.winner, Side::One | Side::Two));
    // exactly one fleet survives
    let sunk: Vec<bool> = game
        .players()
        .iter()
        .map(|p| p.board().all_ships_sunk())
        .collect();
    assert_eq!(sunk.iter().filter(|&&s| s).count(), 1);
}

#[test]
fn test_easy_match_runs_to_completion() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut game = Match::new(Difficulty::Easy);
    game.setup(&mut rng).unwrap();
    let report = game.run(&mut rng);
    assert!(report.turns <= 200);
    assert!(matches!(report.winner, Side::One | Side::Two));
}

#[test]
fn test_matches_are_reproducible_for_a_seed() {
    let run = |seed: u64| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Match::new(Difficulty::Hard);
        game.setup(&mut rng).unwrap();
        game.run(&mut rng)
    };
    assert_eq!(run(9000), run(9000));
}

#[test]
fn test_hard_beats_easy_on_average() {
    // not a strict guarantee per match, but across a handful of seeds the
    // density-driven tier should finish its games in fewer decisions
    let total_turns = |difficulty: Difficulty| -> u32 {
        (0..10u64)
            .map(|seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                let mut game = Match::new(difficulty);
                game.setup(&mut rng).unwrap();
                game.run(&mut rng).turns
            })
            .sum()
    };
    assert!(total_turns(Difficulty::Hard) < total_turns(Difficulty::Easy));
}
