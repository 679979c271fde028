//! Seeded picks are reproducible.

use parlor_core::GameRng;
use parlor_rps::{Choice, Outcome, RpsScore, pick, resolve};

#[test]
fn test_same_seed_same_throws() {
    let mut a = GameRng::new(17);
    let mut b = GameRng::new(17);
    let first: Vec<Choice> = (0..50).map(|_| pick(&mut a)).collect();
    let second: Vec<Choice> = (0..50).map(|_| pick(&mut b)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_session_against_seeded_computer() {
    let mut rng = GameRng::new(5);
    let mut score = RpsScore::new();
    for _ in 0..30 {
        score = score.record(resolve(Choice::Rock, pick(&mut rng)));
    }
    assert_eq!(score.wins() + score.losses() + score.draws(), 30);
}

#[test]
fn test_outcome_from_human_side() {
    let score = RpsScore::new().record(resolve(Choice::Paper, Choice::Rock));
    assert_eq!(*score.wins(), 1);
    assert_eq!(resolve(Choice::Paper, Choice::Scissors), Outcome::BWins);
}
