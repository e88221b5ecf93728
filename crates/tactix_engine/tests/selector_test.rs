//! Tests for the difficulty-tiered move selector.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tactix_engine::{Board, Difficulty, Player, SelectorError, choose_move};

fn board_from(x: &[usize], o: &[usize]) -> Board {
    let mut board = Board::new();
    for &index in x {
        board = board.place(index, Player::X).expect("empty cell");
    }
    for &index in o {
        board = board.place(index, Player::O).expect("empty cell");
    }
    board
}

#[test]
fn test_hard_takes_an_immediate_win() {
    let board = board_from(&[0, 1], &[]);
    let mut rng = SmallRng::seed_from_u64(1);
    let index = choose_move(&board, Player::X, Difficulty::Hard, &mut rng);
    assert_eq!(index, Ok(2));
}

#[test]
fn test_hard_blocks_an_immediate_loss() {
    let board = board_from(&[], &[0, 1]);
    let mut rng = SmallRng::seed_from_u64(1);
    let index = choose_move(&board, Player::X, Difficulty::Hard, &mut rng);
    assert_eq!(index, Ok(2));
}

#[test]
fn test_easy_is_roughly_uniform() {
    // Three cells remain; each should draw close to a third of the
    // samples.
    let board = board_from(&[0, 3, 4], &[1, 2, 6]);
    let legal = board.available_moves();
    assert_eq!(legal, vec![5, 7, 8]);

    let mut rng = SmallRng::seed_from_u64(42);
    let mut counts = [0usize; 9];
    let samples = 6_000;
    for _ in 0..samples {
        let index =
            choose_move(&board, Player::X, Difficulty::Easy, &mut rng).expect("moves remain");
        counts[index] += 1;
    }

    for &index in &legal {
        let count = counts[index];
        assert!(
            (1_700..=2_300).contains(&count),
            "index {index} drawn {count} times out of {samples}"
        );
    }
    assert_eq!(counts.iter().sum::<usize>(), samples);
}

#[test]
fn test_easy_only_returns_legal_moves() {
    let board = board_from(&[0, 4], &[8, 2]);
    let legal = board.available_moves();
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..100 {
        let index =
            choose_move(&board, Player::X, Difficulty::Easy, &mut rng).expect("moves remain");
        assert!(legal.contains(&index));
    }
}

#[test]
fn test_medium_mixes_random_and_optimal_play() {
    // Hard play always completes the 0-1-2 row, so any other index
    // proves the random half fired.
    let board = board_from(&[0, 1], &[]);
    let mut rng = SmallRng::seed_from_u64(99);

    let mut optimal = 0usize;
    let mut random = 0usize;
    let samples = 400;
    for _ in 0..samples {
        let index =
            choose_move(&board, Player::X, Difficulty::Medium, &mut rng).expect("moves remain");
        if index == 2 {
            optimal += 1;
        } else {
            random += 1;
        }
    }

    // Expected share of index 2 is 0.5 + 0.5/7, about 57%.
    assert!(optimal > 0 && random > 0);
    assert!(
        (160..=300).contains(&optimal),
        "optimal drawn {optimal} times out of {samples}"
    );
}

#[test]
fn test_selector_rejects_a_full_board() {
    let board = board_from(&[0, 2, 4, 5, 7], &[1, 3, 6, 8]);
    let mut rng = SmallRng::seed_from_u64(5);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(
            choose_move(&board, Player::O, difficulty, &mut rng),
            Err(SelectorError::NoLegalMoves)
        );
    }
}
