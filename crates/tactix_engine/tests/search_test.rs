//! Tests for the minimax search.

use tactix_engine::{Board, Game, Player, Status, best_move, minimax};

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
fn test_perfect_play_from_empty_board_is_a_draw() {
    let board = Board::new();
    assert_eq!(minimax(&board, 0, true, Player::X, Player::O), 0);
    assert_eq!(minimax(&board, 0, false, Player::X, Player::O), 0);
}

#[test]
fn test_faster_win_outscores_slower_win() {
    // X to move holds 0 and 4. Index 8 wins immediately; index 7 forks
    // (threats on 1-4-7 and 0-4-8) and wins two plies later.
    let board = board_from(&[0, 4], &[2, 6]);

    let quick = board.place(8, Player::X).expect("empty cell");
    let fork = board.place(7, Player::X).expect("empty cell");

    let quick_score = minimax(&quick, 0, false, Player::X, Player::O);
    let fork_score = minimax(&fork, 0, false, Player::X, Player::O);

    assert_eq!(quick_score, 10);
    assert_eq!(fork_score, 8);
    assert_eq!(best_move(&board, Player::X), Some(8));
}

#[test]
fn test_hard_vs_hard_is_a_draw() {
    let mut game = Game::new();
    while !game.is_over() {
        let index = best_move(game.board(), game.to_move()).expect("moves remain");
        game.play(index).expect("chosen move is legal");
    }
    assert_eq!(game.status(), Status::Draw);
}

/// Walks every game in which `ai` answers with `best_move` and the
/// opponent tries each legal reply in turn.
fn assert_never_loses(game: Game, ai: Player) {
    match game.status() {
        Status::Won(winner) => {
            assert_ne!(
                winner,
                ai.opponent(),
                "opponent won via moves {:?}",
                game.history()
            );
            return;
        }
        Status::Draw => return,
        Status::InProgress => {}
    }

    if game.to_move() == ai {
        let mut next = game;
        let index = best_move(next.board(), ai).expect("in-progress board has moves");
        next.play(index).expect("chosen move is legal");
        assert_never_loses(next, ai);
    } else {
        for index in game.board().available_moves() {
            let mut next = game.clone();
            next.play(index).expect("enumerated move is legal");
            assert_never_loses(next, ai);
        }
    }
}

#[test]
fn test_hard_never_loses_moving_first() {
    assert_never_loses(Game::new(), Player::X);
}

#[test]
fn test_hard_never_loses_moving_second() {
    assert_never_loses(Game::new(), Player::O);
}
