use std::fmt::Display;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::definitions::{Color, Move};
use crate::core::engine::Board;

/** Number of independent lines explored by [`Game::evaluate_best_moves`] */
pub const SEARCH_BRANCHES: usize = 3;
/** Maximum plies of every explored line */
pub const SEARCH_DEPTH: usize = 3;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
}

impl Game {
    /** Game over an empty board, White to move. */
    pub fn new() -> Game {
        Game::with_board(Board::new())
    }

    pub fn with_board(board: Board) -> Game {
        Game::with_player(board, Color::White)
    }

    pub fn with_player(board: Board, player: Color) -> Game {
        Game {
            board,
            current_player: player,
        }
    }

    pub fn fill(
        &mut self,
        pawn_count: u32,
        knight_count: u32,
        bishop_count: u32,
        rook_count: u32,
    ) {
        self.board
            .fill(pawn_count, knight_count, bishop_count, rook_count);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.current_player
    }

    fn make_move(&mut self, _move: Move) {
        self.board.make_move(_move);
        self.current_player = self.current_player.opposite();
    }

    pub fn random_move(&mut self) {
        self.random_move_with(&mut rand::thread_rng())
    }

    /** Plays a uniformly chosen pseudo-legal move for the side to move.
     * Without any available move nothing happens and the turn stays. */
    pub fn random_move_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let possible_moves = self.board.available_moves(self.current_player);
        match possible_moves.choose(rng) {
            Some(&chosen_move) => {
                trace!("{} plays {}", self.current_player, chosen_move);
                self.make_move(chosen_move);
            }
            None => debug!("{} has no moves, turn is kept", self.current_player),
        }
    }

    /** Greedy lines for the side to move.
     *
     * Line `i` repeatedly plays the `i`-th best rated move on its own copy of
     * the board, for up to [`SEARCH_DEPTH`] plies, and stops once the copy
     * reports the side to move as checked. A line ends early when fewer than
     * `i + 1` moves are available. */
    pub fn evaluate_best_moves(&self) -> Vec<Vec<Move>> {
        (0..SEARCH_BRANCHES)
            .map(|branch| {
                let mut board = self.board.clone();
                let mut line = Vec::with_capacity(SEARCH_DEPTH);
                for _ in 0..SEARCH_DEPTH {
                    let Some(&(_, _move)) = board.evaluated_moves(self.current_player).get(branch)
                    else {
                        debug!("Line {} cut after {} moves", branch, line.len());
                        break;
                    };
                    board.make_move(_move);
                    line.push(_move);
                    if board.is_checked(self.current_player) {
                        break;
                    }
                }
                line
            })
            .collect()
    }
}

impl Default for Game {
    /** Filled board, White to move. */
    fn default() -> Self {
        Game::with_board(Board::filled())
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
