use std::fmt::Display;

use log::trace;

use crate::core::definitions::{Color, Coordinate, Move, Piece, PieceType};
use crate::core::utils::{in_direction, is_valid_coord, squares, BOARD_SIZE};

/** Bonus applied to the evaluation per king square when a check flag is set */
const CHECK_BONUS: i32 = 1000;

/** Tables directions for pieces */
const BISHOP_DIR: &[Coordinate] = &[
    Coordinate::new(-1, -1),
    Coordinate::new(1, -1),
    Coordinate::new(1, 1),
    Coordinate::new(-1, 1),
];
const ROOK_DIR: &[Coordinate] = &[
    Coordinate::new(-1, 0),
    Coordinate::new(1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(0, 1),
];

/** Possible moves for pieces */
const KING_MOVES: &[Coordinate] = &[
    Coordinate::new(-1, -1),
    Coordinate::new(0, -1),
    Coordinate::new(1, -1),
    Coordinate::new(1, 0),
    Coordinate::new(1, 1),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 1),
    Coordinate::new(-1, 0),
];
const KNIGHT_MOVES: &[Coordinate] = &[
    Coordinate::new(-2, -1),
    Coordinate::new(-1, -2),
    Coordinate::new(1, -2),
    Coordinate::new(2, -1),
    Coordinate::new(2, 1),
    Coordinate::new(1, 2),
    Coordinate::new(-1, 2),
    Coordinate::new(-2, 1),
];

/** 8x8 board, `squares[y][x]`, row 0 is Black's home rank.
 *
 * Check flags and evaluation are derived from the grid and recomputed by
 * every method taking `&mut self`. */
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    squares: [[Piece; 8]; 8],
    white_check: bool,
    black_check: bool,
    white_evaluation: i32,
}

impl Board {
    pub fn new() -> Board {
        Board {
            squares: [[Piece::EMPTY; 8]; 8],
            white_check: false,
            black_check: false,
            white_evaluation: 0,
        }
    }

    /** Board with the full default set of pieces. */
    pub fn filled() -> Board {
        let mut board = Board::new();
        board.fill(8, 2, 2, 2);
        board
    }

    /** Places both armies. Counts above 8 pawns or 2 of any other piece
     * are clamped, each side always gets exactly one king. */
    pub fn fill(
        &mut self,
        pawn_count: u32,
        knight_count: u32,
        bishop_count: u32,
        rook_count: u32,
    ) {
        let pawn_count = pawn_count.min(8) as usize;
        let knight_count = knight_count.min(2) as usize;
        let bishop_count = bishop_count.min(2) as usize;
        let rook_count = rook_count.min(2) as usize;

        for (color, back_rank, pawn_rank) in [(Color::Black, 0, 1), (Color::White, 7, 6)] {
            let row = &mut self.squares[back_rank];
            for i in 0..rook_count {
                row[i * 7] = Piece::new(PieceType::Rook, color);
            }
            for i in 0..knight_count {
                row[i * 5 + 1] = Piece::new(PieceType::Knight, color);
            }
            for i in 0..bishop_count {
                row[i * 3 + 2] = Piece::new(PieceType::Bishop, color);
            }
            row[4] = Piece::new(PieceType::King, color);

            for cell in self.squares[pawn_rank].iter_mut().take(pawn_count) {
                *cell = Piece::new(PieceType::Pawn, color);
            }
        }
        self.update();
    }

    pub fn get(&self, position: Coordinate) -> Option<Piece> {
        if is_valid_coord(position) {
            Some(*self.at(position))
        } else {
            None
        }
    }

    /** Puts `piece` on the square, replacing whatever was there.
     * Off-board positions are ignored. */
    pub fn set(&mut self, position: Coordinate, piece: Piece) {
        if !is_valid_coord(position) {
            trace!("Ignoring piece placement outside of the board: {:?}", position);
            return;
        }
        self.squares[position.y as usize][position.x as usize] = piece;
        self.update();
    }

    /** Execute move without checking it against the rules.
     * Only moves leaving the board are ignored. */
    pub fn make_move(&mut self, _move: Move) {
        if !is_valid_coord(_move.start) || !is_valid_coord(_move.end) {
            trace!("Ignoring move outside of the board: {:?}", _move);
            return;
        }
        trace!("Executing move {}", _move);
        let piece = *self.at(_move.start);
        self.squares[_move.end.y as usize][_move.end.x as usize] = piece;
        self.squares[_move.start.y as usize][_move.start.x as usize] = Piece::EMPTY;
        self.update();
    }

    pub fn is_checked(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_check,
            Color::Black => self.black_check,
        }
    }

    pub fn evaluation(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white_evaluation,
            Color::Black => -self.white_evaluation,
        }
    }

    /** Pseudo-legal moves of `color`, in row-major order of the moving piece. */
    pub fn available_moves(&self, color: Color) -> Vec<Move> {
        let mut possible_moves = Vec::with_capacity(64);
        for (position, piece) in self.iter_pieces() {
            if piece.is_empty() || piece.color() != color {
                continue;
            }
            self.piece_moves(&mut possible_moves, position);
        }
        possible_moves
    }

    /** Every move of `color` rated by the resulting evaluation for `color`,
     * best first. Equal scores keep generation order. */
    pub fn evaluated_moves(&self, color: Color) -> Vec<(i32, Move)> {
        let mut ratings: Vec<_> = self
            .available_moves(color)
            .into_iter()
            .map(|_move| {
                let mut board = self.clone();
                board.make_move(_move);
                (board.evaluation(color), _move)
            })
            .collect();
        ratings.sort_by(|a, b| b.0.cmp(&a.0));
        ratings
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        squares().map(|position| (position, *self.at(position)))
    }

    #[inline]
    fn at(&self, position: Coordinate) -> &Piece {
        &self.squares[position.y as usize][position.x as usize]
    }

    fn piece_moves(&self, possible_moves: &mut Vec<Move>, start: Coordinate) {
        let piece = *self.at(start);
        let color = piece.color();
        match piece.type_() {
            PieceType::Empty => (),
            PieceType::Pawn => {
                let step = color.pawn_step();
                self.add_if_empty(
                    possible_moves,
                    Move::new(start, start + Coordinate::new(0, step)),
                );
                if start.y == color.pawn_row() {
                    // the square in between is not looked at
                    self.add_if_empty(
                        possible_moves,
                        Move::new(start, start + Coordinate::new(0, step * 2)),
                    );
                }
                for file_step in [-1, 1] {
                    self.add_if_capture(
                        possible_moves,
                        color,
                        Move::new(start, start + Coordinate::new(file_step, step)),
                    );
                }
            }
            PieceType::Knight | PieceType::King => {
                let offsets = if piece.type_() == PieceType::Knight {
                    KNIGHT_MOVES
                } else {
                    KING_MOVES
                };
                for offset in offsets {
                    let _move = Move::new(start, start + *offset);
                    self.add_if_capture_or_empty(possible_moves, color, _move);
                }
            }
            // Sliding pieces
            sliding_type => {
                let possible_directions = match sliding_type {
                    PieceType::Bishop => BISHOP_DIR,
                    PieceType::Rook => ROOK_DIR,
                    _ => unreachable!(),
                };
                for dir in possible_directions {
                    for end in in_direction(start, *dir) {
                        let _move = Move::new(start, end);
                        if self.add_if_capture(possible_moves, color, _move)
                            || !self.add_if_empty(possible_moves, _move)
                        {
                            break;
                        }
                    }
                }
            }
        }
    }

    /** Adds a move onto an empty square, `true` means the path continues. */
    fn add_if_empty(&self, possible_moves: &mut Vec<Move>, _move: Move) -> bool {
        if !is_valid_coord(_move.end) || !self.at(_move.end).is_empty() {
            return false;
        }
        possible_moves.push(_move);
        true
    }

    /** Adds a capture of an opposite piece, `true` means the path is blocked. */
    fn add_if_capture(&self, possible_moves: &mut Vec<Move>, color: Color, _move: Move) -> bool {
        if !is_valid_coord(_move.end) {
            return false;
        }
        let target = self.at(_move.end);
        if target.is_empty() || target.color() == color {
            return false;
        }
        possible_moves.push(_move);
        true
    }

    fn add_if_capture_or_empty(
        &self,
        possible_moves: &mut Vec<Move>,
        color: Color,
        _move: Move,
    ) -> bool {
        if !is_valid_coord(_move.end) {
            return false;
        }
        let target = self.at(_move.end);
        if !target.is_empty() && target.color() == color {
            return false;
        }
        possible_moves.push(_move);
        true
    }

    fn update(&mut self) {
        self.update_checks();
        self.update_evaluation();
    }

    /** A king under attack raises the flag of the *other* color: an attacked
     * White king sets `black_check` and vice versa. */
    fn update_checks(&mut self) {
        self.white_check = false;
        self.black_check = false;
        let kings: Vec<_> = self
            .iter_pieces()
            .filter(|(_, piece)| piece.type_() == PieceType::King)
            .collect();
        for (king, piece) in kings {
            let attacked = self
                .available_moves(piece.color().opposite())
                .iter()
                .any(|_move| _move.end == king);
            if !attacked {
                continue;
            }
            match piece.color() {
                Color::White => self.black_check = true,
                Color::Black => self.white_check = true,
            }
        }
    }

    /** Material sum from White's side. Check adjustments are applied once per
     * king on the board, not once per position. */
    fn update_evaluation(&mut self) {
        let mut evaluation = 0;
        for (_, piece) in self.iter_pieces() {
            evaluation += piece.material();
            if piece.type_() == PieceType::King {
                if self.white_check {
                    evaluation += CHECK_BONUS;
                }
                if self.black_check {
                    evaluation -= CHECK_BONUS;
                }
            }
        }
        self.white_evaluation = evaluation;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::filled()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const BORDER: &str = "   +---+---+---+---+---+---+---+---+";
        writeln!(f, "{BORDER}")?;
        for (y, row) in self.squares.iter().enumerate() {
            write!(f, "{}  | ", BOARD_SIZE - y as i32)?;
            for piece in row {
                write!(f, "{piece} | ")?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        writeln!(f, "     a   b   c   d   e   f   g   h")
    }
}
