use std::fmt::Display;
use std::ops::{Add, Mul};

use crate::core::utils::is_valid_coord;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /** Sign applied to material values, White counts positive. */
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /** Row a pawn of this color may double push from. */
    pub fn pawn_row(self) -> i32 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /** Forward direction of this color's pawns along `y`. */
    pub fn pawn_step(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum PieceType {
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    King,
}

impl PieceType {
    /** Material value, kings count for nothing here */
    pub fn value(self) -> i32 {
        match self {
            PieceType::Empty => 0,
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::King => 0,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PieceType::Empty => ' ',
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::King => 'K',
        }
    }
}

/** Content of one square.
 * Empty squares still carry a color and it is always `Color::Black`,
 * use [`Piece::EMPTY`] instead of building one by hand. */
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceType,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        color: Color::Black,
        kind: PieceType::Empty,
    };

    pub fn new(piece_type: PieceType, color: Color) -> Piece {
        if piece_type == PieceType::Empty {
            return Piece::EMPTY;
        }
        Piece {
            color,
            kind: piece_type,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn type_(&self) -> PieceType {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceType::Empty
    }

    /** Signed material value, positive for White. */
    pub fn material(&self) -> i32 {
        self.kind.value() * self.color.sign()
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let escape = match self.color {
            Color::White => "\x1b[97m",
            Color::Black => "\x1b[90m",
        };
        write!(f, "{escape}{}\x1b[0m", self.kind.symbol())
    }
}

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Coordinate) -> Self::Output {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn mul(self, rhs: i32) -> Self::Output {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

impl Display for Coordinate {
    /** Algebraic name like `e2`, off-board coordinates fall back to `Debug`. */
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !is_valid_coord(*self) {
            return write!(f, "{self:?}");
        }
        let file = (b'a' as i32 + self.x) as u8 as char;
        write!(f, "{}{}", file, 8 - self.y)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Move {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Move {
    pub fn new(start: Coordinate, end: Coordinate) -> Move {
        Move { start, end }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
