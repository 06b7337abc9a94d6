use crate::core::definitions::Coordinate;

pub const BOARD_SIZE: i32 = 8;

pub struct DirectionIterator {
    position: Coordinate,
    direction: Coordinate,
}

impl Iterator for DirectionIterator {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.position = self.position + self.direction;
        if is_valid_coord(self.position) {
            Some(self.position)
        } else {
            None
        }
    }
}

/** Squares from `position` (exclusive) towards the board edge. */
pub fn in_direction(position: Coordinate, direction: Coordinate) -> DirectionIterator {
    DirectionIterator {
        position,
        direction,
    }
}

#[inline]
pub fn is_valid_coord(coord: Coordinate) -> bool {
    coord.x >= 0 && coord.y >= 0 && coord.x < BOARD_SIZE && coord.y < BOARD_SIZE
}

/** All squares in row-major order, row 0 first. */
pub fn squares() -> impl Iterator<Item = Coordinate> {
    (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coordinate::new(x, y)))
}
