#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Every position adjacent to this one (diagonals included) that lies inside a
    /// `height` x `width` area. Positions off the edge are skipped, nothing wraps around.
    pub fn neighbors(self, height: usize, width: usize) -> impl Iterator<Item = Position> {
        const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        fn abs_pos(center_pos: usize, offset_pos: isize, len: usize) -> Option<usize> {
            center_pos
                .checked_add_signed(offset_pos)
                .filter(|abs_pos| *abs_pos < len)
        }

        NEIGHBOR_RELATIVE_POSITIONS.iter().filter_map(move |rel_pos| {
            Some(Position {
                row: abs_pos(self.row, rel_pos[0], height)?,
                col: abs_pos(self.col, rel_pos[1], width)?,
            })
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.row, value.col]
    }
}
