use itertools::Itertools;
use serde::{Deserialize, Serialize, Serializer};

use super::pos::Position;

/// Reasons a set of raw rows can't be turned into a [`GameBoard`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("empty game")]
    EmptyGrid,

    #[error("empty column: {col}")]
    EmptyRow { col: usize },

    #[error("different row length: {row}")]
    RowLengthMismatch { row: usize },

    #[error("invalid value at position [{row}][{col}]")]
    InvalidCellValue { row: usize, col: usize },
}

/// A rectangular board of at least one tile. The only ways to get one are the validating
/// constructors and stepping an existing board, so the shape always holds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>")]
pub struct GameBoard {
    width: usize,
    height: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    /// Validates raw rows and builds a board out of them.
    ///
    /// Rows are scanned in order and the first problem found is reported: an empty board,
    /// an empty first row, then for each row its length followed by its values left to right.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[i64]>,
    {
        let first_row = rows.first().ok_or(BoardError::EmptyGrid)?;

        let width = first_row.as_ref().len();
        if width == 0 {
            return Err(BoardError::EmptyRow { col: 0 });
        }

        let mut tiles = Vec::with_capacity(width);

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();

            if row.len() != width {
                return Err(BoardError::RowLengthMismatch { row: row_index });
            }

            for (col_index, value) in row.iter().enumerate() {
                let tile = TileState::from_value(*value).ok_or(BoardError::InvalidCellValue {
                    row: row_index,
                    col: col_index,
                })?;

                tiles.push(tile);
            }
        }

        Ok(Self::with_tiles(width, rows.len(), tiles))
    }

    /// Only for tile vectors derived from an already valid board of the same dimensions.
    pub(crate) fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);

        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        self.tiles.chunks(self.width)
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    /// The board in its external 0/1 form.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|tile| tile.value()).collect_vec())
            .collect_vec()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if col >= self.width {
            return None;
        }

        if row >= self.height {
            return None;
        }

        Some(col + (row * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.width;
        let col = index % self.width;
        Position { row, col }
    }
}

impl TryFrom<Vec<Vec<i64>>> for GameBoard {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl Serialize for GameBoard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(
            self.rows()
                .map(|row| row.iter().map(|tile| tile.value()).collect_vec()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(TileState::Dead),
            1 => Some(TileState::Alive),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            TileState::Alive => 1,
            TileState::Dead => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(rows: &[&[i64]]) -> Result<GameBoard, BoardError> {
        GameBoard::from_rows(rows)
    }

    #[test]
    fn accepts_rectangular_binary_board() {
        let board = validate(&[&[0, 1, 0], &[1, 1, 0]]).unwrap();

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.tile([0, 1]), Some(&TileState::Alive));
        assert_eq!(board.tile([1, 2]), Some(&TileState::Dead));
        assert_eq!(board.tile([2, 0]), None);
        assert_eq!(board.tile([0, 3]), None);
        assert_eq!(board.count_cells(TileState::Alive), 3);
        assert_eq!(board.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 0]]);
    }

    #[test]
    fn rejects_empty_board() {
        assert_eq!(validate(&[]), Err(BoardError::EmptyGrid));
    }

    #[test]
    fn rejects_empty_first_row() {
        assert_eq!(validate(&[&[]]), Err(BoardError::EmptyRow { col: 0 }));
    }

    #[test]
    fn empty_first_row_wins_over_later_problems() {
        assert_eq!(
            validate(&[&[], &[2, 5]]),
            Err(BoardError::EmptyRow { col: 0 })
        );
    }

    #[test]
    fn rejects_first_mismatched_row() {
        assert_eq!(
            validate(&[&[0, 1], &[0, 1], &[0], &[1, 1, 1]]),
            Err(BoardError::RowLengthMismatch { row: 2 })
        );
        assert_eq!(
            validate(&[&[0, 1], &[]]),
            Err(BoardError::RowLengthMismatch { row: 1 })
        );
    }

    #[test]
    fn rejects_first_invalid_value_in_row_major_order() {
        assert_eq!(
            validate(&[&[0, 2], &[1, 0]]),
            Err(BoardError::InvalidCellValue { row: 0, col: 1 })
        );
        assert_eq!(
            validate(&[&[0, 0, 0], &[1, -1, 7], &[3, 0, 0]]),
            Err(BoardError::InvalidCellValue { row: 1, col: 1 })
        );
    }

    #[test]
    fn wide_first_row_with_short_rows_is_rejected_cheaply() {
        let mut rows = vec![vec![0i64; 300_000]];
        rows.extend(std::iter::repeat_with(Vec::new).take(300_000));

        assert_eq!(
            GameBoard::from_rows(&rows),
            Err(BoardError::RowLengthMismatch { row: 1 })
        );
    }

    #[test]
    fn earlier_row_values_are_checked_before_later_row_lengths() {
        assert_eq!(
            validate(&[&[0, 2], &[1]]),
            Err(BoardError::InvalidCellValue { row: 0, col: 1 })
        );
        assert_eq!(
            validate(&[&[0, 1], &[1], &[9, 9]]),
            Err(BoardError::RowLengthMismatch { row: 1 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(BoardError::EmptyGrid.to_string(), "empty game");
        assert_eq!(BoardError::EmptyRow { col: 0 }.to_string(), "empty column: 0");
        assert_eq!(
            BoardError::RowLengthMismatch { row: 4 }.to_string(),
            "different row length: 4"
        );
        assert_eq!(
            BoardError::InvalidCellValue { row: 1, col: 3 }.to_string(),
            "invalid value at position [1][3]"
        );
    }

    #[test]
    fn enumerates_in_row_major_order() {
        let board = validate(&[&[1, 0], &[0, 1], &[1, 1]]).unwrap();

        let positions = board
            .enumerate_tiles()
            .map(|(pos, _)| <[usize; 2]>::from(pos))
            .collect_vec();

        assert_eq!(
            positions,
            vec![[0, 0], [0, 1], [1, 0], [1, 1], [2, 0], [2, 1]]
        );
    }
}
