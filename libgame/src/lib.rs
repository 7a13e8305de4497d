use board::{GameBoard, TileState};
use pos::Position;
use rule::Rule;

pub mod board;
pub mod pos;
pub mod rule;
pub mod wire;

/// Computes the next generation of `board` under Conway's rules.
pub fn step(board: &GameBoard) -> GameBoard {
    step_with(board, &Rule::conway())
}

/// Computes the next generation of `board` under `rule`.
///
/// Every tile is derived from the current generation only, the result is a new board with
/// the same dimensions and `board` itself is left as it was.
pub fn step_with(board: &GameBoard, rule: &Rule) -> GameBoard {
    let next_tiles = board
        .enumerate_tiles()
        .map(|(tile_pos, tile)| rule.next_state(*tile, alive_neighbor_count(board, tile_pos)))
        .collect();

    let next = GameBoard::with_tiles(board.width(), board.height(), next_tiles);

    log::trace!(
        "stepped {}x{} board, {} -> {} alive",
        board.height(),
        board.width(),
        board.count_cells(TileState::Alive),
        next.count_cells(TileState::Alive),
    );

    next
}

fn alive_neighbor_count(board: &GameBoard, tile_pos: Position) -> usize {
    tile_pos
        .neighbors(board.height(), board.width())
        .filter_map(|neighbor_pos| board.tile(neighbor_pos))
        .filter(|neighbor| **neighbor == TileState::Alive)
        .count()
}
