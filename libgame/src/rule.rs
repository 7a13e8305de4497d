use crate::board::TileState;

/// Birth/survival rule in B/S notation, counted over the bounded neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    /// Conway's Game of Life, B3/S23.
    pub fn conway() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }

    pub fn next_state(&self, tile: TileState, alive_neighbor_count: usize) -> TileState {
        let alive = match tile {
            TileState::Dead => self.birth.contains(&alive_neighbor_count),
            TileState::Alive => self.survive.contains(&alive_neighbor_count),
        };

        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}
