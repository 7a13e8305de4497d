//! JSON shapes exchanged with whatever sits in front of the engine.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::board::{BoardError, GameBoard};

/// An incoming board exactly as it was sent, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameRequest {
    pub board: Vec<Vec<i64>>,
}

impl GameRequest {
    pub fn into_board(self) -> Result<GameBoard, BoardError> {
        GameBoard::try_from(self.board)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResponse {
    pub board: GameBoard,
}

impl From<GameBoard> for GameResponse {
    fn from(board: GameBoard) -> Self {
        Self { board }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new<E>(error: E) -> Self
    where
        E: Display,
    {
        Self {
            message: error.to_string(),
        }
    }
}
