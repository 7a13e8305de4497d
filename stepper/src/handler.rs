use std::fmt::Display;

use anyhow::Context;
use libgame::{
    board::TileState,
    wire::{ErrorResponse, GameRequest, GameResponse},
};
use serde::Serialize;

use crate::config::StepperConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Stepped(GameResponse),
    Rejected(ErrorResponse),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn to_json(&self, pretty: bool) -> anyhow::Result<String> {
        let json = match self {
            Outcome::Stepped(response) => serialize(response, pretty),
            Outcome::Rejected(response) => serialize(response, pretty),
        };

        json.context("Couldn't serialize response")
    }
}

/// Parses one request, validates its board and steps it once.
pub fn handle_request(input: &str, config: &StepperConfig) -> Outcome {
    let request: GameRequest = match serde_json::from_str(input) {
        Ok(request) => request,
        Err(e) => return reject(e),
    };

    let board = match request.into_board() {
        Ok(board) => board,
        Err(e) => return reject(e),
    };

    let cells = board.width() * board.height();
    if let Some(max_cells) = config.max_cells.filter(|max_cells| cells > *max_cells) {
        return reject(format!("board too large: {cells} cells (max {max_cells})"));
    }

    let next = libgame::step(&board);

    log::debug!(
        "stepped {}x{} board: {} -> {} alive",
        board.height(),
        board.width(),
        board.count_cells(TileState::Alive),
        next.count_cells(TileState::Alive),
    );

    Outcome::Stepped(GameResponse::from(next))
}

fn reject<E>(error: E) -> Outcome
where
    E: Display,
{
    log::warn!("rejected request: {error}");
    Outcome::Rejected(ErrorResponse::new(error))
}

fn serialize<T>(value: &T, pretty: bool) -> serde_json::Result<String>
where
    T: Serialize,
{
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
