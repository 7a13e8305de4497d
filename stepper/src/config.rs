use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StepperConfig {
    /// Pretty print responses when answering a single request from a file.
    /// Line mode always writes one compact response per line.
    pub pretty: bool,

    /// Reject boards with more tiles than this before stepping them.
    pub max_cells: Option<usize>,
}

impl StepperConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config = serde_json::from_slice(&config_serialized)
            .context("Couldn't deserialize config")?;
        Ok(config)
    }
}
