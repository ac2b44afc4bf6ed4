use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bench::{DEFAULT_BOARD_SIZE, DEFAULT_NUM_TRIALS};
use crate::errors::BenchError;

pub const DEFAULT_SOLVER: &str = "./solver";
pub const DEFAULT_SEED: u64 = 42;

/// Run settings. Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub solver: PathBuf,
    pub num_trials: usize,
    pub board_size: usize,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solver: PathBuf::from(DEFAULT_SOLVER),
            num_trials: DEFAULT_NUM_TRIALS,
            board_size: DEFAULT_BOARD_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub solver: Option<PathBuf>,
    pub num_trials: Option<usize>,
    pub board_size: Option<usize>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, BenchError> {
        toml::from_str(s).map_err(|e| BenchError::ConfigParse {
            path: path.to_path_buf(),
            detail: e.message().to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let contents = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(solver) = overrides.solver {
            self.solver = solver;
        }
        if let Some(n) = overrides.num_trials {
            self.num_trials = n;
        }
        if let Some(size) = overrides.board_size {
            self.board_size = size;
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        self
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.num_trials == 0 {
            return Err(BenchError::NoTrials);
        }
        if self.board_size == 0 {
            return Err(BenchError::EmptyBoard);
        }
        Ok(())
    }
}
