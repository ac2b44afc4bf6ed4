use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error("Letter weight table is empty")]
    EmptyWeightTable,

    #[error("Invalid weight {weight} for symbol '{symbol}': weights must be finite and non-negative")]
    InvalidWeight { symbol: char, weight: f64 },

    #[error("Symbol '{symbol}' appears more than once in the weight table")]
    DuplicateSymbol { symbol: char },

    #[error("Letter weight table has zero total weight; no symbol can be drawn")]
    ZeroTotalWeight,

    #[error("Failed to launch solver {program}: {source}")]
    SolverLaunch {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error while talking to solver {program}: {source}")]
    SolverIo {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Solver broke its output contract on trial {trial}: {reason}\n--- solver output ---\n{output}")]
    MalformedOutput {
        trial: usize,
        reason: TimingError,
        output: String,
    },

    #[error("Number of trials must be at least 1")]
    NoTrials,

    #[error("Board size must be at least 1")]
    EmptyBoard,

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },
}

/// Why a solver transcript did not yield a timing value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimingError {
    #[error("missing marker {marker:?}")]
    MissingMarker { marker: &'static str },

    #[error("timing text {text:?} is not a non-negative integer")]
    InvalidNumber { text: String },
}
