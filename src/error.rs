//! Error types for chain parameter construction

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainParamsError {
    #[error("genesis block hash mismatch: expected {expected}, got {actual}")]
    GenesisHashMismatch { expected: String, actual: String },

    #[error("genesis merkle root mismatch: expected {expected}, got {actual}")]
    GenesisMerkleRootMismatch { expected: String, actual: String },

    #[error("compact target overflows 256 bits: {0:#010x}")]
    TargetOverflow(u32),

    #[error("negative compact target: {0:#010x}")]
    NegativeTarget(u32),

    #[error("invalid hash literal: {0}")]
    InvalidHashLiteral(String),

    #[error("invalid hex literal: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, ChainParamsError>;
