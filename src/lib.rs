//! # Chain-Params
//!
//! Chain parameter registry and genesis machinery for the node: the
//! per-network consensus constants, deterministic construction and
//! verification of the genesis block, and conversion of the compiled
//! fixed-seed tables into bootstrap address records.
//!
//! ## Architecture
//!
//! Leaves first:
//! - `seeds` converts raw compiled address words into jittered records
//! - `genesis` builds and verifies the genesis block (and carries the
//!   offline nonce search used by `src/bin/mine_genesis.rs`)
//! - `params` bundles every per-network constant into `ChainParams`,
//!   deriving the test network from a snapshot of main
//! - `registry` publishes the one active set for the process
//!
//! Everything runs single-threaded during startup, before any
//! networking, validation, or RPC threads are spawned. The only shared
//! state is the active-set selection, written once in `registry::select`
//! and read-only afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use chain_params::registry;
//!
//! // at startup, from the resolved -testnet flag
//! let params = registry::select_from_flag(false);
//! assert_eq!(params.default_port, 22255);
//!
//! // from anywhere after selection
//! let active = registry::active();
//! assert_eq!(active.message_start, [0xe1, 0xee, 0xb2, 0xd4]);
//! ```

pub mod block;
pub mod constants;
pub mod error;
pub mod genesis;
pub mod params;
pub mod pow;
pub mod registry;
pub mod seeds;
pub mod types;

// Re-export commonly used types
pub use error::{ChainParamsError, Result};
pub use params::{Base58Prefix, Base58Prefixes, ChainParams, DnsSeed, Network};
pub use seeds::SeedAddress;
pub use types::*;
