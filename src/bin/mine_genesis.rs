//! Offline genesis-nonce search
//!
//! Discovers the nonce (and, after wraparound, timestamp) that makes a
//! network's genesis header meet its own compact target, then prints the
//! constants consumed by genesis verification. Not part of node startup.
//!
//! Run with: cargo run --bin mine_genesis [main|testnet]

use anyhow::{bail, Result};
use chain_params::block::{block_hash, hash_to_hex};
use chain_params::genesis::{build_genesis_block, mine_genesis, GenesisParams};
use chain_params::pow::{compact_to_target, target_to_compact};
use chain_params::Network;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let network = match std::env::args().nth(1).as_deref() {
        None | Some("main") => Network::Main,
        Some("test") | Some("testnet") => Network::Test,
        Some(other) => bail!("unknown network {other:?}, expected \"main\" or \"testnet\""),
    };

    let mut block = build_genesis_block(&GenesisParams::for_network(network));
    block.header.nonce = 0;

    println!("searching genesis nonce for {network:?}...");
    let attempts = mine_genesis(&mut block)?;

    let target = compact_to_target(block.header.bits as u32)?;
    println!("nonce:       {}", block.header.nonce);
    println!("time:        {}", block.header.timestamp);
    println!("bits:        {:#010x}", target_to_compact(target));
    println!("hash:        {}", hash_to_hex(&block_hash(&block.header)));
    println!("merkle root: {}", hash_to_hex(&block.header.merkle_root));
    println!("attempts:    {attempts}");
    Ok(())
}
