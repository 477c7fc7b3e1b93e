//! Per-network parameter sets
//!
//! `ChainParams::main()` builds the main network set from the compiled
//! constants, constructing and verifying the genesis block on the way.
//! `ChainParams::test()` takes a full value snapshot of Main and applies
//! an enumerated patch list; a field absent from that list keeps Main's
//! value as of construction time, and nothing done to any Main instance
//! afterwards can reach a Test instance.

use crate::block::{block_hash, hash_from_hex};
use crate::constants::*;
use crate::error::Result;
use crate::genesis::{build_genesis_block, verify_genesis, GenesisCheck, GenesisParams};
use crate::pow::pow_limit;
use crate::seeds::{convert_seeds, SeedAddress};
use crate::types::*;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Network identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Main,
    Test,
}

impl Network {
    /// Map the resolved startup flag onto a network.
    pub fn from_flag(use_testnet: bool) -> Self {
        if use_testnet {
            Network::Test
        } else {
            Network::Main
        }
    }
}

/// The six base58 prefix kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Prefix {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    StealthAddress,
    ExtPublicKey,
    ExtSecretKey,
}

/// Per-network base58 prefix table. Entry length decides how many leading
/// bytes a decoded address or key uses as its network tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    pub pubkey_address: ByteString,
    pub script_address: ByteString,
    pub secret_key: ByteString,
    pub stealth_address: ByteString,
    pub ext_public_key: ByteString,
    pub ext_secret_key: ByteString,
}

impl Base58Prefixes {
    /// Total over all six kinds; there is no default entry to fall back to.
    pub fn get(&self, kind: Base58Prefix) -> &[u8] {
        match kind {
            Base58Prefix::PubkeyAddress => &self.pubkey_address,
            Base58Prefix::ScriptAddress => &self.script_address,
            Base58Prefix::SecretKey => &self.secret_key,
            Base58Prefix::StealthAddress => &self.stealth_address,
            Base58Prefix::ExtPublicKey => &self.ext_public_key,
            Base58Prefix::ExtSecretKey => &self.ext_secret_key,
        }
    }

    fn main() -> Self {
        Base58Prefixes {
            pubkey_address: vec![50],
            script_address: vec![28],
            secret_key: vec![153],
            stealth_address: vec![40],
            ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
        }
    }

    fn test() -> Self {
        Base58Prefixes {
            pubkey_address: vec![97],
            script_address: vec![196],
            secret_key: vec![239],
            stealth_address: vec![40],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        }
    }
}

/// A DNS seed host, consumed as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

/// All consensus constants for one network. Construct once at startup;
/// every field is immutable afterwards.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub network: Network,
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit: U256,
    pub alert_pubkey: ByteString,
    pub base58_prefixes: Base58Prefixes,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedAddress>,
    pub genesis: Block,
    pub genesis_hash: Hash,
    pub genesis_check: GenesisCheck,
    pub last_pow_block: Natural,
    pub pos_start_block: Natural,
    pub pool_max_transactions: usize,
    pub pool_dummy_address: String,
}

impl ChainParams {
    /// Build the main network parameter set.
    ///
    /// Fatal on a genesis hash or merkle root mismatch: a node carrying
    /// corrupt parameters must not start.
    pub fn main() -> Result<Self> {
        let genesis = build_genesis_block(&GenesisParams::for_network(Network::Main));
        let genesis_check = GenesisCheck::Enforce {
            hash: hash_from_hex(MAIN_GENESIS_HASH)?,
            merkle_root: hash_from_hex(MAIN_GENESIS_MERKLE_ROOT)?,
        };
        verify_genesis(&genesis, &genesis_check)?;
        let genesis_hash = block_hash(&genesis.header);

        Ok(ChainParams {
            network: Network::Main,
            message_start: MAIN_MESSAGE_START,
            default_port: MAIN_PORT,
            rpc_port: MAIN_RPC_PORT,
            pow_limit: pow_limit(MAIN_POW_LIMIT_SHIFT),
            alert_pubkey: hex::decode(MAIN_ALERT_PUBKEY)?,
            base58_prefixes: Base58Prefixes::main(),
            dns_seeds: MAIN_DNS_SEEDS
                .iter()
                .map(|&(name, host)| DnsSeed {
                    name: name.to_string(),
                    host: host.to_string(),
                })
                .collect(),
            fixed_seeds: convert_seeds(MAIN_SEED_TABLE, MAIN_PORT),
            genesis,
            genesis_hash,
            genesis_check,
            last_pow_block: MAIN_LAST_POW_BLOCK,
            pos_start_block: POS_START_BLOCK,
            pool_max_transactions: POOL_MAX_TRANSACTIONS,
            pool_dummy_address: POOL_DUMMY_ADDRESS.to_string(),
        })
    }

    /// Build the test network set: snapshot Main, then patch.
    ///
    /// The genesis check is `Skip` here: the shipped testnet bits do not
    /// decode as a compact target and the recorded hash was never
    /// confirmed, so enforcement would reject every start.
    pub fn test() -> Result<Self> {
        let mut params = Self::main()?;

        params.network = Network::Test;
        params.message_start = TESTNET_MESSAGE_START;
        params.pow_limit = pow_limit(TESTNET_POW_LIMIT_SHIFT);
        params.alert_pubkey = hex::decode(TESTNET_ALERT_PUBKEY)?;
        params.default_port = TESTNET_PORT;
        params.rpc_port = TESTNET_RPC_PORT;

        params.genesis.header.bits = TESTNET_GENESIS_BITS;
        params.genesis.header.nonce = TESTNET_GENESIS_NONCE;
        params.genesis_hash = block_hash(&params.genesis.header);
        params.genesis_check = GenesisCheck::Skip;
        verify_genesis(&params.genesis, &params.genesis_check)?;

        params.base58_prefixes = Base58Prefixes::test();
        params.dns_seeds.clear();
        params.fixed_seeds = convert_seeds(TESTNET_SEED_TABLE, TESTNET_PORT);
        params.last_pow_block = TESTNET_LAST_POW_BLOCK;

        Ok(params)
    }
}
