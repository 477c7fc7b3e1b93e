//! Per-network chain constants
//!
//! Everything in this module is compiled in and immutable at runtime.
//! The genesis constants are consensus-critical: changing any of them
//! changes the genesis hash and forks the node off the network.

/// Main network message start (magic) bytes.
///
/// Rarely used upper ASCII, not valid as UTF-8, and produces a large
/// 4-byte int at any alignment.
pub const MAIN_MESSAGE_START: [u8; 4] = [0xe1, 0xee, 0xb2, 0xd4];

/// Test network message start (magic) bytes.
pub const TESTNET_MESSAGE_START: [u8; 4] = [0x2f, 0xca, 0x4d, 0x3e];

/// Default peer-to-peer ports.
pub const MAIN_PORT: u16 = 22255;
pub const TESTNET_PORT: u16 = 27170;

/// Default RPC ports.
pub const MAIN_RPC_PORT: u16 = 22254;
pub const TESTNET_RPC_PORT: u16 = 27171;

/// Proof-of-work ceilings, expressed as right-shifts of the all-ones
/// 256-bit value.
pub const MAIN_POW_LIMIT_SHIFT: usize = 20;
pub const TESTNET_POW_LIMIT_SHIFT: usize = 16;

/// Alert-signing public keys (uncompressed secp256k1 points, hex).
pub const MAIN_ALERT_PUBKEY: &str = "049fcfa264333bd32dde1d8cb6d964fa50fd807912011a2b0b4769aa7f12a8d795fa05e01722433d8215309f51df3bbdbd8b18564a847e5e54b034c8bf39a11ca2";
pub const TESTNET_ALERT_PUBKEY: &str = "04cc24ab003c828cdd9cf4db2ebbde8e1cecb3bbfa8b3127fcb9dd9b84d44112080827ed7c49a648af9fe788ff42e316aee665879c553f099e55299d6b54edd7e0";

/// Genesis coinbase message.
pub const GENESIS_MESSAGE: &str =
    "Why ABN Amro Wants to Separate Bitcoin from the Blockchain May 29, 2016";

/// Genesis block and transaction time.
pub const GENESIS_TIME: u64 = 1466189867;

/// Extra nonce pushed into the genesis coinbase payload after the zero
/// height marker.
pub const GENESIS_EXTRA_NONCE: i64 = 42;

/// Genesis payout key. The chain shipped with a payout-key literal that
/// never decoded as hex, so the coinbase output commits to the HASH160 of
/// an empty key; the genesis hash makes that permanent.
pub const GENESIS_RECIPIENT_PUBKEY: &[u8] = &[];

/// Main network genesis header fields.
pub const MAIN_GENESIS_BITS: u64 = 0x1e0ffff0;
pub const MAIN_GENESIS_NONCE: u64 = 2537374;

/// Main network genesis constants, in display (big-endian) hex. Startup
/// aborts if the constructed block does not reproduce both.
pub const MAIN_GENESIS_HASH: &str =
    "00000e2a6ca677f8c25d4905494710eeace49efb85d0fbf45c4233c5116a13cb";
pub const MAIN_GENESIS_MERKLE_ROOT: &str =
    "3a68a5f01ef81a8af3008ebedac871a38dbb5ab164f7e17f85e750d2ec192343";

/// Test network genesis header fields. The bits value shipped as this
/// decimal literal; it does not decode as a compact target, which is why
/// the testnet genesis hash below was never confirmed on the network.
pub const TESTNET_GENESIS_BITS: u64 = 1455033877;
pub const TESTNET_GENESIS_NONCE: u64 = 1004377;

/// Recorded but unverified testnet genesis hash (display hex).
pub const TESTNET_GENESIS_HASH: &str =
    "00000d4d0549912423730a89e05b8f096591d32795b1612a0abd5c3541904ddf";

/// DNS seed hosts, as (name, host) pairs. Consumed as opaque strings;
/// resolution happens in the network stack.
pub const MAIN_DNS_SEEDS: &[(&str, &str)] = &[
    ("First", "45.63.43.90"),
    ("Second", "45.63.43.122"),
];

/// Compiled fixed-seed tables. Each entry is an IPv4 address in
/// compile-time byte order; `seeds::convert_seeds` swaps all four bytes
/// before reinterpreting the value as a big-endian address.
pub const MAIN_SEED_TABLE: &[u32] = &[0x5a2b3f2d, 0x7a2b3f2d];
pub const TESTNET_SEED_TABLE: &[u32] = &[0x5a2b3f2d, 0x7a2b3f2d];

/// Height of the last proof-of-work block on the main network; the chain
/// is pure proof-of-stake afterwards.
pub const MAIN_LAST_POW_BLOCK: u64 = 1440 * 20;

/// The test network never leaves proof-of-work.
pub const TESTNET_LAST_POW_BLOCK: u64 = 0x7fffffff;

/// Height of the first block eligible for proof-of-stake.
pub const POS_START_BLOCK: u64 = 0;

/// Maximum transactions accepted into a mixing pool session.
pub const POOL_MAX_TRANSACTIONS: usize = 3;

/// Placeholder address used by the mixing pool collateral logic.
pub const POOL_DUMMY_ADDRESS: &str = "M8rBDGDe2PEhw8FCMsFAkbiUKFGDKgkELt";

/// One week of seconds, the unit of fixed-seed timestamp jitter.
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;
