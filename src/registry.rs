//! Process-wide parameter selection
//!
//! The two parameter sets are built lazily, exactly once, and live for
//! the process lifetime. Selection happens once at startup, strictly
//! before networking or validation threads exist; the active choice is
//! published through a SeqCst atomic so the single write happens-before
//! every later read regardless of scheduling.

use crate::params::{ChainParams, Network};
use lazy_static::lazy_static;
use std::sync::atomic::{AtomicU8, Ordering};

lazy_static! {
    static ref MAIN_PARAMS: ChainParams = ChainParams::main()
        .unwrap_or_else(|err| panic!("main network parameters are corrupt: {err}"));
    static ref TEST_PARAMS: ChainParams = ChainParams::test()
        .unwrap_or_else(|err| panic!("test network parameters are corrupt: {err}"));
}

const UNSELECTED: u8 = 0;
const MAIN_SELECTED: u8 = 1;
const TEST_SELECTED: u8 = 2;

static ACTIVE: AtomicU8 = AtomicU8::new(UNSELECTED);

/// Read access to either pre-built set without touching the selection.
pub fn params(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => &MAIN_PARAMS,
        Network::Test => &TEST_PARAMS,
    }
}

/// Make `network` the active parameter set and return it.
///
/// The network enum is exhaustive, so an unrecognized identifier cannot
/// reach this function; adding a variant without a pre-built set is a
/// compile error, not a runtime branch.
pub fn select(network: Network) -> &'static ChainParams {
    let selected = params(network);
    let tag = match network {
        Network::Main => MAIN_SELECTED,
        Network::Test => TEST_SELECTED,
    };
    ACTIVE.store(tag, Ordering::SeqCst);
    selected
}

/// Select from the resolved startup flag: false selects Main, true Test.
pub fn select_from_flag(use_testnet: bool) -> &'static ChainParams {
    select(Network::from_flag(use_testnet))
}

/// The active parameter set.
///
/// # Panics
///
/// Panics when called before `select`; that is a startup-ordering bug in
/// the caller, not a runtime condition.
pub fn active() -> &'static ChainParams {
    match ACTIVE.load(Ordering::SeqCst) {
        MAIN_SELECTED => &MAIN_PARAMS,
        TEST_SELECTED => &TEST_PARAMS,
        _ => panic!("chain parameters requested before select()"),
    }
}
