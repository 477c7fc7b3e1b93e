//! Compact difficulty bits and 256-bit targets
//!
//! The compact form packs a 256-bit target into 32 bits: one exponent
//! byte and a 23-bit mantissa (bit 23 is the sign, never valid for a
//! target). Target = mantissa * 2^(8 * (exponent - 3)).

use crate::error::{ChainParamsError, Result};
use crate::types::Hash;
use primitive_types::U256;

/// Expand a compact bits value into a 256-bit target.
pub fn compact_to_target(bits: u32) -> Result<U256> {
    if bits & 0x0080_0000 != 0 {
        return Err(ChainParamsError::NegativeTarget(bits));
    }
    let exponent = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;
    if mantissa == 0 {
        return Ok(U256::zero());
    }
    // mantissa bytes shifted past 32 would be lost
    let overflow = exponent > 34
        || (mantissa > 0xff && exponent > 33)
        || (mantissa > 0xffff && exponent > 32);
    if overflow {
        return Err(ChainParamsError::TargetOverflow(bits));
    }
    if exponent <= 3 {
        Ok(U256::from(mantissa) >> (8 * (3 - exponent)))
    } else {
        Ok(U256::from(mantissa) << (8 * (exponent - 3)))
    }
}

/// Pack a 256-bit target into compact bits.
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3))).low_u64() as u32
    };
    // a mantissa with the sign bit set borrows a byte from the exponent
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | ((size as u32) << 24)
}

/// Proof-of-work ceiling for a network, expressed as a right-shift of the
/// all-ones 256-bit value.
pub fn pow_limit(shift: usize) -> U256 {
    U256::MAX >> shift
}

/// Check a block hash against an expanded target. The hash bytes are read
/// as a little-endian 256-bit integer; a block wins when it does not
/// exceed the target.
pub fn hash_meets_target(hash: &Hash, target: U256) -> bool {
    U256::from_little_endian(hash) <= target
}
