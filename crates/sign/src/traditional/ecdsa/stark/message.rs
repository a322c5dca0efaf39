//! StarkEx message hashes for transfers and limit orders
//!
//! A message hash is built from two parts: a Pedersen hash chain over the
//! token and key fields, and a packed word of the numeric fields. The
//! packed word is
//!
//! ```text
//! instruction_type ‖ vault0 (31) ‖ vault1 (31) ‖ amount0 (63) ‖ amount1 (63)
//!                  ‖ nonce (31) ‖ expiration_timestamp (22)
//! ```
//!
//! read as one big-endian integer. A field that does not fit its width is
//! rejected, never truncated. The result is a field element; pass it through
//! [`MessageHash::from_bytes`](super::MessageHash::from_bytes) before signing.

use crate::traditional::ecdsa::common::{int_to_fixed, INT_SIZE};
#[cfg(not(feature = "std"))]
use alloc::format;
use starksig_algorithms::hash::pedersen_hash_bytes;
use starksig_api::{error::Error as ApiError, Result as ApiResult};

const VAULT_ID_BITS: u32 = 31;
const AMOUNT_BITS: u32 = 63;
const NONCE_BITS: u32 = 31;
const EXPIRATION_TIMESTAMP_BITS: u32 = 22;

const LIMIT_ORDER: u64 = 0;
const TRANSFER: u64 = 1;
const CONDITIONAL_TRANSFER: u64 = 2;

/// A transfer between two vaults
///
/// `token`, `receiver_public_key` and `condition` are big-endian field
/// elements of any byte length.
#[derive(Clone, Debug)]
pub struct TransferMsg<'a> {
    /// Quantized amount, below 2⁶³
    pub amount: u64,
    /// Below 2³¹
    pub nonce: u64,
    /// Below 2³¹
    pub sender_vault_id: u64,
    /// Asset id of the transferred token
    pub token: &'a [u8],
    /// Below 2³¹
    pub receiver_vault_id: u64,
    /// x-coordinate of the receiver's public key
    pub receiver_public_key: &'a [u8],
    /// Expiration in hours since the epoch, below 2²²
    pub expiration_timestamp: u64,
    /// Fact the transfer is conditioned on; makes it a conditional transfer
    pub condition: Option<&'a [u8]>,
}

/// A limit order selling one token for another
///
/// `token_sell` and `token_buy` are big-endian field elements of any byte
/// length.
#[derive(Clone, Debug)]
pub struct LimitOrderMsg<'a> {
    /// Below 2³¹
    pub vault_sell: u64,
    /// Below 2³¹
    pub vault_buy: u64,
    /// Quantized amount, below 2⁶³
    pub amount_sell: u64,
    /// Quantized amount, below 2⁶³
    pub amount_buy: u64,
    /// Asset id of the sold token
    pub token_sell: &'a [u8],
    /// Asset id of the bought token
    pub token_buy: &'a [u8],
    /// Below 2³¹
    pub nonce: u64,
    /// Expiration in hours since the epoch, below 2²²
    pub expiration_timestamp: u64,
}

/// Hash of a (possibly conditional) transfer
pub fn get_transfer_msg_hash(msg: &TransferMsg<'_>) -> ApiResult<[u8; INT_SIZE]> {
    let instruction_type = match msg.condition {
        Some(_) => CONDITIONAL_TRANSFER,
        None => TRANSFER,
    };
    hash_msg(
        instruction_type,
        ("sender_vault_id", msg.sender_vault_id),
        ("receiver_vault_id", msg.receiver_vault_id),
        ("amount", msg.amount),
        ("amount", 0),
        ("nonce", msg.nonce),
        ("expiration_timestamp", msg.expiration_timestamp),
        ("token", msg.token),
        ("receiver_public_key", msg.receiver_public_key),
        msg.condition,
    )
}

/// Hash of a limit order
pub fn get_limit_order_msg_hash(msg: &LimitOrderMsg<'_>) -> ApiResult<[u8; INT_SIZE]> {
    hash_msg(
        LIMIT_ORDER,
        ("vault_sell", msg.vault_sell),
        ("vault_buy", msg.vault_buy),
        ("amount_sell", msg.amount_sell),
        ("amount_buy", msg.amount_buy),
        ("nonce", msg.nonce),
        ("expiration_timestamp", msg.expiration_timestamp),
        ("token_sell", msg.token_sell),
        ("token_buy", msg.token_buy),
        None,
    )
}

type Named<T> = (&'static str, T);

#[allow(clippy::too_many_arguments)]
fn hash_msg(
    instruction_type: u64,
    vault0: Named<u64>,
    vault1: Named<u64>,
    amount0: Named<u64>,
    amount1: Named<u64>,
    nonce: Named<u64>,
    expiration_timestamp: Named<u64>,
    token0: Named<&[u8]>,
    token1: Named<&[u8]>,
    condition: Option<&[u8]>,
) -> ApiResult<[u8; INT_SIZE]> {
    let mut packed = [0u8; INT_SIZE];
    packed[INT_SIZE - 1] = instruction_type as u8;
    for ((name, value), width) in [
        (vault0, VAULT_ID_BITS),
        (vault1, VAULT_ID_BITS),
        (amount0, AMOUNT_BITS),
        (amount1, AMOUNT_BITS),
        (nonce, NONCE_BITS),
        (expiration_timestamp, EXPIRATION_TIMESTAMP_BITS),
    ] {
        if value >> width != 0 {
            return Err(ApiError::InvalidParameter {
                context: "StarkEx message",
                message: format!("{name} must fit in {width} bits"),
            });
        }
        push_bits(&mut packed, value, width);
    }

    let mut hash = pedersen(&field(token0)?, &field(token1)?)?;
    if let Some(condition) = condition {
        hash = pedersen(&hash, &field(("condition", condition))?)?;
    }
    pedersen(&hash, &packed)
}

/// acc = (acc << width) | value over a 256-bit big-endian accumulator
fn push_bits(acc: &mut [u8; INT_SIZE], value: u64, width: u32) {
    for bit in (0..width).rev() {
        let mut carry = ((value >> bit) & 1) as u8;
        for byte in acc.iter_mut().rev() {
            let next = *byte >> 7;
            *byte = (*byte << 1) | carry;
            carry = next;
        }
    }
}

fn field((name, bytes): Named<&[u8]>) -> ApiResult<[u8; INT_SIZE]> {
    int_to_fixed(bytes).ok_or_else(|| ApiError::InvalidParameter {
        context: "StarkEx message",
        message: format!("{name} wider than 256 bits"),
    })
}

fn pedersen(a: &[u8; INT_SIZE], b: &[u8; INT_SIZE]) -> ApiResult<[u8; INT_SIZE]> {
    pedersen_hash_bytes(a, b).map_err(|_| ApiError::InvalidParameter {
        context: "StarkEx message",
        message: "field element not below the STARK prime".into(),
    })
}
