//! Internal transfer extraction from call traces
//!
//! This module is the reduction at the heart of the crate: it walks a decoded
//! [`CallFrame`] tree and produces the flat, ordered list of native-value
//! movements that actually took effect.
//!
//! Three rules govern the reduction:
//!
//! - **Revert discard**: a frame with a non-empty error reverted, and EVM
//!   reversion undoes everything the call and its descendants did. The check
//!   runs before recursing, so a reverted subtree costs O(1) no matter how
//!   large it is and no collected transfers ever need unwinding.
//! - **Call-type filter**: only `CALL` frames move value between their `from`
//!   and `to` parties. The value decode runs strictly after this check, so
//!   malformed or absent values on other frame types never raise an error.
//! - **Zero filter**: zero-value calls are not transfers.
//!
//! Transfers are emitted in post-order over the surviving subtree: for each
//! frame, all transfers from its children (recursively, in child order) come
//! strictly before the frame's own transfer, if any. This matches the order
//! in which the value movements became final during execution.
//!
//! The walk is pure and synchronous: it does no I/O, never mutates its input,
//! and is safe to run concurrently on independent trees.

use alloy_primitives::{Address, U256};
use tracing::trace;

use crate::errors::TransferExtractionError;
use crate::types::call::{CallFrame, CallType};
use crate::types::transfer::Transfer;

/// Extract all effective internal transfers from a call trace.
///
/// Returns the transfers in execution post-order (see the module docs for the
/// exact guarantee). Any value or address decode failure aborts the whole
/// extraction: either a complete, correctly-ordered list is returned, or a
/// single error naming the field that failed to parse. No partial results.
///
/// A reverted frame is not an error; it is a successful "zero transfers"
/// result for that subtree.
///
/// # Examples
///
/// ```
/// use tracescan::{extract_transfers, CallFrame};
///
/// let frame: CallFrame = serde_json::from_str(
///     r#"{
///         "from": "0xe78d5a85c8dbb345683b213be22484d0cdf51065",
///         "to": "0x6b156d8388dede287ee17689da0cc8eeeda1fcbc",
///         "value": "0xa",
///         "type": "CALL"
///     }"#,
/// )?;
///
/// let transfers = extract_transfers(&frame)?;
/// assert_eq!(transfers.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extract_transfers(frame: &CallFrame) -> Result<Vec<Transfer>, TransferExtractionError> {
    let mut transfers = Vec::new();
    collect_transfers(frame, &mut transfers)?;

    trace!(
        transfer_count = transfers.len(),
        "Extracted internal transfers from call trace"
    );

    Ok(transfers)
}

/// Depth-first walk appending transfers to `out` in post-order.
fn collect_transfers(
    frame: &CallFrame,
    out: &mut Vec<Transfer>,
) -> Result<(), TransferExtractionError> {
    // Reverted execution undoes the whole subtree; skip before recursing.
    if frame.is_reverted() {
        trace!(
            error = frame.error.as_deref().unwrap_or(""),
            call_type = ?frame.call_type,
            "Skipping reverted call subtree"
        );
        return Ok(());
    }

    for child in &frame.calls {
        collect_transfers(child, out)?;
    }

    // The frame's own transfer comes after everything its children emitted.
    if let Some(transfer) = transfer_from_frame(frame)? {
        trace!(%transfer, "Found internal transfer");
        out.push(transfer);
    }

    Ok(())
}

/// Evaluate a single frame (not its children) for a direct value transfer.
fn transfer_from_frame(
    frame: &CallFrame,
) -> Result<Option<Transfer>, TransferExtractionError> {
    // Only CALL frames move value. The value decode must stay behind this
    // check: other frame types may carry a malformed or absent value field.
    if frame.call_type != CallType::Call {
        return Ok(None);
    }

    let value = decode_quantity(&frame.value)?;

    // Zero-value calls are not transfers.
    if value.is_zero() {
        return Ok(None);
    }

    Ok(Some(Transfer {
        from: decode_address("from", &frame.from)?,
        to: decode_address("to", &frame.to)?,
        value,
    }))
}

/// Decode a 0x-prefixed hex quantity into a [`U256`].
fn decode_quantity(value: &str) -> Result<U256, TransferExtractionError> {
    let digits = value
        .strip_prefix("0x")
        .filter(|digits| !digits.is_empty())
        .ok_or_else(|| {
            TransferExtractionError::value_decode_failed(
                value,
                "expected a 0x-prefixed hex quantity",
            )
        })?;

    U256::from_str_radix(digits, 16)
        .map_err(|e| TransferExtractionError::value_decode_failed(value, e))
}

/// Decode a hex-encoded account identifier into an [`Address`].
fn decode_address(
    field: &'static str,
    value: &str,
) -> Result<Address, TransferExtractionError> {
    value
        .parse::<Address>()
        .map_err(|e| TransferExtractionError::address_decode_failed(field, value, e))
}
