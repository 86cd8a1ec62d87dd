// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer extraction.

use super::RpcError;

/// Errors that can occur while extracting transfers from a call trace.
///
/// Decode failures are fatal to the enclosing extraction: no partial transfer
/// list is ever returned alongside an error. A reverted call frame is not an
/// error; reversion is a normal, expected input handled by discarding the
/// reverted subtree.
///
/// # Examples
///
/// ```rust,ignore
/// use tracescan::{extract_transfers, TransferExtractionError};
///
/// match extract_transfers(&frame) {
///     Ok(transfers) => println!("Found {} transfers", transfers.len()),
///     Err(TransferExtractionError::ValueDecodeFailed { value, .. }) => {
///         eprintln!("Malformed value quantity: {value}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TransferExtractionError {
    /// A frame's `value` field could not be decoded as a hex quantity.
    ///
    /// Only reachable for CALL frames: the value decode runs after the
    /// call-type check, so malformed or absent values on frame types that
    /// never transfer are not an error.
    #[error("Failed to decode value quantity {value:?}: {details}")]
    ValueDecodeFailed {
        /// The raw value string from the trace
        value: String,
        /// Details about why the decode failed
        details: String,
    },

    /// A frame's `from` or `to` field could not be decoded as an address.
    ///
    /// Only reachable for frames that actually contribute a transfer;
    /// addresses on filtered-out frames are never decoded.
    #[error("Failed to decode {field} address {value:?}: {details}")]
    AddressDecodeFailed {
        /// Which address field failed ("from" or "to")
        field: &'static str,
        /// The raw address string from the trace
        value: String,
        /// Details about why the decode failed
        details: String,
    },

    /// RPC error when fetching the trace from the provider.
    ///
    /// This wraps [`RpcError`] for failures of the trace-fetch collaborator;
    /// the pure extraction path never produces it.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

impl TransferExtractionError {
    /// Helper to create a `ValueDecodeFailed` error.
    pub fn value_decode_failed(value: impl Into<String>, details: impl ToString) -> Self {
        TransferExtractionError::ValueDecodeFailed {
            value: value.into(),
            details: details.to_string(),
        }
    }

    /// Helper to create an `AddressDecodeFailed` error.
    pub fn address_decode_failed(
        field: &'static str,
        value: impl Into<String>,
        details: impl ToString,
    ) -> Self {
        TransferExtractionError::AddressDecodeFailed {
            field,
            value: value.into(),
            details: details.to_string(),
        }
    }
}
