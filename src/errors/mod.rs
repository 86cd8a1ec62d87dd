// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tracescan library.
//!
//! This module provides strongly-typed errors for the public APIs:
//!
//! - **Module-specific errors** for fine-grained handling
//!   ([`TransferExtractionError`], [`RpcError`])
//! - **Unified error type** ([`TracescanError`]) for convenience when you
//!   don't need to distinguish between error sources
//!
//! Note the taxonomy: a reverted call is *not* an error anywhere in this
//! crate. Reversion is regular trace input and results in a successful
//! "zero transfers" outcome for the affected subtree.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tracescan::{TransferScanner, TransferExtractionError};
//!
//! match scanner.internal_transfers(tx_hash).await {
//!     Ok(transfers) => println!("{} transfers", transfers.len()),
//!     Err(TransferExtractionError::Rpc(rpc_err)) => {
//!         eprintln!("RPC failure, retrying...: {rpc_err}");
//!     }
//!     Err(e) => eprintln!("Bad trace data: {e}"),
//! }
//! ```

mod extraction;
mod rpc;

pub use extraction::TransferExtractionError;
pub use rpc::RpcError;

/// Unified error type for all tracescan operations.
///
/// Wraps the module-specific error types so callers can use `?` across
/// tracescan calls without matching on error sources. All module-specific
/// errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum TracescanError {
    /// Error from transfer extraction.
    #[error("Transfer extraction error: {0}")]
    Extraction(#[from] TransferExtractionError),

    /// Error from trace-fetch RPC operations.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}
