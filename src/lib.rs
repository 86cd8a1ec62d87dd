// SPDX-FileCopyrightText: 2025 Tracescan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Extraction of internal value transfers from EVM transaction call traces.
//!
//! Given a transaction hash, tracescan fetches the `callTracer` trace of
//! every internal call made during execution and reduces that tree into a
//! flat, ordered list of value movements (sender, receiver, amount):
//!
//! - Reverted subtrees are discarded wholesale, before recursing into them.
//! - Only `CALL` frames with a strictly positive value count as transfers.
//! - Transfers are emitted in execution post-order: nested calls settle
//!   before the call that made them.
//!
//! The reduction itself ([`extract_transfers`]) is a pure, synchronous
//! function over an already-decoded [`CallFrame`] tree; trace acquisition is
//! behind the [`TraceSource`] trait, with [`DebugTraceSource`] implementing
//! it over any alloy provider.
//!
//! # Examples
//!
//! ```rust,ignore
//! use alloy_provider::ProviderBuilder;
//! use tracescan::{DebugTraceSource, TransferScanner};
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let scanner = TransferScanner::new(DebugTraceSource::new(provider.root().clone()));
//!
//! for transfer in scanner.internal_transfers(tx_hash).await? {
//!     println!("{transfer}");
//! }
//! ```

pub mod errors;
mod extract;
mod scanner;
mod source;
mod tracing;
mod types;

pub use errors::{RpcError, TracescanError, TransferExtractionError};
pub use extract::extract_transfers;
pub use scanner::TransferScanner;
pub use source::{DebugTraceSource, TraceSource};
pub use types::call::{CallFrame, CallType};
pub use types::transfer::Transfer;
