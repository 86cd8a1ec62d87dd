//! Span creation helpers for tracescan operations.
//!
//! Telemetry concerns are separated from business logic: instead of
//! `#[instrument]` attributes on functions, each instrumented operation has a
//! corresponding span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, tx_hash: TxHash) -> Result<T> {
//!     let span = spans::my_operation(tx_hash);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use alloy_primitives::TxHash;
use tracing::Span;

/// Create span for extracting internal transfers from one transaction.
///
/// Parent: None (root span for this operation)
/// Children: fetch_trace span
#[inline]
pub(crate) fn internal_transfers(tx_hash: TxHash) -> Span {
    tracing::info_span!("tracescan.internal_transfers", tx_hash = %tx_hash,)
}

/// Create span for fetching a call trace from the trace source.
///
/// Parent: internal_transfers span
/// Children: the underlying RPC request
#[inline]
pub(crate) fn fetch_trace(tx_hash: TxHash) -> Span {
    tracing::debug_span!("tracescan.fetch_trace", tx_hash = %tx_hash,)
}
